/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: the Docker CLI, the
/// file system and the console.
pub mod outbound;
