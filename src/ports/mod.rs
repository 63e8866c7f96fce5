/// Ports module defining interfaces for hexagonal architecture
///
/// Inbound ports are the plugin seams a host toolchain drives (listers and
/// resolvers); outbound ports are the infrastructure the application core
/// drives (container runtime, file system, console).
pub mod inbound;
pub mod outbound;
