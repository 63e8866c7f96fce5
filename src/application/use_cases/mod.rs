/// Use cases module containing application business logic orchestration
mod list_dependencies;
mod resolve_dependencies;

pub use list_dependencies::ListDependenciesUseCase;
pub use resolve_dependencies::ResolveDependenciesUseCase;
