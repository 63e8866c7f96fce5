use crate::dependency_listing::domain::{RawDependency, RepositoryConfig};

/// ResolveRequest - Request DTO for the dependency resolution use case
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    pub dependencies: Vec<RawDependency>,
    /// Repository whose dependencies are being resolved
    pub repository: RepositoryConfig,
}

impl ResolveRequest {
    pub fn new(dependencies: Vec<RawDependency>, repository: RepositoryConfig) -> Self {
        Self {
            dependencies,
            repository,
        }
    }
}
