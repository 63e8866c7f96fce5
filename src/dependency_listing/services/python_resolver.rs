use crate::dependency_listing::domain::{
    DependencyTarget, RawDependency, RepositoryConfig, ResolvedTarget,
};
use crate::ports::inbound::DependencyResolver;
use crate::shared::Result;

/// PythonDependencyResolver resolves `python-requirement` dependencies
///
/// The requirement's clone URL becomes the target repository and its
/// distribution package becomes the target unit. No network access.
pub struct PythonDependencyResolver;

impl PythonDependencyResolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PythonDependencyResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyResolver for PythonDependencyResolver {
    fn resolve(&self, dep: &RawDependency, _repository: &RepositoryConfig) -> Result<ResolvedTarget> {
        match dep.typed_target()? {
            DependencyTarget::PythonRequirement(req) => {
                let package = req.dist_package();
                Ok(ResolvedTarget::new(
                    req.repo_url,
                    package.name(),
                    package.unit_type(),
                ))
            }
        }
    }
}
