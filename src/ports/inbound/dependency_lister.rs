use crate::dependency_listing::domain::{ContainerCommand, RepositoryConfig, SourceUnit};
use crate::shared::Result;
use std::path::Path;

/// DependencyLister port for discovering a source unit's dependencies
///
/// A lister does not run anything itself. It describes the container that
/// lists the dependencies and how that container's output is transformed.
pub trait DependencyLister {
    /// Builds the container command that lists the dependencies of `unit`
    ///
    /// # Arguments
    /// * `dir` - Host directory holding the repository checkout
    /// * `unit` - The source unit to list dependencies for
    /// * `repository` - Configuration of the repository the unit belongs to
    ///
    /// # Errors
    /// Returns an error if the container description cannot be built
    fn build_lister(
        &self,
        dir: &Path,
        unit: &SourceUnit,
        repository: &RepositoryConfig,
    ) -> Result<ContainerCommand>;
}
