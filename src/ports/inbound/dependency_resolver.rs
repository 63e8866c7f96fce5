use crate::dependency_listing::domain::{RawDependency, RepositoryConfig, ResolvedTarget};
use crate::shared::Result;

/// DependencyResolver port for mapping a listed dependency to its target
///
/// Resolvers are registered per target type. A resolver is pure: it maps the
/// record it is given and never touches the network or the file system.
pub trait DependencyResolver {
    /// Resolves a raw dependency into the repository and unit it refers to
    ///
    /// # Arguments
    /// * `dep` - A `{target_type, target}` record as emitted by a lister
    /// * `repository` - Configuration of the repository being analyzed
    ///
    /// # Returns
    /// A `ResolvedTarget` naming the clone URL, unit and unit type the
    /// dependency points at
    ///
    /// # Errors
    /// Returns an error if:
    /// - The dependency's target type is not handled by this resolver
    /// - Its payload cannot be decoded
    fn resolve(&self, dep: &RawDependency, repository: &RepositoryConfig) -> Result<ResolvedTarget>;
}
