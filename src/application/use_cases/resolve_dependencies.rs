use crate::application::dto::ResolveRequest;
use crate::application::registry::PluginRegistry;
use crate::dependency_listing::domain::ResolvedTarget;
use crate::ports::outbound::ProgressReporter;
use crate::shared::Result;

/// ResolveDependenciesUseCase - Resolves listed dependencies to their targets
///
/// Each dependency is dispatched to the resolver registered for its target
/// type. Dependencies are resolved in order and the first failure aborts.
///
/// # Type Parameters
/// * `PR` - ProgressReporter implementation
pub struct ResolveDependenciesUseCase<'a, PR> {
    registry: &'a PluginRegistry,
    progress_reporter: PR,
}

impl<'a, PR> ResolveDependenciesUseCase<'a, PR>
where
    PR: ProgressReporter,
{
    pub fn new(registry: &'a PluginRegistry, progress_reporter: PR) -> Self {
        Self {
            registry,
            progress_reporter,
        }
    }

    /// Executes the resolution use case
    ///
    /// # Returns
    /// One resolved target per input dependency, in input order
    pub fn execute(&self, request: ResolveRequest) -> Result<Vec<ResolvedTarget>> {
        let total = request.dependencies.len();
        self.progress_reporter
            .report(&format!("🔗 Resolving {} dependency(ies)", total));

        let mut targets = Vec::with_capacity(total);
        for (index, dep) in request.dependencies.iter().enumerate() {
            let resolver = self.registry.resolver_for(&dep.target_type)?;
            let target = resolver.resolve(dep, &request.repository)?;
            self.progress_reporter
                .report_progress(index + 1, total, Some(&target.to_unit));
            targets.push(target);
        }

        self.progress_reporter
            .report_completion(&format!("✅ Resolved {} dependency(ies)", targets.len()));
        Ok(targets)
    }
}
