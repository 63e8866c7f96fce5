use crate::application::dto::{ListRequest, ListResponse};
use crate::application::registry::PluginRegistry;
use crate::dependency_listing::domain::{ListerTransform, RawDependency};
use crate::dependency_listing::services::ListerTransformer;
use crate::ports::outbound::{ContainerRunner, ProgressReporter};
use crate::shared::Result;

/// ListDependenciesUseCase - Lists the dependencies of one source unit
///
/// Builds the lister's container command, runs it (unless output was
/// captured beforehand), transforms the output and decodes the resulting
/// dependency records.
///
/// # Type Parameters
/// * `CR` - ContainerRunner implementation
/// * `PR` - ProgressReporter implementation
pub struct ListDependenciesUseCase<'a, CR, PR> {
    registry: &'a PluginRegistry,
    container_runner: CR,
    progress_reporter: PR,
}

impl<'a, CR, PR> ListDependenciesUseCase<'a, CR, PR>
where
    CR: ContainerRunner,
    PR: ProgressReporter,
{
    pub fn new(registry: &'a PluginRegistry, container_runner: CR, progress_reporter: PR) -> Self {
        Self {
            registry,
            container_runner,
            progress_reporter,
        }
    }

    /// Executes the listing use case
    ///
    /// # Errors
    /// Returns an error if no lister handles the unit type, the container
    /// fails, or its output cannot be decoded
    pub async fn execute(&self, request: ListRequest) -> Result<ListResponse> {
        let unit = &request.unit;
        self.progress_reporter.report(&format!(
            "🔍 Listing dependencies of {} {} ({})",
            unit.unit_type, unit.name, request.repository.uri
        ));

        let lister = self.registry.lister_for(&unit.unit_type)?;
        let command = lister.build_lister(&request.source_dir, unit, &request.repository)?;
        let overridden = matches!(command.transform, ListerTransform::Override(_));
        if overridden {
            self.progress_reporter
                .report("📌 Using configured dependency override");
        }

        let output = match request.captured_output {
            Some(output) => output,
            None => {
                self.progress_reporter.report(&format!(
                    "🐳 Running {}",
                    command.container.cmd.join(" ")
                ));
                self.container_runner.run(&command.container).await?
            }
        };

        let transformed = ListerTransformer::apply(&command.transform, &output)?;
        if !transformed.ignored_keys.is_empty() {
            self.progress_reporter.report_warning(&format!(
                "(warn) ignoring dependencies [{}] because repo URL absent",
                transformed.ignored_keys.join(" ")
            ));
        }

        let dependencies: Vec<RawDependency> = serde_json::from_slice(&transformed.encoded)?;
        self.progress_reporter.report_completion(&format!(
            "✅ Listed {} dependency(ies)",
            dependencies.len()
        ));

        Ok(ListResponse {
            dependencies,
            ignored_keys: transformed.ignored_keys,
            overridden,
        })
    }
}
