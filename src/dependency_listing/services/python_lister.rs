use crate::dependency_listing::domain::container::container_path;
use crate::dependency_listing::domain::{
    Container, ContainerCommand, DependencyOverrides, ListerTransform, PythonEnv, RepoUnit,
    RepositoryConfig, SourceUnit, PLACEHOLDER_DOCKERFILE, SRC_ROOT,
};
use crate::ports::inbound::DependencyLister;
use crate::shared::Result;
use std::path::Path;

/// Name of the pydep entry point inside the container
const PYDEP_RUN: &str = "pydep-run.py";

/// PythonDependencyLister lists a Python source unit's requirements with pydep
///
/// Units found in the override table skip pydep: the container becomes a
/// placeholder and the configured dependencies are returned instead.
pub struct PythonDependencyLister {
    env: PythonEnv,
    overrides: DependencyOverrides,
}

impl PythonDependencyLister {
    pub fn new(env: PythonEnv, overrides: DependencyOverrides) -> Self {
        Self { env, overrides }
    }
}

impl DependencyLister for PythonDependencyLister {
    fn build_lister(
        &self,
        dir: &Path,
        unit: &SourceUnit,
        repository: &RepositoryConfig,
    ) -> Result<ContainerCommand> {
        let run_options = Container::source_mount(&dir.to_string_lossy());

        if let Some(deps) = self.overrides.get(&RepoUnit::of(repository, unit)) {
            return Ok(ContainerCommand {
                container: Container {
                    dockerfile: PLACEHOLDER_DOCKERFILE.to_string(),
                    run_options,
                    cmd: vec!["echo".to_string(), String::new()],
                },
                transform: ListerTransform::Override(deps.to_vec()),
            });
        }

        Ok(ContainerCommand {
            container: Container {
                dockerfile: self.env.pydep_dockerfile(),
                run_options,
                cmd: vec![
                    PYDEP_RUN.to_string(),
                    "dep".to_string(),
                    container_path(SRC_ROOT, &unit.root_dir),
                ],
            },
            transform: ListerTransform::PydepRequirements,
        })
    }
}
