pub mod container;
pub mod dependency_override;
pub mod dist_package;
pub mod python_env;
pub mod raw_dependency;
pub mod requirement;
pub mod resolved_target;
pub mod source_unit;
pub mod symbol_kind;

pub use container::{Container, ContainerCommand, ListerTransform, PLACEHOLDER_DOCKERFILE, SRC_ROOT};
pub use dependency_override::{DependencyOverrides, OverrideEntry};
pub use dist_package::{DistPackage, PIP_PACKAGE_UNIT_TYPE};
pub use python_env::PythonEnv;
pub use raw_dependency::{DependencyTarget, RawDependency, PYTHON_REQUIREMENT_TARGET_TYPE};
pub use requirement::Requirement;
pub use resolved_target::ResolvedTarget;
pub use source_unit::{RepoUnit, RepositoryConfig, SourceUnit};
pub use symbol_kind::{SymbolKind, SymbolKindTable};
