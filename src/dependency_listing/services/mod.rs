mod lister_transform;
mod python_lister;
mod python_resolver;
mod requirement_pruner;

pub use lister_transform::{ListerTransformer, TransformOutput};
pub use python_lister::PythonDependencyLister;
pub use python_resolver::PythonDependencyResolver;
pub use requirement_pruner::{PrunedRequirements, RequirementPruner};
