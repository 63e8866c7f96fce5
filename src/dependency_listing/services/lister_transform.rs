use super::requirement_pruner::RequirementPruner;
use crate::dependency_listing::domain::{DependencyTarget, ListerTransform, Requirement};
use crate::shared::error::PydepError;
use crate::shared::Result;

/// Result of transforming container output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformOutput {
    /// JSON array of `{target_type, target}` records
    pub encoded: Vec<u8>,
    /// Keys of requirements dropped for lack of a clone URL
    pub ignored_keys: Vec<String>,
}

/// ListerTransformer service applying a `ListerTransform` to captured container output
pub struct ListerTransformer;

impl ListerTransformer {
    /// Transforms raw container stdout into encoded dependencies
    ///
    /// Only the first JSON value of pydep output is decoded; anything after
    /// it is ignored. A `null` value lists no requirements.
    ///
    /// # Errors
    /// Returns `PydepError::MalformedListerOutput` if pydep output does not
    /// start with a JSON array of requirements. Nothing is returned for a
    /// partial decode.
    pub fn apply(transform: &ListerTransform, output: &[u8]) -> Result<TransformOutput> {
        match transform {
            ListerTransform::Override(deps) => Ok(TransformOutput {
                encoded: serde_json::to_vec(deps)?,
                ignored_keys: Vec::new(),
            }),
            ListerTransform::PydepRequirements => Self::transform_requirements(output),
        }
    }

    fn transform_requirements(output: &[u8]) -> Result<TransformOutput> {
        let reqs = Self::decode_first_value(output)?;

        let pruned = RequirementPruner::prune(reqs);
        let ignored_keys = pruned.ignored_keys();

        let deps: Vec<DependencyTarget> = pruned
            .kept
            .into_iter()
            .map(DependencyTarget::PythonRequirement)
            .collect();

        Ok(TransformOutput {
            encoded: serde_json::to_vec(&deps)?,
            ignored_keys,
        })
    }

    fn decode_first_value(output: &[u8]) -> Result<Vec<Requirement>> {
        let mut values =
            serde_json::Deserializer::from_slice(output).into_iter::<Option<Vec<Requirement>>>();
        match values.next() {
            Some(Ok(reqs)) => Ok(reqs.unwrap_or_default()),
            Some(Err(e)) => Err(PydepError::MalformedListerOutput {
                details: e.to_string(),
            }
            .into()),
            None => Err(PydepError::MalformedListerOutput {
                details: "no JSON value in lister output".to_string(),
            }
            .into()),
        }
    }
}
