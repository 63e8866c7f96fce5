use super::requirement::Requirement;
use crate::shared::error::PydepError;
use serde::{Deserialize, Serialize};

/// Target type tag for dependencies produced by the Python lister
pub const PYTHON_REQUIREMENT_TARGET_TYPE: &str = "python-requirement";

/// A dependency as exchanged between listers and resolvers
///
/// The target payload stays untyped here so that dependencies of any
/// toolchain can pass through; `DependencyTarget` is the typed view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDependency {
    pub target_type: String,
    pub target: serde_json::Value,
}

impl RawDependency {
    pub fn new(target_type: impl Into<String>, target: serde_json::Value) -> Self {
        Self {
            target_type: target_type.into(),
            target,
        }
    }

    /// Validates the target type and decodes the payload into its concrete shape
    pub fn typed_target(&self) -> Result<DependencyTarget, PydepError> {
        DependencyTarget::try_from(self)
    }
}

/// Typed dependency target, tagged by `target_type`
///
/// Serializes to the same `{target_type, target}` shape as `RawDependency`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "target_type", content = "target")]
pub enum DependencyTarget {
    #[serde(rename = "python-requirement")]
    PythonRequirement(Requirement),
}

impl DependencyTarget {
    pub fn target_type(&self) -> &'static str {
        match self {
            DependencyTarget::PythonRequirement(_) => PYTHON_REQUIREMENT_TARGET_TYPE,
        }
    }
}

impl TryFrom<&RawDependency> for DependencyTarget {
    type Error = PydepError;

    fn try_from(dep: &RawDependency) -> Result<Self, Self::Error> {
        match dep.target_type.as_str() {
            PYTHON_REQUIREMENT_TARGET_TYPE => serde_json::from_value(dep.target.clone())
                .map(DependencyTarget::PythonRequirement)
                .map_err(|e| PydepError::InvalidTargetPayload {
                    target_type: dep.target_type.clone(),
                    details: e.to_string(),
                }),
            other => Err(PydepError::UnexpectedTargetType {
                target_type: other.to_string(),
            }),
        }
    }
}
