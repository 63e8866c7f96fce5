use serde::{Deserialize, Serialize};

/// Where a dependency points once resolved: a repository and a source unit inside it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTarget {
    pub to_repo_clone_url: String,
    pub to_unit: String,
    pub to_unit_type: String,
}

impl ResolvedTarget {
    pub fn new(
        to_repo_clone_url: impl Into<String>,
        to_unit: impl Into<String>,
        to_unit_type: impl Into<String>,
    ) -> Self {
        Self {
            to_repo_clone_url: to_repo_clone_url.into(),
            to_unit: to_unit.into(),
            to_unit_type: to_unit_type.into(),
        }
    }
}
