use crate::dependency_listing::domain::RawDependency;

/// ListResponse - Response DTO for the dependency listing use case
#[derive(Debug, Clone)]
pub struct ListResponse {
    /// Dependencies in lister output order
    pub dependencies: Vec<RawDependency>,
    /// Keys of requirements dropped because they had no clone URL
    pub ignored_keys: Vec<String>,
    /// Whether the dependencies came from the override table
    pub overridden: bool,
}

impl ListResponse {
    /// The dependencies as the JSON array the host toolchain consumes
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.dependencies)
    }
}
