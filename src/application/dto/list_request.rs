use crate::dependency_listing::domain::{RepositoryConfig, SourceUnit};
use std::path::PathBuf;

/// ListRequest - Request DTO for the dependency listing use case
#[derive(Debug, Clone)]
pub struct ListRequest {
    /// Host directory holding the repository checkout
    pub source_dir: PathBuf,
    /// The source unit to list dependencies for
    pub unit: SourceUnit,
    /// Repository the unit belongs to
    pub repository: RepositoryConfig,
    /// Previously captured container output; when set the container is not run
    pub captured_output: Option<Vec<u8>>,
}

impl ListRequest {
    pub fn new(source_dir: PathBuf, unit: SourceUnit, repository: RepositoryConfig) -> Self {
        Self {
            source_dir,
            unit,
            repository,
            captured_output: None,
        }
    }

    pub fn with_captured_output(mut self, output: Vec<u8>) -> Self {
        self.captured_output = Some(output);
        self
    }
}
