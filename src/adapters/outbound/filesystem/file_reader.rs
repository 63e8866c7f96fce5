use crate::dependency_listing::domain::RawDependency;
use crate::ports::outbound::{ListerOutputReader, RawDependencyReader};
use crate::shared::error::PydepError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading JSON inputs from the file system
///
/// Implements both ListerOutputReader and RawDependencyReader. Every read is
/// preceded by the symlink, file type and size checks of `shared::security`.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn safe_read(&self, path: &Path, description: &str) -> Result<Vec<u8>> {
        validate_regular_file(path, description).map_err(|e| PydepError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        fs::read(path).map_err(|e| {
            PydepError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ListerOutputReader for FileSystemReader {
    fn read_lister_output(&self, path: &Path) -> Result<Vec<u8>> {
        self.safe_read(path, "lister output")
    }
}

impl RawDependencyReader for FileSystemReader {
    fn read_raw_dependencies(&self, path: &Path) -> Result<Vec<RawDependency>> {
        let bytes = self.safe_read(path, "dependency list")?;
        serde_json::from_slice(&bytes).map_err(|e| {
            PydepError::FileReadError {
                path: path.to_path_buf(),
                details: format!("not a JSON array of dependencies: {}", e),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_lister_output_returns_raw_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pydep.json");
        fs::write(&path, b"[{\"key\": \"six\"}]").unwrap();

        let bytes = FileSystemReader::new().read_lister_output(&path).unwrap();

        assert_eq!(bytes, b"[{\"key\": \"six\"}]");
    }

    #[test]
    fn test_read_lister_output_missing_file() {
        let temp_dir = TempDir::new().unwrap();

        let err = FileSystemReader::new()
            .read_lister_output(&temp_dir.path().join("absent.json"))
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PydepError>(),
            Some(PydepError::FileReadError { .. })
        ));
    }

    #[test]
    fn test_read_lister_output_rejects_directory() {
        let temp_dir = TempDir::new().unwrap();

        let result = FileSystemReader::new().read_lister_output(temp_dir.path());

        assert!(result.is_err());
    }

    #[test]
    fn test_read_raw_dependencies() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("deps.json");
        fs::write(
            &path,
            r#"[{"target_type": "python-requirement", "target": {"key": "six"}}]"#,
        )
        .unwrap();

        let deps = FileSystemReader::new().read_raw_dependencies(&path).unwrap();

        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].target_type, "python-requirement");
        assert_eq!(deps[0].target["key"], "six");
    }

    #[test]
    fn test_read_raw_dependencies_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("deps.json");
        fs::write(&path, "{\"target_type\": 1}").unwrap();

        let err = FileSystemReader::new()
            .read_raw_dependencies(&path)
            .unwrap_err();

        assert!(err.to_string().contains("not a JSON array of dependencies"));
    }
}
