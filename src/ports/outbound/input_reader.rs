use crate::dependency_listing::domain::RawDependency;
use crate::shared::Result;
use std::path::Path;

/// ListerOutputReader port for loading previously captured container output
pub trait ListerOutputReader {
    /// Reads captured `pydep-run.py` output from a file
    ///
    /// # Errors
    /// Returns an error if the file does not exist, is not a regular file,
    /// is too large or cannot be read
    fn read_lister_output(&self, path: &Path) -> Result<Vec<u8>>;
}

/// RawDependencyReader port for loading lister output to resolve
pub trait RawDependencyReader {
    /// Reads a JSON array of raw dependencies from a file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a JSON array of
    /// `{target_type, target}` records
    fn read_raw_dependencies(&self, path: &Path) -> Result<Vec<RawDependency>>;
}
