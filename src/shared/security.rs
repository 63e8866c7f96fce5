use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Largest input file read into memory (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Checks that `path` names a regular file of acceptable size.
///
/// # Arguments
/// * `path` - File about to be read
/// * `what` - Name of the file in error messages (e.g. "lister output")
///
/// # Errors
/// Returns an error if:
/// - The metadata cannot be read (missing file, permissions)
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file exceeds `MAX_FILE_SIZE`
///
/// # Security
/// Metadata comes from `symlink_metadata`, so a link is refused rather than
/// followed. Device files and FIFOs fail the regular-file check.
pub fn validate_regular_file(path: &Path, what: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", what, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: refusing to read {} through the symbolic link {}",
            what,
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} ({}) is not a regular file", path.display(), what);
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)
}

/// Checks that a checkout directory exists and is a real directory.
///
/// # Errors
/// Returns an error if the path is missing, is a symbolic link or is not a
/// directory.
///
/// # Security
/// The directory gets bind-mounted into the container, so a symbolic link
/// is refused.
pub fn validate_source_dir(path: &Path) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!("Failed to read source directory {}: {}", path.display(), e)
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link, pass the directory it points to instead",
            path.display()
        );
    }

    if !metadata.is_dir() {
        anyhow::bail!("{} is not a directory", path.display());
    }

    Ok(())
}

/// Rejects a file larger than `max_size` bytes before it is read into memory
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large to read ({} bytes, limit {} bytes)",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_regular_file_accepted() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("deps.json");
        fs::write(&file_path, "[]").unwrap();

        assert!(validate_regular_file(&file_path, "lister output").is_ok());
    }

    #[test]
    fn test_directory_is_not_a_regular_file() {
        let temp_dir = TempDir::new().unwrap();

        let err = validate_regular_file(temp_dir.path(), "lister output").unwrap_err();

        assert!(err.to_string().contains("not a regular file"));
    }

    #[test]
    fn test_missing_file_names_description() {
        let err =
            validate_regular_file(Path::new("/nonexistent/deps.json"), "lister output").unwrap_err();

        assert!(err
            .to_string()
            .contains("Failed to read lister output metadata"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_file_refused() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.json");
        let link = temp_dir.path().join("link.json");
        fs::write(&target, "[]").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = validate_regular_file(&link, "lister output").unwrap_err();

        assert!(err.to_string().contains("symbolic link"));
    }

    #[test]
    fn test_source_dir_accepted() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_source_dir(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_source_dir_rejects_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("setup.py");
        fs::write(&file_path, "").unwrap();

        let err = validate_source_dir(&file_path).unwrap_err();

        assert!(err.to_string().contains("is not a directory"));
    }

    #[cfg(unix)]
    #[test]
    fn test_source_dir_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let real = temp_dir.path().join("checkout");
        let link = temp_dir.path().join("link");
        fs::create_dir(&real).unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        assert!(validate_source_dir(&link).is_err());
    }

    #[test]
    fn test_file_size_limit() {
        let path = Path::new("/work/pydep.json");

        assert!(validate_file_size(MAX_FILE_SIZE, path, MAX_FILE_SIZE).is_ok());
        let err = validate_file_size(MAX_FILE_SIZE + 1, path, MAX_FILE_SIZE).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }
}
