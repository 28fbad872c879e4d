use crate::shared::error::ReportError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Upper bound for any input file read by the tool (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Upper bound for a single license text file (1 MB)
pub const MAX_LICENSE_TEXT_SIZE: u64 = 1024 * 1024;

/// Checks that `path` is a regular file that is not a symlink and not larger
/// than `max_size`.
///
/// `symlink_metadata` is used so that the link itself is inspected rather
/// than its target.
///
/// # Returns
/// The file size in bytes
pub fn ensure_readable_file(path: &Path, description: &str, max_size: u64) -> Result<u64> {
    let metadata = fs::symlink_metadata(path).map_err(|e| ReportError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", description, e),
    })?;

    if metadata.is_symlink() {
        return Err(ReportError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", description),
            hint: "Symbolic links are not followed; point to the real file instead".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(ReportError::FileReadError {
            path: path.to_path_buf(),
            details: format!("{} is not a regular file", description),
        }
        .into());
    }

    if metadata.len() > max_size {
        return Err(ReportError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "{} is too large ({} bytes, maximum {} bytes)",
                description,
                metadata.len(),
                max_size
            ),
            hint: "Check that the right file was passed".to_string(),
        }
        .into());
    }

    Ok(metadata.len())
}

/// Refuses to write through an existing symbolic link.
///
/// A path that does not exist yet is accepted.
pub fn ensure_not_symlink(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => Err(ReportError::SecurityError {
            path: path.to_path_buf(),
            reason: "Refusing to write through a symbolic link".to_string(),
            hint: "Remove the link or choose another output path".to_string(),
        }
        .into()),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_regular_file_returns_size() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("bom.json");
        fs::write(&file_path, "{}").unwrap();

        let size = ensure_readable_file(&file_path, "SBOM", MAX_FILE_SIZE).unwrap();
        assert_eq!(size, 2);
    }

    #[test]
    fn test_missing_file_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let result = ensure_readable_file(&temp_dir.path().join("nope.json"), "SBOM", MAX_FILE_SIZE);
        assert!(result.is_err());
    }

    #[test]
    fn test_directory_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let err = ensure_readable_file(temp_dir.path(), "SBOM", MAX_FILE_SIZE).unwrap_err();
        assert!(err.to_string().contains("not a regular file"));
    }

    #[test]
    fn test_oversized_file_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("big.txt");
        fs::write(&file_path, "0123456789").unwrap();

        let err = ensure_readable_file(&file_path, "license text", 4).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.json");
        let link = temp_dir.path().join("link.json");
        fs::write(&target, "{}").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = ensure_readable_file(&link, "SBOM", MAX_FILE_SIZE).unwrap_err();
        assert!(err.to_string().contains("symbolic link"));
        assert!(ensure_not_symlink(&link).is_err());
    }

    #[test]
    fn test_missing_output_path_is_not_a_symlink() {
        let temp_dir = TempDir::new().unwrap();
        assert!(ensure_not_symlink(&temp_dir.path().join("report.md")).is_ok());
    }
}
