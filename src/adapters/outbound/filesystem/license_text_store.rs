use crate::ports::outbound::{CustomLicenseStore, LicenseTextCache};
use crate::shared::error::ReportError;
use crate::shared::security::{ensure_not_symlink, ensure_readable_file, MAX_LICENSE_TEXT_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// File name used for a license id: `<id>.txt`, path separators replaced by `_`
fn text_file_name(id: &str) -> String {
    let sanitized: String = id
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    format!("{}.txt", sanitized)
}

/// Reads a text file, treating anything unreadable as absent
fn read_text_file(path: &Path) -> Option<String> {
    if !path.exists() {
        return None;
    }
    ensure_readable_file(path, "license text", MAX_LICENSE_TEXT_SIZE).ok()?;
    fs::read_to_string(path).ok()
}

/// FileSystemLicenseTextCache adapter persisting license texts as `<dir>/<id>.txt`
///
/// The directory is created on first write.
pub struct FileSystemLicenseTextCache {
    directory: PathBuf,
}

impl FileSystemLicenseTextCache {
    pub fn new(directory: PathBuf) -> Self {
        Self { directory }
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.directory.join(text_file_name(id))
    }
}

impl LicenseTextCache for FileSystemLicenseTextCache {
    fn read(&self, id: &str) -> Option<String> {
        read_text_file(&self.path_for(id))
    }

    fn write(&self, id: &str, text: &str) -> Result<()> {
        let path = self.path_for(id);

        fs::create_dir_all(&self.directory).map_err(|e| ReportError::FileWriteError {
            path: self.directory.clone(),
            details: format!("Failed to create cache directory: {}", e),
        })?;
        ensure_not_symlink(&path)?;

        fs::write(&path, text).map_err(|e| ReportError::FileWriteError {
            path,
            details: e.to_string(),
        })?;
        Ok(())
    }
}

/// CustomLicenseDirectory adapter serving user-supplied `LicenseRef-*` texts
/// from `<dir>/<id>.txt`
pub struct CustomLicenseDirectory {
    directory: PathBuf,
}

impl CustomLicenseDirectory {
    pub fn new(directory: PathBuf) -> Self {
        Self { directory }
    }
}

impl CustomLicenseStore for CustomLicenseDirectory {
    fn find(&self, id: &str) -> Option<String> {
        read_text_file(&self.location(id)).filter(|text| !text.trim().is_empty())
    }

    fn location(&self, id: &str) -> PathBuf {
        self.directory.join(text_file_name(id))
    }
}
