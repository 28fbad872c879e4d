//! Configuration file support for sbom-licenses.
//!
//! Provides YAML-based configuration through `sbom-licenses.config.yml`
//! files, including data structures, file loading, and validation.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::OutputFormat;
use crate::shared::error::ReportError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "sbom-licenses.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<OutputFormat>,
    /// Package identifier patterns to leave out of the report
    pub ignore: Option<Vec<String>>,
    /// Raw license expression → license id
    pub overrides: Option<HashMap<String, String>>,
    pub custom_licenses_dir: Option<PathBuf>,
    pub cache_dir: Option<PathBuf>,
    pub license_list_version: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Anchors relative directories at `base` (the config file's directory)
    fn resolve_paths(&mut self, base: &Path) {
        for dir in [&mut self.custom_licenses_dir, &mut self.cache_dir]
            .into_iter()
            .flatten()
        {
            if dir.is_relative() {
                *dir = base.join(&*dir);
            }
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|e| ReportError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read config file: {}", e),
    })?;

    let mut config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| ReportError::ConfigParseError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    validate_config(&config).map_err(|message| ReportError::ConfigParseError {
        path: path.to_path_buf(),
        details: message,
    })?;
    warn_unknown_fields(&config);

    if let Some(base) = path.parent() {
        config.resolve_paths(base);
    }

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> std::result::Result<(), String> {
    if let Some(ref overrides) = config.overrides {
        for (raw, id) in overrides {
            if raw.trim().is_empty() {
                return Err("overrides keys must not be empty".to_string());
            }
            if id.trim().is_empty() {
                return Err(format!(
                    "overrides['{}'] must map to a non-empty license id (e.g. \"LicenseRef-Acme-EULA\")",
                    raw
                ));
            }
        }
    }

    if let Some(ref ignore) = config.ignore {
        if let Some(i) = ignore.iter().position(|p| p.trim().is_empty()) {
            return Err(format!("ignore[{}] must not be empty", i));
        }
    }

    if let Some(ref version) = config.license_list_version {
        if version.trim().is_empty() {
            return Err("license_list_version must not be empty".to_string());
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
