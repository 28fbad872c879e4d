use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes.
///
/// CI pipelines rely on these to tell an unknown-license finding apart from
/// a broken run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report generated and every license was recognized
    Success = 0,
    /// Report generated but at least one `LicenseRef-UNKNOWN-*` id was synthesized
    UnknownLicensesDetected = 1,
    /// Command-line arguments rejected by clap
    InvalidArguments = 2,
    /// Run aborted (SBOM, config, license list, or I/O failure)
    ApplicationError = 3,
}

impl ExitCode {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::UnknownLicensesDetected => write!(f, "Unknown Licenses Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Run-level failures that abort report generation before any output.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("SBOM file not found: {path}\n\n💡 Hint: Pass the path of a CycloneDX JSON SBOM with --sbom")]
    SbomNotFound { path: PathBuf },

    #[error("Failed to parse SBOM file: {path}\nDetails: {details}\n\n💡 Hint: Only CycloneDX JSON SBOMs are supported")]
    SbomParseError { path: PathBuf, details: String },

    #[error("Failed to load config file: {path}\nDetails: {details}\n\n💡 Hint: Check the YAML syntax and the keys documented in the README")]
    ConfigParseError { path: PathBuf, details: String },

    #[error("Failed to load the SPDX license list from {url}\nDetails: {details}\n\n💡 Hint: Check your network connection, or run with --offline to use the bundled license list")]
    LicenseListError { url: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },
}
