use clap::Parser;
use sbom_licenses::application::dto::OutputFormat;
use std::path::PathBuf;

/// Generate third-party license reports from CycloneDX SBOMs
#[derive(Parser, Debug)]
#[command(name = "sbom-licenses")]
#[command(version)]
#[command(
    about = "Generate third-party license reports (overview, license texts, notices) from CycloneDX SBOMs",
    long_about = None
)]
pub struct Args {
    /// Path to the CycloneDX JSON SBOM
    #[arg(short, long, value_name = "FILE")]
    pub sbom: PathBuf,

    /// Output format: json or markdown [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Leave out packages whose identifier matches a pattern (supports wildcards: *)
    /// Can be specified multiple times: -i "npm/internal-*" -i "pypi/setuptools@*"
    #[arg(short, long = "ignore", value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Directory holding texts for custom LicenseRef-* ids [default: custom-licenses]
    #[arg(long = "custom-licenses", value_name = "DIR")]
    pub custom_licenses: Option<PathBuf>,

    /// Directory for cached license texts [default: .license-cache]
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// SPDX license-list-data release tag [default: v3.25.0]
    #[arg(long, value_name = "TAG")]
    pub license_list_version: Option<String>,

    /// Config file (defaults to sbom-licenses.config.yml next to the SBOM)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not download anything; use the license list bundled with the tool
    #[arg(long)]
    pub offline: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
