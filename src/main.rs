mod cli;

use cli::Args;
use sbom_licenses::adapters::outbound::console::StderrProgressReporter;
use sbom_licenses::adapters::outbound::filesystem::{
    CustomLicenseDirectory, FileSystemLicenseTextCache, FileSystemReader,
};
use sbom_licenses::adapters::outbound::network::{
    BundledLicenseList, SpdxLicenseListClient, DEFAULT_LICENSE_LIST_VERSION,
};
use sbom_licenses::application::dto::{OutputFormat, ReportRequest, ReportResponse};
use sbom_licenses::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use sbom_licenses::application::read_models::LicenseReportModelBuilder;
use sbom_licenses::application::use_cases::GenerateReportUseCase;
use sbom_licenses::config::{discover_config, load_config_from_path, ConfigFile};
use sbom_licenses::ports::outbound::LicenseDataSource;
use sbom_licenses::shared::error::ExitCode;
use sbom_licenses::shared::Result;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::process;

const DEFAULT_CACHE_DIR: &str = ".license-cache";
const DEFAULT_CUSTOM_LICENSES_DIR: &str = "custom-licenses";

#[tokio::main]
async fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    match run(args).await {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Effective settings after merging CLI flags over the config file
#[derive(Debug)]
struct Settings {
    sbom_path: PathBuf,
    format: OutputFormat,
    output: Option<PathBuf>,
    ignore_patterns: Vec<String>,
    overrides: HashMap<String, String>,
    custom_licenses_dir: PathBuf,
    cache_dir: PathBuf,
    license_list_version: String,
    offline: bool,
}

impl Settings {
    fn merge(args: Args, config: ConfigFile) -> Self {
        let mut seen = HashSet::new();
        let ignore_patterns = config
            .ignore
            .unwrap_or_default()
            .into_iter()
            .chain(args.ignore)
            .filter(|pattern| seen.insert(pattern.clone()))
            .collect();

        Self {
            sbom_path: args.sbom,
            format: args.format.or(config.format).unwrap_or_default(),
            output: args.output,
            ignore_patterns,
            overrides: config.overrides.unwrap_or_default(),
            custom_licenses_dir: args
                .custom_licenses
                .or(config.custom_licenses_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CUSTOM_LICENSES_DIR)),
            cache_dir: args
                .cache_dir
                .or(config.cache_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_DIR)),
            license_list_version: args
                .license_list_version
                .or(config.license_list_version)
                .unwrap_or_else(|| DEFAULT_LICENSE_LIST_VERSION.to_string()),
            offline: args.offline,
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    let settings = Settings::merge(args, config);

    let response = if settings.offline {
        eprintln!("📴 Offline mode: license texts are only taken from the cache and custom directory");
        generate(BundledLicenseList::new(), &settings).await?
    } else {
        let client = SpdxLicenseListClient::new(settings.license_list_version.clone())?;
        generate(client, &settings).await?
    };

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let model = LicenseReportModelBuilder::build(&response.report);
    let formatted_output = FormatterFactory::create(settings.format).format(&model)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(settings.output.clone()));
    presenter.present(&formatted_output)?;

    if response.has_unknown_licenses() {
        Ok(ExitCode::UnknownLicensesDetected)
    } else {
        Ok(ExitCode::Success)
    }
}

/// Explicit `--config` wins; otherwise look next to the SBOM
fn load_config(args: &Args) -> Result<ConfigFile> {
    if let Some(path) = &args.config {
        return load_config_from_path(path);
    }

    let sbom_dir = args
        .sbom
        .parent()
        .filter(|dir| *dir != Path::new(""))
        .unwrap_or_else(|| Path::new("."));

    Ok(discover_config(sbom_dir)?.unwrap_or_default())
}

async fn generate<S: LicenseDataSource>(
    data_source: S,
    settings: &Settings,
) -> Result<ReportResponse> {
    // Create adapters (Dependency Injection)
    let use_case = GenerateReportUseCase::new(
        FileSystemReader::new(),
        data_source,
        FileSystemLicenseTextCache::new(settings.cache_dir.clone()),
        CustomLicenseDirectory::new(settings.custom_licenses_dir.clone()),
        StderrProgressReporter::new(),
    );

    let request = ReportRequest::new(settings.sbom_path.clone())
        .with_ignore_patterns(settings.ignore_patterns.clone())
        .with_overrides(settings.overrides.clone());

    use_case.execute(request).await
}
