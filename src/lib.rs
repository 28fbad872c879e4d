//! sbom-licenses - Third-party license report generator
//!
//! Reads the components of a CycloneDX SBOM, normalizes their license
//! declarations to SPDX identifiers, resolves the full license texts
//! (cache, custom directory, SPDX license list) and renders a report with a
//! license overview, one section per license, and copyright notices.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`license_resolution`): License ids, expressions, components and the pure services
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sbom_licenses::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let use_case = GenerateReportUseCase::new(
//!     FileSystemReader::new(),
//!     SpdxLicenseListClient::new(DEFAULT_LICENSE_LIST_VERSION)?,
//!     FileSystemLicenseTextCache::new(PathBuf::from(".license-cache")),
//!     CustomLicenseDirectory::new(PathBuf::from("custom-licenses")),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = ReportRequest::new(PathBuf::from("bom.json"));
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let model = LicenseReportModelBuilder::build(&response.report);
//! let output = MarkdownFormatter::new().format(&model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod license_resolution;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        CustomLicenseDirectory, FileSystemLicenseTextCache, FileSystemReader, FileSystemWriter,
        StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::{
        BundledLicenseList, SpdxLicenseListClient, DEFAULT_LICENSE_LIST_VERSION,
    };
    pub use crate::application::dto::{OutputFormat, ReportRequest, ReportResponse};
    pub use crate::application::read_models::{LicenseReportModel, LicenseReportModelBuilder};
    pub use crate::application::use_cases::{GenerateReportUseCase, LicenseTextResolver};
    pub use crate::license_resolution::domain::{
        CanonicalLicenseId, Component, LicenseRecord, RawLicenseDeclaration, ResolvedLicenseText,
        SbomComponent, TextOrigin,
    };
    pub use crate::license_resolution::services::{
        ComponentAggregator, IgnoreRules, LicenseNormalizer, LicenseReport, PackageUrlResolver,
        ReportBuilder,
    };
    pub use crate::ports::outbound::{
        CustomLicenseStore, LicenseDataSource, LicenseTextCache, OutputPresenter,
        ProgressReporter, ReportFormatter, SbomReader,
    };
    pub use crate::shared::Result;
}
