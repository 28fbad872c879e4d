/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: SBOM files, the SPDX
/// license list, license text storage, formatters and the console.
pub mod outbound;
