/// Crate-wide result type; run-level failures surface as `anyhow::Error`
/// wrapping a [`crate::shared::error::ReportError`] where one applies.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
