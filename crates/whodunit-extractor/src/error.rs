//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur while configuring the extractor or ingesting guides
///
/// Section extraction itself never fails; these cover configuration, the
/// ingestion policy, and persistence.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A section label could not be compiled into a locator
    #[error("Invalid section pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Text exceeds maximum length
    #[error("Text too long: {0} chars (max: {1})")]
    TextTooLong(usize, usize),

    /// Neither the guide header nor the fallback produced a name
    #[error("No character name could be determined")]
    MissingName,

    /// Character store error
    #[error("Store error: {0}")]
    Store(String),
}
