//! Page definition error types

use thiserror::Error;

/// Errors raised while loading or validating a page definition
///
/// Runtime lookups (unknown fragments, absent form) never error; the
/// components degrade to silent no-ops instead. Only the page file itself
/// can fail, and only before the UI starts.
#[derive(Debug, Error)]
pub enum PageError {
    /// IO error reading the page file
    #[error("failed to read page file: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error
    #[error("invalid page file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Structurally valid TOML that violates a page invariant
    #[error("invalid page: {0}")]
    Validation(String),
}
