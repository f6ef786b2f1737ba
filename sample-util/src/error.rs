//! Error types for the sample-util crate.

use upnp_dom::DomError;

/// Errors that can occur in the sample helpers.
#[derive(Debug, thiserror::Error)]
pub enum SampleUtilError {
    /// Invalid configuration provided
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A document could not be parsed or read
    #[error("DOM error: {0}")]
    Dom(#[from] DomError),
}

/// Convenience type alias for Results using SampleUtilError.
pub type Result<T> = std::result::Result<T, SampleUtilError>;
