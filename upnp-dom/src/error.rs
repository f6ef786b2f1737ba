//! Error types for DOM lookups

use thiserror::Error;

/// Errors that can occur while reading a DOM tree
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomError {
    /// The XML text could not be parsed
    #[error("XML parsing error: {0}")]
    Parse(String),

    /// A node could not be written back out as XML
    #[error("XML serialization error: {0}")]
    Serialize(String),

    /// No element with the requested tag exists below the search root
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// The element exists but its first child is not a text node
    #[error("Element has no text value: {0}")]
    MissingValue(String),

    /// A relative URL could not be resolved against its base
    #[error("Cannot resolve '{relative}' against '{base}'")]
    UrlResolution {
        /// Base URL (URLBase or the description location)
        base: String,
        /// Reference taken from the description document
        relative: String,
    },
}

/// Result type alias for DOM operations
pub type Result<T> = std::result::Result<T, DomError>;
