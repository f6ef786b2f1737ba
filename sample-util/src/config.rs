//! Configuration for the sample helpers
//!
//! Controls how text is bounded before it reaches the print sink and how
//! event dumps are laid out.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SampleUtilError};

/// Configuration for a [`SampleUtil`](crate::SampleUtil) context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleUtilConfig {
    /// Size of the formatting buffer used by bounded printing.
    /// At most `max_print_len - 1` bytes reach the sink per call.
    /// Default: 1024
    pub max_print_len: usize,

    /// Width of the `=` and `-` rules around an event dump
    /// Default: 70
    pub separator_width: usize,

    /// Text printed in place of an absent value
    /// Default: "(null)"
    pub null_placeholder: String,
}

impl Default for SampleUtilConfig {
    fn default() -> Self {
        Self {
            max_print_len: 1024,
            separator_width: 70,
            null_placeholder: "(null)".to_string(),
        }
    }
}

impl SampleUtilConfig {
    /// Create a new SampleUtilConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration that never truncates printed text in practice
    pub fn unbounded() -> Self {
        Self {
            max_print_len: usize::MAX,
            ..Default::default()
        }
    }

    /// Set the formatting buffer size
    pub fn with_max_print_len(mut self, max_print_len: usize) -> Self {
        self.max_print_len = max_print_len;
        self
    }

    /// Set the placeholder for absent values
    pub fn with_null_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.null_placeholder = placeholder.into();
        self
    }

    /// Validate the configuration and return any issues
    pub fn validate(&self) -> Result<()> {
        if self.max_print_len == 0 {
            return Err(SampleUtilError::Configuration(
                "max_print_len must be greater than 0".to_string(),
            ));
        }

        if self.separator_width == 0 {
            return Err(SampleUtilError::Configuration(
                "separator_width must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
