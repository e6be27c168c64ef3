//! Error types for the core crate.
//!
//! Convention and frequency tags are closed enums inside the workspace, so
//! the `Unsupported*` variants can only be produced where text from outside
//! is parsed (CLI arguments, CSV rows, serde input).

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Error in date construction or parsing.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Day count convention tag that does not name a supported convention.
    #[error("Unsupported day count convention: '{tag}'")]
    UnsupportedConvention {
        /// The rejected tag.
        tag: String,
    },

    /// Payment frequency tag that does not name a supported frequency.
    #[error("Unsupported payment frequency: '{tag}'")]
    UnsupportedFrequency {
        /// The rejected tag.
        tag: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an unsupported convention error.
    #[must_use]
    pub fn unsupported_convention(tag: impl Into<String>) -> Self {
        Self::UnsupportedConvention { tag: tag.into() }
    }

    /// Creates an unsupported frequency error.
    #[must_use]
    pub fn unsupported_frequency(tag: impl Into<String>) -> Self {
        Self::UnsupportedFrequency { tag: tag.into() }
    }
}
