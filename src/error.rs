//! Error handling types for mtf-normalize
//!
//! The mapping functions themselves never fail; these errors cover the
//! surfaces around them (category names, alias overrides, config files).

use crate::config::ConfigError;
use thiserror::Error;

/// Error type for everything outside the total mapping functions
#[derive(Debug, Error)]
pub enum Error {
    /// Category name did not match any known category
    #[error("Unknown category: {name}")]
    UnknownCategory { name: String },

    /// Alias override targets a token outside the category's closed set
    #[error("Invalid override for {category}: '{alias}' -> '{token}' is not a canonical token")]
    InvalidOverride {
        category: String,
        alias: String,
        token: String,
    },

    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for normalizer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Helper functions for common error patterns
impl Error {
    /// Create an unknown category error
    pub fn unknown_category(name: impl Into<String>) -> Self {
        Error::UnknownCategory { name: name.into() }
    }

    /// Create an invalid override error
    pub fn invalid_override(
        category: impl Into<String>,
        alias: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Error::InvalidOverride {
            category: category.into(),
            alias: alias.into(),
            token: token.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_message() {
        let err = Error::unknown_category("hull");
        assert_eq!(err.to_string(), "Unknown category: hull");
    }

    #[test]
    fn test_invalid_override_message() {
        let err = Error::invalid_override("engine", "Mystery Engine", "WARP");
        assert_eq!(
            err.to_string(),
            "Invalid override for engine: 'Mystery Engine' -> 'WARP' is not a canonical token"
        );
    }
}
