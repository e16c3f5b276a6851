//! Error types for the pricing engine.

use thiserror::Error;

/// Result type alias for pricing operations.
pub type PricingResult<T> = Result<T, PricingError>;

/// Errors that can occur during pricing operations.
#[derive(Error, Debug)]
pub enum PricingError {
    /// The caller supplied a value outside the enumerated domain for a
    /// sub-option, or an out-of-range page count. Prior state is untouched.
    #[error("Invalid selection for {field}: {value}")]
    InvalidSelection { field: String, value: String },

    /// The catalog holds no price for an otherwise-valid combination.
    /// Indicates catalog/selection drift; not a recoverable condition.
    #[error("No catalog entry for {entry}")]
    UnknownOption { entry: String },

    #[error("Catalog validation failed: {0}")]
    CatalogInvalid(String),

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl PricingError {
    /// Shorthand for an invalid-selection error.
    pub fn invalid(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidSelection {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Shorthand for a missing catalog entry.
    pub fn unknown(entry: impl Into<String>) -> Self {
        Self::UnknownOption {
            entry: entry.into(),
        }
    }
}
