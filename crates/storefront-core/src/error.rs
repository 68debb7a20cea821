//! Error types for storefront-core

use thiserror::Error;

/// Result type alias for storefront operations
pub type Result<T> = std::result::Result<T, StorefrontError>;

/// Main error type for storefront operations
///
/// Cart operations never return errors; these surface only while opening a
/// cart manager from configuration.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Store-related errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Key-value store errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// IO error
    #[error("IO error: {0}")]
    Io(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(String),
}

/// Configuration validation and loading errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Value is out of valid range
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    /// Value is present but unusable
    #[error("Invalid value: {0}")]
    Invalid(String),

    /// File could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// File could not be read
    #[error("IO error: {0}")]
    Io(String),
}

/// Contact form validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A required field was empty after trimming
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_converts_into_umbrella() {
        let err: StorefrontError = ConfigError::OutOfRange("tax_rate".into()).into();
        assert!(matches!(err, StorefrontError::Config(_)));
    }

    #[test]
    fn store_error_converts_into_umbrella() {
        let err: StorefrontError = StoreError::Io("disk full".into()).into();
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn contact_error_display() {
        let err = ContactError::MissingField("phone");
        assert_eq!(err.to_string(), "Missing required field: phone");
    }
}
