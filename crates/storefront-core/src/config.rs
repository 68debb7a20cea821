//! Configuration for storefront-core
//!
//! Storage key, tax rate, currency symbol, and which key-value backend holds
//! the cart. Loaded from TOML (or JSON); every field has a default so an
//! absent file means a stock storefront.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::currency::DEFAULT_CURRENCY_SYMBOL;
use crate::error::ConfigError;
use crate::totals::DEFAULT_TAX_RATE;

/// Key under which the cart is persisted.
pub const DEFAULT_STORAGE_KEY: &str = "lp_cart_v1";

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "STOREFRONT_CONFIG";

const APP_DIR: &str = "storefront";

/// Storefront configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Store key for the serialized cart
    pub storage_key: String,
    /// Fraction of the subtotal charged as tax
    pub tax_rate: f64,
    /// Prefix for formatted amounts
    pub currency_symbol: String,
    /// Where the cart is persisted
    pub store: StoreBackend,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            tax_rate: DEFAULT_TAX_RATE,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            store: StoreBackend::default(),
        }
    }
}

/// Key-value backend selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StoreBackend {
    /// Nothing survives the session
    Memory,
    /// JSON object file
    File { path: PathBuf },
    /// SQLite database (requires the `sqlite` feature)
    Sqlite { path: PathBuf },
}

impl Default for StoreBackend {
    fn default() -> Self {
        StoreBackend::File {
            path: default_data_dir().join("cart.json"),
        }
    }
}

/// Per-user data directory, falling back to the working directory.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from(".").join(APP_DIR))
}

/// `<config_dir>/storefront/config.toml`, if a config dir is known.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

impl StorefrontConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load from a file; a missing file yields defaults.
    ///
    /// Files ending in `.json` are read as JSON, everything else as TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config at {:?}, using defaults", path);
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json(&contents)
        } else {
            Self::from_toml(&contents)
        }
    }

    /// Load from `$STOREFRONT_CONFIG` or the standard config location.
    pub fn load_standard() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .or_else(default_config_path);
        match path {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tax_rate.is_finite() || self.tax_rate < 0.0 || self.tax_rate > 1.0 {
            return Err(ConfigError::OutOfRange(
                "tax_rate must be between 0.0 and 1.0".to_string(),
            ));
        }

        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage_key must not be empty".to_string()));
        }

        if self.currency_symbol.is_empty() {
            return Err(ConfigError::Invalid(
                "currency_symbol must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
