//! Store configuration
//!
//! The store performs no I/O of its own; callers hand over YAML text they have
//! already loaded.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while reading a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid configuration value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Largest accepted `nearest_limit`
pub const MAX_NEAREST_LIMIT: usize = 1 << 16;

/// Largest accepted pre-allocation hint
pub const MAX_CAPACITY: usize = 1 << 24;

/// Tunables for a [`BibliographyStore`](crate::BibliographyStore)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// How many affiliations the nearest-coordinate query returns at most
    pub nearest_limit: usize,
    /// Pre-allocated affiliation slots
    pub affiliation_capacity: usize,
    /// Pre-allocated publication slots
    pub publication_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            nearest_limit: 3,
            affiliation_capacity: 1024,
            publication_capacity: 4096,
        }
    }
}

impl StoreConfig {
    /// Parse a configuration from YAML; missing fields take their defaults
    pub fn from_yaml_str(text: &str) -> ConfigResult<Self> {
        let config: StoreConfig = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.nearest_limit == 0 || self.nearest_limit > MAX_NEAREST_LIMIT {
            return Err(ConfigError::InvalidValue {
                field: "nearest_limit",
                reason: format!("must be between 1 and {}", MAX_NEAREST_LIMIT),
            });
        }
        for (field, value) in [
            ("affiliation_capacity", self.affiliation_capacity),
            ("publication_capacity", self.publication_capacity),
        ] {
            if value > MAX_CAPACITY {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("must be at most {}", MAX_CAPACITY),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.nearest_limit, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = StoreConfig::from_yaml_str("nearest_limit: 5\n").unwrap();
        assert_eq!(config.nearest_limit, 5);
        assert_eq!(config.publication_capacity, StoreConfig::default().publication_capacity);
    }

    #[test]
    fn test_rejects_zero_limit() {
        let err = StoreConfig::from_yaml_str("nearest_limit: 0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "nearest_limit", .. }));
    }

    #[test]
    fn test_rejects_huge_values() {
        let err = StoreConfig::from_yaml_str("nearest_limit: 18446744073709551615").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "nearest_limit", .. }));

        let err = StoreConfig::from_yaml_str("affiliation_capacity: 1000000000000").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "affiliation_capacity", .. }));

        let err = StoreConfig::from_yaml_str("publication_capacity: 1000000000000").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "publication_capacity", .. }));

        let at_limit = format!("nearest_limit: {}\naffiliation_capacity: {}\n", MAX_NEAREST_LIMIT, MAX_CAPACITY);
        assert!(StoreConfig::from_yaml_str(&at_limit).is_ok());
    }

    #[test]
    fn test_rejects_malformed_yaml() {
        let err = StoreConfig::from_yaml_str("nearest_limit: [oops").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
