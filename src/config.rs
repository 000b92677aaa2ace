//! Serializable configuration for a [`Geohasher`](crate::Geohasher).
use crate::MAX_BIT_DEPTH;
use crate::compute::validation::validate_bit_depth;
use serde::de::Error;
use serde::{Deserialize, Serialize};

/// Geohasher configuration
///
/// # Example
///
/// ```rust
/// use geohash_int::Config;
///
/// let config = Config::default();
/// assert_eq!(config.bit_depth, 52);
///
/// let json = r#"{
///     "bit_depth": 32,
///     "max_region_cells": 10000
/// }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.bit_depth, 32);
///
/// assert!(Config::from_json(r#"{ "bit_depth": 31 }"#).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Bit depth used for every operation (even, 2..=52, default: 52)
    #[serde(default = "Config::default_bit_depth")]
    pub bit_depth: i64,

    /// Upper bound on cells a single region enumeration may return
    /// (None means unbounded)
    #[serde(default)]
    pub max_region_cells: Option<usize>,
}

impl Config {
    const fn default_bit_depth() -> i64 {
        MAX_BIT_DEPTH
    }

    pub fn with_bit_depth(mut self, bit_depth: i64) -> Self {
        self.bit_depth = bit_depth;
        self
    }

    pub fn with_max_region_cells(mut self, max_cells: usize) -> Self {
        self.max_region_cells = Some(max_cells);
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        validate_bit_depth(self.bit_depth).map_err(|e| e.to_string())?;

        if self.max_region_cells == Some(0) {
            return Err("Max region cells must be greater than zero".to_string());
        }

        Ok(())
    }

    /// Load configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(Error::custom(e));
        }
        Ok(config)
    }

    /// Save configuration as JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load configuration from TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    /// Save configuration as TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bit_depth: Self::default_bit_depth(),
            max_region_cells: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.bit_depth, MAX_BIT_DEPTH);
        assert_eq!(config.max_region_cells, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        assert!(Config::default().with_bit_depth(2).validate().is_ok());
        assert!(Config::default().with_bit_depth(0).validate().is_err());
        assert!(Config::default().with_bit_depth(33).validate().is_err());
        assert!(Config::default().with_bit_depth(54).validate().is_err());
        assert!(
            Config::default()
                .with_max_region_cells(0)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_json_roundtrip() {
        let config = Config::default()
            .with_bit_depth(40)
            .with_max_region_cells(500);
        let json = config.to_json().unwrap();
        let deserialized = Config::from_json(&json).unwrap();
        assert_eq!(deserialized, config);
    }

    #[test]
    fn test_json_defaults_missing_fields() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_json_rejects_invalid_depth() {
        let err = Config::from_json(r#"{ "bit_depth": 51 }"#).unwrap_err();
        assert!(err.to_string().contains("must be even"));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_toml_roundtrip() {
        let config = Config::from_toml("bit_depth = 24\nmax_region_cells = 64\n").unwrap();
        assert_eq!(config.bit_depth, 24);
        assert_eq!(config.max_region_cells, Some(64));

        let toml_str = config.to_toml().unwrap();
        assert_eq!(Config::from_toml(&toml_str).unwrap(), config);

        assert!(Config::from_toml("bit_depth = 60").is_err());
    }
}
