//! Validator configuration.
//!
//! Loaded from an optional TOML file; every field has a default, so an empty
//! file (or none at all) is a valid configuration.
//!
//! ```toml
//! user_agent = "dcat-validate/0.3"
//! connect_timeout_ms = 5000
//! request_timeout_ms = 30000
//! dataset_concurrency = 4
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Runtime settings of the pipeline and the HTTP fetcher.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// TCP connect timeout in milliseconds.
    pub connect_timeout_ms: u64,
    /// Whole-request timeout in milliseconds.
    pub request_timeout_ms: u64,
    /// Dataset resources validated at the same time. `1` is sequential.
    pub dataset_concurrency: usize,
    /// `Accept-Language` header, if any.
    pub accept_language: Option<String>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("dcat-validator/", env!("CARGO_PKG_VERSION")).to_string(),
            connect_timeout_ms: 5_000,
            request_timeout_ms: 30_000,
            dataset_concurrency: 1,
            accept_language: None,
        }
    }
}

impl ValidatorConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] for malformed TOML or unknown keys, and
    /// [`ConfigError::InvalidValue`] when [`Self::validate`] fails.
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`Self::from_toml_str`].
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let src = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&src)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero concurrency or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dataset_concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                field: "dataset_concurrency",
                message: "must be at least 1".to_string(),
            });
        }
        if self.connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "connect_timeout_ms",
                message: "must be positive".to_string(),
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_ms",
                message: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let config = ValidatorConfig::from_toml_str("").ok();
        assert_eq!(config, Some(ValidatorConfig::default()));
    }

    #[test]
    fn fields_override_defaults() {
        let config = ValidatorConfig::from_toml_str(
            "dataset_concurrency = 4\nuser_agent = \"probe\"\n",
        )
        .ok();
        let config = config.unwrap_or_default();
        assert_eq!(config.dataset_concurrency, 4);
        assert_eq!(config.user_agent, "probe");
        assert_eq!(config.request_timeout_ms, 30_000);
    }

    #[test]
    fn zero_concurrency_is_rejected() {
        let err = ValidatorConfig::from_toml_str("dataset_concurrency = 0").err();
        assert!(matches!(
            err,
            Some(ConfigError::InvalidValue {
                field: "dataset_concurrency",
                ..
            })
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            ValidatorConfig::from_toml_str("retries = 3"),
            Err(ConfigError::Toml(_))
        ));
    }
}
