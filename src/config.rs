//! Board Configuration

use serde::Deserialize;
use thiserror::Error;

use crate::pagination::{PAGE_SIZE, PagePolicy};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing error
    #[error("Failed to parse board config: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Page size of zero
    #[error("Page size must be at least 1")]
    ZeroPageSize,
}

/// Settings for one [`Board`](crate::board::Board).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Matched cards per page.
    pub page_size: usize,

    /// What happens to the current page when the matched set shrinks.
    pub page_policy: PagePolicy,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            page_policy: PagePolicy::default(),
        }
    }
}

impl BoardConfig {
    /// Parse and validate a YAML config document.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be parsed or the config is invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_norway::from_str(yaml)?;

        config.validate()?;

        Ok(config)
    }

    /// Check the config for values a board cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroPageSize`] if `page_size` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }

        Ok(())
    }
}
