//! Label configuration.

use std::path::Path;

use serde::Deserialize;
use toolbadge_types::{BadgeError, Result};

use crate::truncation::DEFAULT_MAX_FILENAME_LEN;

/// Tunables for label derivation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Maximum display width, in characters, of each filename in a label.
    pub max_filename_len: usize,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            max_filename_len: DEFAULT_MAX_FILENAME_LEN,
        }
    }
}

impl LabelConfig {
    /// Read a JSON config file. Missing keys take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_filename_len == 0 {
            return Err(BadgeError::InvalidConfig(
                "max_filename_len must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
