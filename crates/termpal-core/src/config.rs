use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use tracing::debug;

use crate::colors::CUBE_START;
use crate::error::{PaletteError, Result};

/// Which palette indices the quantizer may return.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchRange {
    /// Color cube and grayscale ramp only (16-255).
    #[default]
    Extended,
    /// All 256 entries, including the 16 ANSI colors.
    Full,
}

impl SearchRange {
    pub fn indices(self) -> RangeInclusive<u8> {
        match self {
            Self::Extended => CUBE_START..=u8::MAX,
            Self::Full => 0..=u8::MAX,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuantizerConfig {
    pub search_range: SearchRange,
}

impl QuantizerConfig {
    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| PaletteError::Config(format!("Failed to parse quantizer config: {}", e)))?;
        debug!("Loaded quantizer config: {:?}", config);
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| PaletteError::Config(format!("Failed to serialize quantizer config: {}", e)))
    }
}
