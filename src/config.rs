//! Configuration persistence for scansel settings

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::engine::rasterize::{DEFAULT_OVERSIZE_RADIUS, RasterizeOptions};
use crate::engine::ratio::{DEFAULT_RATIO_DECIMALS, RatioAnalyzer};

/// Engine defaults persisted between sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSelConfig {
    /// Pixel radius sampled around each footprint vertex
    #[serde(default = "default_oversize_radius")]
    pub oversize_radius: i32,
    /// Select the whole sampled neighbourhood instead of only covered pixels
    #[serde(default)]
    pub include_oversized: bool,
    /// Decimal places channel ratios are rounded to
    #[serde(default = "default_ratio_decimals")]
    pub ratio_decimals: u32,
}

fn default_oversize_radius() -> i32 {
    DEFAULT_OVERSIZE_RADIUS
}

fn default_ratio_decimals() -> u32 {
    DEFAULT_RATIO_DECIMALS
}

impl ScanSelConfig {
    /// Directory name under the platform config dir
    pub const ID: &'static str = "scansel";

    /// Default location of the config file, if the platform has a config dir
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::ID).join("config.json"))
    }

    /// Load configuration from disk, or return defaults if unavailable
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            log::warn!("No config directory available, using defaults");
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Error loading config, using defaults: {:?}", err);
                Self::default()
            }
        }
    }

    /// Save configuration to disk
    pub fn save(&self) {
        match Self::path() {
            Some(path) => {
                if let Err(err) = self.save_to(&path) {
                    log::error!("Failed to save config: {:?}", err);
                }
            }
            None => log::error!("No config directory available for saving"),
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)
            .with_context(|| format!("Failed to write config {}", path.display()))
    }

    pub fn rasterize_options(&self) -> RasterizeOptions {
        RasterizeOptions {
            oversize_radius: self.oversize_radius,
            include_oversized: self.include_oversized,
        }
    }

    pub fn ratio_analyzer(&self) -> RatioAnalyzer {
        RatioAnalyzer::new(self.ratio_decimals)
    }
}

impl Default for ScanSelConfig {
    fn default() -> Self {
        Self {
            oversize_radius: default_oversize_radius(),
            // Exact containment only
            include_oversized: false,
            ratio_decimals: default_ratio_decimals(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScanSelConfig::default();
        assert_eq!(config.rasterize_options(), RasterizeOptions::default());
        assert_eq!(config.ratio_analyzer(), RatioAnalyzer::default());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: ScanSelConfig = serde_json::from_str(r#"{"include_oversized":true}"#).unwrap();
        assert!(config.include_oversized);
        assert_eq!(config.oversize_radius, 2);
        assert_eq!(config.ratio_decimals, 2);
    }

    #[test]
    fn test_ratio_decimals_clamped() {
        let config: ScanSelConfig = serde_json::from_str(r#"{"ratio_decimals":400}"#).unwrap();
        assert_eq!(config.ratio_analyzer().decimals, 15);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = ScanSelConfig {
            oversize_radius: 5,
            include_oversized: true,
            ratio_decimals: 4,
        };
        config.save_to(&path).unwrap();
        assert_eq!(ScanSelConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(ScanSelConfig::load_from(&path).is_err());
        assert!(ScanSelConfig::load_from(&dir.path().join("missing.json")).is_err());
    }
}
