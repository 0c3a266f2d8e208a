//! Application Configuration
//!
//! Every field has a default; a host page may override any subset with JSON.

use serde::Deserialize;

/// Keys of the two persisted slots
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub active_key: String,
    pub completed_key: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            active_key: "todoItems".to_string(),
            completed_key: "completedItems".to_string(),
        }
    }
}

/// Page geometry and raster settings for export
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Scale factor handed to the rasterizer
    pub scale: f64,
    pub portrait_width_mm: u32,
    pub landscape_width_mm: u32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scale: 2.0,
            portrait_width_mm: 210,
            landscape_width_mm: 297,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageKeys,
    pub export: ExportConfig,
    /// One of `error`, `warn`, `info`, `debug`, `trace`, `off`
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageKeys::default(),
            export: ExportConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse a JSON override, falling back to defaults when it is malformed
    pub fn from_json(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::default();
        }
        match serde_json::from_str(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring malformed config: {}", e);
                Self::default()
            }
        }
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
