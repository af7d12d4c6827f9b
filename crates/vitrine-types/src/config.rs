//! Launcher configuration.
//!
//! Settings live in a small TOML file; every field has a default so an
//! empty file (or none at all) yields a working kiosk. The application
//! catalog itself is a separate JSON feed, loaded by the shell.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

fn default_viewport_width() -> u32 {
    1024
}

fn default_tile_gap() -> u32 {
    16
}

fn default_page_padding() -> u32 {
    32
}

fn default_voice_enabled() -> bool {
    true
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("apps.json")
}

/// Top-level launcher settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LauncherConfig {
    /// Viewport width in pixels, used only for tile pixel sizing.
    #[serde(default = "default_viewport_width")]
    pub viewport_width: u32,
    /// Gap between tiles in pixels.
    #[serde(default = "default_tile_gap")]
    pub tile_gap: u32,
    /// Horizontal page padding in pixels (one side).
    #[serde(default = "default_page_padding")]
    pub page_padding: u32,
    /// Whether the voice recognizer starts enabled.
    #[serde(default = "default_voice_enabled")]
    pub voice_enabled: bool,
    /// Path to the application catalog feed.
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            viewport_width: default_viewport_width(),
            tile_gap: default_tile_gap(),
            page_padding: default_page_padding(),
            voice_enabled: default_voice_enabled(),
            catalog_path: default_catalog_path(),
        }
    }
}

impl LauncherConfig {
    /// Parse settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load settings from a file, falling back to defaults if the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let c = LauncherConfig::from_toml_str("").unwrap();
        assert_eq!(c, LauncherConfig::default());
    }

    #[test]
    fn defaults_are_sane() {
        let c = LauncherConfig::default();
        assert_eq!(c.viewport_width, 1024);
        assert_eq!(c.tile_gap, 16);
        assert_eq!(c.page_padding, 32);
        assert!(c.voice_enabled);
        assert_eq!(c.catalog_path, PathBuf::from("apps.json"));
    }

    #[test]
    fn partial_toml_overrides() {
        let c = LauncherConfig::from_toml_str("viewport_width = 1920\nvoice_enabled = false\n")
            .unwrap();
        assert_eq!(c.viewport_width, 1920);
        assert!(!c.voice_enabled);
        // Untouched fields keep their defaults.
        assert_eq!(c.tile_gap, 16);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(LauncherConfig::from_toml_str("viewport_width = [[").is_err());
    }

    #[test]
    fn load_missing_file_gives_defaults() {
        let c = LauncherConfig::load(Path::new("/nonexistent/vitrine.toml")).unwrap();
        assert_eq!(c, LauncherConfig::default());
    }
}
