//! Application configuration.
//!
//! Defaults can be overridden by a JSON file in the platform config
//! directory (`~/.config/shapedeck/config.json` on Linux). Every key is
//! optional:
//!
//! ```json
//! { "title": "Shapes", "width": 1024, "height": 768,
//!   "background_color": "#fafafa", "selection_color": "#3b82f6" }
//! ```

use peniko::Color;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid color '{0}', expected #rrggbb")]
    InvalidColor(String),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    pub selection_color: Color,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "ShapeDeck".to_string(),
            width: 1280,
            height: 800,
            background_color: Color::from_rgba8(250, 250, 250, 255),
            selection_color: Color::from_rgba8(59, 130, 246, 255),
        }
    }
}

/// On-disk form of [`AppConfig`].
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    title: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    background_color: Option<String>,
    selection_color: Option<String>,
}

impl AppConfig {
    /// Default config file location, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("shapedeck").join("config.json"))
    }

    /// Load from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Using default configuration: {}", e);
                Self::default()
            }
        }
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(json) => {
                log::info!("Loading configuration from {}", path.display());
                Self::from_json(&json)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Parse a JSON config, filling absent keys with defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_json::from_str(json)?;
        let defaults = Self::default();
        Ok(Self {
            title: file.title.unwrap_or(defaults.title),
            width: file.width.unwrap_or(defaults.width),
            height: file.height.unwrap_or(defaults.height),
            background_color: file
                .background_color
                .as_deref()
                .map(parse_color)
                .transpose()?
                .unwrap_or(defaults.background_color),
            selection_color: file
                .selection_color
                .as_deref()
                .map(parse_color)
                .transpose()?
                .unwrap_or(defaults.selection_color),
        })
    }
}

/// Parse a CSS hex color like "#ff0000".
fn parse_color(s: &str) -> Result<Color, ConfigError> {
    let invalid = || ConfigError::InvalidColor(s.to_string());
    let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok(Color::from_rgba8(channel(0)?, channel(2)?, channel(4)?, 255))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn rgb(color: Color) -> (u8, u8, u8) {
        let rgba = color.to_rgba8();
        (rgba.r, rgba.g, rgba.b)
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r##"{ "width": 640, "background_color": "#102030" }"##).unwrap();
        assert_eq!(config.width, 640);
        assert_eq!(config.height, 800);
        assert_eq!(config.title, "ShapeDeck");
        assert_eq!(rgb(config.background_color), (0x10, 0x20, 0x30));
        assert_eq!(rgb(config.selection_color), (59, 130, 246));
    }

    #[test]
    fn test_invalid_color_rejected() {
        let err = AppConfig::from_json(r#"{ "selection_color": "blue" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor(c) if c == "blue"));
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("#gg0000").is_err());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = AppConfig::from_json(r##"{ "colour": "#ffffff" }"##).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config.width, 1280);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "title": "Shapes", "height": 480 }"#).unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.title, "Shapes");
        assert_eq!(config.height, 480);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(AppConfig::load_from(&path), Err(ConfigError::Parse(_))));
    }
}
