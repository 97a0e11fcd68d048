// ABOUTME: Application configuration handling.
// ABOUTME: Loads and saves settings from TOML config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{Color, ContentCard};

/// Colors for the chrome around tiles. Pane interiors come from their
/// content cards, not from here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Color,
    pub separator: Color,
    pub separator_active: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::BACKGROUND,
            separator: Color::SEPARATOR,
            separator_active: Color::SEPARATOR_ACTIVE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window dimensions
    pub window_width: u32,
    pub window_height: u32,

    /// Catalog ordinal used when no saved session exists
    pub initial_preset: usize,

    /// Separator bar thickness in pixels
    pub separator_px: f32,

    /// Extra pixels on each side of a separator that still count as a grab
    pub grab_px: f32,

    pub palette: Palette,

    /// Content cards, indexed by position (card N backs ContentId(N))
    pub cards: Vec<ContentCard>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 1200,
            window_height: 800,
            initial_preset: 0,
            separator_px: 4.0,
            grab_px: 4.0,
            palette: Palette::default(),
            cards: vec![
                ContentCard::new("Text", Color::rgb(0.16, 0.22, 0.30)),
                ContentCard::new("Tree", Color::rgb(0.15, 0.28, 0.20)),
                ContentCard::new("Card", Color::rgb(0.28, 0.20, 0.16)),
            ],
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

impl Config {
    /// Get the default config file path (~/.config/tileworks/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tileworks").join("config.toml"))
    }

    /// Load config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_three_cards() {
        let config = Config::default();
        assert_eq!(config.cards.len(), 3);
        assert_eq!(config.cards[0].title, "Text");
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = Config {
            initial_preset: 4,
            separator_px: 6.0,
            ..Config::default()
        };

        let dir = std::env::temp_dir().join("tw-core-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");

        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = toml::from_str("initial_preset = 2").unwrap();
        assert_eq!(config.initial_preset, 2);
        assert_eq!(config.window_width, 1200);
        assert_eq!(config.cards.len(), 3);
    }
}
