// PixelWidget
// copyright zipxing@hotmail.com 2022～2025

//! View configuration.
//!
//! Loaded from a toml file; every key is optional and falls back to the
//! defaults below.
//!
//! ```toml
//! width = 120
//! height = 40
//! frame_rate = 30
//! zoom_level = 4
//!
//! [log]
//! level = "debug"
//! file = "star_view.log"
//!
//! [[fonts]]
//! font = "furore"
//! modifier = "BOLD"
//! ```

use crate::render::{Color, Modifier};
use crate::ui::{Font, UIError, UIResult};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Initial screen size, used until the backend reports its own.
    pub width: u32,
    pub height: u32,
    pub frame_rate: u32,
    pub zoom_level: i32,
    /// Side of the square drawn for each world marker.
    pub marker_size: f32,
    pub background: Color,
    pub log: LogConfig,
    pub fonts: Vec<FontConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub file: String,
}

/// A font made available to text providers, with the cell attributes that
/// stand in for it on a terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontConfig {
    pub font: Font,
    #[serde(default)]
    pub modifier: Modifier,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            frame_rate: crate::GAME_FRAME,
            zoom_level: 1,
            marker_size: 10.0,
            background: Color::rgb(30, 30, 30),
            log: LogConfig::default(),
            fonts: vec![
                FontConfig {
                    font: Font::Furore,
                    modifier: Modifier::BOLD,
                },
                FontConfig {
                    font: Font::Orbitron,
                    modifier: Modifier::empty(),
                },
            ],
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: "pixel_widget.log".to_string(),
        }
    }
}

impl ViewConfig {
    pub fn from_toml(content: &str) -> UIResult<Self> {
        toml::from_str(content).map_err(|e| UIError::Config(e.to_string()))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> UIResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| UIError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    pub fn to_toml(&self) -> UIResult<String> {
        toml::to_string(self).map_err(|e| UIError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = ViewConfig::from_toml("").unwrap();
        assert_eq!(c, ViewConfig::default());
        assert_eq!((c.width, c.height), (1024, 768));
        assert_eq!(c.frame_rate, 60);
        assert_eq!(c.zoom_level, 1);
    }

    #[test]
    fn test_partial_file() {
        let c = ViewConfig::from_toml(
            r#"
            width = 120
            zoom_level = -2

            [log]
            level = "debug"

            [[fonts]]
            font = "orbitron"
            modifier = "ITALIC | UNDERLINED"
            "#,
        )
        .unwrap();
        assert_eq!(c.width, 120);
        assert_eq!(c.height, 768);
        assert_eq!(c.zoom_level, -2);
        assert_eq!(c.log.level, "debug");
        assert_eq!(c.log.file, "pixel_widget.log");
        assert_eq!(
            c.fonts,
            vec![FontConfig {
                font: Font::Orbitron,
                modifier: Modifier::ITALIC | Modifier::UNDERLINED,
            }]
        );
    }

    #[test]
    fn test_round_trip_through_toml() {
        let c = ViewConfig::default();
        let back = ViewConfig::from_toml(&c.to_toml().unwrap()).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            ViewConfig::from_toml("width = \"wide\""),
            Err(UIError::Config(_))
        ));
        assert!(matches!(
            ViewConfig::from_toml("[[fonts]]\nfont = \"comic\""),
            Err(UIError::Config(_))
        ));
        assert!(matches!(
            ViewConfig::load("/nonexistent/view.toml"),
            Err(UIError::Config(_))
        ));
    }
}
