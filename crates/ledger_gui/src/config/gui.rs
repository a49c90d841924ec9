//! # GUI Configuration
//!
//! Settings for a GUI screen: its size, how ledgers stack along the screen
//! edges, the colour theme and the textures and fonts the screen may use.
//!
//! Every section has defaults, so a config file only needs to name what it
//! changes.

use serde::{Serialize, Deserialize};

use super::{Config, ConfigError};
use crate::foundation::math::{colors, Color, Coordinate2D};
use crate::ui::resources::{FontHandle, TextureResource};

/// Name of the font used when the theme does not name one
pub const DEFAULT_FONT: &str = "default";

/// Size of the GUI and of the screen it is centred on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// GUI width in pixels
    pub gui_width: i32,
    /// GUI height in pixels
    pub gui_height: i32,
    /// Scaled screen width in pixels
    pub screen_width: i32,
    /// Scaled screen height in pixels
    pub screen_height: i32,
}

impl ScreenConfig {
    /// Top-left pixel of the GUI when centred on the screen
    pub fn gui_origin(&self) -> Coordinate2D {
        Coordinate2D::new(
            (self.screen_width - self.gui_width) / 2,
            (self.screen_height - self.gui_height) / 2,
        )
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            gui_width: 176,
            gui_height: 166,
            screen_width: 427,
            screen_height: 240,
        }
    }
}

/// Stacking of ledgers along a GUI edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerLayoutConfig {
    /// Y offset of the first ledger on each side, relative to the GUI top
    pub top_offset: i32,
    /// Vertical gap between consecutive ledgers on one side
    pub spacing: i32,
}

impl Default for LedgerLayoutConfig {
    fn default() -> Self {
        Self {
            top_offset: 4,
            spacing: 2,
        }
    }
}

/// Colours and font shared by the widgets of a screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Colour of ledger header labels
    pub header_color: Color,
    /// Accent colour for ledgers that do not pick their own
    pub ledger_color: Color,
    /// Font used for labels
    pub font: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            header_color: colors::white(),
            ledger_color: colors::from_rgb(0xC6_C6_C6),
            font: DEFAULT_FONT.to_string(),
        }
    }
}

/// Textures and fonts known to a screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    /// Available textures with their pixel sizes
    pub textures: Vec<TextureResource>,
    /// Available fonts
    pub fonts: Vec<FontHandle>,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            textures: Vec::new(),
            fonts: vec![FontHandle::new(DEFAULT_FONT, 8)],
        }
    }
}

/// Complete configuration for a GUI screen
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    /// Screen geometry
    pub screen: ScreenConfig,
    /// Ledger stacking
    pub ledgers: LedgerLayoutConfig,
    /// Colours and font
    pub theme: ThemeConfig,
    /// Textures and fonts
    pub resources: ResourceConfig,
}

impl GuiConfig {
    /// Reject values that would produce a degenerate layout
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen.gui_width <= 0 || self.screen.gui_height <= 0 {
            return Err(ConfigError::Invalid(format!(
                "GUI size must be positive, got {}x{}",
                self.screen.gui_width, self.screen.gui_height
            )));
        }
        if self.ledgers.spacing < 0 {
            return Err(ConfigError::Invalid(format!(
                "ledger spacing must not be negative, got {}",
                self.ledgers.spacing
            )));
        }
        if let Some(texture) = self.resources.textures.iter().find(|t| t.width <= 0 || t.height <= 0) {
            return Err(ConfigError::Invalid(format!(
                "texture '{}' has a non-positive size",
                texture.name
            )));
        }
        Ok(())
    }
}

impl Config for GuiConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gui_origin_centres_gui() {
        let screen = ScreenConfig::default();
        assert_eq!(screen.gui_origin(), Coordinate2D::new(125, 37));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: GuiConfig = toml::from_str(
            r#"
            [ledgers]
            spacing = 6

            [[resources.textures]]
            name = "icons/info"
            width = 16
            height = 16
            "#,
        )
        .unwrap();

        assert_eq!(config.ledgers.spacing, 6);
        assert_eq!(config.ledgers.top_offset, 4);
        assert_eq!(config.screen, ScreenConfig::default());
        assert_eq!(config.resources.textures, vec![TextureResource::new("icons/info", 16, 16)]);
        // Explicit texture list does not drop the default font
        assert_eq!(config.resources.fonts, vec![FontHandle::new(DEFAULT_FONT, 8)]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ron_file_round_trip() {
        let path = std::env::temp_dir().join(format!("ledger_gui_config_{}.ron", std::process::id()));
        let path = path.to_string_lossy().to_string();

        let mut config = GuiConfig::default();
        config.screen.gui_width = 200;
        config.resources.textures.push(TextureResource::new("icons/power", 12, 14));
        config.save_to_file(&path).unwrap();

        let loaded = GuiConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_unsupported_extension() {
        let err = GuiConfig::default().save_to_file("gui.json").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_validate_rejects_negative_spacing() {
        let mut config = GuiConfig::default();
        config.ledgers.spacing = -1;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
