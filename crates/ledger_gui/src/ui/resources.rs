//! Textures and fonts referenced by widgets
//!
//! The engine owns the actual GPU resources; the GUI only needs names and
//! pixel metrics. A screen resolves every resource it needs while it is being
//! built, so a missing icon or font fails the screen up front instead of
//! surfacing mid-frame.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::ResourceConfig;
use crate::error::{GuiError, GuiResult};

/// A texture with its size in pixels
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureResource {
    /// Resource name, e.g. `"icons/info"`
    pub name: String,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl TextureResource {
    /// Create a texture description
    pub fn new(name: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }
}

/// A font with its line height in pixels
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontHandle {
    /// Font name
    pub name: String,
    /// Height of one text line in pixels
    pub line_height: i32,
}

impl FontHandle {
    /// Create a font description
    pub fn new(name: impl Into<String>, line_height: i32) -> Self {
        Self {
            name: name.into(),
            line_height,
        }
    }
}

/// Lookup table of the textures and fonts available to a screen
#[derive(Debug, Clone, Default)]
pub struct ResourceCatalog {
    textures: HashMap<String, TextureResource>,
    fonts: HashMap<String, FontHandle>,
}

impl ResourceCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from configuration
    pub fn from_config(config: &ResourceConfig) -> Self {
        let mut catalog = Self::new();
        for texture in &config.textures {
            catalog.add_texture(texture.clone());
        }
        for font in &config.fonts {
            catalog.add_font(font.clone());
        }
        catalog
    }

    /// Add or replace a texture
    pub fn add_texture(&mut self, texture: TextureResource) {
        self.textures.insert(texture.name.clone(), texture);
    }

    /// Add or replace a font
    pub fn add_font(&mut self, font: FontHandle) {
        self.fonts.insert(font.name.clone(), font);
    }

    /// Resolve a texture by name
    pub fn texture(&self, name: &str) -> GuiResult<TextureResource> {
        self.textures
            .get(name)
            .cloned()
            .ok_or_else(|| GuiError::MissingTexture(name.to_string()))
    }

    /// Resolve a font by name
    pub fn font(&self, name: &str) -> GuiResult<FontHandle> {
        self.fonts
            .get(name)
            .cloned()
            .ok_or_else(|| GuiError::MissingFont(name.to_string()))
    }
}
