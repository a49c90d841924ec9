//! GUI render commands

use crate::foundation::math::{Color, Coordinate2D, Plane};
use crate::ui::backend::{CornerStyles, RenderBackend};
use crate::ui::resources::{FontHandle, TextureResource};

/// One call issued to a [`RenderBackend`]
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Bordered rectangle
    BorderedRect {
        /// Screen area
        area: Plane,
        /// Fill colour
        color: Color,
        /// Corner styles
        corners: CornerStyles,
    },
    /// Textured image
    Image {
        /// Top-left corner
        position: Coordinate2D,
        /// Texture name
        texture: String,
    },
    /// Text label
    Label {
        /// Top-left corner
        position: Coordinate2D,
        /// Text colour
        color: Color,
        /// Font name
        font: String,
        /// Text content
        text: String,
    },
    /// Clip rectangle enabled
    EnableClip(Plane),
    /// Clip rectangle removed
    DisableClip,
}

/// Backend that records every command instead of drawing
///
/// Engines that batch their GUI draws can replay the list; tests inspect it.
#[derive(Debug, Default)]
pub struct CommandRecorder {
    commands: Vec<RenderCommand>,
}

impl CommandRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded so far
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the recorder empty
    pub fn take(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Drop all recorded commands
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Names of the textures drawn, in draw order
    pub fn images(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Image { texture, .. } => Some(texture.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Texts of the labels drawn, in draw order
    pub fn labels(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Label { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl RenderBackend for CommandRecorder {
    fn draw_bordered_rect(&mut self, area: Plane, color: Color, corners: CornerStyles) {
        self.commands.push(RenderCommand::BorderedRect { area, color, corners });
    }

    fn draw_image(&mut self, position: Coordinate2D, texture: &TextureResource) {
        self.commands.push(RenderCommand::Image {
            position,
            texture: texture.name.clone(),
        });
    }

    fn draw_label(&mut self, position: Coordinate2D, color: Color, font: &FontHandle, text: &str) {
        self.commands.push(RenderCommand::Label {
            position,
            color,
            font: font.name.clone(),
            text: text.to_string(),
        });
    }

    fn enable_clip(&mut self, area: Plane) {
        self.commands.push(RenderCommand::EnableClip(area));
    }

    fn disable_clip(&mut self) {
        self.commands.push(RenderCommand::DisableClip);
    }
}
