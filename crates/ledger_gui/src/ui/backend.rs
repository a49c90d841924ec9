//! UI Render Backend Trait
//! 
//! Defines the interface between the component tree and the engine's
//! renderer. Keeps the GUI independent of the engine's drawing API: the tree
//! only ever issues bordered rectangles, images, labels and clip changes.

use serde::{Deserialize, Serialize};

use crate::foundation::math::{Color, Coordinate2D, Plane};
use crate::ui::resources::{FontHandle, TextureResource};

/// Shape of one corner of a bordered rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CornerStyle {
    /// Corner bevelled towards the inside of the rectangle
    Inwards,
    /// Corner bevelled away from the rectangle
    Outwards,
}

/// Corner styles in the order top-left, top-right, bottom-right, bottom-left
pub type CornerStyles = [CornerStyle; 4];

/// Backend-agnostic GUI rendering interface
///
/// All positions are absolute screen pixels.
pub trait RenderBackend {
    /// Draw a filled rectangle with a border
    fn draw_bordered_rect(&mut self, area: Plane, color: Color, corners: CornerStyles);

    /// Draw a texture with its top-left corner at `position`
    fn draw_image(&mut self, position: Coordinate2D, texture: &TextureResource);

    /// Draw a single line of text with its top-left corner at `position`
    fn draw_label(&mut self, position: Coordinate2D, color: Color, font: &FontHandle, text: &str);

    /// Restrict all following draws to `area`, replacing any previous clip
    fn enable_clip(&mut self, area: Plane);

    /// Remove the clip rectangle
    fn disable_clip(&mut self);
}
