//! Per-pass drawing context
//!
//! Wraps the backend for one draw pass and keeps a clip stack on top of the
//! backend's single clip rectangle: a pushed clip is intersected with the
//! current one, and popping restores the previous clip (or disables clipping
//! once the stack is empty).

use crate::foundation::math::{Color, Coordinate2D, Plane};
use crate::ui::backend::{CornerStyles, RenderBackend};
use crate::ui::resources::{FontHandle, TextureResource};

/// Drawing state shared by all components during one pass
pub struct DrawContext<'a> {
    backend: &'a mut dyn RenderBackend,
    clip_stack: Vec<Plane>,
    mouse: Coordinate2D,
}

impl<'a> DrawContext<'a> {
    /// Start a pass with the mouse at `mouse` (screen space)
    pub fn new(backend: &'a mut dyn RenderBackend, mouse: Coordinate2D) -> Self {
        Self {
            backend,
            clip_stack: Vec::with_capacity(8),
            mouse,
        }
    }

    /// Mouse position in screen space
    pub fn mouse(&self) -> Coordinate2D {
        self.mouse
    }

    /// Clip currently in effect
    pub fn current_clip(&self) -> Option<Plane> {
        self.clip_stack.last().copied()
    }

    /// Pushes a clip rect.
    pub fn push_clip(&mut self, area: Plane) {
        // Intersect with current clip if any
        let actual_clip = match self.clip_stack.last() {
            Some(current) => current
                .intersection(&area)
                .unwrap_or_else(|| Plane::new(area.origin, 0, 0)),
            None => area,
        };

        self.clip_stack.push(actual_clip);
        self.backend.enable_clip(actual_clip);
    }

    /// Pops the current clip rect.
    pub fn pop_clip(&mut self) {
        if self.clip_stack.pop().is_none() {
            log::warn!("pop_clip called with an empty clip stack");
            return;
        }

        match self.clip_stack.last() {
            Some(previous) => self.backend.enable_clip(*previous),
            None => self.backend.disable_clip(),
        }
    }

    /// Draw a bordered rectangle
    pub fn draw_bordered_rect(&mut self, area: Plane, color: Color, corners: CornerStyles) {
        self.backend.draw_bordered_rect(area, color, corners);
    }

    /// Draw a texture
    pub fn draw_image(&mut self, position: Coordinate2D, texture: &TextureResource) {
        self.backend.draw_image(position, texture);
    }

    /// Draw a text label
    pub fn draw_label(&mut self, position: Coordinate2D, color: Color, font: &FontHandle, text: &str) {
        self.backend.draw_label(position, color, font, text);
    }

    /// Number of clips still pushed
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }
}
