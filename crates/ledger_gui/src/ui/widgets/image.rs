//! Image widget

use crate::foundation::math::{Coordinate2D, Plane};
use crate::ui::component::{GuiComponent, LayoutView};
use crate::ui::rendering::DrawContext;
use crate::ui::resources::TextureResource;
use crate::ui::state::ComponentState;

/// A texture at a fixed position, sized by the texture
#[derive(Debug, Clone)]
pub struct ComponentImage {
    id: String,
    state: ComponentState,
    position: Coordinate2D,
    texture: TextureResource,
    tooltip: Vec<String>,
}

impl ComponentImage {
    /// Image of `texture` at `position` inside its host
    pub fn new(id: impl Into<String>, position: Coordinate2D, texture: TextureResource) -> Self {
        Self {
            id: id.into(),
            state: ComponentState::new(),
            position,
            texture,
            tooltip: Vec::new(),
        }
    }

    /// Tooltip shown while the image is hovered
    #[must_use]
    pub fn with_tooltip(mut self, lines: Vec<String>) -> Self {
        self.tooltip = lines;
        self
    }

    /// Texture being shown
    pub fn texture(&self) -> &TextureResource {
        &self.texture
    }
}

impl GuiComponent for ComponentImage {
    fn id(&self) -> &str {
        &self.id
    }

    fn state(&self) -> &ComponentState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ComponentState {
        &mut self.state
    }

    fn local_coordinate(&self, _layout: &LayoutView<'_>) -> Coordinate2D {
        self.position
    }

    fn size(&self) -> Plane {
        Plane::from_size(self.texture.width, self.texture.height)
    }

    fn draw_background(&self, anchor: Coordinate2D, ctx: &mut DrawContext<'_>) {
        ctx.draw_image(anchor, &self.texture);
    }

    fn tooltip_lines(&self) -> Vec<String> {
        self.tooltip.clone()
    }
}
