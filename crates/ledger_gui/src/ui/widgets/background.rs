//! Background widget - the textured backdrop of a GUI

use crate::foundation::math::{Coordinate2D, Plane};
use crate::ui::component::{GuiComponent, LayoutView};
use crate::ui::rendering::DrawContext;
use crate::ui::resources::TextureResource;
use crate::ui::state::ComponentState;

/// Texture drawn at the top-left corner of its host
///
/// Usually registered first on a screen root so every other widget draws
/// on top of it.
#[derive(Debug, Clone)]
pub struct ComponentBackground {
    id: String,
    state: ComponentState,
    texture: TextureResource,
}

impl ComponentBackground {
    /// Backdrop showing `texture`
    pub fn new(id: impl Into<String>, texture: TextureResource) -> Self {
        Self {
            id: id.into(),
            state: ComponentState::new(),
            texture,
        }
    }
}

impl GuiComponent for ComponentBackground {
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
        Coordinate2D::ORIGIN
    }

    fn size(&self) -> Plane {
        Plane::from_size(self.texture.width, self.texture.height)
    }

    fn draw_background(&self, anchor: Coordinate2D, ctx: &mut DrawContext<'_>) {
        ctx.draw_image(anchor, &self.texture);
    }
}
