//! Border widget - a coloured frame with per-corner styles

use crate::foundation::math::{Color, Coordinate2D, Plane};
use crate::ui::backend::{CornerStyle, CornerStyles};
use crate::ui::component::{GuiComponent, LayoutView};
use crate::ui::rendering::DrawContext;
use crate::ui::state::ComponentState;

/// Bordered rectangle at a fixed position inside its host
#[derive(Debug, Clone)]
pub struct ComponentBorder {
    id: String,
    state: ComponentState,
    position: Coordinate2D,
    width: i32,
    height: i32,
    color: Color,
    corners: CornerStyles,
}

impl ComponentBorder {
    /// Border covering `area` of its host, with outward corners
    pub fn new(id: impl Into<String>, area: Plane, color: Color) -> Self {
        Self {
            id: id.into(),
            state: ComponentState::new(),
            position: area.origin,
            width: area.width,
            height: area.height,
            color,
            corners: [CornerStyle::Outwards; 4],
        }
    }

    /// Corner styles in top-left, top-right, bottom-right, bottom-left order
    #[must_use]
    pub fn with_corners(mut self, corners: CornerStyles) -> Self {
        self.corners = corners;
        self
    }

    /// Change the frame colour
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl GuiComponent for ComponentBorder {
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
        Plane::from_size(self.width, self.height)
    }

    fn draw_background(&self, anchor: Coordinate2D, ctx: &mut DrawContext<'_>) {
        ctx.draw_bordered_rect(Plane::new(anchor, self.width, self.height), self.color, self.corners);
    }
}
