//! Label widget - a single line of text

use crate::error::GuiResult;
use crate::foundation::math::{Color, Coordinate2D, Plane};
use crate::ui::component::{GuiComponent, LayoutView};
use crate::ui::rendering::DrawContext;
use crate::ui::resources::FontHandle;
use crate::ui::state::ComponentState;

/// One line of text; the text itself lives in the component state
///
/// Labels draw in the foreground pass so they end up on top of every
/// background in the tree.
#[derive(Debug, Clone)]
pub struct ComponentLabel {
    id: String,
    state: ComponentState,
    position: Coordinate2D,
    width: i32,
    font: FontHandle,
    color: Color,
}

impl ComponentLabel {
    /// Label at `position`, `width` pixels wide and one font line high
    pub fn new(
        id: impl Into<String>,
        position: Coordinate2D,
        width: i32,
        font: FontHandle,
        color: Color,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            state: ComponentState::with_text(text),
            position,
            width: width.max(0),
            font,
            color,
        }
    }

    /// Current text
    pub fn text(&self) -> &str {
        self.state.text().unwrap_or_default()
    }

    /// Replace the text
    pub fn set_text(&mut self, text: impl Into<String>) -> GuiResult<()> {
        self.state.set_text(text)
    }
}

impl GuiComponent for ComponentLabel {
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
        Plane::from_size(self.width, self.font.line_height)
    }

    fn draw_background(&self, _anchor: Coordinate2D, _ctx: &mut DrawContext<'_>) {}

    fn draw_foreground(&self, anchor: Coordinate2D, ctx: &mut DrawContext<'_>) {
        ctx.draw_label(anchor, self.color, &self.font, self.text());
    }
}
