//! Screen root - the invisible top-level host of a screen

use crate::config::ScreenConfig;
use crate::foundation::math::{Coordinate2D, Plane};
use crate::ui::component::{GuiComponent, LayoutView};
use crate::ui::rendering::DrawContext;
use crate::ui::state::ComponentState;

/// Top-level host covering the GUI area of a screen
///
/// Its local coordinate is the GUI's top-left pixel on screen, so every
/// other anchor in the tree is composed from it. It draws nothing itself.
#[derive(Debug, Clone)]
pub struct ScreenRoot {
    id: String,
    state: ComponentState,
    origin: Coordinate2D,
    width: i32,
    height: i32,
}

impl ScreenRoot {
    /// Root with an explicit on-screen area
    pub fn new(id: impl Into<String>, area: Plane) -> Self {
        Self {
            id: id.into(),
            state: ComponentState::new(),
            origin: area.origin,
            width: area.width,
            height: area.height,
        }
    }

    /// Root centred on the screen described by `config`
    pub fn from_config(id: impl Into<String>, config: &ScreenConfig) -> Self {
        Self::new(id, Plane::new(config.gui_origin(), config.gui_width, config.gui_height))
    }

    /// Move the GUI area, e.g. after the window was resized
    pub fn set_origin(&mut self, origin: Coordinate2D) {
        self.origin = origin;
    }
}

impl GuiComponent for ScreenRoot {
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
        self.origin
    }

    fn size(&self) -> Plane {
        Plane::from_size(self.width, self.height)
    }

    fn draw_background(&self, _anchor: Coordinate2D, _ctx: &mut DrawContext<'_>) {}
}
