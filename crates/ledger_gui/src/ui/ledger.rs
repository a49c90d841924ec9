//! Ledgers: collapsible side panels docked to a GUI edge
//!
//! A closed ledger shows only its icon inside a small bordered square. When
//! opened it grows towards its maximum size over a number of game ticks,
//! revealing a header label and whatever children are registered on it.
//! Left-docked ledgers grow leftwards away from the GUI, right-docked ones
//! grow rightwards.

use serde::{Deserialize, Serialize};

use crate::error::{GuiError, GuiResult};
use crate::foundation::math::{colors, Color, Coordinate2D, Plane};
use crate::input::MouseButton;
use crate::ui::backend::CornerStyle;
use crate::ui::component::{GuiComponent, InputContext, LayoutView};
use crate::ui::rendering::DrawContext;
use crate::ui::resources::{FontHandle, TextureResource};
use crate::ui::state::{ComponentState, LedgerState};

/// Padding added to the icon size to get the closed ledger size
pub const CLOSED_PADDING: i32 = 10;
/// Offset of the icon from the ledger's top-left pixel
pub const ICON_OFFSET: i32 = 5;
/// Inset of the children's clip rectangle
pub const SCISSOR_INSET: i32 = 4;
/// Inset of the header clip rectangle
pub const HEADER_CLIP_INSET: i32 = 3;
/// How far a ledger tucks under the GUI edge it is docked to
pub const DOCK_INSET: i32 = 4;

/// GUI edge a ledger is docked to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LedgerSide {
    /// Docked to the left edge, grows leftwards
    Left,
    /// Docked to the right edge, grows rightwards
    Right,
}

/// A collapsible, animated side panel
#[derive(Debug, Clone)]
pub struct Ledger {
    id: String,
    state: ComponentState,
    side: LedgerSide,
    icon: TextureResource,
    font: FontHandle,
    header: String,
    color: Color,
    header_color: Color,
    closed_width: i32,
    closed_height: i32,
    max_width: i32,
    max_height: i32,
}

impl Ledger {
    /// Closed ledger showing `icon`, with an empty header
    ///
    /// The maximum size starts out equal to the closed size; use
    /// [`Ledger::with_max_size`] to let it expand.
    pub fn new(id: impl Into<String>, side: LedgerSide, icon: TextureResource, font: FontHandle) -> Self {
        let closed_width = icon.width + CLOSED_PADDING;
        let closed_height = icon.height + CLOSED_PADDING;

        Self {
            id: id.into(),
            state: ComponentState::for_ledger(),
            side,
            icon,
            font,
            header: String::new(),
            color: colors::white(),
            header_color: colors::white(),
            closed_width,
            closed_height,
            max_width: closed_width,
            max_height: closed_height,
        }
    }

    /// Set the header text shown next to the icon
    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Set the panel colour
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the header label colour
    #[must_use]
    pub fn with_header_color(mut self, color: Color) -> Self {
        self.header_color = color;
        self
    }

    /// Set the fully open size; never smaller than the closed size
    #[must_use]
    pub fn with_max_size(mut self, width: i32, height: i32) -> Self {
        self.max_width = width.max(self.closed_width);
        self.max_height = height.max(self.closed_height);
        self
    }

    /// Edge this ledger is docked to
    pub fn side(&self) -> LedgerSide {
        self.side
    }

    /// Icon texture
    pub fn icon(&self) -> &TextureResource {
        &self.icon
    }

    /// Header text
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Panel colour
    pub fn color(&self) -> Color {
        self.color
    }

    /// Size while fully closed: icon plus padding
    pub fn closed_size(&self) -> Plane {
        Plane::from_size(self.closed_width, self.closed_height)
    }

    /// Size while fully open
    pub fn max_size(&self) -> Plane {
        Plane::from_size(self.max_width, self.max_height)
    }

    /// Game ticks a full open or close animation takes
    pub fn animation_ticks(&self) -> i32 {
        self.max_width.max(self.max_height) / 4 + 1
    }

    fn ledger_state(&self) -> LedgerState {
        self.state.ledger().copied().unwrap_or_default()
    }

    /// Whether the ledger is open or opening
    pub fn is_open(&self) -> bool {
        self.ledger_state().is_open()
    }

    /// Set whether the ledger should open or close
    pub fn set_open(&mut self, open: bool) -> GuiResult<()> {
        match self.state.ledger_mut() {
            Some(ledger) => {
                ledger.set_open(open);
                Ok(())
            }
            None => Err(GuiError::NotALedger(self.id.clone())),
        }
    }

    /// Animation progress from `0.0` (closed) to `1.0` (open)
    pub fn open_progress(&self) -> f32 {
        self.ledger_state().progress()
    }

    /// Move the animation progress towards the open target
    ///
    /// Progress changes by `partial_tick / animation_ticks` and stops at the
    /// target; it never leaves `[0, 1]`.
    pub fn step_animation(&mut self, partial_tick: f32) {
        let step = partial_tick.max(0.0) / self.animation_ticks() as f32;
        let Some(ledger) = self.state.ledger_mut() else {
            return;
        };

        let progress = ledger.progress();
        if ledger.is_open() && progress < 1.0 {
            ledger.set_progress((progress + step).min(1.0));
        } else if !ledger.is_open() && progress > 0.0 {
            ledger.set_progress((progress - step).max(0.0));
        }
    }

    fn interpolate(closed: i32, max: i32, progress: f32) -> i32 {
        (closed as f32 + (max - closed) as f32 * progress).ceil() as i32
    }

    /// Area the header is clipped to, given the ledger's anchor
    pub fn header_clip(&self, anchor: Coordinate2D) -> Plane {
        let size = self.size();
        Plane::new(
            anchor.translate(HEADER_CLIP_INSET, HEADER_CLIP_INSET),
            size.width - 2 * HEADER_CLIP_INSET,
            self.closed_height - 2 * HEADER_CLIP_INSET,
        )
    }

    /// Position of the header label relative to the ledger
    fn label_offset(&self) -> Coordinate2D {
        Coordinate2D::new(
            self.closed_width,
            ICON_OFFSET + (self.icon.height - self.font.line_height) / 2,
        )
    }
}

impl GuiComponent for Ledger {
    fn id(&self) -> &str {
        &self.id
    }

    fn state(&self) -> &ComponentState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ComponentState {
        &mut self.state
    }

    fn local_coordinate(&self, layout: &LayoutView<'_>) -> Coordinate2D {
        let primary = layout.ledger_local_coordinate(self.side, &self.id);

        match self.side {
            LedgerSide::Left => primary.translate(-(self.size().width - DOCK_INSET), 0),
            LedgerSide::Right => primary.translate(-DOCK_INSET, 0),
        }
    }

    fn size(&self) -> Plane {
        let progress = self.open_progress();
        Plane::from_size(
            Self::interpolate(self.closed_width, self.max_width, progress),
            Self::interpolate(self.closed_height, self.max_height, progress),
        )
    }

    fn draw_background(&self, anchor: Coordinate2D, ctx: &mut DrawContext<'_>) {
        let size = self.size();
        let area = Plane::new(anchor, size.width, size.height);

        ctx.push_clip(area);
        ctx.draw_bordered_rect(area, self.color, [CornerStyle::Inwards; 4]);
        ctx.pop_clip();

        ctx.push_clip(self.header_clip(anchor));
        ctx.draw_image(anchor.translate(ICON_OFFSET, ICON_OFFSET), &self.icon);
        ctx.draw_label(anchor + self.label_offset(), self.header_color, &self.font, &self.header);
        ctx.pop_clip();
    }

    fn handle_click_inside(&mut self, _relative: Coordinate2D, _button: MouseButton, ctx: &mut InputContext<'_>) -> bool {
        ctx.notify_ledger_clicked();
        true
    }

    fn animate(&mut self, partial_tick: f32) {
        self.step_animation(partial_tick);
    }

    fn scissor_area(&self, anchor: Coordinate2D) -> Option<Plane> {
        let size = self.size();
        Some(Plane::new(anchor, size.width, size.height).inset(SCISSOR_INSET))
    }
}
