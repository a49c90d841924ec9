//! The GUI component contract
//!
//! Every widget in a [`ComponentTree`] implements [`GuiComponent`]. The tree
//! owns the components and their parent/child links; a component only knows
//! its own ID, state, size and position relative to its host. Everything that
//! needs other parts of the tree (absolute anchors, the ledger layout, click
//! routing) is handed in through [`LayoutView`] and [`InputContext`].

use crate::foundation::collections::ComponentKey;
use crate::foundation::math::{Coordinate2D, Plane};
use crate::input::MouseButton;
use crate::ui::host::ComponentTree;
use crate::ui::ledger::LedgerSide;
use crate::ui::ledger_manager::LedgerManager;
use crate::ui::rendering::DrawContext;
use crate::ui::state::ComponentState;

/// Read-only view used while resolving positions
#[derive(Clone, Copy)]
pub struct LayoutView<'a> {
    tree: &'a ComponentTree,
    ledgers: &'a dyn LedgerManager,
}

impl<'a> LayoutView<'a> {
    /// View over `tree` with ledger slots resolved by `ledgers`
    pub fn new(tree: &'a ComponentTree, ledgers: &'a dyn LedgerManager) -> Self {
        Self { tree, ledgers }
    }

    /// The tree being laid out
    pub fn tree(&self) -> &'a ComponentTree {
        self.tree
    }

    /// Slot of the ledger `id` docked on `side`, relative to the ledger's host
    pub fn ledger_local_coordinate(&self, side: LedgerSide, id: &str) -> Coordinate2D {
        self.ledgers.ledger_local_coordinate(self.tree, side, id)
    }
}

/// Deferred notification raised while input is being dispatched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuiNotification {
    /// A ledger was clicked and no child consumed the click
    LedgerClicked(ComponentKey),
}

/// Per-call context handed to input hooks
pub struct InputContext<'a> {
    key: ComponentKey,
    notifications: &'a mut Vec<GuiNotification>,
}

impl<'a> InputContext<'a> {
    /// Context for the component stored under `key`
    pub fn new(key: ComponentKey, notifications: &'a mut Vec<GuiNotification>) -> Self {
        Self { key, notifications }
    }

    /// Key of the component receiving the input
    pub fn key(&self) -> ComponentKey {
        self.key
    }

    /// Tell the ledger manager that this ledger was clicked
    pub fn notify_ledger_clicked(&mut self) {
        self.notifications.push(GuiNotification::LedgerClicked(self.key));
    }
}

/// A widget in the component tree
///
/// Coordinates handed to input hooks are relative to the component's own
/// top-left pixel. Draw hooks receive the absolute top-left pixel (`anchor`).
/// Hooks for children are driven by the tree; a component only implements
/// its own behaviour.
pub trait GuiComponent {
    /// Stable, non-empty ID, unique within the host
    fn id(&self) -> &str;

    /// The component's state
    fn state(&self) -> &ComponentState;

    /// Mutable access to the component's state
    fn state_mut(&mut self) -> &mut ComponentState;

    /// Top-left pixel relative to the host's top-left pixel
    fn local_coordinate(&self, layout: &LayoutView<'_>) -> Coordinate2D;

    /// Current size, with the origin at `(0, 0)`
    fn size(&self) -> Plane;

    /// Draw the bulk of the component's visuals
    fn draw_background(&self, anchor: Coordinate2D, ctx: &mut DrawContext<'_>);

    /// Draw overlays; runs after every background in the tree is drawn
    fn draw_foreground(&self, _anchor: Coordinate2D, _ctx: &mut DrawContext<'_>) {}

    /// Click inside the component that no child consumed.
    /// Returns `true` when the click is consumed.
    fn handle_click_inside(&mut self, _relative: Coordinate2D, _button: MouseButton, _ctx: &mut InputContext<'_>) -> bool {
        false
    }

    /// Click outside the component, delivered only while
    /// [`GuiComponent::requires_forced_input`] is `true`.
    /// Returns `true` when the click is consumed.
    fn handle_click_outside(&mut self, _relative: Coordinate2D, _button: MouseButton, _ctx: &mut InputContext<'_>) -> bool {
        false
    }

    /// Whether this component itself wants clicks that land outside it
    fn requires_forced_input(&self) -> bool {
        false
    }

    /// Typed character
    fn handle_key_typed(&mut self, _key: char) {}

    /// Per-frame update before animation; `mouse` is in screen space
    fn update(&mut self, _mouse: Coordinate2D, _partial_tick: f32) {}

    /// Advance animations by `partial_tick` game ticks
    fn animate(&mut self, _partial_tick: f32) {}

    /// Clip rectangle for this component's children, given its anchor
    fn scissor_area(&self, _anchor: Coordinate2D) -> Option<Plane> {
        None
    }

    /// Tooltip lines shown while hovered
    fn tooltip_lines(&self) -> Vec<String> {
        Vec::new()
    }
}
