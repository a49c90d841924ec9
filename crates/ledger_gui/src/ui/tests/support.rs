//! Shared test components

use std::cell::RefCell;
use std::rc::Rc;

use crate::foundation::collections::ComponentKey;
use crate::foundation::math::{Coordinate2D, Plane};
use crate::input::MouseButton;
use crate::ui::component::{GuiComponent, InputContext, LayoutView};
use crate::ui::host::ComponentTree;
use crate::ui::ledger::LedgerSide;
use crate::ui::ledger_manager::{LedgerManager, LedgerToggle};
use crate::ui::rendering::DrawContext;
use crate::ui::state::ComponentState;
use crate::ui::widgets::ScreenRoot;

pub type Log = Rc<RefCell<Vec<String>>>;

pub fn log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

/// Component that records every hook call into a shared log
pub struct Tracer {
    id: String,
    state: ComponentState,
    area: Plane,
    consumes: bool,
    forced: bool,
    scissor_inset: Option<i32>,
    log: Log,
}

impl Tracer {
    pub fn new(id: &str, area: Plane, log: &Log) -> Self {
        Self {
            id: id.to_string(),
            state: ComponentState::new(),
            area,
            consumes: false,
            forced: false,
            scissor_inset: None,
            log: Rc::clone(log),
        }
    }

    pub fn consuming(mut self) -> Self {
        self.consumes = true;
        self
    }

    pub fn forced(mut self) -> Self {
        self.forced = true;
        self
    }

    /// Clip children to the component area shrunk by `inset` on every side
    pub fn clipped(mut self, inset: i32) -> Self {
        self.scissor_inset = Some(inset);
        self
    }

    fn record(&self, entry: String) {
        self.log.borrow_mut().push(entry);
    }
}

impl GuiComponent for Tracer {
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
        self.area.origin
    }

    fn size(&self) -> Plane {
        Plane::from_size(self.area.width, self.area.height)
    }

    fn draw_background(&self, anchor: Coordinate2D, _ctx: &mut DrawContext<'_>) {
        self.record(format!("background:{}@{},{}", self.id, anchor.x, anchor.y));
    }

    fn draw_foreground(&self, anchor: Coordinate2D, _ctx: &mut DrawContext<'_>) {
        self.record(format!("foreground:{}@{},{}", self.id, anchor.x, anchor.y));
    }

    fn handle_click_inside(&mut self, relative: Coordinate2D, _button: MouseButton, _ctx: &mut InputContext<'_>) -> bool {
        self.record(format!("inside:{}@{},{}", self.id, relative.x, relative.y));
        self.consumes
    }

    fn handle_click_outside(&mut self, relative: Coordinate2D, _button: MouseButton, _ctx: &mut InputContext<'_>) -> bool {
        self.record(format!("outside:{}@{},{}", self.id, relative.x, relative.y));
        self.consumes
    }

    fn requires_forced_input(&self) -> bool {
        self.forced
    }

    fn scissor_area(&self, anchor: Coordinate2D) -> Option<Plane> {
        self.scissor_inset
            .map(|inset| Plane::new(anchor, self.area.width, self.area.height).inset(inset))
    }

    fn handle_key_typed(&mut self, key: char) {
        self.record(format!("key:{}:{}", self.id, key));
    }

    fn update(&mut self, _mouse: Coordinate2D, _partial_tick: f32) {
        self.record(format!("update:{}", self.id));
    }

    fn animate(&mut self, _partial_tick: f32) {
        self.record(format!("animate:{}", self.id));
    }
}

/// Ledger manager placing every ledger at a fixed slot and recording clicks
#[derive(Default)]
pub struct FixedLedgers {
    pub slot: Coordinate2D,
    pub clicks: Rc<RefCell<Vec<ComponentKey>>>,
}

impl LedgerManager for FixedLedgers {
    fn register_ledger(&mut self, _key: ComponentKey, _id: &str, _side: LedgerSide) {}

    fn ledger_local_coordinate(&self, _tree: &ComponentTree, _side: LedgerSide, _id: &str) -> Coordinate2D {
        self.slot
    }

    fn on_ledger_clicked(&mut self, _tree: &mut ComponentTree, key: ComponentKey) -> Vec<LedgerToggle> {
        self.clicks.borrow_mut().push(key);
        Vec::new()
    }
}

/// Tree whose root sits at the screen origin and covers 200x200 pixels
pub fn tree() -> ComponentTree {
    ComponentTree::new(Box::new(ScreenRoot::new("root", Plane::from_size(200, 200)))).unwrap()
}

pub fn area(x: i32, y: i32, width: i32, height: i32) -> Plane {
    Plane::new(Coordinate2D::new(x, y), width, height)
}
