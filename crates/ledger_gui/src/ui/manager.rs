//! GUI screen manager
//!
//! Central object of one open screen: owns the component tree, the ledger
//! manager, the resource catalog and the event queue, and drives input,
//! animation and rendering for them.

use crate::config::GuiConfig;
use crate::error::{GuiError, GuiResult};
use crate::events::{Event, EventArg, EventSystem, EventType};
use crate::foundation::collections::ComponentKey;
use crate::foundation::math::{Coordinate2D, Plane};
use crate::input::{InputEvent, InputFrame, MouseButton};
use crate::ui::backend::RenderBackend;
use crate::ui::component::{GuiComponent, GuiNotification};
use crate::ui::host::ComponentTree;
use crate::ui::ledger::{Ledger, LedgerSide};
use crate::ui::ledger_manager::{LedgerManager, StandardLedgerManager};
use crate::ui::rendering::DrawContext;
use crate::ui::resources::ResourceCatalog;
use crate::ui::widgets::ScreenRoot;

/// One open GUI screen
pub struct GuiScreen {
    /// Screen name, also the ID of the root component
    name: String,

    /// Every component of the screen
    tree: ComponentTree,

    /// Ledger layout and click policy
    ledgers: Box<dyn LedgerManager>,

    /// Textures and fonts available to widgets
    catalog: ResourceCatalog,

    /// Configuration the screen was built from
    config: GuiConfig,

    /// Events raised by input handling
    event_system: EventSystem,

    /// Notifications raised during the current dispatch
    notifications: Vec<GuiNotification>,

    /// Last known mouse position in screen space
    mouse: Coordinate2D,

    /// Frame counter for event timestamps
    frame_counter: u64,
}

impl GuiScreen {
    /// Create a screen with the standard ledger layout
    pub fn new(name: impl Into<String>, config: GuiConfig) -> GuiResult<Self> {
        let ledgers = StandardLedgerManager::new(config.ledgers.clone(), config.screen.gui_width);
        Self::with_ledger_manager(name, config, Box::new(ledgers))
    }

    /// Create a screen whose ledgers are laid out by `ledgers`
    pub fn with_ledger_manager(
        name: impl Into<String>,
        config: GuiConfig,
        ledgers: Box<dyn LedgerManager>,
    ) -> GuiResult<Self> {
        config.validate()?;

        let name = name.into();
        let tree = ComponentTree::new(Box::new(ScreenRoot::from_config(name.clone(), &config.screen)))?;
        let catalog = ResourceCatalog::from_config(&config.resources);

        log::debug!(
            "Created screen '{}' ({}x{} GUI on {}x{})",
            name,
            config.screen.gui_width,
            config.screen.gui_height,
            config.screen.screen_width,
            config.screen.screen_height
        );

        Ok(Self {
            name,
            tree,
            ledgers,
            catalog,
            config,
            event_system: EventSystem::new(),
            notifications: Vec::new(),
            mouse: Coordinate2D::ORIGIN,
            frame_counter: 0,
        })
    }

    /// Screen name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Configuration the screen was built from
    pub fn config(&self) -> &GuiConfig {
        &self.config
    }

    /// Component tree
    pub fn tree(&self) -> &ComponentTree {
        &self.tree
    }

    /// Mutable component tree
    pub fn tree_mut(&mut self) -> &mut ComponentTree {
        &mut self.tree
    }

    /// Key of the screen root
    pub fn root(&self) -> ComponentKey {
        self.tree.root()
    }

    /// Resource catalog
    pub fn catalog(&self) -> &ResourceCatalog {
        &self.catalog
    }

    /// Mutable resource catalog
    pub fn catalog_mut(&mut self) -> &mut ResourceCatalog {
        &mut self.catalog
    }

    /// Frames updated so far
    pub fn frame(&self) -> u64 {
        self.frame_counter
    }

    // ----------------------------------------------------------------------
    // Building
    // ----------------------------------------------------------------------

    /// Register `component` as the last child of `host`
    pub fn register_component(
        &mut self,
        host: ComponentKey,
        component: impl GuiComponent + 'static,
    ) -> GuiResult<ComponentKey> {
        self.tree.register_component(host, Box::new(component))
    }

    /// Closed ledger using the theme's font and colours
    ///
    /// `icon` must name a texture in the catalog.
    pub fn build_ledger(&self, id: impl Into<String>, side: LedgerSide, icon: &str) -> GuiResult<Ledger> {
        let icon = self.catalog.texture(icon)?;
        let font = self.catalog.font(&self.config.theme.font)?;

        Ok(Ledger::new(id, side, icon, font)
            .with_color(self.config.theme.ledger_color)
            .with_header_color(self.config.theme.header_color))
    }

    /// Register `ledger` on the screen root and hand it to the ledger manager
    pub fn register_ledger(&mut self, ledger: Ledger) -> GuiResult<ComponentKey> {
        let id = ledger.id().to_string();
        let side = ledger.side();

        let key = self.tree.register_component(self.tree.root(), Box::new(ledger))?;
        self.ledgers.register_ledger(key, &id, side);
        Ok(key)
    }

    /// Set the open target of a ledger without a click
    pub fn set_ledger_open(&mut self, key: ComponentKey, open: bool) -> GuiResult<()> {
        let component = self.tree.component_mut(key).ok_or(GuiError::UnknownComponent(key))?;
        let id = component.id().to_string();
        let ledger = component
            .state_mut()
            .ledger_mut()
            .ok_or_else(|| GuiError::NotALedger(id))?;

        ledger.set_open(open);
        Ok(())
    }

    // ----------------------------------------------------------------------
    // Geometry
    // ----------------------------------------------------------------------

    /// Absolute top-left pixel of `key`
    pub fn root_anchor(&self, key: ComponentKey) -> GuiResult<Coordinate2D> {
        self.tree
            .root_anchor(key, self.ledgers.as_ref())
            .ok_or(GuiError::UnknownComponent(key))
    }

    /// Absolute rectangle covered by `key`
    pub fn occupied_area(&self, key: ComponentKey) -> GuiResult<Plane> {
        self.tree
            .occupied_area(key, self.ledgers.as_ref())
            .ok_or(GuiError::UnknownComponent(key))
    }

    /// Whether any component on the screen wants forced input, shown or not
    pub fn requires_forced_input(&self) -> bool {
        self.tree.children_require_forced_input(self.tree.root())
    }

    /// Tooltip of the innermost visible component under the mouse
    ///
    /// Parts of a component cut off by an ancestor's scissor do not count.
    pub fn hovered_tooltip(&self) -> Vec<String> {
        let mut hovered = None;
        let mut stack = vec![self.tree.root()];

        while let Some(key) = stack.pop() {
            let Some(component) = self.tree.component(key) else {
                continue;
            };
            if !component.state().is_visible() {
                continue;
            }
            let under_mouse = self
                .tree
                .clipped_area(key, self.ledgers.as_ref())
                .is_some_and(|area| area.contains_coordinate(self.mouse));
            if under_mouse {
                hovered = Some(key);
            }
            stack.extend(self.tree.children(key).iter().rev());
        }

        hovered
            .and_then(|key| self.tree.component(key))
            .map(|component| component.tooltip_lines())
            .unwrap_or_default()
    }

    // ----------------------------------------------------------------------
    // Input
    // ----------------------------------------------------------------------

    /// Update mouse position
    pub fn update_mouse_position(&mut self, x: i32, y: i32) {
        self.mouse = Coordinate2D::new(x, y);
    }

    /// Route a click at screen position `(x, y)`
    ///
    /// The root accepts every click on the screen since ledgers hang outside
    /// the GUI area. Returns `true` when a component consumed the click.
    pub fn mouse_clicked(&mut self, x: i32, y: i32, button: MouseButton) -> bool {
        let root = self.tree.root();
        let Some(anchor) = self.tree.root_anchor(root, self.ledgers.as_ref()) else {
            return false;
        };
        let relative = Coordinate2D::new(x, y) - anchor;

        let consumed = self
            .tree
            .dispatch_click_inside(root, relative, button, self.ledgers.as_ref(), &mut self.notifications);
        log::trace!("Click at ({}, {}) with {:?} consumed: {}", x, y, button, consumed);

        self.flush_notifications(Coordinate2D::new(x, y), button);
        consumed
    }

    /// Deliver a typed character to every component
    pub fn key_typed(&mut self, key: char) {
        let root = self.tree.root();
        self.tree.dispatch_key_typed(root, key);

        self.event_system.send(
            Event::new(EventType::KeyTyped, self.frame_counter)
                .with_arg("screen", EventArg::Screen(self.name.clone()))
                .with_arg("key", EventArg::Key(key)),
        );
    }

    /// Apply one frame of input, then update and animate
    pub fn process_input(&mut self, frame: &InputFrame) {
        self.update_mouse_position(frame.mouse.x, frame.mouse.y);

        for event in &frame.events {
            match *event {
                InputEvent::MouseClicked { position, button } => {
                    self.mouse_clicked(position.x, position.y, button);
                }
                InputEvent::KeyTyped(key) => self.key_typed(key),
            }
        }

        self.update(frame.partial_tick);
    }

    /// Turn notifications raised by the click at `position` into ledger toggles and events
    fn flush_notifications(&mut self, position: Coordinate2D, button: MouseButton) {
        for notification in std::mem::take(&mut self.notifications) {
            match notification {
                GuiNotification::LedgerClicked(key) => {
                    let Some(id) = self.tree.component(key).map(|component| component.id().to_string()) else {
                        continue;
                    };
                    self.event_system.send(
                        Event::new(EventType::LedgerClicked, self.frame_counter)
                            .with_arg("screen", EventArg::Screen(self.name.clone()))
                            .with_arg("component_id", EventArg::ComponentId(id))
                            .with_arg("position", EventArg::Position(position.x, position.y))
                            .with_arg("button", EventArg::MouseButton(button.index())),
                    );

                    for toggle in self.ledgers.on_ledger_clicked(&mut self.tree, key) {
                        log::debug!(
                            "Ledger '{}' {}",
                            toggle.id,
                            if toggle.open { "opening" } else { "closing" }
                        );
                        self.event_system.send(
                            Event::new(EventType::LedgerToggled, self.frame_counter)
                                .with_arg("screen", EventArg::Screen(self.name.clone()))
                                .with_arg("component_id", EventArg::ComponentId(toggle.id))
                                .with_arg("open", EventArg::Open(toggle.open)),
                        );
                    }
                }
            }
        }
    }

    // ----------------------------------------------------------------------
    // Frame
    // ----------------------------------------------------------------------

    /// Update and animate every component (call once per frame before rendering)
    pub fn update(&mut self, partial_tick: f32) {
        self.frame_counter += 1;
        log::trace!("Screen '{}' frame {} (partial tick {})", self.name, self.frame_counter, partial_tick);
        self.tree.update(self.mouse, partial_tick);
    }

    /// Render the screen to `backend`
    ///
    /// Every background in the tree is drawn before any foreground.
    pub fn render(&self, backend: &mut dyn RenderBackend) {
        let root = self.tree.root();
        let mut ctx = DrawContext::new(backend, self.mouse);

        self.tree.draw_background(root, self.ledgers.as_ref(), &mut ctx);
        self.tree.draw_foreground(root, self.ledgers.as_ref(), &mut ctx);

        if ctx.clip_depth() != 0 {
            log::warn!("Screen '{}' left {} clip(s) enabled", self.name, ctx.clip_depth());
        }
    }

    // ----------------------------------------------------------------------
    // Events
    // ----------------------------------------------------------------------

    /// Get event system reference
    pub fn event_system(&self) -> &EventSystem {
        &self.event_system
    }

    /// Get event system mutable reference
    pub fn event_system_mut(&mut self) -> &mut EventSystem {
        &mut self.event_system
    }

    /// Dispatch all pending events
    pub fn dispatch_events(&mut self) {
        self.event_system.dispatch();
    }
}
