//! Component hosting
//!
//! [`ComponentTree`] is the host for every component of a screen. It stores
//! the components in an arena; each node owns an ordered list of child keys
//! and holds a plain key back to its parent, so there is no ownership cycle.
//! Any node can act as a host for further children.
//!
//! Registration order is significant: children are drawn in that order and
//! earlier siblings get the first chance to consume a click.

use crate::error::{GuiError, GuiResult};
use crate::foundation::collections::{ComponentArena, ComponentKey};
use crate::foundation::math::{Coordinate2D, Plane};
use crate::input::MouseButton;
use crate::ui::component::{GuiComponent, GuiNotification, InputContext, LayoutView};
use crate::ui::ledger_manager::LedgerManager;
use crate::ui::rendering::DrawContext;

struct Node {
    component: Box<dyn GuiComponent>,
    parent: Option<ComponentKey>,
    children: Vec<ComponentKey>,
}

/// Arena-backed component hierarchy with a single root
pub struct ComponentTree {
    nodes: ComponentArena<Node>,
    root: ComponentKey,
}

impl ComponentTree {
    /// Create a tree whose root is `root`
    pub fn new(root: Box<dyn GuiComponent>) -> GuiResult<Self> {
        if root.id().is_empty() {
            return Err(GuiError::EmptyComponentId);
        }

        let mut nodes = ComponentArena::with_key();
        let key = nodes.insert(Node {
            component: root,
            parent: None,
            children: Vec::new(),
        });
        nodes[key].component.state_mut().bind_owner(key)?;

        Ok(Self { nodes, root: key })
    }

    /// Key of the root component
    pub fn root(&self) -> ComponentKey {
        self.root
    }

    /// Number of components, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether only the root is present
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Register `component` as the last child of `host`
    ///
    /// IDs must be unique among the host's children; a duplicate is rejected
    /// and the host is left unchanged.
    pub fn register_component(&mut self, host: ComponentKey, component: Box<dyn GuiComponent>) -> GuiResult<ComponentKey> {
        let host_node = self.nodes.get(host).ok_or(GuiError::UnknownComponent(host))?;

        if component.id().is_empty() {
            return Err(GuiError::EmptyComponentId);
        }

        if self.find_child(host, component.id()).is_some() {
            let host_id = host_node.component.id().to_string();
            log::warn!("Rejected duplicate component '{}' on host '{}'", component.id(), host_id);
            return Err(GuiError::DuplicateComponentId {
                host: host_id,
                id: component.id().to_string(),
            });
        }

        let key = self.nodes.insert(Node {
            component,
            parent: Some(host),
            children: Vec::new(),
        });

        if let Err(err) = self.nodes[key].component.state_mut().bind_owner(key) {
            self.nodes.remove(key);
            return Err(err);
        }

        self.nodes[host].children.push(key);
        log::debug!("Registered component '{}' on host '{}'", self.nodes[key].component.id(), self.nodes[host].component.id());
        Ok(key)
    }

    /// The component stored under `key`
    pub fn component(&self, key: ComponentKey) -> Option<&dyn GuiComponent> {
        self.nodes.get(key).map(|node| node.component.as_ref())
    }

    /// Mutable access to the component stored under `key`
    pub fn component_mut(&mut self, key: ComponentKey) -> Option<&mut (dyn GuiComponent + 'static)> {
        self.nodes.get_mut(key).map(|node| node.component.as_mut())
    }

    /// Host of `key`; `None` for the root or unknown keys
    pub fn parent(&self, key: ComponentKey) -> Option<ComponentKey> {
        self.nodes.get(key).and_then(|node| node.parent)
    }

    /// Direct children of `host` in registration order
    pub fn children(&self, host: ComponentKey) -> &[ComponentKey] {
        self.nodes.get(host).map_or(&[], |node| node.children.as_slice())
    }

    /// Direct child components of `host` in registration order
    pub fn components(&self, host: ComponentKey) -> impl Iterator<Item = &dyn GuiComponent> + '_ {
        self.children(host)
            .iter()
            .filter_map(move |child| self.component(*child))
    }

    /// Key of the child of `host` with the given ID
    pub fn find_child(&self, host: ComponentKey, id: &str) -> Option<ComponentKey> {
        self.children(host)
            .iter()
            .copied()
            .find(|child| self.nodes.get(*child).is_some_and(|node| node.component.id() == id))
    }

    /// Key of the component reached by following child IDs from the root
    pub fn find_path(&self, path: &[&str]) -> Option<ComponentKey> {
        path.iter()
            .try_fold(self.root, |host, id| self.find_child(host, id))
    }

    fn is_visible(&self, key: ComponentKey) -> bool {
        self.nodes
            .get(key)
            .is_some_and(|node| node.component.state().is_visible())
    }

    // ----------------------------------------------------------------------
    // Geometry
    // ----------------------------------------------------------------------

    /// Top-left pixel of `key` relative to its host
    pub fn local_coordinate(&self, key: ComponentKey, ledgers: &dyn LedgerManager) -> Option<Coordinate2D> {
        let node = self.nodes.get(key)?;
        Some(node.component.local_coordinate(&LayoutView::new(self, ledgers)))
    }

    /// Absolute top-left pixel of `key`, composed from every ancestor's offset
    pub fn root_anchor(&self, key: ComponentKey, ledgers: &dyn LedgerManager) -> Option<Coordinate2D> {
        let mut anchor = Coordinate2D::ORIGIN;
        let mut current = Some(key);

        while let Some(at) = current {
            anchor = anchor + self.local_coordinate(at, ledgers)?;
            current = self.parent(at);
        }

        Some(anchor)
    }

    /// Absolute rectangle currently covered by `key`
    pub fn occupied_area(&self, key: ComponentKey, ledgers: &dyn LedgerManager) -> Option<Plane> {
        let anchor = self.root_anchor(key, ledgers)?;
        let size = self.nodes.get(key)?.component.size();
        Some(Plane::new(anchor, size.width, size.height))
    }

    /// Rectangle of `key` in its host's coordinate space
    fn local_area(&self, key: ComponentKey, ledgers: &dyn LedgerManager) -> Option<Plane> {
        let local = self.local_coordinate(key, ledgers)?;
        let size = self.nodes.get(key)?.component.size();
        Some(Plane::new(local, size.width, size.height))
    }

    /// Part of `key`'s absolute rectangle left after every ancestor's scissor
    ///
    /// `None` when the component is unknown or clipped away entirely.
    pub fn clipped_area(&self, key: ComponentKey, ledgers: &dyn LedgerManager) -> Option<Plane> {
        let mut area = self.occupied_area(key, ledgers)?;
        let mut current = self.parent(key);

        while let Some(host) = current {
            let anchor = self.root_anchor(host, ledgers)?;
            if let Some(scissor) = self.nodes.get(host)?.component.scissor_area(anchor) {
                area = area.intersection(&scissor)?;
            }
            current = self.parent(host);
        }

        Some(area)
    }

    /// Whether `key` or any descendant wants clicks outside itself
    ///
    /// Hidden descendants count too; dispatch skips them on its own.
    pub fn requires_forced_input(&self, key: ComponentKey) -> bool {
        let Some(node) = self.nodes.get(key) else {
            return false;
        };

        node.component.requires_forced_input() || node.children.iter().any(|child| self.requires_forced_input(*child))
    }

    /// Whether any child of `host` (transitively) wants forced input.
    /// `false` for a host without children.
    pub fn children_require_forced_input(&self, host: ComponentKey) -> bool {
        self.children(host).iter().any(|child| self.requires_forced_input(*child))
    }

    // ----------------------------------------------------------------------
    // Input dispatch
    // ----------------------------------------------------------------------

    /// Route a click that landed inside `key`
    ///
    /// `relative` is relative to `key`'s top-left pixel. Each visible child is
    /// tried in registration order: a child containing the click gets it as an
    /// inside click, a child that wants forced input gets it as an outside
    /// click. The first child to consume the click ends the dispatch. Only if
    /// no child consumed it does `key` handle the click itself.
    ///
    /// A click outside `key`'s scissor area cannot land inside any child, so
    /// children only see it as an outside click.
    pub fn dispatch_click_inside(
        &mut self,
        key: ComponentKey,
        relative: Coordinate2D,
        button: MouseButton,
        ledgers: &dyn LedgerManager,
        notifications: &mut Vec<GuiNotification>,
    ) -> bool {
        let clipped = self
            .nodes
            .get(key)
            .and_then(|node| node.component.scissor_area(Coordinate2D::ORIGIN))
            .is_some_and(|scissor| !scissor.contains_coordinate(relative));
        let children = self.children(key).to_vec();

        for child in children {
            if !self.is_visible(child) {
                continue;
            }
            let Some(area) = self.local_area(child, ledgers) else {
                continue;
            };
            let child_relative = relative - area.origin;

            let consumed = if !clipped && area.contains_coordinate(relative) {
                self.dispatch_click_inside(child, child_relative, button, ledgers, notifications)
            } else if self.requires_forced_input(child) {
                self.dispatch_click_outside(child, child_relative, button, ledgers, notifications)
            } else {
                false
            };

            if consumed {
                log::trace!("Click at {} consumed below '{}'", relative, self.describe(key));
                return true;
            }
        }

        let mut ctx = InputContext::new(key, notifications);
        self.nodes
            .get_mut(key)
            .is_some_and(|node| node.component.handle_click_inside(relative, button, &mut ctx))
    }

    /// Route a click that landed outside `key`
    ///
    /// Only children that (transitively) want forced input are offered the
    /// click; `key` handles it itself only if it wants forced input.
    pub fn dispatch_click_outside(
        &mut self,
        key: ComponentKey,
        relative: Coordinate2D,
        button: MouseButton,
        ledgers: &dyn LedgerManager,
        notifications: &mut Vec<GuiNotification>,
    ) -> bool {
        let children = self.children(key).to_vec();

        for child in children {
            if !self.is_visible(child) || !self.requires_forced_input(child) {
                continue;
            }
            let Some(local) = self.local_coordinate(child, ledgers) else {
                continue;
            };
            if self.dispatch_click_outside(child, relative - local, button, ledgers, notifications) {
                return true;
            }
        }

        let mut ctx = InputContext::new(key, notifications);
        self.nodes.get_mut(key).is_some_and(|node| {
            node.component.requires_forced_input() && node.component.handle_click_outside(relative, button, &mut ctx)
        })
    }

    /// Deliver a typed key to `key` and then to every descendant
    ///
    /// Keys are never consumed; every component sees every key.
    pub fn dispatch_key_typed(&mut self, key: ComponentKey, typed: char) {
        if let Some(node) = self.nodes.get_mut(key) {
            node.component.handle_key_typed(typed);
        }
        for child in self.children(key).to_vec() {
            self.dispatch_key_typed(child, typed);
        }
    }

    /// Run update and then animation on every component, parents first
    pub fn update(&mut self, mouse: Coordinate2D, partial_tick: f32) {
        let mut stack = vec![self.root];

        while let Some(key) = stack.pop() {
            let Some(node) = self.nodes.get_mut(key) else {
                continue;
            };
            node.component.update(mouse, partial_tick);
            node.component.animate(partial_tick);
            stack.extend(node.children.iter().rev());
        }
    }

    // ----------------------------------------------------------------------
    // Drawing
    // ----------------------------------------------------------------------

    /// Background pass over the subtree at `key`
    pub fn draw_background(&self, key: ComponentKey, ledgers: &dyn LedgerManager, ctx: &mut DrawContext<'_>) {
        let parent_anchor = self.parent_anchor(key, ledgers);
        self.draw_pass(key, parent_anchor, ledgers, ctx, Pass::Background);
    }

    /// Foreground pass over the subtree at `key`
    pub fn draw_foreground(&self, key: ComponentKey, ledgers: &dyn LedgerManager, ctx: &mut DrawContext<'_>) {
        let parent_anchor = self.parent_anchor(key, ledgers);
        self.draw_pass(key, parent_anchor, ledgers, ctx, Pass::Foreground);
    }

    fn parent_anchor(&self, key: ComponentKey, ledgers: &dyn LedgerManager) -> Coordinate2D {
        self.parent(key)
            .and_then(|parent| self.root_anchor(parent, ledgers))
            .unwrap_or(Coordinate2D::ORIGIN)
    }

    fn draw_pass(
        &self,
        key: ComponentKey,
        parent_anchor: Coordinate2D,
        ledgers: &dyn LedgerManager,
        ctx: &mut DrawContext<'_>,
        pass: Pass,
    ) {
        if !self.is_visible(key) {
            return;
        }
        let Some(local) = self.local_coordinate(key, ledgers) else {
            return;
        };
        let node = &self.nodes[key];
        let anchor = parent_anchor + local;

        match pass {
            Pass::Background => node.component.draw_background(anchor, ctx),
            Pass::Foreground => node.component.draw_foreground(anchor, ctx),
        }

        let scissor = node.component.scissor_area(anchor);
        if let Some(area) = scissor {
            ctx.push_clip(area);
        }
        for child in &node.children {
            self.draw_pass(*child, anchor, ledgers, ctx, pass);
        }
        if scissor.is_some() {
            ctx.pop_clip();
        }
    }

    fn describe(&self, key: ComponentKey) -> &str {
        self.nodes.get(key).map_or("<removed>", |node| node.component.id())
    }
}

#[derive(Debug, Clone, Copy)]
enum Pass {
    Background,
    Foreground,
}
