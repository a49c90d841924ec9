//! Component state objects
//!
//! A state holds everything about a component that changes from frame to
//! frame, independent of layout: visibility plus widget specific data such as
//! a label's text or a ledger's open flag and animation progress.

use crate::error::{GuiError, GuiResult};
use crate::foundation::collections::ComponentKey;

/// Open/close state of a ledger
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LedgerState {
    open: bool,
    progress: f32,
}

impl LedgerState {
    /// Target state: `true` while opening or open
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Set the target state; the animation moves progress towards it
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    /// Animation progress, `0.0` fully closed to `1.0` fully open
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Set the animation progress, clamped into `[0, 1]`
    pub fn set_progress(&mut self, progress: f32) {
        self.progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
    }
}

/// Widget specific part of a [`ComponentState`]
#[derive(Debug, Clone, PartialEq)]
pub enum StateDetail {
    /// No data beyond visibility
    Plain,
    /// Displayed text
    Text(String),
    /// Ledger animation
    Ledger(LedgerState),
}

/// Mutable per-frame state owned by exactly one component
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentState {
    owner: Option<ComponentKey>,
    visible: bool,
    detail: StateDetail,
}

impl ComponentState {
    /// Visible state without widget data
    pub fn new() -> Self {
        Self::with_detail(StateDetail::Plain)
    }

    /// Visible state holding `text`
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::with_detail(StateDetail::Text(text.into()))
    }

    /// Visible, closed ledger state
    pub fn for_ledger() -> Self {
        Self::with_detail(StateDetail::Ledger(LedgerState::default()))
    }

    /// Visible state with the given detail
    pub fn with_detail(detail: StateDetail) -> Self {
        Self {
            owner: None,
            visible: true,
            detail,
        }
    }

    /// Record the owning component. May only happen once.
    pub fn bind_owner(&mut self, owner: ComponentKey) -> GuiResult<()> {
        if let Some(existing) = self.owner {
            return Err(GuiError::OwnerAlreadyBound(existing));
        }
        self.owner = Some(owner);
        Ok(())
    }

    /// Component this state belongs to, once registered
    pub fn owner(&self) -> Option<ComponentKey> {
        self.owner
    }

    /// Whether the component is drawn and receives input
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the component
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Widget specific data
    pub fn detail(&self) -> &StateDetail {
        &self.detail
    }

    /// Displayed text, if this state carries any
    pub fn text(&self) -> Option<&str> {
        match &self.detail {
            StateDetail::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Replace the displayed text; turns a plain detail into a text detail
    ///
    /// Ledger states carry no text and keep their animation data.
    pub fn set_text(&mut self, text: impl Into<String>) -> GuiResult<()> {
        if matches!(self.detail, StateDetail::Ledger(_)) {
            return Err(GuiError::StateDetailMismatch {
                expected: "text",
                found: "ledger",
            });
        }
        self.detail = StateDetail::Text(text.into());
        Ok(())
    }

    /// Ledger data, if this is a ledger state
    pub fn ledger(&self) -> Option<&LedgerState> {
        match &self.detail {
            StateDetail::Ledger(ledger) => Some(ledger),
            _ => None,
        }
    }

    /// Mutable ledger data, if this is a ledger state
    pub fn ledger_mut(&mut self) -> Option<&mut LedgerState> {
        match &mut self.detail {
            StateDetail::Ledger(ledger) => Some(ledger),
            _ => None,
        }
    }
}

impl Default for ComponentState {
    fn default() -> Self {
        Self::new()
    }
}
