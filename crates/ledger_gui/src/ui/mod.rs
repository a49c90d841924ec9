//! GUI component framework
//!
//! Architecture:
//! - GuiScreen: one open screen owning the component tree, ledgers and events
//! - ScreenRegistry: stack of open screens
//! - host/component: arena-backed tree of `GuiComponent` trait objects
//! - ledger/ledger_manager: animated side panels and their layout
//! - widgets/: leaf widgets (root, border, background, image, label)
//! - rendering/: clip stack and a recording backend

pub mod backend;
pub mod component;
pub mod host;
pub mod ledger;
pub mod ledger_manager;
pub mod manager;
pub mod registry;
pub mod rendering;
pub mod resources;
pub mod state;
pub mod widgets;

#[cfg(test)]
mod tests;

pub use backend::{CornerStyle, CornerStyles, RenderBackend};
pub use component::{GuiComponent, GuiNotification, InputContext, LayoutView};
pub use host::ComponentTree;
pub use ledger::{Ledger, LedgerSide};
pub use ledger_manager::{LedgerManager, LedgerToggle, StandardLedgerManager};
pub use manager::GuiScreen;
pub use registry::ScreenRegistry;
pub use rendering::{CommandRecorder, DrawContext, RenderCommand};
pub use resources::{FontHandle, ResourceCatalog, TextureResource};
pub use state::{ComponentState, LedgerState, StateDetail};

// Re-export widget types
pub use widgets::{ComponentBackground, ComponentBorder, ComponentImage, ComponentLabel, ScreenRoot};
