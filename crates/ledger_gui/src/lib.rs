//! # Ledger GUI
//!
//! A retained-mode GUI component framework for game screens.
//!
//! ## Features
//!
//! - **Component Tree**: Arena-backed hierarchy of polymorphic widgets
//! - **Ledgers**: Animated, collapsible side panels docked to a GUI edge
//! - **Input Dispatch**: Ordered click routing with forced-input support
//! - **Scissored Rendering**: Two-pass drawing through a pluggable backend
//! - **Configuration**: TOML or RON screen, theme and resource settings
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ledger_gui::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = GuiConfig::default();
//!     config.resources.textures.push(TextureResource::new("icons/info", 16, 16));
//!
//!     let mut screen = GuiScreen::new("furnace", config)?;
//!     let ledger = screen
//!         .build_ledger("info", LedgerSide::Right, "icons/info")?
//!         .with_header("Information")
//!         .with_max_size(120, 80);
//!     screen.register_ledger(ledger)?;
//!
//!     let mut recorder = CommandRecorder::new();
//!     screen.update(0.5);
//!     screen.render(&mut recorder);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod events;
pub mod input;
pub mod ui;

mod error;

pub use error::{GuiError, GuiResult};

/// Common imports for GUI users
pub mod prelude {
    pub use crate::{
        GuiError, GuiResult,
        config::{Config, GuiConfig},
        events::{Event, EventArg, EventHandler, EventSystem, EventType},
        foundation::{
            collections::ComponentKey,
            math::{colors, Color, Coordinate2D, Direction, Plane},
        },
        input::{InputEvent, InputFrame, InputProcessor, MouseButton},
        ui::{
            CommandRecorder, ComponentLabel, ComponentImage, ComponentBorder, ComponentBackground,
            ComponentState, GuiComponent, GuiScreen, Ledger, LedgerManager, LedgerSide,
            RenderBackend, RenderCommand, ScreenRegistry, StandardLedgerManager, TextureResource, FontHandle,
        },
    };
}
