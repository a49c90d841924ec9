//! GUI rendering module
//!
//! Backend-agnostic rendering infrastructure

pub mod commands;
pub mod context;

// Re-export commonly used types
pub use commands::{RenderCommand, CommandRecorder};
pub use context::DrawContext;
