//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Integer screen-space math (coordinates, planes, colours)
//! - The coordinate wire codec
//! - Arena keys for the component tree
//! - Logging utilities

pub mod math;
pub mod wire;
pub mod collections;
pub mod logging;
