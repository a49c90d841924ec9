//! Error types for the GUI framework

use crate::config::ConfigError;
use crate::foundation::collections::ComponentKey;
use crate::foundation::wire::WireError;

/// Result alias used across the crate
pub type GuiResult<T> = Result<T, GuiError>;

/// Errors raised while building or driving a GUI screen
#[derive(thiserror::Error, Debug)]
pub enum GuiError {
    /// A host already holds a child with this ID
    #[error("component '{id}' is already registered on host '{host}'")]
    DuplicateComponentId {
        /// ID of the host
        host: String,
        /// Rejected child ID
        id: String,
    },

    /// Component IDs must not be empty
    #[error("component IDs must not be empty")]
    EmptyComponentId,

    /// Key does not refer to a live component
    #[error("no component for key {0:?}")]
    UnknownComponent(ComponentKey),

    /// State holds a different kind of widget data
    #[error("component state holds {found} data, not {expected} data")]
    StateDetailMismatch {
        /// Kind of data the operation needs
        expected: &'static str,
        /// Kind of data the state holds
        found: &'static str,
    },

    /// Component is not a ledger
    #[error("component '{0}' is not a ledger")]
    NotALedger(String),

    /// A component state was bound to a second owner
    #[error("component state is already owned by {0:?}")]
    OwnerAlreadyBound(ComponentKey),

    /// Texture missing from the resource catalog
    #[error("texture '{0}' is not registered")]
    MissingTexture(String),

    /// Font missing from the resource catalog
    #[error("font '{0}' is not registered")]
    MissingFont(String),

    /// No screen is open
    #[error("no GUI screen is active")]
    NoActiveScreen,

    /// Screen name not known to the registry
    #[error("no GUI screen named '{0}'")]
    UnknownScreen(String),

    /// Malformed wire data
    #[error("wire error: {0}")]
    Wire(#[from] WireError),

    /// Configuration could not be loaded or is invalid
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
