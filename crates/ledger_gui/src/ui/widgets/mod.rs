//! Built-in widgets
//!
//! Small leaf components used to assemble screens. Ledgers live in their own
//! module since they also act as hosts.

pub mod root;
pub mod border;
pub mod background;
pub mod image;
pub mod label;

pub use root::ScreenRoot;
pub use border::ComponentBorder;
pub use background::ComponentBackground;
pub use image::ComponentImage;
pub use label::ComponentLabel;
