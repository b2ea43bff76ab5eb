//! URL sources module
//!
//! Loading of the newline-delimited URL lists and resolution of the
//! requested or random index.

pub mod loader;
pub mod select;

// Re-export commonly used types
pub use select::{resolve, Selection};
