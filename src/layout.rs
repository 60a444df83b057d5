//! Display/layout collaborator boundary
//!
//! The layout service maps logical key symbols to physical key codes.
//! The registry opens one connection lazily on first use and reuses it
//! for its whole lifetime, so implementations only pay the connection
//! cost when a key binding is actually parsed.

use std::fmt;

use crate::types::{KeySym, Keycode};

/// An open connection to the display/layout service
pub trait LayoutConnection {
    /// Resolve a logical symbol to the physical code of the key that
    /// produces it under the current layout.
    fn keycode_for(&self, keysym: KeySym) -> Keycode;
}

/// Opens connections to the display/layout service
pub trait LayoutSource {
    fn open_connection(&self) -> Result<Box<dyn LayoutConnection>, LayoutError>;
}

/// Failure to open a layout connection
#[derive(Debug, Clone)]
pub struct LayoutError(pub String);

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layout connection failed: {}", self.0)
    }
}

impl std::error::Error for LayoutError {}
