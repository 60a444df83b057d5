//! termkey - keyboard and mouse binding registry for a scriptable terminal
//!
//! This crate translates human-readable binding specifications
//! (e.g. `"Ctrl-t"`) into normalized event descriptors, stores them in
//! editable tables tied to opaque script-callback handles, and
//! dispatches incoming input events against those tables.
//!
//! # Architecture
//!
//! ```text
//! "Ctrl-t" → parse_key_spec() → (ModifierMask, KeyDescriptor)
//!                                       │
//!            Registry::bind_key() ──────┘
//!                                       │
//! KeyEvent → Registry::dispatch_key_event() → CallbackRuntime::invoke()
//! ```
//!
//! The [`Registry`] owns both binding tables, the matching policy, and
//! the external collaborators: a [`LayoutSource`] that resolves logical
//! symbols to physical key codes (opened lazily, once) and a
//! [`CallbackRuntime`] that owns the procedures bindings point at.
//!
//! # Setup
//!
//! ```ignore
//! let mut registry = Registry::new(config.matching_policy()?, layout, runtime);
//! defaults::install_default_bindings(&mut registry);
//! config.install(&mut registry);
//! ```
//!
//! Everything is single-threaded by design: bind/unbind and dispatch
//! all run on the windowing event loop's thread. Hosts with more
//! threads must serialize access behind one mutex.

mod callback;
mod config;
mod defaults;
mod dispatch;
mod layout;
mod parse;
mod registry;
mod types;

pub use callback::{CallbackHandle, CallbackRuntime};
pub use config::{default_config_path, load_config_file, Config, ConfigError, KeyEntry, MouseEntry};
pub use defaults::install_default_bindings;
pub use dispatch::MatchingPolicy;
pub use layout::{LayoutConnection, LayoutError, LayoutSource};
pub use parse::{parse_key_spec, parse_mouse_event, SpecError};
pub use registry::{KeyBinding, MouseBinding, Registry};
pub use types::{
    KeyDescriptor, KeyEvent, KeySym, Keycode, ModifierMask, MouseEvent, MouseEventType,
};
