//! Default binding set
//!
//! These are the bindings a host installs before any user
//! configuration runs; later re-binds replace them by name.

use tracing::warn;

use crate::registry::Registry;

const DEFAULT_KEY_BINDINGS: &[(&str, &str)] = &[
    ("Alt-Left", "prevTab"),
    ("Alt-Right", "nextTab"),
    ("Ctrl-t", "openTab"),
    ("Ctrl-w", "closeTab"),
    ("Ctrl-Insert", "copy"),
    ("Shift-Insert", "paste"),
];

const DEFAULT_MOUSE_BINDINGS: &[(&str, &str)] = &[("DoubleClick", "openTab")];

/// Install the default key and mouse bindings, in order.
///
/// Each action name is registered through the scripting runtime first;
/// actions the runtime does not know are logged and skipped.
pub fn install_default_bindings(registry: &mut Registry) {
    for &(spec, action) in DEFAULT_KEY_BINDINGS {
        match registry.register_callback(action) {
            Some(handle) => registry.bind_key(spec, handle),
            None => warn!("unknown action [{}] for default [{}]", action, spec),
        }
    }
    for &(event, action) in DEFAULT_MOUSE_BINDINGS {
        match registry.register_callback(action) {
            Some(handle) => registry.bind_mouse(event, handle),
            None => warn!("unknown action [{}] for default [{}]", action, event),
        }
    }
    registry.trace_bindings();
}
