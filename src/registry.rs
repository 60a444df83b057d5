//! Binding stores and their mutation surface
//!
//! The [`Registry`] is the single owned context object of the crate: it
//! holds the key and mouse binding tables, the process-wide matching
//! policy, the lazily opened layout connection, and the scripting
//! runtime that owns the callbacks. Bind/unbind methods are the sole
//! mutation surface; dispatch lives in [`crate::dispatch`].

use tracing::{debug, trace, warn};

use crate::callback::{CallbackHandle, CallbackRuntime};
use crate::dispatch::MatchingPolicy;
use crate::layout::{LayoutConnection, LayoutError, LayoutSource};
use crate::parse::{parse_key_spec, parse_mouse_event};
use crate::types::{KeyDescriptor, ModifierMask, MouseEventType};

/// A key binding: spec string, resolved mask/descriptor, callback
#[derive(Debug)]
pub struct KeyBinding {
    /// Original specification string; unique key in the store
    pub name: String,
    pub mask: ModifierMask,
    pub descriptor: KeyDescriptor,
    pub callback: CallbackHandle,
}

/// A mouse binding, keyed by event type
#[derive(Debug)]
pub struct MouseBinding {
    pub event_type: MouseEventType,
    pub callback: CallbackHandle,
}

/// Owns the binding tables and coordinates the external collaborators.
///
/// Tables are flat `Vec`s scanned linearly; they hold a handful to a few
/// dozen entries and insertion order defines dispatch precedence, so no
/// index structure is warranted. Single-threaded by design: bind/unbind
/// and dispatch all run on the windowing event loop's thread.
pub struct Registry {
    policy: MatchingPolicy,
    pub(crate) key_bindings: Vec<KeyBinding>,
    pub(crate) mouse_bindings: Vec<MouseBinding>,
    layout: Box<dyn LayoutSource>,
    conn: Option<Box<dyn LayoutConnection>>,
    pub(crate) runtime: Box<dyn CallbackRuntime>,
}

impl Registry {
    /// Create an empty registry. The policy is fixed for the registry's
    /// lifetime; the layout connection is opened lazily on first bind.
    pub fn new(
        policy: MatchingPolicy,
        layout: Box<dyn LayoutSource>,
        runtime: Box<dyn CallbackRuntime>,
    ) -> Self {
        Self {
            policy,
            key_bindings: Vec::new(),
            mouse_bindings: Vec::new(),
            layout,
            conn: None,
            runtime,
        }
    }

    /// The process-wide matching policy
    pub fn policy(&self) -> MatchingPolicy {
        self.policy
    }

    /// All key bindings, in insertion (dispatch precedence) order
    pub fn key_bindings(&self) -> &[KeyBinding] {
        &self.key_bindings
    }

    /// All mouse bindings, in insertion order
    pub fn mouse_bindings(&self) -> &[MouseBinding] {
        &self.mouse_bindings
    }

    /// Turn a named procedure into a callback handle via the runtime
    pub fn register_callback(&mut self, name: &str) -> Option<CallbackHandle> {
        self.runtime.register(name)
    }

    /// Index of the key binding with the given spec string
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.key_bindings.iter().position(|kb| kb.name == name)
    }

    fn find_mouse(&self, event_type: MouseEventType) -> Option<usize> {
        self.mouse_bindings
            .iter()
            .position(|mb| mb.event_type == event_type)
    }

    fn connection(&mut self) -> Result<&dyn LayoutConnection, LayoutError> {
        if self.conn.is_none() {
            self.conn = Some(self.layout.open_connection()?);
        }
        Ok(self.conn.as_deref().expect("connection opened above"))
    }

    /// Bind a key specification to a callback.
    ///
    /// A failed parse is logged and leaves every store untouched; the
    /// incoming handle is released so it does not leak. Re-binding an
    /// existing name replaces its entry in place and releases the
    /// previous handle, preserving name uniqueness by construction.
    pub fn bind_key(&mut self, spec: &str, callback: CallbackHandle) {
        let parsed = match self.connection() {
            Ok(conn) => parse_key_spec(spec, conn),
            Err(e) => {
                warn!("cannot bind [{}]: {}", spec, e);
                self.runtime.release(callback);
                return;
            }
        };
        let (mask, descriptor) = match parsed {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("{}", e);
                self.runtime.release(callback);
                return;
            }
        };

        match self.find_by_name(spec) {
            None => {
                self.key_bindings.push(KeyBinding {
                    name: spec.to_string(),
                    mask,
                    descriptor,
                    callback,
                });
            }
            Some(idx) => {
                let kb = &mut self.key_bindings[idx];
                kb.mask = mask;
                kb.descriptor = descriptor;
                let old = std::mem::replace(&mut kb.callback, callback);
                self.runtime.release(old);
            }
        }
    }

    /// Remove the key binding with the given spec string.
    ///
    /// No-op when absent. The entry's callback handle is released.
    pub fn unbind_key(&mut self, name: &str) {
        let Some(idx) = self.find_by_name(name) else {
            debug!("keybinding [{}] not found - skipping", name);
            return;
        };
        let kb = self.key_bindings.remove(idx);
        self.runtime.release(kb.callback);
    }

    /// Bind a named mouse event to a callback.
    ///
    /// Unknown event names are logged and ignored. Insert-or-update by
    /// event type, releasing the prior handle on update.
    pub fn bind_mouse(&mut self, event_name: &str, callback: CallbackHandle) {
        let event_type = match parse_mouse_event(event_name) {
            Ok(t) => t,
            Err(e) => {
                warn!("{}", e);
                self.runtime.release(callback);
                return;
            }
        };
        match self.find_mouse(event_type) {
            None => {
                self.mouse_bindings.push(MouseBinding {
                    event_type,
                    callback,
                });
            }
            Some(idx) => {
                let old = self.mouse_bindings[idx].callback;
                self.runtime.release(old);
                self.mouse_bindings[idx].callback = callback;
            }
        }
    }

    /// Remove the binding for a named mouse event, if present
    pub fn unbind_mouse(&mut self, event_name: &str) {
        let event_type = match parse_mouse_event(event_name) {
            Ok(t) => t,
            Err(e) => {
                warn!("{}", e);
                return;
            }
        };
        let Some(idx) = self.find_mouse(event_type) else {
            debug!("mouse event [{}] not found - skipping", event_name);
            return;
        };
        let mb = self.mouse_bindings.remove(idx);
        self.runtime.release(mb.callback);
    }

    /// Dump the key binding table at trace level
    pub fn trace_bindings(&self) {
        trace!("key bindings: {}", self.key_bindings.len());
        for kb in &self.key_bindings {
            trace!(
                "{}: {}, {}({})",
                kb.name,
                kb.mask,
                kb.descriptor.keysym,
                kb.descriptor.keycode
            );
        }
    }
}

impl Drop for Registry {
    /// Teardown releases every stored handle back to the runtime
    fn drop(&mut self) {
        for kb in self.key_bindings.drain(..) {
            self.runtime.release(kb.callback);
        }
        for mb in self.mouse_bindings.drain(..) {
            self.runtime.release(mb.callback);
        }
    }
}
