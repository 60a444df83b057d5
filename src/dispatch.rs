//! Event dispatch against the binding tables
//!
//! Key dispatch compares events against bindings under one of two
//! process-wide policies. Physical codes are robust to runtime layout
//! switches (the same physical key always triggers the binding);
//! logical symbols honor what the user actually typed under the active
//! layout. The surrounding application picks the tradeoff once, at
//! startup, rather than per binding.

use crate::registry::Registry;
use crate::types::{KeyEvent, MouseEvent};

/// Which half of a [`KeyDescriptor`](crate::KeyDescriptor) key events
/// are compared against. Fixed at registry construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchingPolicy {
    /// Match on the physical key code (layout-independent)
    #[default]
    UseKeycode,
    /// Match on the lowercased logical symbol (layout-dependent)
    UseKeysym,
}

impl Registry {
    /// Dispatch a key event against the key-binding table.
    ///
    /// Bindings are scanned in insertion order; a binding matches when
    /// its modifier mask is a subset of the event's held modifiers and
    /// its key compares equal under the active policy. The first match
    /// wins, its callback fires, and dispatch reports the event as
    /// handled. Callers that depend on precedence should bind the more
    /// specific modifier combinations first.
    pub fn dispatch_key_event(&mut self, event: &KeyEvent) -> bool {
        match self.policy() {
            MatchingPolicy::UseKeycode => self.key_press_use_keycode(event),
            MatchingPolicy::UseKeysym => self.key_press_use_keysym(event),
        }
    }

    fn key_press_use_keycode(&mut self, event: &KeyEvent) -> bool {
        for kb in &self.key_bindings {
            if event.state.contains(kb.mask) && event.keycode == kb.descriptor.keycode {
                self.runtime.invoke(kb.callback);
                return true;
            }
        }
        false
    }

    fn key_press_use_keysym(&mut self, event: &KeyEvent) -> bool {
        for kb in &self.key_bindings {
            if event.state.contains(kb.mask) && event.keysym.to_lowercase() == kb.descriptor.keysym
            {
                self.runtime.invoke(kb.callback);
                return true;
            }
        }
        false
    }

    /// Dispatch a mouse event against the mouse-binding table.
    ///
    /// Every binding whose event type intersects the event fires; there
    /// is no early stop. Always returns `false`: mouse events are never
    /// reported as consumed. The asymmetry with key dispatch is
    /// intentional.
    pub fn dispatch_mouse_event(&mut self, event: &MouseEvent) -> bool {
        for mb in &self.mouse_bindings {
            if event.kind.intersects(mb.event_type) {
                self.runtime.invoke(mb.callback);
            }
        }
        false
    }
}
