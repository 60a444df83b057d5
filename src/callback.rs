//! Scripting/callback collaborator boundary
//!
//! Callbacks are owned by an external scripting runtime. The registry
//! only stores opaque handles and manages their lifetime: release
//! before replace on re-bind, release on unbind and on teardown. It
//! never interprets a handle's contents.

/// Opaque reference to a procedure owned by the scripting runtime
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CallbackHandle(u64);

impl CallbackHandle {
    /// Wrap a raw runtime reference. Only meaningful to the runtime
    /// that produced the value.
    pub const fn from_raw(raw: u64) -> Self {
        CallbackHandle(raw)
    }

    /// Unwrap back to the raw runtime reference
    pub const fn into_raw(self) -> u64 {
        self.0
    }
}

/// The scripting runtime that owns and invokes callbacks
pub trait CallbackRuntime {
    /// Turn a named procedure into a handle. Returns `None` when the
    /// runtime has no procedure under that name.
    fn register(&mut self, name: &str) -> Option<CallbackHandle>;

    /// Invoke the procedure behind a handle
    fn invoke(&mut self, handle: CallbackHandle);

    /// Release a handle the registry no longer stores
    fn release(&mut self, handle: CallbackHandle);
}
