use alloc::boxed::Box;
use core::fmt;

use crate::PointerKind;

/// Move/release listeners registered for one drag session.
///
/// Dropping the guard releases the listeners. [`crate::PointerTracker`] holds exactly one guard
/// while a session is active, so listeners are released on every exit path: the matching
/// release event, a replacing press, or the tracker itself being dropped mid-drag.
pub struct ListenerGuard {
    kind: PointerKind,
    release: Option<Box<dyn FnOnce(PointerKind) + Send>>,
}

impl ListenerGuard {
    /// A guard that calls `release` exactly once, when dropped.
    pub fn new(kind: PointerKind, release: impl FnOnce(PointerKind) + Send + 'static) -> Self {
        Self {
            kind,
            release: Some(Box::new(release)),
        }
    }

    /// A guard with nothing to release.
    pub fn detached(kind: PointerKind) -> Self {
        Self {
            kind,
            release: None,
        }
    }

    pub fn kind(&self) -> PointerKind {
        self.kind
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            dtrace!(kind = ?self.kind, "ListenerGuard: release");
            release(self.kind);
        }
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("kind", &self.kind)
            .field("attached", &self.release.is_some())
            .finish()
    }
}

/// The surface that delivers move/release events (a window, a canvas, a terminal, ...).
///
/// `acquire` registers listeners for one pointer kind and returns a guard that unregisters them.
pub trait ListenerHost {
    fn acquire(&mut self, kind: PointerKind) -> ListenerGuard;
}

impl<F: FnMut(PointerKind) -> ListenerGuard> ListenerHost for F {
    fn acquire(&mut self, kind: PointerKind) -> ListenerGuard {
        self(kind)
    }
}

/// A host that receives every event unconditionally, so there is nothing to register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DetachedHost;

impl ListenerHost for DetachedHost {
    fn acquire(&mut self, kind: PointerKind) -> ListenerGuard {
        ListenerGuard::detached(kind)
    }
}
