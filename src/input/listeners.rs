//! Explicit listener registration.
//!
//! Every attach hands back a [`ListenerId`]; detaching with that id is the
//! only way to remove it. Hosts and the [`InputProcessor`] keep the ids
//! they were given, so a teardown can never miss a listener that was
//! registered under a different closure or callback identity.
//!
//! [`InputProcessor`]: super::InputProcessor

use rustc_hash::FxHashMap;

/// Category of host event a listener subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Button press on the viewport.
    PointerDown,
    /// Cursor or raw pointer motion.
    PointerMove,
    /// Button release or the cursor leaving the viewport.
    PointerUp,
    /// Scroll wheel.
    Wheel,
    /// Key press (and modifier changes).
    KeyDown,
    /// Key release.
    KeyUp,
    /// Touch start, move, and end.
    Touch,
    /// Pointer lock acquired or lost.
    PointerLock,
    /// Viewport resize.
    Resize,
}

/// Handle returned by [`ListenerRegistry::attach`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Set of live listener subscriptions.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    next_id: u64,
    listeners: FxHashMap<ListenerId, EventKind>,
}

impl ListenerRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to `kind`, returning the handle needed to unsubscribe.
    pub fn attach(&mut self, kind: EventKind) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        let _ = self.listeners.insert(id, kind);
        id
    }

    /// Remove a subscription. Returns `false` if `id` was already gone.
    pub fn detach(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    /// Detach every id in `ids`, leaving it empty.
    pub fn detach_all(&mut self, ids: &mut Vec<ListenerId>) {
        for id in ids.drain(..) {
            let _ = self.detach(id);
        }
    }

    /// Whether at least one listener for `kind` is attached.
    #[must_use]
    pub fn is_listening(&self, kind: EventKind) -> bool {
        self.listeners.values().any(|k| *k == kind)
    }

    /// Number of attached listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listeners are attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
