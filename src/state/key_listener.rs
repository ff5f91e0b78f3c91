//! Application-wide key listener registry.
//!
//! Listeners are scoped resources: [`KeyListenerRegistry::subscribe`]
//! returns a [`Subscription`] guard and dropping the guard deregisters the
//! listener. Holding the guard inside the state that needs it ties the
//! registration one-to-one to that state, on every exit path.

use crossterm::event::KeyCode;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use tracing::debug;

/// Identifier of one registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Default)]
struct Registrations {
    next_id: u64,
    active: BTreeMap<ListenerId, KeyCode>,
}

/// Registry of active key listeners.
///
/// Single-threaded: clones share the same registrations through `Rc`.
#[derive(Debug, Clone, Default)]
pub struct KeyListenerRegistry {
    inner: Rc<RefCell<Registrations>>,
}

impl KeyListenerRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register interest in `key`. The registration lives as long as the
    /// returned guard.
    pub fn subscribe(&self, key: KeyCode) -> Subscription {
        let mut regs = self.inner.borrow_mut();
        let id = ListenerId(regs.next_id);
        regs.next_id += 1;
        regs.active.insert(id, key);
        debug!(?id, ?key, active = regs.active.len(), "Key listener subscribed");

        Subscription {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Number of live registrations.
    pub fn active_count(&self) -> usize {
        self.inner.borrow().active.len()
    }

    /// Whether any live registration listens for `key`.
    pub fn is_listening(&self, key: KeyCode) -> bool {
        self.inner.borrow().active.values().any(|&k| k == key)
    }
}

/// Guard for one registration. Deregisters on drop.
///
/// Not `Clone`: one guard, one registration.
#[derive(Debug)]
pub struct Subscription {
    id: ListenerId,
    registry: Weak<RefCell<Registrations>>,
}

impl Subscription {
    /// Id of the registration this guard holds.
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        // Registry may already be gone during teardown
        if let Some(inner) = self.registry.upgrade() {
            let mut regs = inner.borrow_mut();
            regs.active.remove(&self.id);
            debug!(id = ?self.id, active = regs.active.len(), "Key listener unsubscribed");
        }
    }
}
