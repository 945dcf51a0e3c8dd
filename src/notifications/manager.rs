// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `ToastManager` owns the bounded queue, applies updates and
//! dismissals, and broadcasts the full queue to subscribers on every
//! change. Purging of dismissed toasts is tick-driven: the host event loop
//! calls [`ToastManager::tick`] periodically and toasts whose removal
//! deadline has elapsed are dropped then.

use super::toast::{Toast, ToastContent, ToastId, ToastPatch};
use crate::config::defaults::{DEFAULT_TOAST_LIMIT, DEFAULT_TOAST_REMOVE_DELAY_SECS};
use crate::config::Config;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

type Callback = Box<dyn FnMut(&[Toast])>;

struct State {
    toasts: Vec<Toast>,
    limit: usize,
    remove_delay: Duration,
}

struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Callback)>,
}

struct Shared {
    state: RefCell<State>,
    listeners: RefCell<Listeners>,
}

/// Handle to the shared toast queue.
///
/// Cloning is cheap and every clone drives the same queue; construct one
/// manager per process and hand clones to whatever needs to raise toasts.
/// All operations run synchronously on the calling thread.
pub struct ToastManager {
    shared: Rc<Shared>,
}

impl Clone for ToastManager {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl fmt::Debug for ToastManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state.borrow();
        f.debug_struct("ToastManager")
            .field("toasts", &state.toasts)
            .field("limit", &state.limit)
            .finish()
    }
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastManager {
    /// Creates a manager with the default queue bound and removal delay.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(
            DEFAULT_TOAST_LIMIT,
            Duration::from_secs(DEFAULT_TOAST_REMOVE_DELAY_SECS),
        )
    }

    /// Creates a manager with an explicit queue bound and removal delay.
    #[must_use]
    pub fn with_limits(limit: usize, remove_delay: Duration) -> Self {
        Self {
            shared: Rc::new(Shared {
                state: RefCell::new(State {
                    toasts: Vec::new(),
                    limit,
                    remove_delay,
                }),
                listeners: RefCell::new(Listeners {
                    next_id: 0,
                    entries: Vec::new(),
                }),
            }),
        }
    }

    /// Creates a manager from configuration values.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::with_limits(
            config.toast_limit(),
            Duration::from_secs(config.toast_remove_delay_secs()),
        )
    }

    /// Enqueues a new toast at the front of the queue.
    ///
    /// The queue is truncated to its bound afterwards, evicting the oldest
    /// entries, and the new state is broadcast. The returned handle drives
    /// exactly this toast.
    pub fn notify(&self, content: ToastContent) -> ToastHandle {
        let id = {
            let mut state = self.shared.state.borrow_mut();
            let toast = Toast::new(content);
            let id = toast.id();
            let limit = state.limit;
            state.toasts.insert(0, toast);
            state.toasts.truncate(limit);
            id
        };
        self.broadcast();
        ToastHandle {
            id,
            shared: Rc::downgrade(&self.shared),
        }
    }

    /// Merges a patch into the toast with the given id.
    ///
    /// An unknown id merges nothing; the queue is broadcast either way.
    pub fn update(&self, id: ToastId, patch: ToastPatch) {
        {
            let mut state = self.shared.state.borrow_mut();
            if let Some(toast) = state.toasts.iter_mut().find(|t| t.id() == id) {
                toast.apply(patch);
            }
        }
        self.broadcast();
    }

    /// Dismisses one toast, or all of them when `id` is `None`.
    ///
    /// Dismissal is immediate only in the `open` flag: the toast stays in
    /// the queue with its own removal deadline armed, and [`tick`] purges
    /// it once the delay has elapsed. Unknown ids dismiss nothing.
    ///
    /// [`tick`]: ToastManager::tick
    pub fn dismiss(&self, id: Option<ToastId>) {
        {
            let mut state = self.shared.state.borrow_mut();
            let deadline = Instant::now() + state.remove_delay;
            for toast in &mut state.toasts {
                if id.is_none_or(|wanted| wanted == toast.id()) {
                    toast.close(deadline);
                }
            }
        }
        self.broadcast();
    }

    /// Purges one toast, or the whole queue when `id` is `None`.
    ///
    /// Removal is immediate and ignores any pending removal deadline.
    pub fn remove(&self, id: Option<ToastId>) {
        {
            let mut state = self.shared.state.borrow_mut();
            match id {
                Some(wanted) => state.toasts.retain(|t| t.id() != wanted),
                None => state.toasts.clear(),
            }
        }
        self.broadcast();
    }

    /// Purges dismissed toasts whose removal deadline has elapsed.
    ///
    /// Should be called periodically (e.g., every 100-500ms) by the host
    /// event loop. Broadcasts only when something was actually purged.
    pub fn tick(&self) {
        let purged = {
            let mut state = self.shared.state.borrow_mut();
            let now = Instant::now();
            let before = state.toasts.len();
            state.toasts.retain(|t| !t.purge_due(now));
            state.toasts.len() != before
        };
        if purged {
            self.broadcast();
        }
    }

    /// Registers an observer called synchronously on every queue change.
    ///
    /// Observers receive the full queue, newest first, in registration
    /// order. The same callback may be registered multiple times; each
    /// registration is independent. The registration lasts until the
    /// returned [`Subscription`] is dropped.
    ///
    /// Observers receive a snapshot and must treat it as read-only; calling
    /// back into the manager from inside a broadcast is not supported.
    pub fn subscribe(&self, callback: impl FnMut(&[Toast]) + 'static) -> Subscription {
        let mut listeners = self.shared.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Box::new(callback)));
        Subscription {
            id,
            shared: Rc::downgrade(&self.shared),
        }
    }

    /// Returns a snapshot of the queue, newest first.
    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        self.shared.state.borrow().toasts.clone()
    }

    /// Returns the number of toasts currently retained (open or dismissed).
    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.state.borrow().toasts.len()
    }

    /// Returns whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shared.state.borrow().toasts.is_empty()
    }

    fn broadcast(&self) {
        // Snapshot first so the state borrow is released before callbacks run.
        let snapshot = self.shared.state.borrow().toasts.clone();
        let mut listeners = self.shared.listeners.borrow_mut();
        for (_, callback) in &mut listeners.entries {
            callback(&snapshot);
        }
    }
}

/// Handle to a single toast, returned by [`ToastManager::notify`].
///
/// Operations are no-ops once the toast has been purged or the manager has
/// been dropped.
#[derive(Debug, Clone)]
pub struct ToastHandle {
    id: ToastId,
    shared: Weak<Shared>,
}

impl ToastHandle {
    /// Returns the id of the toast this handle drives.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Merges a patch into this toast.
    pub fn update(&self, patch: ToastPatch) {
        if let Some(shared) = self.shared.upgrade() {
            ToastManager { shared }.update(self.id, patch);
        }
    }

    /// Dismisses this toast.
    pub fn dismiss(&self) {
        if let Some(shared) = self.shared.upgrade() {
            ToastManager { shared }.dismiss(Some(self.id));
        }
    }
}

/// Scoped observer registration.
///
/// Dropping the subscription removes exactly the registration it was
/// created for; other registrations (including other registrations of the
/// same callback) keep receiving broadcasts.
pub struct Subscription {
    id: u64,
    shared: Weak<Shared>,
}

impl Subscription {
    /// Removes the registration now instead of at end of scope.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            shared
                .listeners
                .borrow_mut()
                .entries
                .retain(|(id, _)| *id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
