//! The single in-memory cache of server-held entities.
//!
//! One [`CacheStore`] per client process. All mutation flows through
//! [`CacheStore::dispatch`]: an [`Intent`] is reduced into a fresh
//! [`Snapshot`] by the pure [`reduce`] function, the new snapshot replaces
//! the old one atomically, and subscribers are notified synchronously before
//! `dispatch` returns. No I/O happens anywhere in this module; coordinators
//! own the network.

mod intent;
mod reduce;
mod snapshot;

pub use intent::Intent;
pub use reduce::reduce;
pub use snapshot::Snapshot;

use std::sync::{Arc, Mutex, PoisonError};

/// Identifies a subscription for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Subscriber = Box<dyn Fn(&Snapshot) + Send>;

/// The process-wide cache container.
///
/// Cheap to clone; clones share the same underlying state. Each `dispatch`
/// is atomic with respect to the snapshot it produces: two dispatches never
/// interleave mid-reduction.
#[derive(Clone)]
pub struct CacheStore {
    inner: Arc<CacheStoreInner>,
}

struct CacheStoreInner {
    snapshot: Mutex<Snapshot>,
    subscribers: Mutex<Vec<(SubscriberId, Subscriber)>>,
    next_subscriber: Mutex<u64>,
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheStore {
    /// Create a cache with every slice empty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(CacheStoreInner {
                snapshot: Mutex::new(Snapshot::default()),
                subscribers: Mutex::new(Vec::new()),
                next_subscriber: Mutex::new(0),
            }),
        }
    }

    /// Apply one intent and return the resulting snapshot.
    ///
    /// Subscribers are notified synchronously, after the new snapshot is
    /// installed and the snapshot lock is released.
    pub fn dispatch(&self, intent: Intent) -> Snapshot {
        tracing::debug!(?intent, "dispatch");
        let next = {
            let mut current = lock(&self.inner.snapshot);
            let next = reduce(std::mem::take(&mut *current), intent);
            *current = next.clone();
            next
        };
        for (_, subscriber) in lock(&self.inner.subscribers).iter() {
            subscriber(&next);
        }
        next
    }

    /// A clone of the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        lock(&self.inner.snapshot).clone()
    }

    /// Register a callback invoked after every dispatch.
    pub fn subscribe(&self, subscriber: impl Fn(&Snapshot) + Send + 'static) -> SubscriberId {
        let id = {
            let mut next = lock(&self.inner.next_subscriber);
            *next += 1;
            SubscriberId(*next)
        };
        lock(&self.inner.subscribers).push((id, Box::new(subscriber)));
        id
    }

    /// Remove a previously registered subscriber. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriberId) {
        lock(&self.inner.subscribers).retain(|(existing, _)| *existing != id);
    }
}

impl std::fmt::Debug for CacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheStore")
            .field("snapshot", &*lock(&self.inner.snapshot))
            .finish_non_exhaustive()
    }
}

/// Lock a mutex, recovering the data if a panicking subscriber poisoned it.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use shopfront_core::{Email, UserId};

    use super::*;
    use crate::models::SessionUser;

    fn session_user() -> SessionUser {
        SessionUser {
            id: UserId::new(1),
            email: Email::parse("demo@example.com").unwrap(),
        }
    }

    #[test]
    fn test_dispatch_returns_and_installs_snapshot() {
        let cache = CacheStore::new();
        let returned = cache.dispatch(Intent::SetSession(session_user()));
        assert!(returned.is_authenticated());
        assert_eq!(cache.snapshot(), returned);
    }

    #[test]
    fn test_clones_share_state() {
        let cache = CacheStore::new();
        let clone = cache.clone();
        cache.dispatch(Intent::SetSession(session_user()));
        assert!(clone.snapshot().is_authenticated());
    }

    #[test]
    fn test_subscribers_notified_synchronously() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        let cache = CacheStore::new();
        cache.subscribe(|snapshot| {
            assert!(snapshot.is_authenticated());
            CALLS.fetch_add(1, Ordering::SeqCst);
        });
        cache.dispatch(Intent::SetSession(session_user()));
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        let cache = CacheStore::new();
        let id = cache.subscribe(|_| {
            CALLS.fetch_add(1, Ordering::SeqCst);
        });
        cache.dispatch(Intent::SetSession(session_user()));
        cache.unsubscribe(id);
        cache.dispatch(Intent::ClearSession);
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
    }
}
