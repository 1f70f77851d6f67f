//! Per-account exclusion primitives
//!
//! Grants exclusive access to exactly two accounts at a time without risking
//! deadlock. Each account id maps to one `Mutex` for the process lifetime,
//! created lazily through an atomic get-or-create, and a pair is always
//! acquired in the same fixed order: the lexicographically greater id first,
//! then the lesser. Ordering depends on account identity alone, never on
//! which side is source or destination, so any two transfers sharing an
//! account contend in the same relative order and no cycle can form in the
//! wait-for graph.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use dashmap::DashMap;

use crate::core_types::AccountId;

/// Thread-safe registry of per-account exclusion primitives.
pub struct LockRegistry {
    locks: DashMap<AccountId, Arc<Mutex<()>>>,
}

impl LockRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            locks: DashMap::new(),
        }
    }

    /// Resolve the primitive for an id, creating it on first reference.
    ///
    /// The entry API makes the get-or-create atomic: concurrent callers for
    /// the same unseen id always receive the same `Arc`. The map's shard
    /// guard is dropped before this returns, so callers never block on a
    /// mutex while holding it.
    fn lock_for(&self, id: &AccountId) -> Arc<Mutex<()>> {
        let entry = self
            .locks
            .entry(id.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())));
        Arc::clone(&entry)
    }

    /// Run `body` with both accounts' primitives held.
    ///
    /// Acquisition order is greater id first, then lesser. Both guards are
    /// dropped when `body` returns - success, error and unwind alike.
    ///
    /// Same-account pairs must be rejected upstream; the registry is never
    /// asked to lock an id against itself.
    pub fn with_pair<R>(
        &self,
        a: &AccountId,
        b: &AccountId,
        body: impl FnOnce() -> R,
    ) -> R {
        debug_assert_ne!(a, b, "same-account transfers are rejected before locking");

        let (first, second) = if a > b { (a, b) } else { (b, a) };
        let first = self.lock_for(first);
        let second = self.lock_for(second);

        let _first = acquire(&first);
        let _second = acquire(&second);
        body()
    }

    /// Number of primitives created so far.
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

impl Default for LockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Blocking acquire that survives poisoning: a panicked holder has already
/// released exclusion, and later transfers on the account must not wedge.
fn acquire(lock: &Mutex<()>) -> MutexGuard<'_, ()> {
    lock.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Barrier;
    use std::thread;

    #[test]
    fn test_same_id_same_primitive() {
        let registry = LockRegistry::new();
        let a = registry.lock_for(&"Id-123".to_string());
        let b = registry.lock_for(&"Id-123".to_string());
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_lazy_creation() {
        let registry = LockRegistry::new();
        assert!(registry.is_empty());

        registry.with_pair(&"Id-1".to_string(), &"Id-2".to_string(), || {});
        assert_eq!(registry.len(), 2);

        // Re-locking the same pair creates nothing new
        registry.with_pair(&"Id-2".to_string(), &"Id-1".to_string(), || {});
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_concurrent_get_or_create_single_primitive() {
        let registry = Arc::new(LockRegistry::new());
        let barrier = Arc::new(Barrier::new(8));

        let mut handles = vec![];
        for _ in 0..8 {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            handles.push(thread::spawn(move || {
                barrier.wait();
                registry.lock_for(&"Id-HOT".to_string())
            }));
        }

        let primitives: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for primitive in &primitives[1..] {
            assert!(Arc::ptr_eq(&primitives[0], primitive));
        }
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_with_pair_returns_body_result() {
        let registry = LockRegistry::new();
        let result =
            registry.with_pair(&"Id-1".to_string(), &"Id-2".to_string(), || 40 + 2);
        assert_eq!(result, 42);
    }

    #[test]
    fn test_reciprocal_pairs_no_deadlock() {
        let registry = Arc::new(LockRegistry::new());
        let barrier = Arc::new(Barrier::new(2));

        let mut handles = vec![];
        for flip in [false, true] {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            handles.push(thread::spawn(move || {
                let (a, b) = if flip {
                    ("Id-123".to_string(), "Id-456".to_string())
                } else {
                    ("Id-456".to_string(), "Id-123".to_string())
                };
                barrier.wait();
                for _ in 0..1000 {
                    registry.with_pair(&a, &b, || {});
                }
            }));
        }

        // Completes only if no acquisition cycle is possible
        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn test_release_on_error_path() {
        let registry = LockRegistry::new();
        let a = "Id-1".to_string();
        let b = "Id-2".to_string();

        let result: Result<(), &str> = registry.with_pair(&a, &b, || Err("validation failed"));
        assert!(result.is_err());

        // Both primitives must be free again
        registry.with_pair(&a, &b, || {});
    }
}
