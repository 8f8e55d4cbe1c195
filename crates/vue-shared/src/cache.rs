//! Memoizing cache for pure string transforms.
//!
//! A [`Cache`] is safe to share across threads. Readers take a shared lock;
//! a miss takes the exclusive lock and re-checks before computing, so each
//! distinct key is computed at most once.

use rustc_hash::FxHashMap;
use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::{PoisonError, RwLock};

/// A process-wide memo table keyed by input.
#[derive(Debug)]
pub struct Cache<K, V> {
    entries: RwLock<FxHashMap<K, V>>,
}

impl<K, V> Default for Cache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Cache<K, V> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(FxHashMap::default()),
        }
    }
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    /// Return the cached value for `key`, computing and storing it on a miss.
    ///
    /// `compute` runs while the write lock is held, so concurrent callers
    /// asking for the same key wait for the first computation instead of
    /// repeating it.
    pub fn compute_or_fetch<Q, F>(&self, key: &Q, compute: F) -> V
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ToOwned<Owned = K> + ?Sized,
        F: FnOnce(&Q) -> V,
    {
        {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(hit) = entries.get(key) {
                return hit.clone();
            }
        }

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(hit) = entries.get(key) {
            return hit.clone();
        }
        let value = compute(key);
        entries.insert(key.to_owned(), value.clone());
        value
    }

    /// Number of memoized entries.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if nothing has been memoized yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if `key` has already been computed.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_computes_once_per_key() {
        let cache: Cache<String, usize> = Cache::new();
        let calls = AtomicUsize::new(0);

        let first = cache.compute_or_fetch("abc", |s| {
            calls.fetch_add(1, Ordering::SeqCst);
            s.len()
        });
        let second = cache.compute_or_fetch("abc", |s| {
            calls.fetch_add(1, Ordering::SeqCst);
            s.len() * 100
        });

        assert_eq!(first, 3);
        assert_eq!(second, 3);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(cache.contains("abc"));
    }

    #[test]
    fn test_distinct_keys() {
        let cache: Cache<String, String> = Cache::new();
        cache.compute_or_fetch("a", |s| s.to_uppercase());
        cache.compute_or_fetch("b", |s| s.to_uppercase());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_concurrent_callers_share_one_computation() {
        let cache: Arc<Cache<String, usize>> = Arc::new(Cache::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let calls = Arc::clone(&calls);
                std::thread::spawn(move || {
                    cache.compute_or_fetch("shared", |s| {
                        calls.fetch_add(1, Ordering::SeqCst);
                        s.len()
                    })
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 6);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
