//! # Bounded Cache
//!
//! A fixed-capacity key/value store that evicts in insertion order (FIFO).
//!
//! Reads never touch the eviction queue, and overwriting a resident key keeps
//! its original position. Callers can therefore predict exactly which entry
//! goes next: the one inserted longest ago.
//!
//! ```rust
//! use lending_core::cache::BoundedCache;
//!
//! let mut cache = BoundedCache::new(2).unwrap();
//! cache.put("a", 1);
//! cache.put("b", 2);
//! assert_eq!(cache.get(&"a"), Some(&1)); // no reordering
//! cache.put("c", 3);                     // evicts "a"
//! assert!(!cache.contains(&"a"));
//! ```

use crate::error::CacheConfigError;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// Fixed-capacity cache with insertion-order eviction.
///
/// Not synchronised. Concurrent users must serialise access themselves.
#[derive(Debug, Clone)]
pub struct BoundedCache<K, V> {
    capacity: usize,
    entries: HashMap<K, V>,
    // Oldest insertion at the front.
    order: VecDeque<K>,
}

impl<K: Eq + Hash + Clone, V> BoundedCache<K, V> {
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// [`CacheConfigError::ZeroCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, CacheConfigError> {
        if capacity == 0 {
            return Err(CacheConfigError::ZeroCapacity);
        }
        Ok(Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
        })
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Stores `value` under `key`.
    ///
    /// A resident key is overwritten in place. A new key arriving at a full
    /// cache first evicts the oldest-inserted entry, whose key is returned.
    pub fn put(&mut self, key: K, value: V) -> Option<K> {
        if let Some(slot) = self.entries.get_mut(&key) {
            *slot = value;
            return None;
        }

        let evicted = if self.entries.len() >= self.capacity {
            self.order.pop_front().inspect(|oldest| {
                self.entries.remove(oldest);
            })
        } else {
            None
        };

        self.order.push_back(key.clone());
        self.entries.insert(key, value);
        evicted
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
