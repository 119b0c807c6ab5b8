//! In-memory snapshot cache.
//!
//! Keys are caller-chosen strings (typically one per boundary or per
//! rider/boundary pair).  An optional entry limit evicts the oldest
//! insertion first.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

/// Keyed cache of rendered snapshots (or anything derived from them).
pub struct SnapshotCache<V> {
    entries: FxHashMap<String, V>,
    order:   VecDeque<String>,
    limit:   Option<usize>,
}

impl<V> SnapshotCache<V> {
    /// Unbounded cache.
    pub fn new() -> Self {
        Self { entries: FxHashMap::default(), order: VecDeque::new(), limit: None }
    }

    /// Cache holding at most `limit` entries.  A limit of 0 stores nothing.
    pub fn with_limit(limit: usize) -> Self {
        Self { limit: Some(limit), ..Self::new() }
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        if self.limit == Some(0) {
            return;
        }
        if self.entries.insert(key.clone(), value).is_none() {
            self.order.push_back(key);
        }
        while let Some(limit) = self.limit {
            if self.entries.len() <= limit {
                break;
            }
            let Some(oldest) = self.order.pop_front() else { break };
            self.entries.remove(&oldest);
            log::debug!("evicted cached snapshot {oldest:?}");
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<V> {
        let value = self.entries.remove(key)?;
        self.order.retain(|k| k != key);
        Some(value)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for SnapshotCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
