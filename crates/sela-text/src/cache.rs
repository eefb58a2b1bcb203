use std::collections::VecDeque;

use hashbrown::HashMap;

use crate::WideText;

/// Snapshot of cache occupancy and caller-recorded lookup counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub size: usize,
    pub hits: usize,
    pub misses: usize,
}

/// Bounded, insertion-ordered map from input text to processed text.
///
/// When a new key arrives at capacity the oldest quarter of the entries
/// (at least one) is dropped in one batch. `max_entries == 0` means
/// unbounded.
///
/// Lookups do not touch the counters; the owner decides which lookups
/// count and calls [`record_hit`](Self::record_hit) /
/// [`record_miss`](Self::record_miss).
#[derive(Debug, Default)]
pub struct ResultCache {
    entries: HashMap<WideText, WideText>,
    /// Keys in insertion order, oldest at the front.
    order: VecDeque<WideText>,
    max_entries: usize,
    hits: usize,
    misses: usize,
}

impl ResultCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            max_entries,
            ..Self::default()
        }
    }

    pub fn get(&self, key: &WideText) -> Option<WideText> {
        self.entries.get(key).cloned()
    }

    pub fn put(&mut self, key: WideText, value: WideText) {
        if let Some(slot) = self.entries.get_mut(&key) {
            *slot = value;
            return;
        }
        if self.max_entries > 0 && self.entries.len() >= self.max_entries {
            self.evict_oldest_quarter();
        }
        self.order.push_back(key.clone());
        self.entries.insert(key, value);
    }

    /// Drop all entries and reset the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.hits = 0;
        self.misses = 0;
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Change the bound. Shrinking below the current size drops the
    /// oldest entries straight away.
    pub fn set_max_entries(&mut self, max_entries: usize) {
        self.max_entries = max_entries;
        if max_entries == 0 {
            return;
        }
        while self.entries.len() > max_entries {
            self.pop_oldest();
        }
    }

    fn evict_oldest_quarter(&mut self) {
        let count = (self.entries.len() / 4).max(1);
        for _ in 0..count {
            if !self.pop_oldest() {
                break;
            }
        }
        log::trace!("evicted {count} cache entries, {} left", self.entries.len());
    }

    fn pop_oldest(&mut self) -> bool {
        match self.order.pop_front() {
            Some(key) => {
                self.entries.remove(&key);
                true
            }
            None => false,
        }
    }
}
