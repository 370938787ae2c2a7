// src/counter.rs
//
// Per-page view counting. Request handlers on many threads bump counters for
// the pages they serve; increments are atomic fetch-adds so concurrent hits
// on the same page never lose a count.

use crate::core::types::PageId;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

/// Gate from the original request pipeline: only successful, non-preview GET
/// requests count as a view.
pub fn should_count(method: &str, status: u16, is_preview: bool) -> bool {
    method.eq_ignore_ascii_case("GET") && status == 200 && !is_preview
}

/// Shared view-count state for all content pages.
///
/// The map itself only grows when a page is seen for the first time; after
/// that every hit is a lock-free atomic increment under a read lock.
pub struct ViewCounter {
    counts: RwLock<HashMap<PageId, AtomicU64>>,
}

impl ViewCounter {
    pub fn new() -> Self {
        Self {
            counts: RwLock::new(HashMap::new()),
        }
    }

    /// Rebuilds a counter from a persisted snapshot.
    pub fn from_snapshot(snapshot: HashMap<PageId, u64>) -> Self {
        let counts = snapshot
            .into_iter()
            .map(|(page, count)| (page, AtomicU64::new(count)))
            .collect();
        Self {
            counts: RwLock::new(counts),
        }
    }

    /// Records one view of a page and returns the new total.
    pub fn record(&self, page: PageId) -> u64 {
        {
            let counts = self.counts.read().unwrap();
            if let Some(count) = counts.get(&page) {
                return count.fetch_add(1, Ordering::Relaxed) + 1;
            }
        }
        let mut counts = self.counts.write().unwrap();
        counts
            .entry(page)
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(1, Ordering::Relaxed)
            + 1
    }

    /// Current total for a page; zero for pages never seen.
    pub fn get(&self, page: PageId) -> u64 {
        let counts = self.counts.read().unwrap();
        counts
            .get(&page)
            .map(|count| count.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Plain-value copy of all counters, for persistence and export.
    pub fn snapshot(&self) -> HashMap<PageId, u64> {
        let counts = self.counts.read().unwrap();
        counts
            .iter()
            .map(|(&page, count)| (page, count.load(Ordering::Relaxed)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.counts.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ViewCounter {
    fn default() -> Self {
        Self::new()
    }
}
