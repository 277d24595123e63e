//! Bounded rolling history with strictly increasing timestamps.

use std::collections::VecDeque;

use serde::Serialize;
use trafficmix_core::models::HistoryEntry;

/// Append-only history that evicts its oldest entries once full.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryBuffer {
    entries: VecDeque<HistoryEntry>,
    /// Maximum entries to retain (sliding window).
    capacity: usize,
}

impl HistoryBuffer {
    /// Create an empty buffer. Capacity is at least one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }

    /// Append `entry` unless its timestamp is not strictly after the newest
    /// entry. Returns whether it was appended.
    pub fn push(&mut self, entry: HistoryEntry) -> bool {
        if self
            .entries
            .back()
            .is_some_and(|last| entry.timestamp <= last.timestamp)
        {
            return false;
        }
        self.entries.push_back(entry);
        self.evict();
        true
    }

    /// Change the bound, evicting the oldest entries when shrinking.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        self.evict();
    }

    /// Replace every entry. Out-of-order entries are dropped and only the
    /// newest `capacity` are kept. Returns the number of entries dropped.
    pub fn replace(&mut self, entries: Vec<HistoryEntry>) -> usize {
        let offered = entries.len();
        self.entries.clear();
        for entry in entries {
            self.push(entry);
        }
        offered - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn evict(&mut self) {
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }
}
