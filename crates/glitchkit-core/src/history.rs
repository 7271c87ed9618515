//! Bounded undo history of raster snapshots.
//!
//! Snapshots are owned copies, so nothing a later transform does can reach
//! back into a recorded entry. When the stack is full the oldest entry is
//! evicted.

use std::collections::VecDeque;

use tracing::debug;

use crate::config::DEFAULT_HISTORY_CAPACITY;
use crate::raster::Raster;

/// LIFO stack of snapshots with FIFO eviction at capacity.
#[derive(Debug, Clone)]
pub struct HistoryStack {
    snapshots: VecDeque<Raster>,
    capacity: usize,
}

impl HistoryStack {
    /// Create an empty stack holding at most `capacity` snapshots.
    pub fn new(capacity: usize) -> Self {
        Self {
            snapshots: VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY)),
            capacity,
        }
    }

    /// Record a deep copy of `raster` as the newest snapshot.
    pub fn push(&mut self, raster: &Raster) {
        self.snapshots.push_back(raster.clone());

        while self.snapshots.len() > self.capacity {
            self.snapshots.pop_front();
        }

        debug!(depth = self.snapshots.len(), "History snapshot pushed");
    }

    /// Remove and return the newest snapshot.
    pub fn pop(&mut self) -> Option<Raster> {
        let snapshot = self.snapshots.pop_back()?;
        debug!(remaining = self.snapshots.len(), "History snapshot popped");
        Some(snapshot)
    }

    /// Drop every snapshot.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
