//! Fixed-capacity sliding window.
//!
//! Bounded buffers are the only backpressure mechanism in the engine:
//! once a window is full, pushing evicts the oldest entry.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Ordered buffer that evicts the oldest element on overflow.
///
/// Elements are kept in arrival order, most recent last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlidingWindow<T> {
    buf: VecDeque<T>,
    capacity: usize,
}

impl<T> SlidingWindow<T> {
    /// Create a window with the given capacity (clamped to at least 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buf: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a new element, returning the evicted one when full.
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.buf.len() == self.capacity {
            self.buf.pop_front()
        } else {
            None
        };
        self.buf.push_back(item);
        evicted
    }

    /// Number of retained elements.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.buf.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate in arrival order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    /// Most recently pushed element.
    pub fn latest(&self) -> Option<&T> {
        self.buf.back()
    }

    /// Drop all retained elements, keeping the capacity.
    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

impl<T: Clone> SlidingWindow<T> {
    /// Snapshot of the contents in arrival order.
    pub fn to_vec(&self) -> Vec<T> {
        self.buf.iter().cloned().collect()
    }
}
