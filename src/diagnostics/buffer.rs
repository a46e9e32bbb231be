// SPDX-License-Identifier: MPL-2.0
//! Circular buffer for diagnostic event storage.
//!
//! When full, pushing evicts the oldest entry.

use std::collections::VecDeque;

pub use crate::domain::diagnostics::BufferCapacity;

/// A generic circular buffer with fixed capacity, oldest element first.
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    /// Creates a buffer with an unchecked capacity (at least 1).
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes an element, evicting the oldest if at capacity.
    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
