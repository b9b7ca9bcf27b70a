// SPDX-License-Identifier: MPL-2.0
//! Bounded event storage.
//!
//! Once full, the oldest entry makes room for the newest. The number of
//! entries lost this way is kept so reports can say how much history is
//! missing.

use std::collections::VecDeque;

pub use crate::domain::BufferCapacity;

/// Fixed-capacity FIFO that evicts its oldest entry on overflow.
///
/// ```
/// use toast_banner::diagnostics::{BufferCapacity, CircularBuffer};
///
/// let mut buffer = CircularBuffer::new(BufferCapacity::new(50));
/// for i in 0..60 {
///     buffer.push(i);
/// }
/// assert_eq!(buffer.len(), 50);
/// assert_eq!(buffer.evicted(), 10);
/// assert_eq!(buffer.latest(), Some(&59));
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    entries: VecDeque<T>,
    capacity: usize,
    evicted: u64,
}

impl<T> CircularBuffer<T> {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    /// Bypasses [`BufferCapacity`] bounds; a zero capacity still keeps one entry.
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            evicted: 0,
        }
    }

    /// Appends `entry` and returns the entry it displaced, if any.
    pub fn push(&mut self, entry: T) -> Option<T> {
        let displaced = if self.entries.len() == self.capacity {
            self.evicted += 1;
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(entry);
        displaced
    }

    /// Oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.entries.iter()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&T> {
        self.entries.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries dropped on overflow since creation or the last [`clear`](Self::clear).
    #[must_use]
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.evicted = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::{
        DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY, MAX_DIAGNOSTICS_BUFFER_CAPACITY,
        MIN_DIAGNOSTICS_BUFFER_CAPACITY,
    };
    use crate::domain::buffer_capacity_bounds;

    #[test]
    fn domain_bounds_match_config() {
        assert_eq!(buffer_capacity_bounds::MIN, MIN_DIAGNOSTICS_BUFFER_CAPACITY);
        assert_eq!(buffer_capacity_bounds::MAX, MAX_DIAGNOSTICS_BUFFER_CAPACITY);
        assert_eq!(
            buffer_capacity_bounds::DEFAULT,
            DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY
        );
    }

    #[test]
    fn overflow_returns_and_counts_displaced_entries() {
        let mut buffer = CircularBuffer::with_raw_capacity(3);

        assert_eq!(buffer.push(1), None);
        buffer.push(2);
        buffer.push(3);
        assert_eq!(buffer.push(4), Some(1));
        assert_eq!(buffer.push(5), Some(2));

        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
        assert_eq!(buffer.iter().rev().next(), Some(&5));
        assert_eq!(buffer.evicted(), 2);
    }

    #[test]
    fn zero_capacity_keeps_latest_entry() {
        let mut buffer = CircularBuffer::with_raw_capacity(0);
        buffer.push("a");
        buffer.push("b");
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.latest(), Some(&"b"));
    }

    #[test]
    fn clear_resets_eviction_count() {
        let mut buffer = CircularBuffer::new(BufferCapacity::new(50));
        for i in 0..55 {
            buffer.push(i);
        }
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.evicted(), 0);
        assert_eq!(buffer.capacity(), 50);
    }
}
