// SPDX-License-Identifier: MPL-2.0
//! Bounded ring buffer for lifecycle events.

use std::collections::vec_deque::{self, VecDeque};

pub use crate::domain::diagnostics::BufferCapacity;

/// Fixed-capacity FIFO; a push into a full buffer drops the oldest entry.
///
/// ```
/// use flipbook::diagnostics::{BufferCapacity, CircularBuffer};
///
/// let mut log = CircularBuffer::new(BufferCapacity::new(16));
/// for page_count in 0..20 {
///     log.push(page_count);
/// }
/// assert_eq!(log.len(), 16);
/// assert_eq!(log.iter().next(), Some(&4));
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    entries: VecDeque<T>,
    limit: usize,
}

impl<T> CircularBuffer<T> {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::with_limit(capacity.value())
    }

    fn with_limit(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Appends `entry`, returning the evicted one when the buffer was full.
    pub fn push(&mut self, entry: T) -> Option<T> {
        let evicted = (self.entries.len() == self.limit)
            .then(|| self.entries.pop_front())
            .flatten();
        self.entries.push_back(entry);
        evicted
    }

    /// Entries oldest first.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.entries.iter()
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
        self.limit
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_buffer_returns_evicted_entry() {
        let mut buffer = CircularBuffer::with_limit(3);
        assert_eq!(buffer.push(1), None);
        assert_eq!(buffer.push(2), None);
        assert_eq!(buffer.push(3), None);
        assert_eq!(buffer.push(4), Some(1));

        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn zero_limit_keeps_one_slot() {
        let mut buffer = CircularBuffer::with_limit(0);
        buffer.push("a");
        buffer.push("b");
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut buffer = CircularBuffer::new(BufferCapacity::new(32));
        buffer.push(1);
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 32);
    }
}
