// SPDX-License-Identifier: MPL-2.0
//! Bounded ring storage for diagnostic events.
//!
//! The buffer holds a fixed number of entries and silently evicts the
//! oldest ones once full, so long-running carousels never grow their
//! diagnostics memory.

use std::collections::VecDeque;

/// Validated capacity for the diagnostics buffer.
///
/// Values are clamped into `[MIN, MAX]` so a misconfigured embedder can
/// never allocate an unbounded buffer or a useless zero-length one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Smallest accepted capacity.
    pub const MIN: usize = 16;
    /// Largest accepted capacity.
    pub const MAX: usize = 10_000;
    /// Capacity used when none is configured.
    pub const DEFAULT: usize = 256;

    /// Creates a capacity, clamping out-of-range values.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// Returns the validated capacity value.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Fixed-capacity ring of entries, oldest first.
///
/// ```
/// use iced_carousel::diagnostics::{BufferCapacity, CircularBuffer};
///
/// let mut buffer: CircularBuffer<i32> = CircularBuffer::new(BufferCapacity::default());
/// buffer.push(1);
/// buffer.push(2);
///
/// assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    /// Creates an empty buffer holding at most `capacity` entries.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.value()),
            capacity: capacity.value(),
        }
    }

    /// Appends an entry, evicting the oldest one once full.
    pub fn push(&mut self, entry: T) {
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Visits stored entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    /// Number of entries currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Upper bound on stored entries.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every stored entry, keeping the capacity.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
