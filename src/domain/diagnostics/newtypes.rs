// SPDX-License-Identifier: MPL-2.0
//! Diagnostics newtypes.

// =============================================================================
// Buffer Capacity Bounds
// =============================================================================

/// How many lifecycle events the log may hold.
pub mod buffer_capacity_bounds {
    pub const MIN: usize = 16;
    pub const MAX: usize = 4096;
    pub const DEFAULT: usize = 256;
}

// =============================================================================
// BufferCapacity
// =============================================================================

/// Number of lifecycle events kept in memory before the oldest are evicted.
///
/// Values outside 16–4096 are clamped.
///
/// ```
/// use flipbook::domain::diagnostics::BufferCapacity;
///
/// assert_eq!(BufferCapacity::new(50_000).value(), 4096);
/// assert_eq!(BufferCapacity::new(64).value(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Clamps `events` into the supported range.
    #[must_use]
    pub fn new(events: usize) -> Self {
        use buffer_capacity_bounds::{MAX, MIN};
        Self(events.clamp(MIN, MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self::new(buffer_capacity_bounds::DEFAULT)
    }
}
