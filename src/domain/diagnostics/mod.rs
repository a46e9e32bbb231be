// SPDX-License-Identifier: MPL-2.0
//! Diagnostics domain types.

/// Bounds for the number of diagnostic events kept in memory.
pub mod buffer_capacity_bounds {
    /// Smallest buffer that still shows a useful history.
    pub const MIN: usize = 50;
    /// Upper bound keeping the report small enough to attach to a bug.
    pub const MAX: usize = 5000;
    /// Default capacity.
    pub const DEFAULT: usize = 500;
}

/// Number of diagnostic events retained, always within
/// [`buffer_capacity_bounds::MIN`]..=[`buffer_capacity_bounds::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(buffer_capacity_bounds::MIN, buffer_capacity_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(buffer_capacity_bounds::DEFAULT)
    }
}
