//! Memory accounting readouts

use core::fmt;

/// Heap allocator usage
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HeapUsage {
    /// Bytes currently allocated
    pub used: usize,
    /// Bytes available for allocation
    pub free: usize,
}

impl HeapUsage {
    pub const fn new(used: usize, free: usize) -> Self {
        Self { used, free }
    }

    /// Size of the heap region (used + free)
    pub const fn total(&self) -> usize {
        self.used + self.free
    }
}

impl fmt::Display for HeapUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "heap: total: {}, used: {}, free: {}",
            self.total(),
            self.used,
            self.free
        )
    }
}

/// Main stack usage at the time of the readout
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StackUsage {
    /// Bytes between the top of the stack and the current stack pointer
    pub used: usize,
    /// Size of the stack region
    pub size: usize,
}

impl StackUsage {
    /// Derive usage from the stack region bounds and the current stack pointer
    ///
    /// The stack grows down from `top` towards `bottom`. A pointer outside the
    /// region is clamped.
    pub fn from_bounds(top: usize, bottom: usize, sp: usize) -> Self {
        let size = top.saturating_sub(bottom);
        let used = top.saturating_sub(sp).min(size);
        Self { used, size }
    }
}

impl fmt::Display for StackUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stack: {} out of {}", self.used, self.size)
    }
}

/// Memory manager diagnostics
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MemoryInfo {
    pub stack: StackUsage,
    pub heap: HeapUsage,
}
