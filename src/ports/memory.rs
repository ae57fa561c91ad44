//! Memory port - allocator and stack accounting

use crate::domain::{HeapUsage, MemoryInfo, StackUsage};

/// Port for memory diagnostics
pub trait MemoryPort {
    /// Current heap allocator usage
    fn heap(&self) -> HeapUsage;

    /// Current main stack usage
    fn stack(&self) -> StackUsage;

    /// Return deferred frees to the allocator before a measurement
    ///
    /// Allocators that free eagerly have nothing to do.
    fn reclaim(&mut self) {}

    /// Stack and heap together
    fn info(&self) -> MemoryInfo {
        MemoryInfo {
            stack: self.stack(),
            heap: self.heap(),
        }
    }
}
