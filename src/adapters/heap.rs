//! Heap and stack accounting adapter
//!
//! Heap numbers come from the `embedded-alloc` global allocator; stack
//! bounds come from the cortex-m-rt linker script.

use crate::domain::{HeapUsage, StackUsage};
use crate::ports::memory::MemoryPort;
use embedded_alloc::Heap;

extern "C" {
    // Initial stack pointer (top of RAM)
    static _stack_start: u32;
    // End of .bss/.uninit; the stack may grow down to here
    static __sheap: u32;
}

/// Memory diagnostics for the firmware's global allocator
pub struct HeapMonitor {
    heap: &'static Heap,
}

impl HeapMonitor {
    pub const fn new(heap: &'static Heap) -> Self {
        Self { heap }
    }
}

impl MemoryPort for HeapMonitor {
    fn heap(&self) -> HeapUsage {
        HeapUsage::new(self.heap.used(), self.heap.free())
    }

    fn stack(&self) -> StackUsage {
        let (top, bottom) = unsafe {
            (
                core::ptr::addr_of!(_stack_start) as usize,
                core::ptr::addr_of!(__sheap) as usize,
            )
        };
        let sp = cortex_m::register::msp::read() as usize;
        StackUsage::from_bounds(top, bottom, sp)
    }
}
