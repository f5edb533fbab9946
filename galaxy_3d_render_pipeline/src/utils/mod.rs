//! Small helpers shared by pipeline components.

mod slot_allocator;

pub use slot_allocator::SlotAllocator;
