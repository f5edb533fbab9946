/// Allocates and recycles `u32` slot indices.
///
/// Released indices are handed out again (most recently released first), so a
/// long-running renderer keeps its temporary-target namespace compact. Unlike a
/// plain free list, the allocator remembers which indices are live and rejects
/// releasing an index twice.
///
/// ```ignore
/// let mut slots = SlotAllocator::new();
/// let a = slots.alloc();    // 0
/// let b = slots.alloc();    // 1
/// slots.free(a)?;           // 0 is available again
/// let c = slots.alloc();    // 0 (recycled)
/// ```
use crate::error::{Galaxy3dError, Galaxy3dResult};

pub struct SlotAllocator {
    free_list: Vec<u32>,
    live: Vec<bool>,
    len: u32,
}

impl SlotAllocator {
    /// Create an empty allocator
    pub fn new() -> Self {
        Self {
            free_list: Vec::new(),
            live: Vec::new(),
            len: 0,
        }
    }

    /// Take the next available index
    pub fn alloc(&mut self) -> u32 {
        let id = match self.free_list.pop() {
            Some(id) => id,
            None => {
                self.live.push(false);
                (self.live.len() - 1) as u32
            }
        };
        self.live[id as usize] = true;
        self.len += 1;
        id
    }

    /// Return an index for reuse
    ///
    /// Fails if the index was never handed out or is already free.
    pub fn free(&mut self, id: u32) -> Galaxy3dResult<()> {
        match self.live.get_mut(id as usize) {
            Some(live) if *live => {
                *live = false;
                self.len -= 1;
                self.free_list.push(id);
                Ok(())
            }
            _ => Err(Galaxy3dError::InvalidResource(format!("slot {} is not allocated", id))),
        }
    }

    /// Whether `id` is currently handed out
    pub fn is_allocated(&self, id: u32) -> bool {
        self.live.get(id as usize).copied().unwrap_or(false)
    }

    /// Highest index ever allocated + 1
    pub fn high_water_mark(&self) -> u32 {
        self.live.len() as u32
    }

    /// Number of live indices
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Whether no index is live
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for SlotAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "slot_allocator_tests.rs"]
mod tests;
