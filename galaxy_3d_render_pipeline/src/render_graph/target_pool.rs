/// Pool of temporary target slots.
///
/// A slot is the host-side identity of a temporary render target. Slots are
/// acquired right before the first pass using a target and released right
/// after the last one, so consecutive cameras reuse the same slots while two
/// live targets never share one.

use rustc_hash::FxHashMap;
use crate::error::{Galaxy3dError, Galaxy3dResult};
use crate::graphics_device::TargetDesc;
use crate::utils::SlotAllocator;

/// Slot pool, persistent across frames and cameras
#[derive(Default)]
pub struct TargetPool {
    slots: SlotAllocator,
    live: FxHashMap<u32, TargetDesc>,
    peak_live: u32,
    total_acquired: u64,
}

impl TargetPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a slot for a target described by `desc`
    pub fn acquire(&mut self, desc: TargetDesc) -> u32 {
        let slot = self.slots.alloc();
        self.live.insert(slot, desc);
        self.peak_live = self.peak_live.max(self.slots.len());
        self.total_acquired += 1;
        slot
    }

    /// Return a slot; fails if it is not live
    pub fn release(&mut self, slot: u32) -> Galaxy3dResult<TargetDesc> {
        let desc = self.live.remove(&slot).ok_or_else(|| {
            Galaxy3dError::InvalidResource(format!("temporary target slot {} is not live", slot))
        })?;
        self.slots.free(slot)?;
        Ok(desc)
    }

    /// Descriptor of a live slot
    pub fn desc(&self, slot: u32) -> Option<&TargetDesc> {
        self.live.get(&slot)
    }

    /// Number of live slots
    pub fn live_count(&self) -> u32 {
        self.slots.len()
    }

    /// Largest number of simultaneously live slots so far
    pub fn peak_live_count(&self) -> u32 {
        self.peak_live
    }

    /// Number of distinct slot ids ever handed out
    pub fn slot_count(&self) -> u32 {
        self.slots.high_water_mark()
    }

    /// Total number of acquisitions
    pub fn total_acquired(&self) -> u64 {
        self.total_acquired
    }
}

#[cfg(test)]
#[path = "target_pool_tests.rs"]
mod tests;
