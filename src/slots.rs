// gldispatch/src/slots.rs
//
//! Dispatch slots: one cell per operation, shared by all of the operation's aliases.

use std::os::raw::c_void;
use std::ptr::{self, NonNull};
use std::sync::atomic::{AtomicPtr, Ordering};

/// The index of a dispatch slot, assigned when the function table is generated.
pub type SlotId = usize;

/// The state of one slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotState {
    /// Calls still go through resolution.
    Unresolved,
    /// Calls go straight to this address.
    Resolved(NonNull<c_void>),
}

/// An arena of slots.
///
/// Slots are relaxed atomics. A function address never changes for the lifetime of the library
/// it came from, so two threads racing to resolve the same slot store the same value.
pub(crate) struct SlotTable {
    slots: Box<[AtomicPtr<c_void>]>,
}

impl SlotTable {
    pub(crate) fn new(count: usize) -> SlotTable {
        SlotTable { slots: (0..count).map(|_| AtomicPtr::new(ptr::null_mut())).collect() }
    }

    #[inline]
    pub(crate) fn get(&self, slot: SlotId) -> Option<NonNull<c_void>> {
        NonNull::new(self.slots[slot].load(Ordering::Relaxed))
    }

    #[inline]
    pub(crate) fn state(&self, slot: SlotId) -> SlotState {
        match self.get(slot) {
            None => SlotState::Unresolved,
            Some(address) => SlotState::Resolved(address),
        }
    }

    #[inline]
    pub(crate) fn store(&self, slot: SlotId, address: NonNull<c_void>) {
        self.slots[slot].store(address.as_ptr(), Ordering::Relaxed)
    }

    /// Returns every slot to `Unresolved`.
    pub(crate) fn reset(&self) {
        for slot in self.slots.iter() {
            slot.store(ptr::null_mut(), Ordering::Relaxed);
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }
}
