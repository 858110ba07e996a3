// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Counting global allocator.
//!
//! Wraps the system allocator and keeps process-wide totals of bytes
//! allocated and allocation calls. The harness takes a snapshot before and
//! after each round and divides the delta by the iteration count.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicU64, Ordering};

static ALLOCATED_BYTES: AtomicU64 = AtomicU64::new(0);
static ALLOCATIONS: AtomicU64 = AtomicU64::new(0);

/// System allocator that counts allocations.
///
/// Install in a binary with:
///
/// ```ignore
/// #[global_allocator]
/// static GLOBAL: jsoncmp_benchmark::alloc::CountingAllocator =
///     jsoncmp_benchmark::alloc::CountingAllocator;
/// ```
pub struct CountingAllocator;

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ret = System.alloc(layout);
        if !ret.is_null() {
            record(layout.size());
        }
        ret
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ret = System.alloc_zeroed(layout);
        if !ret.is_null() {
            record(layout.size());
        }
        ret
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
    }

    // A grow or shrink counts as one allocation of the new size.
    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let ret = System.realloc(ptr, layout, new_size);
        if !ret.is_null() {
            record(new_size);
        }
        ret
    }
}

#[inline]
fn record(size: usize) {
    ALLOCATED_BYTES.fetch_add(size as u64, Ordering::Relaxed);
    ALLOCATIONS.fetch_add(1, Ordering::Relaxed);
}

/// Point-in-time allocation totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllocSnapshot {
    pub bytes: u64,
    pub count: u64,
}

impl AllocSnapshot {
    /// Read the current totals.
    pub fn now() -> Self {
        Self {
            bytes: ALLOCATED_BYTES.load(Ordering::Relaxed),
            count: ALLOCATIONS.load(Ordering::Relaxed),
        }
    }

    /// Allocations made between `earlier` and `self`.
    pub fn since(&self, earlier: &AllocSnapshot) -> AllocSnapshot {
        AllocSnapshot {
            bytes: self.bytes.saturating_sub(earlier.bytes),
            count: self.count.saturating_sub(earlier.count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_since_is_a_delta() {
        let earlier = AllocSnapshot { bytes: 100, count: 2 };
        let later = AllocSnapshot { bytes: 612, count: 6 };
        assert_eq!(
            later.since(&earlier),
            AllocSnapshot { bytes: 512, count: 4 }
        );
    }

    #[test]
    fn test_since_never_underflows() {
        let earlier = AllocSnapshot { bytes: 10, count: 1 };
        let later = AllocSnapshot::default();
        assert_eq!(later.since(&earlier), AllocSnapshot::default());
    }
}
