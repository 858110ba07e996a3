// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Allocation accounting with the counting allocator installed.

use std::hint::black_box;
use std::time::Duration;

use jsoncmp_benchmark::alloc::{AllocSnapshot, CountingAllocator};
use jsoncmp_benchmark::BenchmarkHarness;
use jsoncmp_core::Action;

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

#[test]
fn test_snapshot_sees_allocations() {
    let before = AllocSnapshot::now();
    let buf = black_box(vec![0u8; 4096]);
    let delta = AllocSnapshot::now().since(&before);
    drop(buf);

    assert!(delta.count >= 1);
    assert!(delta.bytes >= 4096);
}

#[test]
fn test_harness_reports_per_op_allocations() {
    let harness = BenchmarkHarness::new()
        .min_time(Duration::from_millis(5))
        .max_iterations(100_000);

    let mut action: Action = Box::new(|| {
        black_box(vec![1u8; 1024]);
        Ok(())
    });

    let m = harness.run(&mut action).unwrap();
    assert!(m.iterations >= 1);
    assert!(m.allocs_per_op >= 1, "allocs/op = {}", m.allocs_per_op);
    assert!(m.bytes_per_op >= 1024, "B/op = {}", m.bytes_per_op);
}
