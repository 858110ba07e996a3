// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! jsoncmp Benchmarking Framework
//!
//! Measures interchangeable Rust JSON libraries on the same operations and
//! reports each one relative to a reference library.
//!
//! # Pipeline
//!
//! For every suite: run each registered adapter through the
//! [`BenchmarkHarness`], rank the results with the [`Ranker`], and print them
//! with the [`TextReporter`]. Suites are independent and run in order.
//!
//! # Allocation counting
//!
//! Bytes/op and allocs/op come from [`alloc::CountingAllocator`]. A binary
//! must install it as its `#[global_allocator]`; without it both figures
//! read as zero.

pub mod adapters;
pub mod alloc;
pub mod fixtures;
pub mod harness;
pub mod metrics;
pub mod ranker;
pub mod reporter;
pub mod suite;

pub use harness::{BenchmarkHarness, Measure};
pub use metrics::{Measurement, Outcome, SystemInfo};
pub use ranker::{ChartLine, Ranker};
pub use reporter::TextReporter;
pub use suite::{SuiteDriver, SuiteEntry, SuiteRun};
