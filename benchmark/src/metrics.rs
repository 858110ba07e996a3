// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Measurement and outcome types, plus host identification.

use std::cmp::Ordering;
use std::fmt;

use sysinfo::System;

/// Per-operation cost of one benchmarked action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    /// Iterations in the accepted round.
    pub iterations: u64,
    /// Nanoseconds per operation
    pub ns_per_op: u64,
    /// Bytes allocated per operation
    pub bytes_per_op: u64,
    /// Allocation calls per operation
    pub allocs_per_op: u64,
}

impl Measurement {
    /// Derive per-op figures from the totals of a round.
    pub fn from_totals(iterations: u64, elapsed_ns: u64, bytes: u64, allocs: u64) -> Self {
        let n = iterations.max(1);
        Self {
            iterations,
            ns_per_op: elapsed_ns / n,
            bytes_per_op: bytes / n,
            allocs_per_op: allocs / n,
        }
    }

    /// Measurement with fixed timing and no allocations.
    pub fn with_ns(ns_per_op: u64) -> Self {
        Self {
            iterations: 1,
            ns_per_op,
            bytes_per_op: 0,
            allocs_per_op: 0,
        }
    }

    /// Format latency in human-readable form (auto-selects ns/μs/ms).
    pub fn format_latency(ns: u64) -> String {
        if ns < 1_000 {
            format!("{}ns", ns)
        } else if ns < 1_000_000 {
            format!("{:.2}μs", ns as f64 / 1_000.0)
        } else if ns < 1_000_000_000 {
            format!("{:.2}ms", ns as f64 / 1_000_000.0)
        } else {
            format!("{:.2}s", ns as f64 / 1_000_000_000.0)
        }
    }
}

/// What happened when an adapter was asked to run a suite's operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Measured(Measurement),
    /// The adapter does not implement the operation.
    Unsupported,
    /// The operation failed; the error text is kept for display.
    Failed(String),
}

impl Outcome {
    pub fn measurement(&self) -> Option<&Measurement> {
        match self {
            Outcome::Measured(m) => Some(m),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    /// Ordering used for ranking: measured results by ascending ns/op, then
    /// unsupported, then failed.
    pub fn rank_cmp(&self, other: &Outcome) -> Ordering {
        match (self, other) {
            (Outcome::Measured(a), Outcome::Measured(b)) => a.ns_per_op.cmp(&b.ns_per_op),
            _ => self.tier().cmp(&other.tier()),
        }
    }

    fn tier(&self) -> u8 {
        match self {
            Outcome::Measured(_) => 0,
            Outcome::Unsupported => 1,
            Outcome::Failed(_) => 2,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Measured(m) => write!(f, "{}/op", Measurement::format_latency(m.ns_per_op)),
            Outcome::Unsupported => write!(f, "not supported"),
            Outcome::Failed(reason) => write!(f, "{}", reason),
        }
    }
}

/// Host information shown at the end of the report.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemInfo {
    /// Machine model, when the platform exposes one
    pub model: Option<String>,
    /// Operating system name and version
    pub os: String,
    /// CPU model name without the clock suffix
    pub processor: String,
    /// Number of logical CPUs
    pub cores: usize,
    /// CPU frequency in MHz
    pub speed_mhz: u64,
    /// Total system memory in bytes
    pub memory_bytes: u64,
}

impl SystemInfo {
    /// Probe the current host. Returns `None` when nothing useful is available.
    pub fn collect() -> Option<Self> {
        let mut sys = System::new_all();
        sys.refresh_all();

        let cpu = sys.cpus().first()?;
        let brand = cpu.brand().trim();
        // Brands such as "Intel(R) Core(TM) i7-8700 CPU @ 3.20GHz" carry the speed.
        let processor = brand.split('@').next().unwrap_or(brand).trim().to_string();

        let os = System::long_os_version()
            .or_else(System::name)
            .unwrap_or_else(|| "Unknown".to_string());

        let memory_bytes = sys.total_memory();
        if processor.is_empty() && memory_bytes == 0 {
            return None;
        }

        Some(Self {
            model: machine_model(),
            os,
            processor,
            cores: sys.cpus().len(),
            speed_mhz: cpu.frequency(),
            memory_bytes,
        })
    }

    /// Clock speed formatted as GHz.
    pub fn speed(&self) -> String {
        format!("{:.2} GHz", self.speed_mhz as f64 / 1_000.0)
    }

    /// Memory formatted in whole gigabytes.
    pub fn memory(&self) -> String {
        format!("{} GB", self.memory_bytes / 1_000_000_000)
    }
}

#[cfg(target_os = "linux")]
fn machine_model() -> Option<String> {
    std::fs::read_to_string("/sys/devices/virtual/dmi/id/product_name")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(not(target_os = "linux"))]
fn machine_model() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_totals_divides_by_iterations() {
        let m = Measurement::from_totals(1_000, 2_500_000, 64_000, 3_000);
        assert_eq!(m.ns_per_op, 2_500);
        assert_eq!(m.bytes_per_op, 64);
        assert_eq!(m.allocs_per_op, 3);
    }

    #[test]
    fn test_from_totals_zero_iterations() {
        let m = Measurement::from_totals(0, 500, 10, 1);
        assert_eq!(m.ns_per_op, 500);
    }

    #[test]
    fn test_latency_format() {
        assert_eq!(Measurement::format_latency(500), "500ns");
        assert_eq!(Measurement::format_latency(1500), "1.50μs");
        assert_eq!(Measurement::format_latency(1_500_000), "1.50ms");
        assert_eq!(Measurement::format_latency(1_500_000_000), "1.50s");
    }

    #[test]
    fn test_rank_cmp_puts_measured_first() {
        let fast = Outcome::Measured(Measurement::with_ns(10));
        let slow = Outcome::Measured(Measurement::with_ns(20));
        let failed = Outcome::Failed("boom".to_string());

        assert_eq!(fast.rank_cmp(&slow), Ordering::Less);
        assert_eq!(failed.rank_cmp(&slow), Ordering::Greater);
        assert_eq!(Outcome::Unsupported.rank_cmp(&failed), Ordering::Less);
        assert_eq!(failed.rank_cmp(&Outcome::Unsupported), Ordering::Greater);
        assert_eq!(failed.rank_cmp(&Outcome::Failed("other".into())), Ordering::Equal);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Unsupported.to_string(), "not supported");
        assert_eq!(Outcome::Failed("boom".into()).to_string(), "boom");
        assert_eq!(
            Outcome::Measured(Measurement::with_ns(1500)).to_string(),
            "1.50μs/op"
        );
    }

    #[test]
    fn test_system_info_formatting() {
        let info = SystemInfo {
            model: None,
            os: "Linux".to_string(),
            processor: "Test CPU".to_string(),
            cores: 8,
            speed_mhz: 3200,
            memory_bytes: 16_000_000_000,
        };
        assert_eq!(info.speed(), "3.20 GHz");
        assert_eq!(info.memory(), "16 GB");
    }

    #[test]
    fn test_system_info_collect() {
        if let Some(info) = SystemInfo::collect() {
            assert!(!info.os.is_empty());
            assert!(info.cores > 0);
        }
    }
}
