// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Benchmark harness for running and timing operations.
//!
//! An action is run in rounds of growing iteration counts until one round
//! lasts at least the configured minimum time. The accepted round gives
//! ns/op, bytes/op and allocs/op.

use std::time::{Duration, Instant};

use jsoncmp_core::{Action, OperationError, RunnerConfig};

use crate::alloc::AllocSnapshot;
use crate::metrics::Measurement;

/// Largest factor by which one round may grow over the previous.
const MAX_GROWTH: u64 = 100;

/// Anything that can turn a prepared action into a measurement.
pub trait Measure {
    /// Measure `action`. `label` identifies it in logs.
    fn measure(&self, label: &str, action: &mut Action) -> Result<Measurement, OperationError>;
}

/// Timed-loop benchmark harness.
#[derive(Debug, Clone)]
pub struct BenchmarkHarness {
    /// A round must last at least this long
    min_time: Duration,
    /// Iteration cap per round
    max_iterations: u64,
}

impl BenchmarkHarness {
    /// Create a new benchmark harness with default settings.
    pub fn new() -> Self {
        Self {
            min_time: Duration::from_secs(1),
            max_iterations: 1_000_000_000,
        }
    }

    /// Create a harness from validated configuration.
    pub fn from_config(config: &RunnerConfig) -> Self {
        Self::new()
            .min_time(config.min_time)
            .max_iterations(config.max_iterations)
    }

    /// Set the minimum duration of the accepted round.
    pub fn min_time(mut self, min_time: Duration) -> Self {
        self.min_time = min_time;
        self
    }

    /// Set the iteration cap.
    pub fn max_iterations(mut self, iterations: u64) -> Self {
        self.max_iterations = iterations.max(1);
        self
    }

    /// Run `action` until timing is stable.
    ///
    /// The first error stops measurement and is returned.
    pub fn run(&self, action: &mut Action) -> Result<Measurement, OperationError> {
        let mut n = 1u64;
        loop {
            let round = self.run_round(action, n)?;
            tracing::debug!(
                iterations = n,
                elapsed_ns = round.elapsed.as_nanos() as u64,
                "Round complete"
            );

            if round.elapsed >= self.min_time || n >= self.max_iterations {
                return Ok(Measurement::from_totals(
                    n,
                    round.elapsed.as_nanos() as u64,
                    round.allocs.bytes,
                    round.allocs.count,
                ));
            }

            n = self.next_iterations(n, round.elapsed);
        }
    }

    /// Predict the iteration count for the next round.
    fn next_iterations(&self, prev: u64, elapsed: Duration) -> u64 {
        let goal_ns = self.min_time.as_nanos();
        let prev_ns = elapsed.as_nanos().max(1);

        let predicted = goal_ns.saturating_mul(prev as u128) / prev_ns;
        let predicted = u64::try_from(predicted).unwrap_or(u64::MAX);
        // Overshoot a little so the next round usually suffices.
        let predicted = predicted.saturating_add(predicted / 5);

        predicted
            .min(prev.saturating_mul(MAX_GROWTH))
            .max(prev + 1)
            .min(self.max_iterations)
    }

    fn run_round(&self, action: &mut Action, n: u64) -> Result<Round, OperationError> {
        let before = AllocSnapshot::now();
        let start = Instant::now();
        for _ in 0..n {
            action()?;
        }
        let elapsed = start.elapsed();
        let allocs = AllocSnapshot::now().since(&before);
        Ok(Round { elapsed, allocs })
    }
}

impl Default for BenchmarkHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl Measure for BenchmarkHarness {
    fn measure(&self, label: &str, action: &mut Action) -> Result<Measurement, OperationError> {
        let measurement = self.run(action)?;
        tracing::debug!(
            label,
            iterations = measurement.iterations,
            per_op = %Measurement::format_latency(measurement.ns_per_op),
            "Measured"
        );
        Ok(measurement)
    }
}

struct Round {
    elapsed: Duration,
    allocs: AllocSnapshot,
}
