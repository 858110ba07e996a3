// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Suite driver.
//!
//! Runs one suite's operation across every registered adapter, in
//! registration order, and collects one [`SuiteEntry`] per adapter. A failing
//! or unsupported adapter never stops the others.

use jsoncmp_core::{AdapterName, AdapterRegistry, BenchInput, Suite};

use crate::harness::Measure;
use crate::metrics::{Measurement, Outcome};

/// Result of one adapter in one suite run.
#[derive(Debug, Clone, PartialEq)]
pub struct SuiteEntry {
    pub adapter: AdapterName,
    /// Library call exercised; `None` when unsupported.
    pub call: Option<String>,
    pub outcome: Outcome,
    /// Whether this adapter is the suite's reference.
    pub reference: bool,
}

/// All entries of one suite execution.
#[derive(Debug, Clone)]
pub struct SuiteRun {
    pub suite: Suite,
    /// One entry per registered adapter, in registration order.
    pub entries: Vec<SuiteEntry>,
}

impl SuiteRun {
    /// The reference entry, if the reference adapter is registered.
    pub fn reference(&self) -> Option<&SuiteEntry> {
        self.entries.iter().find(|e| e.reference)
    }

    /// The reference measurement, when it ran successfully.
    pub fn reference_measurement(&self) -> Option<&Measurement> {
        self.reference().and_then(|e| e.outcome.measurement())
    }

    pub fn has_failures(&self) -> bool {
        self.entries.iter().any(|e| e.outcome.is_failed())
    }
}

/// Drives suites over a registry with a given measurer.
pub struct SuiteDriver<'a, M> {
    registry: &'a AdapterRegistry,
    input: &'a BenchInput,
    measurer: &'a M,
}

impl<'a, M: Measure> SuiteDriver<'a, M> {
    pub fn new(registry: &'a AdapterRegistry, input: &'a BenchInput, measurer: &'a M) -> Self {
        Self {
            registry,
            input,
            measurer,
        }
    }

    /// Run `suite` across all adapters.
    pub fn run(&self, suite: &Suite) -> SuiteRun {
        tracing::info!(operation = %suite.operation, "Running suite");

        let entries = self
            .registry
            .iter()
            .map(|adapter| {
                let name = adapter.name();
                let reference = *name == suite.reference;
                let Some(op) = adapter.operation(suite.operation.as_str()) else {
                    tracing::debug!(adapter = %name, "Operation not supported");
                    return SuiteEntry {
                        adapter: name.clone(),
                        call: None,
                        outcome: Outcome::Unsupported,
                        reference,
                    };
                };

                let label = format!("{}.{}", name, op.call_name());
                tracing::info!(%label, "Benchmarking");

                let outcome = match op
                    .prepare(self.input)
                    .and_then(|mut action| self.measurer.measure(&label, &mut action))
                {
                    Ok(measurement) => Outcome::Measured(measurement),
                    Err(err) => {
                        tracing::warn!(%label, error = %err, "Benchmark failed");
                        Outcome::Failed(err.to_string())
                    }
                };

                SuiteEntry {
                    adapter: name.clone(),
                    call: Some(op.call_name().to_string()),
                    outcome,
                    reference,
                }
            })
            .collect();

        SuiteRun {
            suite: suite.clone(),
            entries,
        }
    }
}
