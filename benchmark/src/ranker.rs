// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Ranking and reference-relative normalization.
//!
//! Entries are ordered fastest first. Each measured entry gets
//! `ratio = reference_ns / ns`, drawn as a bar `ratio * unit` cells wide with
//! eighth-cell resolution. The reference itself is drawn with a distinct
//! glyph at exactly one unit.

use jsoncmp_core::AdapterName;

use crate::metrics::Outcome;
use crate::suite::{SuiteEntry, SuiteRun};

/// Partial-cell glyphs, index = eighths filled.
const BLOCKS: [char; 9] = [' ', '▏', '▎', '▍', '▌', '▋', '▊', '▉', '█'];
/// Bars are clamped at this many reference units.
const MAX_BAR_RATIO: usize = 1000;
/// Fill glyph for the reference bar.
const REFERENCE_BLOCK: char = '▓';

/// One row of the bar chart.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartLine {
    Bar {
        adapter: AdapterName,
        bar: String,
        ratio: f64,
        reference: bool,
    },
    /// The entry cannot be drawn; `note` says why.
    Note { adapter: AdapterName, note: String },
}

impl ChartLine {
    pub fn adapter(&self) -> &AdapterName {
        match self {
            ChartLine::Bar { adapter, .. } | ChartLine::Note { adapter, .. } => adapter,
        }
    }

    pub fn ratio(&self) -> Option<f64> {
        match self {
            ChartLine::Bar { ratio, .. } => Some(*ratio),
            ChartLine::Note { .. } => None,
        }
    }
}

/// Sorts suite entries and builds chart rows.
#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    /// Width in cells of a 1.00 bar
    unit: usize,
}

impl Ranker {
    pub fn new(unit: usize) -> Self {
        Self { unit: unit.max(1) }
    }

    /// Entries ordered for display: measured by ascending ns/op, then
    /// unsupported, then failed, each in registration order.
    pub fn order<'r>(&self, run: &'r SuiteRun) -> Vec<&'r SuiteEntry> {
        let mut entries: Vec<&SuiteEntry> = run.entries.iter().collect();
        // Stable: ties keep input order.
        entries.sort_by(|a, b| a.outcome.rank_cmp(&b.outcome));
        entries
    }

    /// Build the chart rows for a suite run.
    pub fn rank(&self, run: &SuiteRun) -> Vec<ChartLine> {
        let reference_ns = run.reference_measurement().map(|m| m.ns_per_op);

        self.order(run)
            .into_iter()
            .map(|entry| self.chart_line(entry, reference_ns))
            .collect()
    }

    /// Widest bar drawn; ratios beyond this are still printed in full.
    fn max_cells(&self) -> f64 {
        (self.unit * MAX_BAR_RATIO) as f64
    }

    fn chart_line(&self, entry: &SuiteEntry, reference_ns: Option<u64>) -> ChartLine {
        let adapter = entry.adapter.clone();
        let Outcome::Measured(measurement) = &entry.outcome else {
            return ChartLine::Note {
                adapter,
                note: entry.outcome.to_string(),
            };
        };

        if entry.reference {
            return ChartLine::Bar {
                adapter,
                bar: reference_bar(self.unit),
                ratio: 1.0,
                reference: true,
            };
        }

        match reference_ns {
            Some(reference_ns) => {
                let ratio = ratio(reference_ns, measurement.ns_per_op);
                ChartLine::Bar {
                    adapter,
                    bar: render_bar((ratio * self.unit as f64).min(self.max_cells())),
                    ratio,
                    reference: false,
                }
            }
            None => ChartLine::Note {
                adapter,
                note: "no reference measurement".to_string(),
            },
        }
    }
}

/// Speed relative to the reference; above 1.0 means faster.
/// Zero timings count as 1ns.
pub fn ratio(reference_ns: u64, ns: u64) -> f64 {
    reference_ns.max(1) as f64 / ns.max(1) as f64
}

/// Bar `size` cells wide: full cells plus one partial glyph for the remainder.
pub fn render_bar(size: f64) -> String {
    let size = if size.is_finite() { size.max(0.0) } else { 0.0 };
    let full = size as usize;
    let eighths = ((size * 8.0) as usize).saturating_sub(full * 8).min(7);

    let mut bar = String::with_capacity((full + 1) * BLOCKS[8].len_utf8());
    bar.extend(std::iter::repeat(BLOCKS[8]).take(full));
    bar.push(BLOCKS[eighths]);
    bar
}

/// The reference bar: exactly `unit` shaded cells.
pub fn reference_bar(unit: usize) -> String {
    std::iter::repeat(REFERENCE_BLOCK).take(unit).collect()
}
