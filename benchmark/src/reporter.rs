// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Plain-text report generation.
//!
//! Writes raw per-adapter measurements, the ranked bar chart, a legend and
//! the host block to any [`Write`] sink, normally stdout.

use std::io::{self, Write};

use crate::metrics::{Outcome, SystemInfo};
use crate::ranker::ChartLine;
use crate::suite::SuiteRun;

/// Text reporter for suite results.
pub struct TextReporter<W: Write> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write one suite: title, raw measurements, then the chart.
    pub fn write_suite(&mut self, run: &SuiteRun, chart: &[ChartLine]) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", run.suite.title)?;

        for entry in &run.entries {
            let call = entry.call.as_deref().unwrap_or_default();
            match &entry.outcome {
                Outcome::Measured(m) => writeln!(
                    self.out,
                    " {:>10}.{:<18} {:>12} ns/op {:>12} B/op {:>12} allocs/op",
                    entry.adapter, call, m.ns_per_op, m.bytes_per_op, m.allocs_per_op
                )?,
                Outcome::Unsupported => {
                    writeln!(self.out, " {:>10} >>> not supported <<<", entry.adapter)?
                }
                Outcome::Failed(reason) => writeln!(
                    self.out,
                    " {:>10}.{:<18} >>> {} <<<",
                    entry.adapter, call, reason
                )?,
            }
        }

        writeln!(self.out)?;
        for line in chart {
            match line {
                ChartLine::Bar {
                    adapter,
                    bar,
                    ratio,
                    ..
                } => writeln!(self.out, " {:>10} {} {:.2}", adapter, bar, ratio)?,
                ChartLine::Note { adapter, note } => {
                    writeln!(self.out, " {:>10} >>> {} <<<", adapter, note)?
                }
            }
        }

        self.out.flush()
    }

    /// Write the legend explaining the chart.
    pub fn write_legend(&mut self, reference: &str) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            " Higher values (longer bars) are better in all cases. The bar graph compares the"
        )?;
        writeln!(
            self.out,
            " performance of each library. The shaded bar is the reference, the {}",
            reference
        )?;
        writeln!(self.out, " crate.")?;
        writeln!(self.out)
    }

    /// Write the host identification block.
    pub fn write_system_info(&mut self, info: &SystemInfo) -> io::Result<()> {
        writeln!(self.out, "Tests run on:")?;
        if let Some(model) = &info.model {
            writeln!(self.out, " Machine:         {}", model)?;
        }
        writeln!(self.out, " OS:              {}", info.os)?;
        writeln!(self.out, " Processor:       {}", info.processor)?;
        writeln!(self.out, " Cores:           {}", info.cores)?;
        writeln!(self.out, " Processor Speed: {}", info.speed())?;
        writeln!(self.out, " Memory:          {}", info.memory())?;
        writeln!(self.out)
    }

    /// Flush and return the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Measurement;
    use crate::ranker::Ranker;
    use crate::suite::SuiteEntry;
    use jsoncmp_core::{AdapterName, Suite};

    fn sample_run() -> SuiteRun {
        SuiteRun {
            suite: Suite::new("Parse string/[u8] to a dynamic value", "parse", "serde_json")
                .unwrap(),
            entries: vec![
                SuiteEntry {
                    adapter: AdapterName::new("serde_json").unwrap(),
                    call: Some("from_slice".to_string()),
                    outcome: Outcome::Measured(Measurement {
                        iterations: 1000,
                        ns_per_op: 200,
                        bytes_per_op: 1024,
                        allocs_per_op: 12,
                    }),
                    reference: true,
                },
                SuiteEntry {
                    adapter: AdapterName::new("sonic_rs").unwrap(),
                    call: Some("from_slice".to_string()),
                    outcome: Outcome::Measured(Measurement::with_ns(100)),
                    reference: false,
                },
                SuiteEntry {
                    adapter: AdapterName::new("simd_json").unwrap(),
                    call: None,
                    outcome: Outcome::Unsupported,
                    reference: false,
                },
            ],
        }
    }

    fn render(run: &SuiteRun) -> String {
        let chart = Ranker::new(7).rank(run);
        let mut reporter = TextReporter::new(Vec::new());
        reporter.write_suite(run, &chart).unwrap();
        String::from_utf8(reporter.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_raw_lines() {
        let text = render(&sample_run());
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "Parse string/[u8] to a dynamic value");
        assert_eq!(
            lines[2],
            " serde_json.from_slice                  200 ns/op         1024 B/op           12 allocs/op"
        );
        assert!(lines[3].starts_with("   sonic_rs.from_slice"));
        assert_eq!(lines[4], "  simd_json >>> not supported <<<");
        assert_eq!(lines[5], "");
    }

    #[test]
    fn test_chart_lines() {
        let text = render(&sample_run());
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[6], "   sonic_rs ██████████████  2.00");
        assert_eq!(lines[7], " serde_json ▓▓▓▓▓▓▓ 1.00");
        assert_eq!(lines[8], "  simd_json >>> not supported <<<");
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn test_failure_shows_error_text() {
        let mut run = sample_run();
        run.entries[1].outcome = Outcome::Failed("boom".to_string());
        let text = render(&run);

        assert!(text.contains("   sonic_rs.from_slice         >>> boom <<<"));
        assert!(text.contains("   sonic_rs >>> boom <<<"));
    }

    #[test]
    fn test_system_info_block() {
        let info = SystemInfo {
            model: Some("ThinkPad X1".to_string()),
            os: "Ubuntu 22.04".to_string(),
            processor: "Test CPU".to_string(),
            cores: 8,
            speed_mhz: 2_400,
            memory_bytes: 32_000_000_000,
        };
        let mut reporter = TextReporter::new(Vec::new());
        reporter.write_legend("serde_json").unwrap();
        reporter.write_system_info(&info).unwrap();
        let text = String::from_utf8(reporter.finish().unwrap()).unwrap();

        assert!(text.contains("The shaded bar is the reference, the serde_json"));
        assert!(text.contains(" Machine:         ThinkPad X1\n"));
        assert!(text.contains(" Cores:           8\n"));
        assert!(text.contains(" Processor Speed: 2.40 GHz\n"));
        assert!(text.contains(" Memory:          32 GB\n"));
    }

    #[test]
    fn test_system_info_without_model() {
        let info = SystemInfo {
            model: None,
            os: "macOS 14".to_string(),
            processor: "Apple M2".to_string(),
            cores: 8,
            speed_mhz: 3_500,
            memory_bytes: 16_000_000_000,
        };
        let mut reporter = TextReporter::new(Vec::new());
        reporter.write_system_info(&info).unwrap();
        let text = String::from_utf8(reporter.finish().unwrap()).unwrap();
        assert!(!text.contains("Machine:"));
        assert!(text.starts_with("Tests run on:\n OS:              macOS 14\n"));
    }
}
