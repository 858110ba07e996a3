// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! YAML configuration parser with strict validation.
//!
//! Every key is optional; omitted keys take the built-in defaults. Invalid
//! values are rejected with a [`ValidationError`] before any benchmark runs.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{BenchError, BenchResult, ValidationError};
use crate::types::{OperationName, Suite};

/// Default reference adapter for every built-in suite.
pub const DEFAULT_REFERENCE: &str = "serde_json";

/// Upper bound for the bar unit width, in terminal cells.
const MAX_BAR_UNIT: usize = 40;

/// Raw runner section as parsed from YAML.
#[derive(Debug, Deserialize)]
struct RawRunnerConfig {
    #[serde(default = "default_min_time_ms")]
    min_time_ms: u64,
    #[serde(default = "default_max_iterations")]
    max_iterations: u64,
}

fn default_min_time_ms() -> u64 {
    1000
}

fn default_max_iterations() -> u64 {
    1_000_000_000
}

impl Default for RawRunnerConfig {
    fn default() -> Self {
        Self {
            min_time_ms: default_min_time_ms(),
            max_iterations: default_max_iterations(),
        }
    }
}

/// Raw fixture section.
#[derive(Debug, Deserialize)]
struct RawFixtureConfig {
    #[serde(default = "default_small_log_mb")]
    small_log_mb: u64,
    #[serde(default = "default_large_log_mb")]
    large_log_mb: u64,
}

fn default_small_log_mb() -> u64 {
    10
}

fn default_large_log_mb() -> u64 {
    200
}

impl Default for RawFixtureConfig {
    fn default() -> Self {
        Self {
            small_log_mb: default_small_log_mb(),
            large_log_mb: default_large_log_mb(),
        }
    }
}

/// Raw report section.
#[derive(Debug, Deserialize)]
struct RawReportConfig {
    #[serde(default = "default_bar_unit")]
    bar_unit: usize,
}

fn default_bar_unit() -> usize {
    7
}

impl Default for RawReportConfig {
    fn default() -> Self {
        Self {
            bar_unit: default_bar_unit(),
        }
    }
}

/// Raw suite entry.
#[derive(Debug, Deserialize)]
struct RawSuite {
    operation: String,
    title: Option<String>,
    #[serde(default = "default_reference")]
    reference: String,
}

fn default_reference() -> String {
    DEFAULT_REFERENCE.to_string()
}

/// Raw root configuration file.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    sample: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    #[serde(default)]
    runner: RawRunnerConfig,
    #[serde(default)]
    fixtures: RawFixtureConfig,
    #[serde(default)]
    report: RawReportConfig,
    suites: Option<Vec<RawSuite>>,
}

/// Validated runner configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// A round must run at least this long before its timing is accepted.
    pub min_time: Duration,
    /// Hard cap on iterations per round.
    pub max_iterations: u64,
}

/// Validated fixture configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureConfig {
    pub small_log_mb: u64,
    pub large_log_mb: u64,
}

/// Validated report configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Width in cells of a bar with ratio 1.00.
    pub bar_unit: usize,
}

/// Complete validated configuration.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub sample: PathBuf,
    pub data_dir: PathBuf,
    pub runner: RunnerConfig,
    pub fixtures: FixtureConfig,
    pub report: ReportConfig,
    pub suites: Vec<Suite>,
}

impl BenchConfig {
    /// Path of the generated small log file.
    pub fn small_log_path(&self) -> PathBuf {
        self.data_dir.join("log-small.json")
    }

    /// Path of the generated large log file.
    pub fn large_log_path(&self) -> PathBuf {
        self.data_dir.join("log-large.json")
    }

    /// Look up a configured suite by operation name.
    pub fn suite(&self, operation: &str) -> Option<&Suite> {
        self.suites
            .iter()
            .find(|s| s.operation.as_str() == operation)
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sample: PathBuf::from("data/patient.json"),
            data_dir: PathBuf::from("data"),
            runner: RunnerConfig {
                min_time: Duration::from_millis(default_min_time_ms()),
                max_iterations: default_max_iterations(),
            },
            fixtures: FixtureConfig {
                small_log_mb: default_small_log_mb(),
                large_log_mb: default_large_log_mb(),
            },
            report: ReportConfig {
                bar_unit: default_bar_unit(),
            },
            suites: default_suites(),
        }
    }
}

/// Title shown for a built-in operation.
pub fn default_title(operation: &str) -> Option<&'static str> {
    let title = match operation {
        OperationName::PARSE => "Parse string/[u8] to a dynamic value",
        OperationName::VALIDATE => "Validate string/[u8]",
        OperationName::DECODE => "Decode a value through a streaming reader",
        OperationName::UNMARSHAL_STRUCT => "Deserialize string/[u8] to a struct",
        OperationName::MARSHAL => "Serialize a dynamic value to [u8]",
        OperationName::MARSHAL_STRUCT => "Serialize a struct to [u8]",
        OperationName::FILE1 => "Read from a single JSON file",
        OperationName::SMALL_FILE => "Read multiple JSON values in a small log file",
        OperationName::LARGE_FILE => "Read multiple JSON values in a semi large log file",
        _ => return None,
    };
    Some(title)
}

/// The built-in ordered suite list.
pub fn default_suites() -> Vec<Suite> {
    [
        OperationName::PARSE,
        OperationName::VALIDATE,
        OperationName::DECODE,
        OperationName::UNMARSHAL_STRUCT,
        OperationName::MARSHAL,
        OperationName::MARSHAL_STRUCT,
        OperationName::FILE1,
        OperationName::SMALL_FILE,
        OperationName::LARGE_FILE,
    ]
    .into_iter()
    .filter_map(|op| {
        let title = default_title(op)?;
        Suite::new(title, op, DEFAULT_REFERENCE).ok()
    })
    .collect()
}

/// Configuration loader with strict validation.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate configuration from a YAML file.
    pub fn load_file(path: impl AsRef<Path>) -> BenchResult<BenchConfig> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(BenchError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| BenchError::Io {
            context: "reading config file",
            source: e,
        })?;

        Self::load_string(&content)
    }

    /// Load and validate configuration from a YAML string.
    pub fn load_string(content: &str) -> BenchResult<BenchConfig> {
        // An empty document means "all defaults".
        let raw: RawConfig = if content.trim().is_empty() {
            RawConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| BenchError::ConfigParse {
                message: format!("YAML parse error: {}", e),
            })?
        };

        Self::validate(raw)
    }

    /// Validate raw configuration and convert to validated types.
    fn validate(raw: RawConfig) -> BenchResult<BenchConfig> {
        let defaults = BenchConfig::default();

        let runner = Self::validate_runner(raw.runner)?;
        let fixtures = Self::validate_fixtures(raw.fixtures)?;
        let report = Self::validate_report(raw.report)?;

        let suites = match raw.suites {
            Some(raw_suites) => Self::validate_suites(raw_suites)?,
            None => defaults.suites,
        };

        Ok(BenchConfig {
            sample: raw.sample.unwrap_or(defaults.sample),
            data_dir: raw.data_dir.unwrap_or(defaults.data_dir),
            runner,
            fixtures,
            report,
            suites,
        })
    }

    fn validate_runner(raw: RawRunnerConfig) -> BenchResult<RunnerConfig> {
        if raw.min_time_ms == 0 {
            return Err(ValidationError::InvalidFieldValue {
                field: "runner.min_time_ms",
                value: raw.min_time_ms.to_string(),
                reason: "Minimum run time must be at least 1ms".to_string(),
            }
            .into());
        }

        if raw.max_iterations == 0 {
            return Err(ValidationError::InvalidFieldValue {
                field: "runner.max_iterations",
                value: raw.max_iterations.to_string(),
                reason: "At least one iteration is required".to_string(),
            }
            .into());
        }

        Ok(RunnerConfig {
            min_time: Duration::from_millis(raw.min_time_ms),
            max_iterations: raw.max_iterations,
        })
    }

    fn validate_fixtures(raw: RawFixtureConfig) -> BenchResult<FixtureConfig> {
        for (field, value) in [
            ("fixtures.small_log_mb", raw.small_log_mb),
            ("fixtures.large_log_mb", raw.large_log_mb),
        ] {
            if value == 0 {
                return Err(ValidationError::InvalidFieldValue {
                    field,
                    value: value.to_string(),
                    reason: "Log file size must be at least 1 MB".to_string(),
                }
                .into());
            }
        }

        Ok(FixtureConfig {
            small_log_mb: raw.small_log_mb,
            large_log_mb: raw.large_log_mb,
        })
    }

    fn validate_report(raw: RawReportConfig) -> BenchResult<ReportConfig> {
        if raw.bar_unit == 0 || raw.bar_unit > MAX_BAR_UNIT {
            return Err(ValidationError::InvalidFieldValue {
                field: "report.bar_unit",
                value: raw.bar_unit.to_string(),
                reason: format!("Bar unit must be between 1 and {}", MAX_BAR_UNIT),
            }
            .into());
        }

        Ok(ReportConfig {
            bar_unit: raw.bar_unit,
        })
    }

    fn validate_suites(raw: Vec<RawSuite>) -> BenchResult<Vec<Suite>> {
        if raw.is_empty() {
            return Err(ValidationError::SchemaValidation {
                message: "At least one suite must be defined".to_string(),
            }
            .into());
        }

        let mut seen = HashSet::new();
        let mut suites = Vec::with_capacity(raw.len());

        for raw_suite in raw {
            if !seen.insert(raw_suite.operation.clone()) {
                return Err(ValidationError::DuplicateSuite {
                    operation: raw_suite.operation,
                }
                .into());
            }

            let title = match raw_suite.title {
                Some(title) => title,
                None => default_title(&raw_suite.operation)
                    .map(str::to_string)
                    .unwrap_or_else(|| raw_suite.operation.clone()),
            };

            suites.push(Suite::new(
                title,
                &raw_suite.operation,
                &raw_suite.reference,
            )?);
        }

        Ok(suites)
    }
}
