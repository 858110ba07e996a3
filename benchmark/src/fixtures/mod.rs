// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Benchmark input preparation.
//!
//! Loads the sample and generates the log file fixtures that the selected
//! suites need. Failures here are fatal.

pub mod logfile;
pub mod patient;

use jsoncmp_core::{BenchConfig, BenchInput, BenchResult, OperationName, Suite};

pub use logfile::ensure_log_file;
pub use patient::Patient;

/// Load the sample and create any log files required by `suites`.
pub fn prepare_input(config: &BenchConfig, suites: &[Suite]) -> BenchResult<BenchInput> {
    let mut input = BenchInput::load(&config.sample)?;

    let needs = |op: &str| suites.iter().any(|s| s.operation.as_str() == op);

    if needs(OperationName::SMALL_FILE) {
        let path = config.small_log_path();
        ensure_log_file(&path, config.fixtures.small_log_mb)?;
        input = input.with_small_log(path);
    }

    if needs(OperationName::LARGE_FILE) {
        let path = config.large_log_path();
        ensure_log_file(&path, config.fixtures.large_log_mb)?;
        input = input.with_large_log(path);
    }

    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsoncmp_core::BenchError;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn config(dir: &TempDir) -> BenchConfig {
        let sample = dir.path().join("sample.json");
        std::fs::write(&sample, br#"{"resourceType":"Patient"}"#).unwrap();

        let mut config = BenchConfig::default();
        config.sample = sample;
        config.data_dir = dir.path().join("data");
        config.fixtures.small_log_mb = 1;
        config.fixtures.large_log_mb = 1;
        config
    }

    #[test]
    fn test_only_needed_fixtures_are_created() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        let suites = vec![config.suite("small-file").unwrap().clone()];

        let input = prepare_input(&config, &suites).unwrap();
        assert!(input.small_log().is_ok());
        assert!(input.large_log().is_err());
        assert!(config.small_log_path().exists());
        assert!(!config.large_log_path().exists());
    }

    #[test]
    fn test_plain_suites_need_no_fixtures() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        let suites = vec![config.suite("parse").unwrap().clone()];

        let input = prepare_input(&config, &suites).unwrap();
        assert_eq!(input.sample_len(), 26);
        assert!(!config.data_dir.exists());
    }

    #[test]
    fn test_missing_sample_is_fatal() {
        let dir = TempDir::new().unwrap();
        let mut config = config(&dir);
        config.sample = PathBuf::from("/no/such/sample.json");

        let result = prepare_input(&config, &config.suites.clone());
        assert!(matches!(result, Err(BenchError::Sample { .. })));
    }
}
