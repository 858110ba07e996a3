// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Configuration loading from disk.

use std::io::Write;
use std::time::Duration;

use jsoncmp_core::{BenchError, ConfigLoader};
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_file_applies_overrides() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(
        file,
        r#"
data_dir: /tmp/jsoncmp-data
fixtures:
  small_log_mb: 1
  large_log_mb: 2
runner:
  min_time_ms: 10
  max_iterations: 500
suites:
  - operation: small-file
  - operation: large-file
"#
    )
    .expect("Failed to write config");

    let config = ConfigLoader::load_file(file.path()).expect("Config should load");
    assert_eq!(config.runner.min_time, Duration::from_millis(10));
    assert_eq!(config.runner.max_iterations, 500);
    assert_eq!(config.fixtures.small_log_mb, 1);
    assert_eq!(config.fixtures.large_log_mb, 2);
    assert_eq!(
        config.small_log_path(),
        std::path::Path::new("/tmp/jsoncmp-data/log-small.json")
    );
    let ops: Vec<_> = config.suites.iter().map(|s| s.operation.as_str()).collect();
    assert_eq!(ops, vec!["small-file", "large-file"]);
}

#[test]
fn test_load_file_missing() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let result = ConfigLoader::load_file(dir.path().join("jsoncmp.yaml"));
    assert!(matches!(result, Err(BenchError::ConfigNotFound { .. })));
}

#[test]
fn test_load_file_rejects_invalid_reference() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "suites:\n  - operation: parse\n    reference: \"not valid\"")
        .expect("Failed to write config");

    let result = ConfigLoader::load_file(file.path());
    assert!(matches!(result, Err(BenchError::Validation(_))));
}

#[test]
fn test_load_file_rejects_zero_min_time() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "runner:\n  min_time_ms: 0").expect("Failed to write config");

    let err = ConfigLoader::load_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("runner.min_time_ms"));
}
