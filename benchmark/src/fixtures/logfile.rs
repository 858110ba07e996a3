// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Synthetic newline-delimited JSON log files.
//!
//! Each line is one log entry; only the `when` timestamp changes between
//! lines. Files are generated once and reused by later runs.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Utc;
use jsoncmp_core::{BenchError, BenchResult};
use serde_json::{json, Value};

const MB: u64 = 1024 * 1024;

/// Create `path` with about `size_mb` MB of log entries unless it already exists.
pub fn ensure_log_file(path: &Path, size_mb: u64) -> BenchResult<()> {
    if path.is_file() {
        tracing::debug!(path = %path.display(), "Using existing log file");
        return Ok(());
    }

    tracing::info!(path = %path.display(), size_mb, "Generating log file");
    let lines = write_log_file(path, size_mb).map_err(|e| BenchError::Fixture {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    tracing::debug!(path = %path.display(), lines, "Log file written");
    Ok(())
}

/// Write `size_mb` MB of log entries to `path`, replacing any existing file.
pub fn write_log_file(path: &Path, size_mb: u64) -> std::io::Result<u64> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut entry = log_entry();
    let line_len = serde_json::to_vec(&entry)?.len() as u64 + 1;
    let count = (size_mb * MB / line_len).max(1);

    let mut writer = BufWriter::new(File::create(path)?);
    for _ in 0..count {
        entry["when"] = Value::from(now_nanos());
        serde_json::to_writer(&mut writer, &entry)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    Ok(count)
}

fn log_entry() -> Value {
    json!({
        "when": now_nanos(),
        "what": "Just some fake log entry for a generated log file.",
        "where": [{"file": "example.rs", "line": 123}],
        "who": "benchmark-application",
        "level": "INFO",
    })
}

fn now_nanos() -> i64 {
    Utc::now().timestamp_nanos_opt().unwrap_or_default()
}
