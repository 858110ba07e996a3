// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Shared benchmark input.
//!
//! The sample document is read once and shared by every adapter. Log file
//! fixtures are referenced by path; they are only present when a selected
//! suite needs them.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{BenchError, BenchResult, OperationError};

/// Input handed to every operation's untimed setup step.
#[derive(Debug, Clone)]
pub struct BenchInput {
    sample_path: PathBuf,
    sample: Arc<[u8]>,
    small_log: Option<PathBuf>,
    large_log: Option<PathBuf>,
}

impl BenchInput {
    /// Read the sample file fully into memory.
    pub fn load(path: impl AsRef<Path>) -> BenchResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| BenchError::Sample {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "Loaded sample");
        Ok(Self::from_bytes(path, bytes))
    }

    /// Build an input from bytes already in memory.
    pub fn from_bytes(path: impl Into<PathBuf>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            sample_path: path.into(),
            sample: bytes.into(),
            small_log: None,
            large_log: None,
        }
    }

    /// Attach the small log file fixture.
    pub fn with_small_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.small_log = Some(path.into());
        self
    }

    /// Attach the large log file fixture.
    pub fn with_large_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.large_log = Some(path.into());
        self
    }

    /// Path the sample was loaded from.
    pub fn sample_path(&self) -> &Path {
        &self.sample_path
    }

    /// Shared handle to the sample bytes.
    pub fn sample(&self) -> Arc<[u8]> {
        Arc::clone(&self.sample)
    }

    /// Sample size in bytes.
    pub fn sample_len(&self) -> usize {
        self.sample.len()
    }

    /// Path of the small log file, if generated.
    pub fn small_log(&self) -> Result<&Path, OperationError> {
        self.small_log
            .as_deref()
            .ok_or(OperationError::MissingFixture("small log"))
    }

    /// Path of the large log file, if generated.
    pub fn large_log(&self) -> Result<&Path, OperationError> {
        self.large_log
            .as_deref()
            .ok_or(OperationError::MissingFixture("large log"))
    }
}
