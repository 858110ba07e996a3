//! jsoncmp Core Library
//!
//! Core library for the jsoncmp benchmark harness.
//! Provides validated names, configuration parsing, the benchmark input
//! and the adapter registry that the benchmark crate drives.

pub mod config;
pub mod error;
pub mod input;
pub mod registry;
pub mod types;

// Re-export commonly used types
pub use config::{BenchConfig, ConfigLoader, FixtureConfig, ReportConfig, RunnerConfig};
pub use error::{BenchError, BenchResult, OperationError, ValidationError};
pub use input::BenchInput;
pub use registry::{operation, Action, Adapter, AdapterRegistry, FnOperation, Operation};
pub use types::{AdapterName, OperationName, Suite};
