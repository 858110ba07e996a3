//! Adapter registry.
//!
//! An [`Adapter`] names one JSON library and maps operation names to the
//! [`Operation`]s it supports. The [`AdapterRegistry`] keeps adapters in
//! registration order, which is also the order suites benchmark them in.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{BenchError, BenchResult, OperationError};
use crate::input::BenchInput;
use crate::types::AdapterName;

/// A prepared, zero-argument benchmark action. One call is one operation.
pub type Action = Box<dyn FnMut() -> Result<(), OperationError>>;

/// A benchmarkable operation exposed by an adapter.
pub trait Operation {
    /// Library entry point exercised, shown next to the adapter name.
    fn call_name(&self) -> &str;

    /// Untimed setup. Returns the action that the runner times.
    fn prepare(&self, input: &BenchInput) -> Result<Action, OperationError>;
}

/// [`Operation`] backed by a setup closure.
pub struct FnOperation<F> {
    call_name: &'static str,
    setup: F,
}

impl<F> Operation for FnOperation<F>
where
    F: Fn(&BenchInput) -> Result<Action, OperationError>,
{
    fn call_name(&self) -> &str {
        self.call_name
    }

    fn prepare(&self, input: &BenchInput) -> Result<Action, OperationError> {
        (self.setup)(input)
    }
}

/// Build an operation from a call name and a setup closure.
pub fn operation<F>(call_name: &'static str, setup: F) -> FnOperation<F>
where
    F: Fn(&BenchInput) -> Result<Action, OperationError>,
{
    FnOperation { call_name, setup }
}

/// One library binding and the operations it supports.
pub struct Adapter {
    name: AdapterName,
    operations: BTreeMap<String, Box<dyn Operation>>,
}

impl Adapter {
    /// Create an adapter with no operations.
    pub fn new(name: AdapterName) -> Self {
        Self {
            name,
            operations: BTreeMap::new(),
        }
    }

    /// Register an operation under `operation_name`, replacing any previous one.
    pub fn with_operation(
        mut self,
        operation_name: &str,
        operation: impl Operation + 'static,
    ) -> Self {
        self.operations
            .insert(operation_name.to_string(), Box::new(operation));
        self
    }

    pub fn name(&self) -> &AdapterName {
        &self.name
    }

    /// Look up an operation by name.
    pub fn operation(&self, operation_name: &str) -> Option<&dyn Operation> {
        self.operations.get(operation_name).map(|op| op.as_ref())
    }

    pub fn supports(&self, operation_name: &str) -> bool {
        self.operations.contains_key(operation_name)
    }

    /// Names of all supported operations, sorted.
    pub fn operation_names(&self) -> impl Iterator<Item = &str> {
        self.operations.keys().map(String::as_str)
    }
}

impl fmt::Debug for Adapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adapter")
            .field("name", &self.name)
            .field("operations", &self.operations.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Ordered registry of adapters.
#[derive(Debug, Default)]
pub struct AdapterRegistry {
    adapters: Vec<Adapter>,
}

impl AdapterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an adapter. Names must be unique.
    pub fn register(&mut self, adapter: Adapter) -> BenchResult<()> {
        // Check for duplicate - fail fast
        if self.contains(adapter.name().as_str()) {
            return Err(BenchError::DuplicateAdapter(adapter.name().clone()));
        }

        tracing::debug!(
            adapter = %adapter.name(),
            operations = adapter.operations.len(),
            "Registered adapter"
        );
        self.adapters.push(adapter);
        Ok(())
    }

    /// Get an adapter by name.
    pub fn get(&self, name: &str) -> Option<&Adapter> {
        self.adapters.iter().find(|a| a.name().as_str() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate adapters in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Adapter> {
        self.adapters.iter()
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}
