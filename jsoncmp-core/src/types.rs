// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Newtype wrappers for validated names and the suite definition.
//!
//! All types validate their invariants at creation time.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Maximum length of adapter and operation names.
const MAX_NAME_LEN: usize = 64;

fn validate_name(field: &'static str, name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::InvalidFieldValue {
            field,
            value: name.to_string(),
            reason: "Name cannot be empty".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::InvalidFieldValue {
            field,
            value: name.to_string(),
            reason: format!("Name too long: {} chars (max {})", name.len(), MAX_NAME_LEN),
        });
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFieldValue {
            field,
            value: name.to_string(),
            reason: "Name must contain only alphanumeric characters, hyphens, and underscores"
                .to_string(),
        });
    }

    Ok(())
}

/// Validated adapter name, e.g. `serde_json`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AdapterName(String);

impl AdapterName {
    /// Create a new AdapterName with validation.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_name("adapter", &name)?;
        Ok(Self(name))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AdapterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Forward so width and alignment flags apply.
        f.pad(&self.0)
    }
}

impl TryFrom<String> for AdapterName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AdapterName> for String {
    fn from(name: AdapterName) -> Self {
        name.0
    }
}

/// Validated operation name, e.g. `parse` or `small-file`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OperationName(String);

impl OperationName {
    pub const PARSE: &'static str = "parse";
    pub const VALIDATE: &'static str = "validate";
    pub const DECODE: &'static str = "decode";
    pub const UNMARSHAL_STRUCT: &'static str = "unmarshal-struct";
    pub const MARSHAL: &'static str = "marshal";
    pub const MARSHAL_STRUCT: &'static str = "marshal-struct";
    pub const FILE1: &'static str = "file1";
    pub const SMALL_FILE: &'static str = "small-file";
    pub const LARGE_FILE: &'static str = "large-file";

    /// Create a new OperationName with validation.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_name("operation", &name)?;
        Ok(Self(name))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OperationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl TryFrom<String> for OperationName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OperationName> for String {
    fn from(name: OperationName) -> Self {
        name.0
    }
}

/// One comparison scenario: an operation run across every adapter and
/// normalized against a reference adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suite {
    pub title: String,
    pub operation: OperationName,
    pub reference: AdapterName,
}

impl Suite {
    /// Create a suite from raw names.
    pub fn new(
        title: impl Into<String>,
        operation: &str,
        reference: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            title: title.into(),
            operation: OperationName::new(operation)?,
            reference: AdapterName::new(reference)?,
        })
    }
}
