// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `sonic-rs` adapter. No streaming reader API, so `decode` is unsupported.

use std::hint::black_box;

use jsoncmp_core::{
    operation, Action, Adapter, AdapterName, BenchInput, BenchResult, OperationError,
    OperationName,
};
use serde::de::IgnoredAny;
use sonic_rs::Value;

use super::{for_each_line, lines_mut, open, read_whole};
use crate::fixtures::Patient;

pub const NAME: &str = "sonic_rs";

pub fn adapter() -> BenchResult<Adapter> {
    Ok(Adapter::new(AdapterName::new(NAME)?)
        .with_operation(OperationName::PARSE, operation("from_slice", parse))
        .with_operation(OperationName::VALIDATE, operation("IgnoredAny", validate))
        .with_operation(
            OperationName::UNMARSHAL_STRUCT,
            operation("from_slice", unmarshal_struct),
        )
        .with_operation(OperationName::MARSHAL, operation("to_vec", marshal))
        .with_operation(
            OperationName::MARSHAL_STRUCT,
            operation("to_vec", marshal_struct),
        )
        .with_operation(OperationName::FILE1, operation("from_slice", file1))
        .with_operation(OperationName::SMALL_FILE, operation("from_slice", small_file))
        .with_operation(OperationName::LARGE_FILE, operation("from_slice", large_file)))
}

fn parse(input: &BenchInput) -> Result<Action, OperationError> {
    let sample = input.sample();
    Ok(Box::new(move || {
        let value: Value = sonic_rs::from_slice(&sample).map_err(OperationError::library)?;
        black_box(value);
        Ok(())
    }))
}

fn validate(input: &BenchInput) -> Result<Action, OperationError> {
    let sample = input.sample();
    Ok(Box::new(move || {
        sonic_rs::from_slice::<IgnoredAny>(&sample).map_err(|_| OperationError::InvalidJson)?;
        Ok(())
    }))
}

fn unmarshal_struct(input: &BenchInput) -> Result<Action, OperationError> {
    let sample = input.sample();
    Ok(Box::new(move || {
        let patient: Patient = sonic_rs::from_slice(&sample).map_err(OperationError::library)?;
        black_box(patient);
        Ok(())
    }))
}

fn marshal(input: &BenchInput) -> Result<Action, OperationError> {
    let value: Value = sonic_rs::from_slice(&input.sample()).map_err(OperationError::library)?;
    Ok(Box::new(move || {
        let out = sonic_rs::to_vec(&value).map_err(OperationError::library)?;
        black_box(out);
        Ok(())
    }))
}

fn marshal_struct(input: &BenchInput) -> Result<Action, OperationError> {
    let patient: Patient =
        sonic_rs::from_slice(&input.sample()).map_err(OperationError::library)?;
    Ok(Box::new(move || {
        let out = sonic_rs::to_vec(&patient).map_err(OperationError::library)?;
        black_box(out);
        Ok(())
    }))
}

fn file1(input: &BenchInput) -> Result<Action, OperationError> {
    let mut file = open(input.sample_path())?;
    let mut buf = Vec::new();
    Ok(Box::new(move || {
        read_whole(&mut file, &mut buf)?;
        let value: Value = sonic_rs::from_slice(&buf).map_err(OperationError::library)?;
        black_box(value);
        Ok(())
    }))
}

fn small_file(input: &BenchInput) -> Result<Action, OperationError> {
    let mut file = open(input.small_log()?)?;
    let mut buf = Vec::new();
    Ok(Box::new(move || {
        read_whole(&mut file, &mut buf)?;
        for line in lines_mut(&mut buf) {
            let value: Value = sonic_rs::from_slice(line).map_err(OperationError::library)?;
            black_box(value);
        }
        Ok(())
    }))
}

fn large_file(input: &BenchInput) -> Result<Action, OperationError> {
    let mut file = open(input.large_log()?)?;
    let mut line = Vec::new();
    Ok(Box::new(move || {
        for_each_line(&mut file, &mut line, |line| {
            let value: Value = sonic_rs::from_slice(line).map_err(OperationError::library)?;
            black_box(value);
            Ok(())
        })
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::testing;
    use tempfile::TempDir;

    #[test]
    fn test_supported_operations_run_on_sample() {
        let dir = TempDir::new().unwrap();
        let input = testing::input(&dir);
        let adapter = adapter().unwrap();

        for op in testing::ALL_OPERATIONS {
            let Some(operation) = adapter.operation(op) else {
                continue;
            };
            let mut action = operation.prepare(&input).unwrap();
            action().unwrap_or_else(|e| panic!("{} failed: {}", op, e));
        }
        assert!(!adapter.supports(OperationName::DECODE));
    }

    #[test]
    fn test_struct_output_matches_reference_shape() {
        let sample = std::fs::read(testing::sample_path()).unwrap();
        let patient: Patient = sonic_rs::from_slice(&sample).unwrap();
        let reference: Patient = serde_json::from_slice(&sample).unwrap();
        assert_eq!(patient, reference);
    }
}
