// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `simd-json` adapter.
//!
//! simd-json parses in place and mutates its input, so every action copies
//! the document into a scratch buffer first. There is no reader-based API;
//! `decode` is not supported.

use std::hint::black_box;

use jsoncmp_core::{
    operation, Action, Adapter, AdapterName, BenchInput, BenchResult, OperationError,
    OperationName,
};

use super::{for_each_line, lines_mut, open, read_whole};
use crate::fixtures::Patient;

pub const NAME: &str = "simd_json";

pub fn adapter() -> BenchResult<Adapter> {
    Ok(Adapter::new(AdapterName::new(NAME)?)
        .with_operation(OperationName::PARSE, operation("to_owned_value", parse))
        .with_operation(OperationName::VALIDATE, operation("to_tape", validate))
        .with_operation(
            OperationName::UNMARSHAL_STRUCT,
            operation("serde::from_slice", unmarshal_struct),
        )
        .with_operation(OperationName::MARSHAL, operation("serde::to_vec", marshal))
        .with_operation(
            OperationName::MARSHAL_STRUCT,
            operation("serde::to_vec", marshal_struct),
        )
        .with_operation(OperationName::FILE1, operation("to_owned_value", file1))
        .with_operation(
            OperationName::SMALL_FILE,
            operation("to_owned_value", small_file),
        )
        .with_operation(
            OperationName::LARGE_FILE,
            operation("to_owned_value", large_file),
        ))
}

/// Refill `scratch` with a fresh copy of `src`.
fn refill(scratch: &mut Vec<u8>, src: &[u8]) {
    scratch.clear();
    scratch.extend_from_slice(src);
}

fn parse(input: &BenchInput) -> Result<Action, OperationError> {
    let sample = input.sample();
    let mut scratch = Vec::with_capacity(sample.len());
    Ok(Box::new(move || {
        refill(&mut scratch, &sample);
        let value = simd_json::to_owned_value(&mut scratch).map_err(OperationError::library)?;
        black_box(value);
        Ok(())
    }))
}

fn validate(input: &BenchInput) -> Result<Action, OperationError> {
    let sample = input.sample();
    let mut scratch = Vec::with_capacity(sample.len());
    Ok(Box::new(move || {
        refill(&mut scratch, &sample);
        let tape = simd_json::to_tape(&mut scratch).map_err(|_| OperationError::InvalidJson)?;
        black_box(tape);
        Ok(())
    }))
}

fn unmarshal_struct(input: &BenchInput) -> Result<Action, OperationError> {
    let sample = input.sample();
    let mut scratch = Vec::with_capacity(sample.len());
    Ok(Box::new(move || {
        refill(&mut scratch, &sample);
        let patient: Patient =
            simd_json::serde::from_slice(&mut scratch).map_err(OperationError::library)?;
        black_box(patient);
        Ok(())
    }))
}

fn marshal(input: &BenchInput) -> Result<Action, OperationError> {
    let mut scratch = input.sample().to_vec();
    let value = simd_json::to_owned_value(&mut scratch).map_err(OperationError::library)?;
    Ok(Box::new(move || {
        let out = simd_json::serde::to_vec(&value).map_err(OperationError::library)?;
        black_box(out);
        Ok(())
    }))
}

fn marshal_struct(input: &BenchInput) -> Result<Action, OperationError> {
    let mut scratch = input.sample().to_vec();
    let patient: Patient =
        simd_json::serde::from_slice(&mut scratch).map_err(OperationError::library)?;
    Ok(Box::new(move || {
        let out = simd_json::serde::to_vec(&patient).map_err(OperationError::library)?;
        black_box(out);
        Ok(())
    }))
}

fn file1(input: &BenchInput) -> Result<Action, OperationError> {
    let mut file = open(input.sample_path())?;
    let mut buf = Vec::new();
    Ok(Box::new(move || {
        read_whole(&mut file, &mut buf)?;
        let value = simd_json::to_owned_value(&mut buf).map_err(OperationError::library)?;
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
            let value = simd_json::to_owned_value(line).map_err(OperationError::library)?;
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
            let value = simd_json::to_owned_value(line).map_err(OperationError::library)?;
            black_box(value);
            Ok(())
        })
    }))
}
