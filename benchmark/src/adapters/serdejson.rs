// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `serde_json` adapter, the reference library. Supports every operation.

use std::hint::black_box;
use std::io::{BufReader, Seek, SeekFrom};

use jsoncmp_core::{
    operation, Action, Adapter, AdapterName, BenchInput, BenchResult, OperationError,
    OperationName,
};
use serde::de::IgnoredAny;
use serde_json::{Deserializer, Value};

use super::{open, read_whole};
use crate::fixtures::Patient;

pub const NAME: &str = "serde_json";

pub fn adapter() -> BenchResult<Adapter> {
    Ok(Adapter::new(AdapterName::new(NAME)?)
        .with_operation(OperationName::PARSE, operation("from_slice", parse))
        .with_operation(OperationName::VALIDATE, operation("IgnoredAny", validate))
        .with_operation(OperationName::DECODE, operation("from_reader", decode))
        .with_operation(
            OperationName::UNMARSHAL_STRUCT,
            operation("from_slice", unmarshal_struct),
        )
        .with_operation(OperationName::MARSHAL, operation("to_vec", marshal))
        .with_operation(
            OperationName::MARSHAL_STRUCT,
            operation("to_vec", marshal_struct),
        )
        .with_operation(OperationName::FILE1, operation("from_reader", file1))
        .with_operation(
            OperationName::SMALL_FILE,
            operation("StreamDeserializer", small_file),
        )
        .with_operation(
            OperationName::LARGE_FILE,
            operation("StreamDeserializer", large_file),
        ))
}

fn parse(input: &BenchInput) -> Result<Action, OperationError> {
    let sample = input.sample();
    Ok(Box::new(move || {
        let value: Value = serde_json::from_slice(&sample).map_err(OperationError::library)?;
        black_box(value);
        Ok(())
    }))
}

fn validate(input: &BenchInput) -> Result<Action, OperationError> {
    let sample = input.sample();
    Ok(Box::new(move || {
        serde_json::from_slice::<IgnoredAny>(&sample).map_err(|_| OperationError::InvalidJson)?;
        Ok(())
    }))
}

fn decode(input: &BenchInput) -> Result<Action, OperationError> {
    let sample = input.sample();
    Ok(Box::new(move || {
        let value: Value = serde_json::from_reader(&sample[..]).map_err(OperationError::library)?;
        black_box(value);
        Ok(())
    }))
}

fn unmarshal_struct(input: &BenchInput) -> Result<Action, OperationError> {
    let sample = input.sample();
    Ok(Box::new(move || {
        let patient: Patient =
            serde_json::from_slice(&sample).map_err(OperationError::library)?;
        black_box(patient);
        Ok(())
    }))
}

fn marshal(input: &BenchInput) -> Result<Action, OperationError> {
    let value: Value = serde_json::from_slice(&input.sample()).map_err(OperationError::library)?;
    Ok(Box::new(move || {
        let out = serde_json::to_vec(&value).map_err(OperationError::library)?;
        black_box(out);
        Ok(())
    }))
}

fn marshal_struct(input: &BenchInput) -> Result<Action, OperationError> {
    let patient: Patient =
        serde_json::from_slice(&input.sample()).map_err(OperationError::library)?;
    Ok(Box::new(move || {
        let out = serde_json::to_vec(&patient).map_err(OperationError::library)?;
        black_box(out);
        Ok(())
    }))
}

fn file1(input: &BenchInput) -> Result<Action, OperationError> {
    let mut file = open(input.sample_path())?;
    Ok(Box::new(move || {
        file.seek(SeekFrom::Start(0))?;
        let value: Value =
            serde_json::from_reader(BufReader::new(&mut file)).map_err(OperationError::library)?;
        black_box(value);
        Ok(())
    }))
}

/// Read the whole log into memory, then stream values out of the buffer.
fn small_file(input: &BenchInput) -> Result<Action, OperationError> {
    let mut file = open(input.small_log()?)?;
    let mut buf = Vec::new();
    Ok(Box::new(move || {
        read_whole(&mut file, &mut buf)?;
        for value in Deserializer::from_slice(&buf).into_iter::<Value>() {
            black_box(value.map_err(OperationError::library)?);
        }
        Ok(())
    }))
}

/// Stream values straight from a buffered reader.
fn large_file(input: &BenchInput) -> Result<Action, OperationError> {
    let mut file = open(input.large_log()?)?;
    Ok(Box::new(move || {
        file.seek(SeekFrom::Start(0))?;
        let stream = Deserializer::from_reader(BufReader::new(&mut file)).into_iter::<Value>();
        for value in stream {
            black_box(value.map_err(OperationError::library)?);
        }
        Ok(())
    }))
}
