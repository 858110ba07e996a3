// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Library adapters.
//!
//! Each submodule binds one JSON crate to the operation names the suites
//! use. Registration order is report order for raw measurement lines.

pub mod serdejson;
pub mod simdjson;
pub mod sonicrs;

use std::fs::File;
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use jsoncmp_core::{AdapterRegistry, BenchResult, OperationError};

/// Adapter every built-in suite is normalized against.
pub const REFERENCE: &str = serdejson::NAME;

/// Registry with every built-in adapter, reference first.
pub fn registry() -> BenchResult<AdapterRegistry> {
    let mut registry = AdapterRegistry::new();
    registry.register(serdejson::adapter()?)?;
    registry.register(simdjson::adapter()?)?;
    registry.register(sonicrs::adapter()?)?;
    Ok(registry)
}

fn open(path: &Path) -> Result<File, OperationError> {
    Ok(File::open(path)?)
}

/// Rewind `file` and read all of it into `buf`.
fn read_whole(file: &mut File, buf: &mut Vec<u8>) -> Result<(), OperationError> {
    file.seek(SeekFrom::Start(0))?;
    buf.clear();
    file.read_to_end(buf)?;
    Ok(())
}

/// Rewind `file` and stream it line by line, skipping blank lines.
fn for_each_line<F>(file: &mut File, line: &mut Vec<u8>, mut f: F) -> Result<(), OperationError>
where
    F: FnMut(&mut [u8]) -> Result<(), OperationError>,
{
    file.seek(SeekFrom::Start(0))?;
    let mut reader = BufReader::new(file);
    loop {
        line.clear();
        if reader.read_until(b'\n', line)? == 0 {
            return Ok(());
        }
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        f(&mut line[..])?;
    }
}

/// Non-blank lines of an in-memory buffer.
fn lines_mut(buf: &mut [u8]) -> impl Iterator<Item = &mut [u8]> {
    buf.split_mut(|b| *b == b'\n')
        .filter(|line| !line.iter().all(u8::is_ascii_whitespace))
}

#[cfg(test)]
pub(crate) mod testing {
    use std::path::PathBuf;

    use jsoncmp_core::{BenchInput, OperationName};
    use tempfile::TempDir;

    use crate::fixtures::logfile::write_log_file;

    /// Every operation the suites define.
    pub const ALL_OPERATIONS: [&str; 9] = [
        OperationName::PARSE,
        OperationName::VALIDATE,
        OperationName::DECODE,
        OperationName::UNMARSHAL_STRUCT,
        OperationName::MARSHAL,
        OperationName::MARSHAL_STRUCT,
        OperationName::FILE1,
        OperationName::SMALL_FILE,
        OperationName::LARGE_FILE,
    ];

    pub fn sample_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../data/patient.json")
    }

    /// Bundled sample plus two tiny generated log files.
    pub fn input(dir: &TempDir) -> BenchInput {
        let small = dir.path().join("log-small.json");
        let large = dir.path().join("log-large.json");
        write_log_file(&small, 1).unwrap();
        write_log_file(&large, 1).unwrap();

        BenchInput::load(sample_path())
            .unwrap()
            .with_small_log(small)
            .with_large_log(large)
    }

    /// Input whose sample is not JSON.
    pub fn broken_input(dir: &TempDir) -> BenchInput {
        let path = dir.path().join("broken.json");
        std::fs::write(&path, b"{\"unterminated\": [1, 2").unwrap();
        BenchInput::load(path).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_registry_order_and_reference() {
        let registry = registry().unwrap();
        let names: Vec<_> = registry.iter().map(|a| a.name().as_str()).collect();
        assert_eq!(names, vec!["serde_json", "simd_json", "sonic_rs"]);
        assert_eq!(REFERENCE, "serde_json");
    }

    #[test]
    fn test_reference_supports_every_operation() {
        let registry = registry().unwrap();
        let reference = registry.get(REFERENCE).unwrap();
        for op in testing::ALL_OPERATIONS {
            assert!(reference.supports(op), "{} missing {}", REFERENCE, op);
        }
    }

    #[test]
    fn test_for_each_line_skips_blank_lines() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{\"a\":1}\n\n  \n{\"a\":2}").unwrap();
        let mut handle = file.reopen().unwrap();

        let mut seen = Vec::new();
        let mut line = Vec::new();
        for_each_line(&mut handle, &mut line, |l| {
            seen.push(String::from_utf8_lossy(l).trim().to_string());
            Ok(())
        })
        .unwrap();
        assert_eq!(seen, vec!["{\"a\":1}", "{\"a\":2}"]);

        // Rewinds on every call.
        seen.clear();
        for_each_line(&mut handle, &mut line, |_| {
            seen.push(String::new());
            Ok(())
        })
        .unwrap();
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_lines_mut_skips_blank_lines() {
        let mut buf = b"[1]\n\n[2]\n".to_vec();
        let lines: Vec<Vec<u8>> = lines_mut(&mut buf).map(|l| l.to_vec()).collect();
        assert_eq!(lines, vec![b"[1]".to_vec(), b"[2]".to_vec()]);
    }

    #[test]
    fn test_read_whole_rewinds() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[true]").unwrap();
        let mut handle = file.reopen().unwrap();

        let mut buf = Vec::new();
        read_whole(&mut handle, &mut buf).unwrap();
        read_whole(&mut handle, &mut buf).unwrap();
        assert_eq!(buf, b"[true]");
    }
}
