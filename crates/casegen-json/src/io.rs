// Dweve Casegen - Algorithm Test Case Generator
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Reading and writing fixture files.

use crate::error::{JsonError, Result};
use casegen_core::TestCase;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Default maximum fixture file size (100 MB).
/// Can be overridden via the `CASEGEN_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

fn max_file_size() -> u64 {
    std::env::var("CASEGEN_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Encode test cases as a pretty-printed JSON array (2-space indent).
pub fn to_json_string(cases: &[TestCase]) -> Result<String> {
    serde_json::to_string_pretty(cases).map_err(|e| JsonError::Serialize(e.to_string()))
}

/// Encode test cases as a single-line JSON array.
pub fn to_json_string_compact(cases: &[TestCase]) -> Result<String> {
    serde_json::to_string(cases).map_err(|e| JsonError::Serialize(e.to_string()))
}

/// Decode a JSON array of test case records.
pub fn from_json_str(json: &str) -> Result<Vec<TestCase>> {
    serde_json::from_str(json).map_err(|e| JsonError::Parse(e.to_string()))
}

/// Write test cases to `path` as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns [`JsonError::Io`] if the file cannot be written.
pub fn export_to_json(cases: &[TestCase], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = to_json_string(cases)?;
    fs::write(path, json).map_err(|e| JsonError::io_error(path, e))?;
    info!(count = cases.len(), path = %path.display(), "exported test cases");
    Ok(())
}

/// Load typed test cases from a JSON file.
///
/// # Errors
///
/// Returns an error if the file is missing, larger than the configured
/// limit, or not an array of test case records.
pub fn load_from_json(path: impl AsRef<Path>) -> Result<Vec<TestCase>> {
    let path = path.as_ref();
    let cases: Vec<TestCase> = read_array(path)?;
    info!(count = cases.len(), path = %path.display(), "loaded test cases");
    Ok(cases)
}

/// Load records as untyped JSON values, for validating foreign files.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Value>> {
    let path = path.as_ref();
    let records: Vec<Value> = read_array(path)?;
    debug!(count = records.len(), path = %path.display(), "loaded raw records");
    Ok(records)
}

fn read_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let metadata = fs::metadata(path).map_err(|e| JsonError::io_error(path, e))?;
    let max = max_file_size();
    if metadata.len() > max {
        return Err(JsonError::FileTooLarge {
            path: path.to_path_buf(),
            actual: metadata.len(),
            max,
        });
    }

    let content = fs::read_to_string(path).map_err(|e| JsonError::io_error(path, e))?;
    serde_json::from_str(&content)
        .map_err(|e| JsonError::Parse(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use casegen_core::{Category, Generator};

    #[test]
    fn test_pretty_output_uses_two_space_indent() {
        let cases = casegen_core::edge_cases(Category::Sorting);
        let json = to_json_string(&cases).unwrap();
        assert!(json.starts_with("[\n  {\n    \"input\": []"));
    }

    #[test]
    fn test_compact_output_keeps_field_order() {
        let cases = casegen_core::edge_cases(Category::Searching);
        let json = to_json_string_compact(&cases[1..]).unwrap();
        assert_eq!(
            json,
            r#"[{"array":[5],"target":5,"expected_output":0,"difficulty":"edge_case","description":"Single element (found)"}]"#
        );
    }

    #[test]
    fn test_string_roundtrip_preserves_cases() {
        for category in Category::ALL {
            let cases = Generator::for_category(category).generate(8, true, Some(5));
            let json = to_json_string(&cases).unwrap();
            assert_eq!(from_json_str(&json).unwrap(), cases);
        }
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        let err = from_json_str(r#"{"input": []}"#).unwrap_err();
        assert!(matches!(err, JsonError::Parse(_)));
    }

    #[test]
    fn test_empty_array_loads() {
        assert!(from_json_str("[]").unwrap().is_empty());
    }
}
