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

//! File round-trip tests for fixture export and import.

use casegen_core::{Category, Generator, TestCase};
use casegen_json::{
    export_to_json, load_from_json, load_records, required_fields, validate_test_cases,
    JsonError,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_export_then_load_returns_same_cases() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for category in Category::ALL {
        let path = dir.path().join(format!("{}.json", category));
        let cases = Generator::for_category(category).generate(10, true, Some(42));

        export_to_json(&cases, &path).expect("export");
        let loaded = load_from_json(&path).expect("load");
        assert_eq!(loaded, cases);
    }
}

#[test]
fn test_exported_file_is_array_of_objects() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("sorting.json");
    let cases = Generator::for_category(Category::Sorting).generate(4, true, Some(1));
    export_to_json(&cases, &path).expect("export");

    let records = load_records(&path).expect("raw load");
    assert_eq!(records.len(), 4);
    assert!(records.iter().all(|r| r.is_object()));
    assert!(validate_test_cases(&records, required_fields(Category::Sorting)).is_valid());
    assert_eq!(records[3]["difficulty"], "edge_case");
}

#[test]
fn test_load_hand_written_fixture() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("math.json");
    fs::write(
        &path,
        r#"[
  {"n": 5, "expected_output": 5, "difficulty": "medium", "description": "Fibonacci number at position 5"},
  {"n": 97, "expected_output": true, "difficulty": "medium", "description": "Check if 97 is prime"}
]"#,
    )
    .unwrap();

    let cases = load_from_json(&path).expect("load");
    assert_eq!(cases.len(), 2);
    assert!(cases.iter().all(TestCase::is_consistent));
    assert!(cases.iter().all(|c| c.category() == Category::Math));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = load_from_json(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, JsonError::Io { .. }));
}

#[test]
fn test_load_malformed_file_is_parse_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bad.json");
    fs::write(&path, "[{\"input\": [1, 2]").unwrap();
    let err = load_from_json(&path).unwrap_err();
    assert!(matches!(err, JsonError::Parse(_)));
}

#[test]
fn test_export_to_missing_directory_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("no/such/dir/out.json");
    let err = export_to_json(&[], &path).unwrap_err();
    assert!(matches!(err, JsonError::Io { .. }));
}
