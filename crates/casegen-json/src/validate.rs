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

//! Required-field validation for fixture records.

use crate::error::{JsonError, Result};
use casegen_core::{Category, TestCase};
use serde_json::Value;
use std::fmt;
use tracing::{debug, warn};

/// The first record found without a required field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingField {
    /// 1-based position of the record in the batch.
    pub record: usize,
    pub field: String,
}

/// Outcome of [`validate_test_cases`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Number of records checked.
    pub total: usize,
    /// First failure, if any. Checking stops there.
    pub missing: Option<MissingField>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.missing.is_none()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.missing {
            None => write!(f, "All {} test cases are valid", self.total),
            Some(m) => write!(f, "Test case #{} missing field: {}", m.record, m.field),
        }
    }
}

const ARRAY_FIELDS: &[&str] = &["input", "expected_output", "difficulty", "description"];
const SEARCH_FIELDS: &[&str] = &["array", "target", "expected_output", "difficulty", "description"];
const MATH_FIELDS: &[&str] = &["n", "expected_output", "difficulty", "description"];

/// The fields every record of `category` carries.
pub fn required_fields(category: Category) -> &'static [&'static str] {
    match category {
        Category::Sorting | Category::DataStructures => ARRAY_FIELDS,
        Category::Searching => SEARCH_FIELDS,
        Category::Math => MATH_FIELDS,
    }
}

/// Check that every record is an object containing all `required` fields.
///
/// Records that are not JSON objects count as missing the first required
/// field.
///
/// # Examples
///
/// ```
/// use casegen_json::validate_test_cases;
/// use serde_json::json;
///
/// let records = vec![json!({"n": 5, "expected_output": 5}), json!({"n": 6})];
/// let report = validate_test_cases(&records, &["n", "expected_output"]);
/// assert!(!report.is_valid());
/// assert_eq!(report.to_string(), "Test case #2 missing field: expected_output");
/// ```
pub fn validate_test_cases(records: &[Value], required: &[&str]) -> ValidationReport {
    let missing = records.iter().enumerate().find_map(|(i, record)| {
        required
            .iter()
            .find(|field| record.get(**field).is_none())
            .map(|field| MissingField {
                record: i + 1,
                field: (*field).to_string(),
            })
    });

    let report = ValidationReport {
        total: records.len(),
        missing,
    };
    if report.is_valid() {
        debug!(total = report.total, "all test cases valid");
    } else {
        warn!("{}", report);
    }
    report
}

/// Validate typed test cases by checking their serialized form.
pub fn validate_typed(cases: &[TestCase], required: &[&str]) -> Result<ValidationReport> {
    let records = cases
        .iter()
        .map(serde_json::to_value)
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| JsonError::Serialize(e.to_string()))?;
    Ok(validate_test_cases(&records, required))
}
