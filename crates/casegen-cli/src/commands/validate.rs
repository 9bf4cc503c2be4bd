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

//! Validate command - required-field checks on fixture files

use crate::error::CliError;
use casegen_core::Category;
use casegen_json::{load_records, required_fields, validate_test_cases};
use colored::Colorize;
use std::path::Path;

/// Fields every record carries regardless of category.
pub const COMMON_FIELDS: &[&str] = &["expected_output", "difficulty", "description"];

/// Validate that every record in `file` has the required fields.
///
/// The field list is `fields` when given, otherwise the layout of `category`,
/// otherwise [`COMMON_FIELDS`].
///
/// # Errors
///
/// Returns `Err` if `fields` names no field, the category is unknown, the
/// file cannot be loaded, or a record is missing a field.
pub fn validate(
    file: &Path,
    fields: Option<&[String]>,
    category: Option<&str>,
) -> Result<(), CliError> {
    let required: Vec<&str> = match (fields, category) {
        (Some(fields), _) => {
            let names: Vec<&str> = fields
                .iter()
                .map(|f| f.trim())
                .filter(|f| !f.is_empty())
                .collect();
            if names.is_empty() {
                return Err(CliError::InvalidInput(
                    "--fields needs at least one field name".to_string(),
                ));
            }
            names
        }
        (None, Some(name)) => required_fields(name.parse::<Category>()?).to_vec(),
        (None, None) => COMMON_FIELDS.to_vec(),
    };

    let records = load_records(file)?;

    let report = validate_test_cases(&records, &required);
    if report.is_valid() {
        println!("{} {}: {}", "✓".green().bold(), file.display(), report);
        Ok(())
    } else {
        println!("{} {}", "✗".red().bold(), file.display());
        Err(CliError::ValidationFailed(report.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_field_list_is_invalid_input() {
        let missing = Path::new("/nonexistent/fixture.json");
        for fields in [vec![], vec![String::new()], vec![" ".to_string(), "".to_string()]] {
            let err = validate(missing, Some(fields.as_slice()), None).unwrap_err();
            assert!(matches!(err, CliError::InvalidInput(_)), "{:?}", err);
        }
    }

    #[test]
    fn test_blank_entries_are_ignored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cases.json");
        fs::write(&path, r#"[{"n": 3, "expected_output": 6}]"#).unwrap();

        let fields = vec!["n".to_string(), "".to_string(), " expected_output".to_string()];
        assert!(validate(&path, Some(fields.as_slice()), None).is_ok());
    }

    #[test]
    fn test_unknown_category_rejected() {
        let err = validate(Path::new("unused.json"), None, Some("graphs")).unwrap_err();
        assert!(matches!(err, CliError::Generator(_)));
    }
}
