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

//! Human-readable rendering of a single test case.

use casegen_core::TestCase;
use serde_json::Value;

const RULE_WIDTH: usize = 50;

/// Render a test case as a titled block, one `key: value` line per field.
///
/// `index` is 0-based; the title shows it 1-based. String fields print
/// unquoted; every other value prints as compact JSON, so lists read `[1,2]`
/// and boolean answers read `true`/`false`.
///
/// ```text
/// ==================================================
/// Test Case #1
/// ==================================================
/// n                   : 7
/// expected_output     : true
/// difficulty          : medium
/// description         : Check if 7 is prime
/// ```
pub fn render_test_case(case: &TestCase, index: usize) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = format!("\n{rule}\nTest Case #{}\n{rule}\n", index + 1);

    // TestCase always serializes to an object
    if let Ok(Value::Object(fields)) = serde_json::to_value(case) {
        for (key, value) in &fields {
            let shown = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            out.push_str(&format!("{:<20}: {}\n", key, shown));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use casegen_core::{edge_cases, Category};

    #[test]
    fn test_render_lists_fields_in_order() {
        let cases = edge_cases(Category::Searching);
        let text = render_test_case(&cases[1], 1);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "=".repeat(50));
        assert_eq!(lines[2], "Test Case #2");
        assert_eq!(lines[4], "array               : [5]");
        assert_eq!(lines[5], "target              : 5");
        assert_eq!(lines[6], "expected_output     : 0");
        assert_eq!(lines[7], "difficulty          : edge_case");
        assert_eq!(lines[8], "description         : Single element (found)");
    }

    #[test]
    fn test_render_boolean_answer_as_json() {
        let case: TestCase = serde_json::from_str(
            r#"{"n": 97, "expected_output": true, "difficulty": "medium", "description": "Check if 97 is prime"}"#,
        )
        .unwrap();
        let text = render_test_case(&case, 0);
        assert!(text.contains("\nn                   : 97\n"));
        assert!(text.contains("expected_output     : true\n"));
        assert!(text.contains("description         : Check if 97 is prime\n"));
    }
}
