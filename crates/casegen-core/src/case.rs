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

//! Test case records.
//!
//! Each category has its own record struct. [`TestCase`] wraps them without a
//! tag, so a serialized case is a plain JSON object carrying exactly the
//! category's fields:
//!
//! ```json
//! {"input": [3, 1, 2], "expected_output": [1, 2, 3], "difficulty": "medium",
//!  "description": "Array with 3 elements (random order)"}
//! ```

use crate::category::{Category, DataStructureKind, MathKind};
use crate::reference;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// How hard a case is meant to be. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    EdgeCase,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::EdgeCase => "edge_case",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scalar expected output: a count or value, or a yes/no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Bool(bool),
    Int(i64),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Bool(b) => write!(f, "{}", b),
            Answer::Int(i) => write!(f, "{}", i),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SortingCase {
    pub input: Vec<i64>,
    pub expected_output: Vec<i64>,
    pub difficulty: Difficulty,
    pub description: String,
}

/// A search case. `expected_output` is the first index of `target` in
/// `array`, or `-1` when the target is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchingCase {
    pub array: Vec<i64>,
    pub target: i64,
    pub expected_output: i64,
    pub difficulty: Difficulty,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataStructureCase {
    pub input: Vec<i64>,
    pub expected_output: Answer,
    pub difficulty: Difficulty,
    pub description: String,
}

impl DataStructureCase {
    /// The sub-kind this case was generated as, recovered from its description.
    pub fn kind(&self) -> Option<DataStructureKind> {
        DataStructureKind::from_description(&self.description)
    }

    fn recompute(&self) -> Option<Answer> {
        match self.kind()? {
            DataStructureKind::ListSum => {
                let sum = self
                    .input
                    .iter()
                    .try_fold(0i64, |acc, &v| acc.checked_add(v))?;
                Some(Answer::Int(sum))
            }
            DataStructureKind::UniqueElements => {
                let distinct: HashSet<i64> = self.input.iter().copied().collect();
                Some(Answer::Int(distinct.len() as i64))
            }
            DataStructureKind::MaxElement => self.input.iter().max().map(|&m| Answer::Int(m)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MathCase {
    pub n: i64,
    pub expected_output: Answer,
    pub difficulty: Difficulty,
    pub description: String,
}

impl MathCase {
    /// The sub-kind this case was generated as, recovered from its description.
    pub fn kind(&self) -> Option<MathKind> {
        MathKind::from_description(&self.description)
    }

    fn recompute(&self) -> Option<Answer> {
        match self.kind()? {
            MathKind::Fibonacci => {
                let n = u32::try_from(self.n).ok()?;
                let value = reference::fibonacci(n)?;
                i64::try_from(value).ok().map(Answer::Int)
            }
            MathKind::Factorial => {
                let n = u32::try_from(self.n).ok()?;
                let value = reference::factorial(n)?;
                i64::try_from(value).ok().map(Answer::Int)
            }
            MathKind::PrimeCheck => Some(Answer::Bool(reference::is_prime(self.n))),
        }
    }
}

/// One generated test case.
///
/// Deserialization tells the categories apart by shape: `array` marks a
/// search case, `n` a math case, a list `expected_output` a sorting case and a
/// scalar one a data-structures case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TestCase {
    Searching(SearchingCase),
    Math(MathCase),
    Sorting(SortingCase),
    DataStructure(DataStructureCase),
}

impl TestCase {
    pub fn category(&self) -> Category {
        match self {
            TestCase::Sorting(_) => Category::Sorting,
            TestCase::Searching(_) => Category::Searching,
            TestCase::DataStructure(_) => Category::DataStructures,
            TestCase::Math(_) => Category::Math,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        match self {
            TestCase::Sorting(c) => c.difficulty,
            TestCase::Searching(c) => c.difficulty,
            TestCase::DataStructure(c) => c.difficulty,
            TestCase::Math(c) => c.difficulty,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            TestCase::Sorting(c) => &c.description,
            TestCase::Searching(c) => &c.description,
            TestCase::DataStructure(c) => &c.description,
            TestCase::Math(c) => &c.description,
        }
    }

    pub fn is_edge_case(&self) -> bool {
        self.difficulty() == Difficulty::EdgeCase
    }

    /// Recompute the expected output from the inputs and compare.
    ///
    /// Search cases must also keep their array in ascending order. Records
    /// whose sub-kind cannot be recovered from the description are reported
    /// as inconsistent.
    pub fn is_consistent(&self) -> bool {
        match self {
            TestCase::Sorting(c) => {
                let mut sorted = c.input.clone();
                sorted.sort_unstable();
                sorted == c.expected_output
            }
            TestCase::Searching(c) => {
                let ascending = c.array.windows(2).all(|w| w[0] <= w[1]);
                let expected = reference::first_index(&c.array, c.target)
                    .map_or(-1, |i| i as i64);
                ascending && c.expected_output == expected
            }
            TestCase::DataStructure(c) => c.recompute() == Some(c.expected_output),
            TestCase::Math(c) => c.recompute() == Some(c.expected_output),
        }
    }
}

impl From<SortingCase> for TestCase {
    fn from(case: SortingCase) -> Self {
        TestCase::Sorting(case)
    }
}

impl From<SearchingCase> for TestCase {
    fn from(case: SearchingCase) -> Self {
        TestCase::Searching(case)
    }
}

impl From<DataStructureCase> for TestCase {
    fn from(case: DataStructureCase) -> Self {
        TestCase::DataStructure(case)
    }
}

impl From<MathCase> for TestCase {
    fn from(case: MathCase) -> Self {
        TestCase::Math(case)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sorting(input: Vec<i64>, expected: Vec<i64>) -> TestCase {
        SortingCase {
            input,
            expected_output: expected,
            difficulty: Difficulty::Medium,
            description: "test".to_string(),
        }
        .into()
    }

    #[test]
    fn test_difficulty_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(Difficulty::EdgeCase).unwrap(),
            json!("edge_case")
        );
        assert_eq!(Difficulty::Easy.to_string(), "easy");
    }

    #[test]
    fn test_sorting_case_field_order() {
        let case = sorting(vec![2, 1], vec![1, 2]);
        let text = serde_json::to_string(&case).unwrap();
        assert_eq!(
            text,
            r#"{"input":[2,1],"expected_output":[1,2],"difficulty":"medium","description":"test"}"#
        );
    }

    #[test]
    fn test_deserialize_dispatches_by_shape() {
        let searching: TestCase = serde_json::from_value(json!({
            "array": [5], "target": 5, "expected_output": 0,
            "difficulty": "edge_case", "description": "Single element (found)"
        }))
        .unwrap();
        assert_eq!(searching.category(), Category::Searching);

        let math: TestCase = serde_json::from_value(json!({
            "n": 7, "expected_output": true,
            "difficulty": "medium", "description": "Check if 7 is prime"
        }))
        .unwrap();
        assert_eq!(math.category(), Category::Math);

        let sort: TestCase = serde_json::from_value(json!({
            "input": [], "expected_output": [],
            "difficulty": "edge_case", "description": "Empty array"
        }))
        .unwrap();
        assert_eq!(sort.category(), Category::Sorting);

        let ds: TestCase = serde_json::from_value(json!({
            "input": [1, 2], "expected_output": 3,
            "difficulty": "easy", "description": "Sum of array elements"
        }))
        .unwrap();
        assert_eq!(ds.category(), Category::DataStructures);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<TestCase, _> = serde_json::from_value(json!({
            "input": [1], "expected_output": [1], "difficulty": "easy",
            "description": "x", "extra": 1
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_sorting_consistency() {
        assert!(sorting(vec![3, -1, 3], vec![-1, 3, 3]).is_consistent());
        assert!(!sorting(vec![3, -1, 3], vec![-1, 3]).is_consistent());
        assert!(!sorting(vec![3, -1], vec![3, -1]).is_consistent());
    }

    #[test]
    fn test_searching_consistency_requires_first_index() {
        let mut case = SearchingCase {
            array: vec![1, 4, 4, 9],
            target: 4,
            expected_output: 1,
            difficulty: Difficulty::Medium,
            description: "Binary search in sorted array".to_string(),
        };
        assert!(TestCase::from(case.clone()).is_consistent());
        case.expected_output = 2;
        assert!(!TestCase::from(case.clone()).is_consistent());
        case.array = vec![];
        case.expected_output = -1;
        assert!(TestCase::from(case).is_consistent());
    }

    #[test]
    fn test_data_structure_consistency() {
        let mut case = DataStructureCase {
            input: vec![4, 4, 1, 9],
            expected_output: Answer::Int(3),
            difficulty: Difficulty::Easy,
            description: "Count unique elements".to_string(),
        };
        assert_eq!(case.kind(), Some(DataStructureKind::UniqueElements));
        assert!(TestCase::from(case.clone()).is_consistent());

        case.description = "Find maximum element".to_string();
        assert!(!TestCase::from(case.clone()).is_consistent());
        case.expected_output = Answer::Int(9);
        assert!(TestCase::from(case.clone()).is_consistent());

        case.description = "Mystery".to_string();
        assert!(!TestCase::from(case).is_consistent());
    }

    #[test]
    fn test_math_consistency() {
        let case = MathCase {
            n: 10,
            expected_output: Answer::Int(55),
            difficulty: Difficulty::Medium,
            description: MathKind::Fibonacci.describe(10),
        };
        assert!(TestCase::from(case).is_consistent());

        let case = MathCase {
            n: 4,
            expected_output: Answer::Bool(true),
            difficulty: Difficulty::Medium,
            description: MathKind::PrimeCheck.describe(4),
        };
        assert!(!TestCase::from(case).is_consistent());
    }
}
