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

//! The test case generator.

use crate::case::{
    Answer, DataStructureCase, Difficulty, MathCase, SearchingCase, SortingCase, TestCase,
};
use crate::category::{Category, DataStructureKind, MathKind};
use crate::error::Result;
use crate::reference;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::ops::RangeInclusive;
use tracing::debug;

/// Number of cases generated when the caller does not say.
pub const DEFAULT_COUNT: usize = 5;

/// Slots reserved for edge cases in a batch larger than this many cases.
pub const EDGE_CASE_SLOTS: usize = 2;

/// Parameters for a single [`Generator::generate_with`] call.
///
/// # Examples
///
/// ```
/// use casegen_core::{GenerateOptions, Generator, Category};
///
/// let options = GenerateOptions::new().count(10).edge_cases(false).seed(7);
/// let cases = Generator::for_category(Category::Math).generate_with(&options);
/// assert_eq!(cases.len(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Maximum number of cases in the batch.
    pub count: usize,
    /// Append the category's fixed edge cases after the regular samples.
    pub include_edge_cases: bool,
    /// Seed for a reproducible batch; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            include_edge_cases: true,
            seed: None,
        }
    }
}

impl GenerateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn edge_cases(mut self, include: bool) -> Self {
        self.include_edge_cases = include;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Generates test cases for one fixed [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generator {
    category: Category,
}

impl Generator {
    /// Create a generator from a category identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedCategory`](crate::Error::UnsupportedCategory)
    /// if `category` is not `sorting`, `searching`, `data_structures` or `math`.
    pub fn new(category: &str) -> Result<Self> {
        Ok(Self::for_category(category.parse()?))
    }

    pub fn for_category(category: Category) -> Self {
        Self { category }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Generate a batch of test cases.
    ///
    /// With a `seed` the batch is fully reproducible for the same
    /// `(category, count, include_edge_cases, seed)`. Without one, a fresh
    /// entropy-seeded source is used.
    ///
    /// See [`generate_with_rng`](Self::generate_with_rng) for how regular
    /// samples and edge cases share the `count` slots.
    pub fn generate(
        &self,
        count: usize,
        include_edge_cases: bool,
        seed: Option<u64>,
    ) -> Vec<TestCase> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.generate_with_rng(&mut rng, count, include_edge_cases)
    }

    pub fn generate_with(&self, options: &GenerateOptions) -> Vec<TestCase> {
        self.generate(options.count, options.include_edge_cases, options.seed)
    }

    /// Generate a batch drawing from a caller-owned random source.
    ///
    /// When edge cases are requested and `count` exceeds [`EDGE_CASE_SLOTS`],
    /// `count - 2` regular samples are drawn; otherwise `count` are. The
    /// category's edge cases are appended after the regular samples and the
    /// batch is truncated to `count`. For `count <= 2` the edge cases are
    /// therefore cut off, and categories without edge cases return
    /// `count - 2` records when edge cases are requested.
    pub fn generate_with_rng<R: Rng>(
        &self,
        rng: &mut R,
        count: usize,
        include_edge_cases: bool,
    ) -> Vec<TestCase> {
        let regular = if include_edge_cases && count > EDGE_CASE_SLOTS {
            count - EDGE_CASE_SLOTS
        } else {
            count
        };

        let mut cases: Vec<TestCase> = (0..regular).map(|_| self.sample(rng)).collect();
        if include_edge_cases {
            cases.extend(edge_cases(self.category));
        }
        cases.truncate(count);

        debug!(
            category = %self.category,
            count,
            include_edge_cases,
            generated = cases.len(),
            "generated test cases"
        );
        cases
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> TestCase {
        match self.category {
            Category::Sorting => sorting_case(rng).into(),
            Category::Searching => searching_case(rng).into(),
            Category::DataStructures => data_structure_case(rng).into(),
            Category::Math => math_case(rng).into(),
        }
    }
}

/// The fixed edge cases for a category. Empty for data structures and math.
pub fn edge_cases(category: Category) -> Vec<TestCase> {
    match category {
        Category::Sorting => vec![
            SortingCase {
                input: vec![],
                expected_output: vec![],
                difficulty: Difficulty::EdgeCase,
                description: "Empty array".to_string(),
            }
            .into(),
            SortingCase {
                input: vec![1],
                expected_output: vec![1],
                difficulty: Difficulty::EdgeCase,
                description: "Single element".to_string(),
            }
            .into(),
        ],
        Category::Searching => vec![
            SearchingCase {
                array: vec![],
                target: 1,
                expected_output: -1,
                difficulty: Difficulty::EdgeCase,
                description: "Empty array".to_string(),
            }
            .into(),
            SearchingCase {
                array: vec![5],
                target: 5,
                expected_output: 0,
                difficulty: Difficulty::EdgeCase,
                description: "Single element (found)".to_string(),
            }
            .into(),
        ],
        Category::DataStructures | Category::Math => Vec::new(),
    }
}

/// Draw a length from `len`, then that many values from `values`.
fn random_values<R: Rng>(
    rng: &mut R,
    len: RangeInclusive<usize>,
    values: RangeInclusive<i64>,
) -> Vec<i64> {
    let size = rng.gen_range(len);
    (0..size).map(|_| rng.gen_range(values.clone())).collect()
}

fn sorting_case<R: Rng>(rng: &mut R) -> SortingCase {
    let input = random_values(rng, 5..=20, -100..=100);
    let mut expected_output = input.clone();
    expected_output.sort();

    SortingCase {
        description: format!("Array with {} elements (random order)", input.len()),
        input,
        expected_output,
        difficulty: Difficulty::Medium,
    }
}

fn searching_case<R: Rng>(rng: &mut R) -> SearchingCase {
    let mut array = random_values(rng, 5..=20, 1..=100);
    array.sort();
    let target = array[rng.gen_range(0..array.len())];
    let expected_output = reference::first_index(&array, target).map_or(-1, |i| i as i64);

    SearchingCase {
        array,
        target,
        expected_output,
        difficulty: Difficulty::Medium,
        description: "Binary search in sorted array".to_string(),
    }
}

fn data_structure_case<R: Rng>(rng: &mut R) -> DataStructureCase {
    let kind = DataStructureKind::random(rng);
    let (input, expected_output) = match kind {
        DataStructureKind::ListSum => {
            let input = random_values(rng, 3..=10, 1..=50);
            let sum: i64 = input.iter().sum();
            (input, sum)
        }
        DataStructureKind::UniqueElements => {
            let input = random_values(rng, 5..=15, 1..=10);
            let distinct = input.iter().collect::<HashSet<_>>().len() as i64;
            (input, distinct)
        }
        DataStructureKind::MaxElement => {
            let input = random_values(rng, 3..=10, 1..=100);
            // length is at least 3
            let max = input.iter().copied().max().unwrap_or_default();
            (input, max)
        }
    };

    DataStructureCase {
        input,
        expected_output: Answer::Int(expected_output),
        difficulty: Difficulty::Easy,
        description: kind.description().to_string(),
    }
}

fn math_case<R: Rng>(rng: &mut R) -> MathCase {
    let kind = MathKind::random(rng);
    let (n, expected_output, difficulty) = match kind {
        MathKind::Fibonacci => {
            let n = rng.gen_range(5..=10u32);
            let value = reference::fibonacci(n).unwrap_or_default() as i64;
            (n as i64, Answer::Int(value), Difficulty::Medium)
        }
        MathKind::Factorial => {
            let n = rng.gen_range(3..=10u32);
            let value = reference::factorial(n).unwrap_or_default() as i64;
            (n as i64, Answer::Int(value), Difficulty::Easy)
        }
        MathKind::PrimeCheck => {
            let n = rng.gen_range(2..=100i64);
            (n, Answer::Bool(reference::is_prime(n)), Difficulty::Medium)
        }
    };

    MathCase {
        n,
        expected_output,
        difficulty,
        description: kind.describe(n),
    }
}
