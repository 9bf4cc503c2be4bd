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

//! Property-based tests for generator invariants.

use casegen_core::{Category, Generator, TestCase};
use proptest::prelude::*;

fn any_category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: the batch never exceeds the requested count.
    #[test]
    fn prop_batch_never_exceeds_count(
        category in any_category(),
        count in 0usize..40,
        edge in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let cases = Generator::for_category(category).generate(count, edge, Some(seed));
        prop_assert!(cases.len() <= count);
        if !edge || category.has_edge_cases() {
            prop_assert_eq!(cases.len(), count);
        }
    }

    /// Property: every record satisfies its category's invariant.
    #[test]
    fn prop_records_are_consistent(
        category in any_category(),
        count in 0usize..30,
        seed in any::<u64>(),
    ) {
        let cases = Generator::for_category(category).generate(count, true, Some(seed));
        for case in &cases {
            prop_assert!(case.is_consistent(), "inconsistent: {:?}", case);
        }
    }

    /// Property: regular samples precede edge cases.
    #[test]
    fn prop_edge_cases_only_at_tail(
        category in any_category(),
        count in 3usize..30,
        seed in any::<u64>(),
    ) {
        let cases = Generator::for_category(category).generate(count, true, Some(seed));
        let first_edge = cases.iter().position(TestCase::is_edge_case).unwrap_or(cases.len());
        prop_assert!(cases[first_edge..].iter().all(TestCase::is_edge_case));
        if category.has_edge_cases() {
            prop_assert_eq!(first_edge, count - 2);
        }
    }

    /// Property: seeded generation is a pure function of its inputs.
    #[test]
    fn prop_seeded_generation_is_deterministic(
        category in any_category(),
        count in 0usize..20,
        edge in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let generator = Generator::for_category(category);
        prop_assert_eq!(
            generator.generate(count, edge, Some(seed)),
            generator.generate(count, edge, Some(seed))
        );
    }
}
