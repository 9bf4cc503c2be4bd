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

//! Core generator and data model for Casegen fixtures.
//!
//! Casegen produces randomized test cases (inputs plus expected outputs) for
//! four categories of introductory algorithm problems:
//!
//! - **sorting**: sort an integer array ascending
//! - **searching**: locate a target in a sorted array
//! - **data_structures**: sum, distinct count or maximum of an array
//! - **math**: Fibonacci numbers, factorials and primality
//!
//! Sorting and searching additionally carry a fixed table of edge cases
//! (empty input, single element) that can be appended to a batch.
//!
//! # Examples
//!
//! ```rust
//! use casegen_core::{Generator, TestCase};
//!
//! # fn main() -> Result<(), casegen_core::Error> {
//! let generator = Generator::new("sorting")?;
//! let cases = generator.generate(5, true, Some(42));
//! assert_eq!(cases.len(), 5);
//!
//! // Seeded batches are reproducible.
//! assert_eq!(cases, Generator::new("sorting")?.generate(5, true, Some(42)));
//!
//! // The last two records are the fixed edge cases.
//! if let TestCase::Sorting(empty) = &cases[3] {
//!     assert!(empty.input.is_empty());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Randomness
//!
//! Every call to [`Generator::generate`] owns its random source: a
//! [`StdRng`](rand::rngs::StdRng) seeded from the caller's seed, or from
//! entropy when no seed is given. Generators share no state, so two instances
//! never interfere with each other's sequences.

mod case;
mod category;
mod error;
mod generator;
pub mod reference;

pub use case::{
    Answer, DataStructureCase, Difficulty, MathCase, SearchingCase, SortingCase, TestCase,
};
pub use category::{Category, DataStructureKind, MathKind};
pub use error::{Error, Result};
pub use generator::{edge_cases, GenerateOptions, Generator, DEFAULT_COUNT, EDGE_CASE_SLOTS};
