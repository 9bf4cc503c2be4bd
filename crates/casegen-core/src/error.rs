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

//! Error types for test case generation.

use thiserror::Error;

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the generator.
///
/// Generation itself is total; the only failure is naming a category that
/// does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The category identifier is not one of `sorting`, `searching`,
    /// `data_structures` or `math`.
    #[error("Unsupported task type: {0}")]
    UnsupportedCategory(String),
}
