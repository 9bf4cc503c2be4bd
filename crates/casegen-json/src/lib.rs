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

//! Casegen JSON I/O
//!
//! Reads and writes generated test cases as a JSON array of objects, checks
//! records for required fields and renders them for humans.
//!
//! # Examples
//!
//! ```rust
//! use casegen_core::Generator;
//! use casegen_json::{from_json_str, required_fields, to_json_string, validate_typed};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = Generator::new("searching")?;
//! let cases = generator.generate(5, true, Some(42));
//!
//! let json = to_json_string(&cases)?;
//! assert_eq!(from_json_str(&json)?, cases);
//!
//! let report = validate_typed(&cases, required_fields(generator.category()))?;
//! assert!(report.is_valid());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! File loads are capped at [`DEFAULT_MAX_FILE_SIZE`] bytes; set the
//! `CASEGEN_MAX_FILE_SIZE` environment variable to change the limit.

mod error;
mod io;
mod render;
mod validate;

pub use error::{JsonError, Result};
pub use io::{
    export_to_json, from_json_str, load_from_json, load_records, to_json_string,
    to_json_string_compact, DEFAULT_MAX_FILE_SIZE,
};
pub use render::render_test_case;
pub use validate::{
    required_fields, validate_test_cases, validate_typed, MissingField, ValidationReport,
};
