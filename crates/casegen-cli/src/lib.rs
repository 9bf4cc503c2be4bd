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

//! Casegen CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **generate**: Generate one batch of test cases for a category
//! - **generate-all**: Write a timestamped fixture file for every category
//! - **validate**: Check that every record in a file has the required fields
//! - **check**: Recompute expected outputs and flag inconsistent records
//! - **show**: Pretty-print the records in a file
//!
//! # Examples
//!
//! ```no_run
//! use casegen_cli::commands::{generate, GenerateArgs};
//!
//! # fn main() -> Result<(), casegen_cli::error::CliError> {
//! generate(&GenerateArgs {
//!     category: "searching".to_string(),
//!     count: 10,
//!     include_edge_cases: true,
//!     seed: Some(42),
//!     output: Some("searching.json".into()),
//!     compact: false,
//! })?;
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! Library logs go to stderr through `tracing`. The default filter is
//! `casegen=warn`; override it with `RUST_LOG`, e.g. `RUST_LOG=debug`.

pub mod cli;
pub mod commands;
pub mod error;
