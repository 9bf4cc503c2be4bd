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

//! Structured error types for the Casegen CLI.

use casegen_core::Error as CoreError;
use casegen_json::JsonError;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Casegen CLI operations.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// The category name was rejected by the generator.
    #[error(transparent)]
    Generator(#[from] CoreError),

    /// Reading, writing or decoding a fixture file failed.
    #[error(transparent)]
    Json(#[from] JsonError),

    /// Creating an output directory failed.
    #[error("I/O error for '{path}': {message}")]
    Io { path: PathBuf, message: String },

    /// Writing to stdout failed.
    #[error("Failed to write to stdout: {0}")]
    Stdout(String),

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A record is missing a required field.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// Records whose stored answer disagrees with recomputation.
    #[error("{count} of {total} test cases are inconsistent")]
    Inconsistent { count: usize, total: usize },
}

impl CliError {
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }
}
