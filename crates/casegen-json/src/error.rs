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

//! Error types for JSON fixture I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for JSON fixture operations.
pub type Result<T> = std::result::Result<T, JsonError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JsonError {
    /// Reading or writing a fixture file failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// The fixture file exceeds the configured size limit.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes")]
    FileTooLarge {
        path: PathBuf,
        actual: u64,
        max: u64,
    },

    /// Test cases could not be encoded.
    #[error("JSON serialization error: {0}")]
    Serialize(String),

    /// The input is not a JSON array of test case records.
    #[error("JSON parse error: {0}")]
    Parse(String),
}

impl JsonError {
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }
}
