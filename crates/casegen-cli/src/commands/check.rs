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

//! Check command - recompute expected outputs

use crate::error::CliError;
use casegen_json::load_from_json;
use colored::Colorize;
use std::path::Path;

/// Load typed test cases and verify each stored answer against a
/// recomputation from its inputs.
///
/// # Errors
///
/// Returns `Err` if the file cannot be loaded or any record is inconsistent.
pub fn check(file: &Path) -> Result<(), CliError> {
    let cases = load_from_json(file)?;

    let mut inconsistent = 0;
    for (i, case) in cases.iter().enumerate() {
        if !case.is_consistent() {
            inconsistent += 1;
            println!(
                "{} Test case #{} ({}): {}",
                "✗".red().bold(),
                i + 1,
                case.category(),
                case.description()
            );
        }
    }

    if inconsistent > 0 {
        return Err(CliError::Inconsistent {
            count: inconsistent,
            total: cases.len(),
        });
    }

    println!(
        "{} {}: all {} test cases are consistent",
        "✓".green().bold(),
        file.display(),
        cases.len()
    );
    Ok(())
}
