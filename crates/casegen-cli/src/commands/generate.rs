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

//! Generate commands - single batches and full fixture sets

use super::write_output;
use crate::error::CliError;
use casegen_core::{Category, Generator};
use casegen_json::{export_to_json, to_json_string, to_json_string_compact};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Arguments for [`generate`].
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    pub category: String,
    pub count: usize,
    pub include_edge_cases: bool,
    pub seed: Option<u64>,
    /// Write here instead of stdout.
    pub output: Option<PathBuf>,
    /// Single-line JSON.
    pub compact: bool,
}

/// Generate one batch and print it as JSON or write it to a file.
///
/// # Errors
///
/// Returns `Err` if the category is unknown or the output cannot be written.
pub fn generate(args: &GenerateArgs) -> Result<(), CliError> {
    let generator = Generator::new(&args.category)?;
    let cases = generator.generate(args.count, args.include_edge_cases, args.seed);

    let mut json = if args.compact {
        to_json_string_compact(&cases)?
    } else {
        to_json_string(&cases)?
    };

    match &args.output {
        Some(path) => {
            write_output(&json, Some(path.as_path()))?;
            println!(
                "{} Generated {} test cases for {}",
                "✓".green().bold(),
                cases.len(),
                generator.category()
            );
            println!("  Saved to: {}", path.display());
        }
        None => {
            json.push('\n');
            write_output(&json, None)?;
        }
    }
    Ok(())
}

/// Generate a full fixture set: one timestamped file per category, each with
/// `count` cases including edge cases.
///
/// Returns the paths written, in category order.
///
/// # Errors
///
/// Returns `Err` if the directory cannot be created or a file cannot be
/// written.
pub fn generate_all(
    out_dir: &Path,
    count: usize,
    seed: Option<u64>,
) -> Result<Vec<PathBuf>, CliError> {
    fs::create_dir_all(out_dir).map_err(|e| CliError::io_error(out_dir, e))?;
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
    info!(out_dir = %out_dir.display(), count, "generating fixture set");

    let mut written = Vec::with_capacity(Category::ALL.len());
    for category in Category::ALL {
        let cases = Generator::for_category(category).generate(count, true, seed);
        let path = out_dir.join(format!("{}_{}.json", category, timestamp));
        export_to_json(&cases, &path)?;

        println!(
            "{} Generated {} test cases for {}",
            "✓".green().bold(),
            cases.len(),
            category
        );
        println!("  Saved to: {}", path.display());
        written.push(path);
    }
    Ok(written)
}
