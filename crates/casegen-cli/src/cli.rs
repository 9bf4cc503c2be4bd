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

//! CLI command definitions and argument parsing.

use crate::commands::{self, GenerateArgs};
use crate::error::CliError;
use casegen_core::DEFAULT_COUNT;
use clap::Subcommand;
use std::path::PathBuf;

/// Default directory for `generate-all` output.
pub const DEFAULT_OUT_DIR: &str = "data/generated_tests";

/// Number of cases per category written by `generate-all`.
pub const DEFAULT_BATCH_COUNT: usize = 10;

/// Top-level CLI commands.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use casegen_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    /// Generate test cases for one category
    ///
    /// Prints a JSON array of test cases to stdout, or writes it to a file.
    /// When edge cases are included, the last two slots of the batch are
    /// reserved for them (sorting and searching only).
    Generate {
        /// Category: sorting, searching, data_structures or math
        #[arg(value_name = "CATEGORY")]
        category: String,

        /// Number of test cases
        #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
        count: usize,

        /// Leave out the fixed edge cases
        #[arg(long)]
        no_edge_cases: bool,

        /// Seed for a reproducible batch
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Generate a timestamped fixture file for every category
    ///
    /// Writes `<OUT_DIR>/<category>_<YYYYmmdd_HHMMSS>.json` for each
    /// category, creating the directory if needed.
    GenerateAll {
        /// Output directory
        #[arg(long, default_value = DEFAULT_OUT_DIR)]
        out_dir: PathBuf,

        /// Number of test cases per category
        #[arg(short = 'n', long, default_value_t = DEFAULT_BATCH_COUNT)]
        count: usize,

        /// Seed for reproducible batches
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Check that every record has the required fields
    ///
    /// Fields come from `--fields`, or from `--category`'s record layout.
    /// Without either, only the fields common to all categories are required.
    Validate {
        /// Fixture file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Comma-separated required field names
        #[arg(long, value_delimiter = ',', conflicts_with = "category")]
        fields: Option<Vec<String>>,

        /// Require the fields of this category's records
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Recompute expected outputs and report inconsistent records
    Check {
        /// Fixture file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Pretty-print the records in a fixture file
    Show {
        /// Fixture file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

impl Commands {
    /// Execute the command with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the category is unknown, a file cannot be read or
    /// written, or validation fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Generate {
                category,
                count,
                no_edge_cases,
                seed,
                output,
                compact,
            } => commands::generate(&GenerateArgs {
                category,
                count,
                include_edge_cases: !no_edge_cases,
                seed,
                output,
                compact,
            }),
            Commands::GenerateAll {
                out_dir,
                count,
                seed,
            } => commands::generate_all(&out_dir, count, seed).map(|_| ()),
            Commands::Validate {
                file,
                fields,
                category,
            } => commands::validate(&file, fields.as_deref(), category.as_deref()),
            Commands::Check { file } => commands::check(&file),
            Commands::Show { file } => commands::show(&file),
        }
    }
}
