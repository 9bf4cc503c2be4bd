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

//! Show command - pretty-print fixture records

use super::write_output;
use crate::error::CliError;
use casegen_json::{load_from_json, render_test_case};
use std::path::Path;

/// Print every record in `file` as a titled block.
pub fn show(file: &Path) -> Result<(), CliError> {
    let cases = load_from_json(file)?;
    let rendered: String = cases
        .iter()
        .enumerate()
        .map(|(i, case)| render_test_case(case, i))
        .collect();
    write_output(&rendered, None)
}
