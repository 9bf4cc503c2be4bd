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

//! Problem categories and their randomly chosen sub-kinds.

use crate::error::Error;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// A family of algorithm problems the generator can produce cases for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Sort an integer array ascending.
    Sorting,
    /// Find the first index of a target in a sorted array.
    Searching,
    /// Sum, distinct count or maximum of an array.
    DataStructures,
    /// Fibonacci, factorial or primality of a single integer.
    Math,
}

impl Category {
    /// Every category, in canonical order.
    pub const ALL: [Category; 4] = [
        Category::Sorting,
        Category::Searching,
        Category::DataStructures,
        Category::Math,
    ];

    /// The identifier used on the command line and in file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sorting => "sorting",
            Category::Searching => "searching",
            Category::DataStructures => "data_structures",
            Category::Math => "math",
        }
    }

    /// Whether this category has a fixed edge-case table.
    pub fn has_edge_cases(&self) -> bool {
        matches!(self, Category::Sorting | Category::Searching)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sorting" => Ok(Category::Sorting),
            "searching" => Ok(Category::Searching),
            "data_structures" => Ok(Category::DataStructures),
            "math" => Ok(Category::Math),
            other => Err(Error::UnsupportedCategory(other.to_string())),
        }
    }
}

/// Which quantity a data-structures case asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataStructureKind {
    ListSum,
    UniqueElements,
    MaxElement,
}

impl DataStructureKind {
    pub const ALL: [DataStructureKind; 3] = [
        DataStructureKind::ListSum,
        DataStructureKind::UniqueElements,
        DataStructureKind::MaxElement,
    ];

    /// Pick a sub-kind uniformly at random.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DataStructureKind::ListSum => "list_sum",
            DataStructureKind::UniqueElements => "unique_elements",
            DataStructureKind::MaxElement => "max_element",
        }
    }

    /// The fixed description attached to cases of this kind.
    pub fn description(&self) -> &'static str {
        match self {
            DataStructureKind::ListSum => "Sum of array elements",
            DataStructureKind::UniqueElements => "Count unique elements",
            DataStructureKind::MaxElement => "Find maximum element",
        }
    }

    /// Recover the sub-kind from a case description.
    pub fn from_description(description: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.description() == description)
    }
}

impl fmt::Display for DataStructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which function a math case asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathKind {
    Fibonacci,
    Factorial,
    PrimeCheck,
}

impl MathKind {
    pub const ALL: [MathKind; 3] = [MathKind::Fibonacci, MathKind::Factorial, MathKind::PrimeCheck];

    /// Pick a sub-kind uniformly at random.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MathKind::Fibonacci => "fibonacci",
            MathKind::Factorial => "factorial",
            MathKind::PrimeCheck => "prime_check",
        }
    }

    /// The description attached to a case of this kind for input `n`.
    pub fn describe(&self, n: i64) -> String {
        match self {
            MathKind::Fibonacci => format!("Fibonacci number at position {}", n),
            MathKind::Factorial => format!("Factorial of {}", n),
            MathKind::PrimeCheck => format!("Check if {} is prime", n),
        }
    }

    /// Recover the sub-kind from a case description.
    pub fn from_description(description: &str) -> Option<Self> {
        if description.starts_with("Fibonacci number at position ") {
            Some(MathKind::Fibonacci)
        } else if description.starts_with("Factorial of ") {
            Some(MathKind::Factorial)
        } else if description.starts_with("Check if ") && description.ends_with(" is prime") {
            Some(MathKind::PrimeCheck)
        } else {
            None
        }
    }
}

impl fmt::Display for MathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
