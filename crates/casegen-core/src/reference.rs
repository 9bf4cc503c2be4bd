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

//! Reference implementations used to compute expected outputs.
//!
//! These are deliberately plain iterative versions; the generated cases are
//! what exercise faster or cleverer solutions.

/// The `n`-th Fibonacci number, 0-indexed (`F(0) = 0`, `F(1) = 1`).
///
/// Returns `None` when the result does not fit in a `u64` (`n > 93`).
///
/// # Examples
///
/// ```
/// use casegen_core::reference::fibonacci;
///
/// assert_eq!(fibonacci(0), Some(0));
/// assert_eq!(fibonacci(10), Some(55));
/// ```
pub fn fibonacci(n: u32) -> Option<u64> {
    if n <= 1 {
        return Some(u64::from(n));
    }
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 2..=n {
        let next = a.checked_add(b)?;
        a = b;
        b = next;
    }
    Some(b)
}

/// `n!`, with `0! = 1! = 1`.
///
/// Returns `None` when the result does not fit in a `u64` (`n > 20`).
pub fn factorial(n: u32) -> Option<u64> {
    (2..=u64::from(n)).try_fold(1u64, |acc, i| acc.checked_mul(i))
}

/// Primality by trial division over odd candidates up to `floor(sqrt(n))`.
///
/// # Examples
///
/// ```
/// use casegen_core::reference::is_prime;
///
/// assert!(is_prime(2));
/// assert!(!is_prime(4));
/// assert!(is_prime(97));
/// ```
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut divisor = 3;
    // divisor <= n / divisor avoids overflowing divisor * divisor
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Index of the first occurrence of `target` in `values`.
pub fn first_index(values: &[i64], target: i64) -> Option<usize> {
    values.iter().position(|&v| v == target)
}
