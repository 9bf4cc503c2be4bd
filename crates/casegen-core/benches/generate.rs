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

//! Generation throughput per category.

use casegen_core::{Category, Generator};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for category in Category::ALL {
        let generator = Generator::for_category(category);
        group.bench_with_input(
            BenchmarkId::from_parameter(category),
            &generator,
            |b, generator| b.iter(|| generator.generate(black_box(100), true, Some(42))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
