// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use gantry_solver::optimizer::ProfitOptimizer;
use std::hint::black_box;

/// Horizon ladder covering small plans up to tables with tens of thousands
/// of cells.
const HORIZONS: [i64; 6] = [64, 256, 1_024, 4_096, 16_384, 65_536];

fn bench_optimize_horizons(c: &mut Criterion) {
    let optimizer = ProfitOptimizer::<i64>::new();
    let mut group = c.benchmark_group("optimize_benchmark");

    for horizon in HORIZONS {
        // One table cell per point on the time axis, horizon + 1 in total.
        group.throughput(Throughput::Elements(horizon as u64 + 1));

        group.bench_with_input(
            BenchmarkId::new("optimize", horizon),
            &horizon,
            |b, &horizon| {
                b.iter(|| {
                    let outcome = optimizer
                        .optimize(black_box(horizon))
                        .expect("benchmark horizons are valid");
                    black_box(outcome.max_profit())
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("optimize_with_ties", horizon),
            &horizon,
            |b, &horizon| {
                b.iter(|| {
                    let outcome = optimizer
                        .optimize_with_ties(black_box(horizon))
                        .expect("benchmark horizons are valid");
                    black_box(outcome.best_counts())
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_optimize_horizons);
criterion_main!(benches);
