use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};
use easel_core::axis::nice_range;

fn gen_ranges(n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            let low = (i as f64 * 0.37).sin() * 10f64.powi((i % 9) as i32 - 3);
            let span = 1.0 + (i as f64 * 1.3).cos().abs() * 10f64.powi((i % 7) as i32 - 2);
            (low, low + span)
        })
        .collect()
}

fn bench_nice_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("nice_range");
    for &n in &[1_000usize, 10_000usize] {
        let ranges = gen_ranges(n);
        group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}")), &ranges, |b, ranges| {
            b.iter(|| {
                for &(lo, hi) in ranges {
                    let _ = black_box(nice_range(lo, hi));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_nice_range);
criterion_main!(benches);
