use criterion::{black_box, criterion_group, criterion_main, Criterion};

use odometer::eval::{evaluate, max_distance};

/// Builds a synthetic movement sequence cycling through the full alphabet
/// plus ignored filler characters.
fn synthetic_sequence(len: usize) -> String {
    ">><*<.|S*".chars().cycle().take(len).collect()
}

fn bench_max_distance_long(c: &mut Criterion) {
    let seq = synthetic_sequence(64 * 1024);
    c.bench_function("max_distance_64k", |b| {
        b.iter(|| max_distance(black_box(&seq)))
    });
}

fn bench_evaluate_short(c: &mut Criterion) {
    c.bench_function("evaluate_short", |b| b.iter(|| evaluate(black_box(">***>"))));
}

criterion_group!(benches, bench_max_distance_long, bench_evaluate_short);
criterion_main!(benches);
