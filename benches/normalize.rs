//! Benchmarks for escape normalization.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use markprep::normalize::normalize;

fn bench_normalize_bare(c: &mut Criterion) {
    let raw = include_str!("../tests/fixtures/release_notes.md");
    c.bench_function("normalize_bare", |b| b.iter(|| normalize(black_box(raw))));
}

fn bench_normalize_json(c: &mut Criterion) {
    let raw = include_str!("../tests/fixtures/release_notes.json.txt");
    c.bench_function("normalize_json", |b| b.iter(|| normalize(black_box(raw))));
}

fn bench_normalize_double_escaped(c: &mut Criterion) {
    let raw = include_str!("../tests/fixtures/release_notes.double.txt");
    c.bench_function("normalize_double_escaped", |b| {
        b.iter(|| normalize(black_box(raw)))
    });
}

criterion_group!(
    benches,
    bench_normalize_bare,
    bench_normalize_json,
    bench_normalize_double_escaped
);
criterion_main!(benches);
