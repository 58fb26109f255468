use std::fs::read_to_string;

use criterion::{criterion_group, criterion_main, Criterion};
use g16tools::output::classify;

pub fn classify_output(c: &mut Criterion) {
    let contents = read_to_string("testfiles/g16/water_opt_freq.out").unwrap();
    c.bench_function("classify", |b| b.iter(|| classify(&contents)));
}

criterion_group!(benches, classify_output);
criterion_main!(benches);
