//! Benchmarks for the rotation math layer.

use criterion::criterion_main;

mod extract;

criterion_main!(extract::benches);
