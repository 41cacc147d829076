//! Benchmarks for the solver layer.

use criterion::criterion_main;

mod update;

criterion_main!(update::benches);
