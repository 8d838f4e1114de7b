//! File backend benchmarks.
//!
//! Criterion view of the same reads the harness times, useful for comparing
//! single-file against fan-out reads at different widths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use readlat_core::{generate_context, ConcurrentFileBackend, ReadBackend, SingleFileBackend};

const PAYLOAD_SIZE: usize = 100 * 1024;

fn bench_single_file(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let payload = generate_context(PAYLOAD_SIZE, &mut rand::thread_rng());
    let mut backend = SingleFileBackend::new(dir.path().join("single.txt"));
    backend.seed(&payload).unwrap();

    c.bench_function("fs/single_100kb", |b| {
        b.iter(|| black_box(backend.read().unwrap().len()));
    });
}

fn bench_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("fs/fan_out_100kb");
    let dir = tempfile::tempdir().unwrap();
    let payload = generate_context(PAYLOAD_SIZE, &mut rand::thread_rng());

    for files in [10, 50] {
        let mut backend = ConcurrentFileBackend::new(dir.path().join(format!("w{}", files)), files);
        backend.seed(&payload).unwrap();

        group.bench_function(BenchmarkId::from_parameter(files), |b| {
            b.iter(|| black_box(backend.read().unwrap().len()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_file, bench_fan_out);
criterion_main!(benches);
