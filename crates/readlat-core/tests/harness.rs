//! End-to-end runs over the backends that need no external server.

use rand::rngs::StdRng;
use rand::SeedableRng;

use readlat_core::backends::split_chunks;
use readlat_core::{
    generate_context, BenchConfig, ConcurrentFileBackend, Payload, ReadBackend, Runner,
    SingleFileBackend, SqliteBackend,
};

fn local_backends(dir: &std::path::Path, file_count: usize) -> Vec<Box<dyn ReadBackend>> {
    vec![
        Box::new(SingleFileBackend::new(dir.join("single.txt"))),
        Box::new(ConcurrentFileBackend::new(dir.join("chunks"), file_count)),
        Box::new(SqliteBackend::open(dir.join("bench.db")).unwrap()),
    ]
}

#[test]
fn test_every_local_backend_returns_the_payload() {
    let dir = tempfile::tempdir().unwrap();
    let payload = generate_context(10_000, &mut StdRng::seed_from_u64(1));

    for mut backend in local_backends(dir.path(), 50) {
        backend.seed(&payload).unwrap();
        // 10_000 is divisible by 50, so the fan-out backend drops nothing.
        assert_eq!(backend.read().unwrap(), payload.as_str(), "backend {}", backend.label());
    }
}

#[test]
fn test_sequential_run_reports_each_backend() {
    let dir = tempfile::tempdir().unwrap();
    let config = BenchConfig::new()
        .with_payload_size(4 * 1024)
        .with_iterations(30)
        .with_warmup(3)
        .with_file_count(8);
    config.validate().unwrap();

    let payload = generate_context(config.payload_size, &mut rand::thread_rng());
    let runner = Runner::from_config(&config);

    let mut reports = Vec::new();
    for mut backend in local_backends(dir.path(), config.file_count) {
        reports.push(runner.run(backend.as_mut(), &payload).unwrap());
    }

    let labels: Vec<&str> = reports.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["fs_single", "fs_concurrent", "sqlite"]);
    for report in &reports {
        assert_eq!(report.samples, 30);
        let s = report.summary;
        assert!(s.p50 <= s.p95 && s.p95 <= s.p99 && s.p99 <= s.max);
        assert!(s.mean > 0.0 && s.mean <= s.max);
    }
}

#[test]
fn test_fan_out_drops_only_the_remainder() {
    let dir = tempfile::tempdir().unwrap();
    let payload = Payload::from("abcdefghij".repeat(10) + "xyz");
    let mut backend = ConcurrentFileBackend::new(dir.path(), 50);

    backend.seed(&payload).unwrap();
    let content = backend.read().unwrap();

    assert_eq!(content.len(), 100);
    assert_eq!(content, split_chunks(payload.as_str(), 50).unwrap().concat());
    assert!(!content.contains("xyz"));
}

#[test]
fn test_single_file_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let mut backend = SingleFileBackend::new(dir.path().join("ten.txt"));
    backend.seed(&Payload::from("abcdefghij")).unwrap();
    assert_eq!(backend.read().unwrap(), "abcdefghij");
}
