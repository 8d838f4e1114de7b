//! readlat - compare read latency across storage backends.

use std::path::Path;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use readlat_core::report::{format_banner, format_comparison, format_section};
use readlat_core::{
    generate_context, BackendKind, BenchConfig, ConcurrentFileBackend, ReadBackend, RedisBackend,
    Runner, SingleFileBackend, SqliteBackend,
};

mod config;

use config::Args;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so the report on stdout stays clean.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "readlat=info,readlat_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Args::parse().into_config();
    config.validate()?;

    tracing::info!(
        payload_bytes = config.payload_size,
        payload_kb = config.payload_kb(),
        iterations = config.iterations,
        warmup = config.warmup,
        files = config.file_count,
        backends = ?config.backends,
        "configuration loaded"
    );

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let payload = generate_context(config.payload_size, &mut rng);

    let workdir = tempfile::Builder::new().prefix("readlat-").tempdir()?;
    tracing::debug!(path = %workdir.path().display(), "created work directory");

    println!("\n{}\n", format_banner(payload.len(), config.iterations));

    let runner = Runner::from_config(&config);
    let mut reports = Vec::with_capacity(config.backends.len());

    for &kind in &config.backends {
        let mut backend = open_backend(kind, &config, workdir.path()).map_err(|e| {
            if kind.needs_server() {
                tracing::error!(
                    backend = %kind,
                    error = %e,
                    "failed to connect; is the server running? select local backends with --backends"
                );
            } else {
                tracing::error!(backend = %kind, error = %e, "failed to open backend");
            }
            e
        })?;
        let report = runner.run(backend.as_mut(), &payload)?;
        println!("{}\n", format_section(&report));
        reports.push(report);
    }

    if reports.len() > 1 {
        println!("{}\n", format_comparison(&reports));
    }

    Ok(())
}

/// Construct and connect the backend for `kind`.
fn open_backend(
    kind: BackendKind,
    config: &BenchConfig,
    workdir: &Path,
) -> readlat_core::Result<Box<dyn ReadBackend>> {
    let backend: Box<dyn ReadBackend> = match kind {
        BackendKind::FsSingle => Box::new(SingleFileBackend::new(workdir.join("single.txt"))),
        BackendKind::FsConcurrent => Box::new(ConcurrentFileBackend::new(
            workdir.join("chunks"),
            config.file_count,
        )),
        BackendKind::Sqlite => Box::new(SqliteBackend::open(workdir.join("bench.db"))?),
        BackendKind::Redis => Box::new(RedisBackend::connect(&config.redis_url)?),
        BackendKind::Postgres => open_postgres(config)?,
    };
    Ok(backend)
}

#[cfg(feature = "postgres")]
fn open_postgres(config: &BenchConfig) -> readlat_core::Result<Box<dyn ReadBackend>> {
    Ok(Box::new(readlat_core::PostgresBackend::connect(
        &config.postgres_url,
    )?))
}

#[cfg(not(feature = "postgres"))]
fn open_postgres(_config: &BenchConfig) -> readlat_core::Result<Box<dyn ReadBackend>> {
    Err(readlat_core::Error::Config(
        "built without the `postgres` feature".into(),
    ))
}
