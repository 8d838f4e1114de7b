//! Command-line configuration.

use clap::{Parser, ValueEnum};
use readlat_core::config::{
    BackendKind, BenchConfig, DEFAULT_FILE_COUNT, DEFAULT_ITERATIONS, DEFAULT_PAYLOAD_SIZE,
    DEFAULT_POSTGRES_URL, DEFAULT_REDIS_URL, DEFAULT_WARMUP,
};

/// Backend selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    /// One file holding the whole payload.
    FsSingle,
    /// Payload split across files read in parallel.
    FsConcurrent,
    /// PostgreSQL point select.
    Postgres,
    /// Embedded SQLite point select.
    Sqlite,
    /// Redis GET.
    Redis,
}

impl From<BackendArg> for BackendKind {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::FsSingle => BackendKind::FsSingle,
            BackendArg::FsConcurrent => BackendKind::FsConcurrent,
            BackendArg::Postgres => BackendKind::Postgres,
            BackendArg::Sqlite => BackendKind::Sqlite,
            BackendArg::Redis => BackendKind::Redis,
        }
    }
}

/// Command-line arguments for the benchmark.
#[derive(Parser, Debug)]
#[command(name = "readlat")]
#[command(version, about = "Read latency: files vs PostgreSQL vs Redis", long_about = None)]
pub struct Args {
    /// Payload size in bytes.
    #[arg(long, default_value_t = DEFAULT_PAYLOAD_SIZE)]
    pub payload_bytes: usize,

    /// Measured iterations per backend.
    #[arg(short = 'n', long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: usize,

    /// Discarded warmup iterations per backend.
    #[arg(long, default_value_t = DEFAULT_WARMUP)]
    pub warmup: usize,

    /// Number of files for the concurrent-file backend.
    #[arg(long, default_value_t = DEFAULT_FILE_COUNT)]
    pub files: usize,

    /// PostgreSQL connection URL.
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_POSTGRES_URL)]
    pub postgres_url: String,

    /// Redis connection URL.
    #[arg(long, env = "REDIS_URL", default_value = DEFAULT_REDIS_URL)]
    pub redis_url: String,

    /// Backends to measure, comma separated (default: fs-single,fs-concurrent,postgres,redis).
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub backends: Vec<BackendArg>,

    /// Seed for the payload generator.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Args {
    /// Convert command-line arguments to a benchmark configuration.
    pub fn into_config(self) -> BenchConfig {
        let mut config = BenchConfig::new()
            .with_payload_size(self.payload_bytes)
            .with_iterations(self.iterations)
            .with_warmup(self.warmup)
            .with_file_count(self.files)
            .with_postgres_url(self.postgres_url)
            .with_redis_url(self.redis_url);

        if !self.backends.is_empty() {
            config = config.with_backends(self.backends.into_iter().map(Into::into).collect());
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}
