//! Benchmark runner: download one object `iterations` times and report timing.
//!
//! Iterations run strictly one after another so each measurement sees the
//! network to itself. Any parallelism happens inside a single download and
//! belongs to the `ObjectDownloader`. The first failed iteration aborts the
//! run; no partial result is ever produced.

mod stats;

use serde::{Deserialize, Serialize};
use std::future::Future;
use tokio::time::Instant;

use crate::config::BenchConfig;
use crate::error::{BenchError, BoxError};

pub use stats::{throughput_mib_s, IterationSample, RunningSummary, Summary};

/// Fetches a whole object once and reports how many bytes arrived.
pub trait ObjectDownloader {
    fn download_once(
        &self,
        bucket: &str,
        key: &str,
    ) -> impl Future<Output = Result<u64, BoxError>>;
}

/// Input of a benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchParams {
    pub bucket: String,
    pub key: String,
    pub region: String,
    pub profile: Option<String>,
    pub concurrency: usize,
    pub part_size_mb: u64,
    pub iterations: u32,
    /// Expected object size; throughput is computed from this, not from bytes received.
    pub file_size_bytes: u64,
    pub tool_label: String,
}

impl BenchParams {
    /// Params for `bucket`/`key` with the remaining settings taken from `cfg`.
    pub fn new(bucket: &str, key: &str, file_size_bytes: u64, cfg: &BenchConfig) -> Self {
        Self {
            bucket: bucket.to_string(),
            key: key.to_string(),
            region: cfg.region.clone(),
            profile: cfg.profile.clone(),
            concurrency: cfg.concurrency,
            part_size_mb: cfg.part_size_mb,
            iterations: cfg.iterations,
            file_size_bytes,
            tool_label: cfg.tool_label.clone(),
        }
    }

    pub fn part_size_bytes(&self) -> u64 {
        self.part_size_mb.saturating_mul(1024 * 1024)
    }

    pub fn validate(&self) -> Result<(), BenchError> {
        if self.bucket.is_empty() || self.key.is_empty() || self.file_size_bytes == 0 {
            return Err(BenchError::InvalidInput(
                "--bucket, --key, and --file-size are required".to_string(),
            ));
        }
        if self.iterations == 0 {
            return Err(BenchError::InvalidInput(
                "iterations must be at least 1".to_string(),
            ));
        }
        if self.concurrency == 0 {
            return Err(BenchError::InvalidInput(
                "concurrency must be at least 1".to_string(),
            ));
        }
        if self.part_size_mb == 0 {
            return Err(BenchError::InvalidInput(
                "part size must be at least 1 MB".to_string(),
            ));
        }
        Ok(())
    }
}

/// Terminal output of a successful run; serialized as one JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub tool: String,
    pub concurrency: usize,
    pub part_size_mb: u64,
    pub iterations: u32,
    pub avg_elapsed: f64,
    pub avg_throughput_mbps: f64,
    pub min_elapsed: f64,
    pub max_elapsed: f64,
}

impl BenchmarkResult {
    fn new(params: &BenchParams, summary: Summary) -> Self {
        Self {
            tool: params.tool_label.clone(),
            concurrency: params.concurrency,
            part_size_mb: params.part_size_mb,
            iterations: params.iterations,
            avg_elapsed: summary.avg_elapsed,
            avg_throughput_mbps: summary.avg_throughput_mib_s,
            min_elapsed: summary.min_elapsed,
            max_elapsed: summary.max_elapsed,
        }
    }

    /// Single-line JSON record.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Runs the timed download loop against an injected downloader.
#[derive(Debug)]
pub struct BenchmarkRunner<D> {
    params: BenchParams,
    downloader: D,
}

impl<D: ObjectDownloader> BenchmarkRunner<D> {
    /// Fails with `InvalidInput` if `params` don't pass validation.
    pub fn new(params: BenchParams, downloader: D) -> Result<Self, BenchError> {
        params.validate()?;
        Ok(Self { params, downloader })
    }

    pub async fn run(&self) -> Result<BenchmarkResult, BenchError> {
        self.run_with_progress(|_, _| {}).await
    }

    /// Like `run`, calling `on_sample(iteration, sample)` after every
    /// successful iteration (1-based).
    pub async fn run_with_progress<F>(
        &self,
        mut on_sample: F,
    ) -> Result<BenchmarkResult, BenchError>
    where
        F: FnMut(u32, &IterationSample),
    {
        let p = &self.params;
        let mut summary = RunningSummary::default();

        for iteration in 1..=p.iterations {
            let start = Instant::now();
            let received = self
                .downloader
                .download_once(&p.bucket, &p.key)
                .await
                .map_err(|source| BenchError::Download { iteration, source })?;
            let elapsed = start.elapsed();

            if received != p.file_size_bytes {
                tracing::warn!(
                    iteration,
                    received,
                    expected = p.file_size_bytes,
                    "downloaded size differs from --file-size; throughput uses --file-size"
                );
            }

            let sample = IterationSample::new(elapsed, p.file_size_bytes);
            tracing::debug!(
                iteration,
                elapsed_secs = sample.elapsed_secs,
                throughput_mib_s = sample.throughput_mib_s,
                "iteration done"
            );
            on_sample(iteration, &sample);
            summary.push(&sample);
        }

        let summary = summary.finish().ok_or_else(|| {
            BenchError::InvalidInput("iterations must be at least 1".to_string())
        })?;
        let result = BenchmarkResult::new(p, summary);
        tracing::info!(
            tool = %result.tool,
            iterations = result.iterations,
            avg_elapsed = result.avg_elapsed,
            avg_throughput_mbps = result.avg_throughput_mbps,
            "benchmark finished"
        );
        Ok(result)
    }
}
