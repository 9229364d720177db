//! Default command – time repeated downloads of one object.

use anyhow::Result;
use s3bench_core::bench::{BenchParams, BenchmarkRunner};
use s3bench_core::s3::TransferDownloader;

pub async fn run_download_bench(params: BenchParams) -> Result<()> {
    // Reject bad flags before touching AWS config or the network.
    params.validate()?;

    eprintln!(
        "Rust Transfer Manager benchmark: concurrency={}, part_size={}MB",
        params.concurrency, params.part_size_mb
    );
    tracing::info!(
        bucket = %params.bucket,
        key = %params.key,
        region = %params.region,
        iterations = params.iterations,
        "starting benchmark"
    );

    let downloader = TransferDownloader::connect(&params).await?;
    let runner = BenchmarkRunner::new(params, downloader)?;
    let result = runner
        .run_with_progress(|i, s| {
            eprintln!(
                "  Iteration {}: {:.2}s ({:.1} MB/s)",
                i, s.elapsed_secs, s.throughput_mib_s
            )
        })
        .await?;

    println!("{}", result.to_json()?);
    Ok(())
}
