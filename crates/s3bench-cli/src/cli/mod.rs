//! CLI for the s3bench download benchmark.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use s3bench_core::bench::BenchParams;
use s3bench_core::config::{self, BenchConfig};
use std::path::PathBuf;

use commands::{run_aggregate, run_download_bench};

/// Top-level CLI. Without a subcommand, runs the download benchmark.
#[derive(Debug, Parser)]
#[command(name = "s3bench")]
#[command(about = "S3 download benchmark using the Rust Transfer Manager", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    #[command(flatten)]
    pub download: DownloadArgs,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Find the best concurrency/part size per tool from saved result files.
    Aggregate {
        /// Result files named `<instance-type>_*.json` (JSON array or one record per line).
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,
    },
}

/// Flags of the download benchmark. Unset values come from the config file,
/// then built-in defaults.
#[derive(Debug, Clone, Default, Args)]
pub struct DownloadArgs {
    /// S3 bucket name (required).
    #[arg(long)]
    pub bucket: Option<String>,

    /// S3 object key (required).
    #[arg(long)]
    pub key: Option<String>,

    /// AWS region [default: us-east-1].
    #[arg(long)]
    pub region: Option<String>,

    /// AWS profile name.
    #[arg(long)]
    pub profile: Option<String>,

    /// Max concurrent part downloads [default: 10].
    #[arg(long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// Part size in MB [default: 16].
    #[arg(long, value_name = "MB")]
    pub part_size_mb: Option<u64>,

    /// Number of timed downloads [default: 3].
    #[arg(long, value_name = "N")]
    pub iterations: Option<u32>,

    /// Object size in bytes (required), used for throughput.
    #[arg(long, value_name = "BYTES")]
    pub file_size: Option<u64>,

    /// Value of the `tool` field in the output [default: rust-transfer-manager].
    #[arg(long, value_name = "LABEL")]
    pub tool_label: Option<String>,
}

impl DownloadArgs {
    /// Overlay the flags on `cfg`. Missing required flags become empty/zero
    /// and are rejected by `BenchParams::validate`.
    pub fn into_params(self, cfg: &BenchConfig) -> BenchParams {
        let mut params = BenchParams::new(
            self.bucket.as_deref().unwrap_or_default(),
            self.key.as_deref().unwrap_or_default(),
            self.file_size.unwrap_or(0),
            cfg,
        );
        if let Some(region) = self.region {
            params.region = region;
        }
        if self.profile.is_some() {
            params.profile = self.profile;
        }
        if let Some(n) = self.concurrency {
            params.concurrency = n;
        }
        if let Some(mb) = self.part_size_mb {
            params.part_size_mb = mb;
        }
        if let Some(n) = self.iterations {
            params.iterations = n;
        }
        if let Some(label) = self.tool_label {
            params.tool_label = label;
        }
        params
    }
}

impl Cli {
    pub async fn run_from_args() -> Result<()> {
        let cli = match Cli::try_parse() {
            Ok(cli) => cli,
            // Help/version go to stdout with status 0; real parse errors exit 1.
            Err(err) if !err.use_stderr() => err.exit(),
            Err(err) => {
                let _ = err.print();
                std::process::exit(1);
            }
        };

        match cli.command {
            Some(CliCommand::Aggregate { files }) => run_aggregate(&files)?,
            None => {
                let cfg = config::load_or_default()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_download_bench(cli.download.into_params(&cfg)).await?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
