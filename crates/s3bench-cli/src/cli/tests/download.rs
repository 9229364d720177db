//! Tests for the download benchmark flags.

use super::{download_args, parse};
use s3bench_core::config::BenchConfig;

#[test]
fn cli_parse_all_flags() {
    let args = download_args(&[
        "s3bench",
        "--bucket",
        "bench-bucket",
        "--key",
        "objects/1g.bin",
        "--region",
        "eu-west-1",
        "--profile",
        "perf",
        "--concurrency",
        "32",
        "--part-size-mb",
        "8",
        "--iterations",
        "5",
        "--file-size",
        "1073741824",
        "--tool-label",
        "rust-tm-c5n",
    ]);
    assert_eq!(args.bucket.as_deref(), Some("bench-bucket"));
    assert_eq!(args.key.as_deref(), Some("objects/1g.bin"));
    assert_eq!(args.region.as_deref(), Some("eu-west-1"));
    assert_eq!(args.profile.as_deref(), Some("perf"));
    assert_eq!(args.concurrency, Some(32));
    assert_eq!(args.part_size_mb, Some(8));
    assert_eq!(args.iterations, Some(5));
    assert_eq!(args.file_size, Some(1_073_741_824));
    assert_eq!(args.tool_label.as_deref(), Some("rust-tm-c5n"));
}

#[test]
fn defaults_come_from_config() {
    let args = download_args(&["s3bench", "--bucket", "b", "--key", "k", "--file-size", "10"]);
    let params = args.into_params(&BenchConfig::default());
    assert_eq!(params.bucket, "b");
    assert_eq!(params.key, "k");
    assert_eq!(params.file_size_bytes, 10);
    assert_eq!(params.region, "us-east-1");
    assert!(params.profile.is_none());
    assert_eq!(params.concurrency, 10);
    assert_eq!(params.part_size_mb, 16);
    assert_eq!(params.iterations, 3);
    assert_eq!(params.tool_label, "rust-transfer-manager");
    assert!(params.validate().is_ok());
}

#[test]
fn flags_override_config() {
    let cfg = BenchConfig {
        region: "ap-south-1".to_string(),
        profile: Some("from-file".to_string()),
        concurrency: 64,
        part_size_mb: 32,
        iterations: 9,
        tool_label: "file-label".to_string(),
    };
    let args = download_args(&[
        "s3bench",
        "--bucket",
        "b",
        "--key",
        "k",
        "--file-size",
        "10",
        "--iterations",
        "1",
        "--profile",
        "cli",
    ]);
    let params = args.into_params(&cfg);
    assert_eq!(params.iterations, 1);
    assert_eq!(params.profile.as_deref(), Some("cli"));
    assert_eq!(params.region, "ap-south-1");
    assert_eq!(params.concurrency, 64);
    assert_eq!(params.part_size_mb, 32);
    assert_eq!(params.tool_label, "file-label");
}

#[test]
fn missing_required_flags_parse_but_fail_validation() {
    for argv in [
        &["s3bench"][..],
        &["s3bench", "--key", "k", "--file-size", "10"],
        &["s3bench", "--bucket", "b", "--file-size", "10"],
        &["s3bench", "--bucket", "b", "--key", "k"],
        &["s3bench", "--bucket", "b", "--key", "k", "--file-size", "0"],
    ] {
        let params = download_args(argv).into_params(&BenchConfig::default());
        let err = params.validate().unwrap_err();
        assert_eq!(err.to_string(), "--bucket, --key, and --file-size are required");
    }
}

#[test]
fn non_numeric_file_size_is_a_parse_error() {
    use crate::cli::Cli;
    use clap::Parser;
    assert!(Cli::try_parse_from(["s3bench", "--file-size", "big"]).is_err());
    assert!(Cli::try_parse_from(["s3bench", "--iterations", "-1"]).is_err());
    assert_eq!(parse(&["s3bench", "--file-size", "1"]).download.file_size, Some(1));
}
