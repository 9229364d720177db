//! `s3bench aggregate <files>` – best settings per tool per instance type.

use anyhow::Result;
use s3bench_core::report::{self, InstanceSummary};
use std::collections::BTreeMap;
use std::path::PathBuf;

fn print_summary(summary: &BTreeMap<String, InstanceSummary>) {
    println!("{}", "=".repeat(80));
    println!("S3 Download Benchmark - Optimal Settings by Instance Type");
    println!("{}", "=".repeat(80));
    println!();
    for (instance_type, entry) in summary {
        println!("Instance: {} ({})", instance_type, entry.bandwidth);
        println!("{}", "-".repeat(60));
        println!(
            "{:<25} {:>12} {:>12} {:>15}",
            "Tool", "Concurrency", "Part Size", "Throughput"
        );
        println!(
            "{} {} {} {}",
            "-".repeat(25),
            "-".repeat(12),
            "-".repeat(12),
            "-".repeat(15)
        );
        for (tool, best) in &entry.best_settings {
            println!(
                "{:<25} {:>12} {:>10} MB {:>12.1} MB/s",
                tool, best.concurrency, best.part_size_mb, best.throughput_mbps
            );
        }
        println!();
    }
}

pub fn run_aggregate(files: &[PathBuf]) -> Result<()> {
    let Some(first) = files.first() else {
        anyhow::bail!("at least one result file is required");
    };
    let by_instance = report::load_results(files)?;
    let summary = report::summarize(&by_instance);
    print_summary(&summary);

    let summary_path = report::summary_path(first);
    report::write_summary(&summary_path, &summary)?;
    println!("Summary saved to: {}", summary_path.display());
    Ok(())
}
