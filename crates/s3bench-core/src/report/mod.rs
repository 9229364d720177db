//! Aggregate saved benchmark results across instance types.
//!
//! Groups result records by the instance type encoded in each file name and
//! picks, per tool, the settings that gave the highest average throughput.

mod instance;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::bench::BenchmarkResult;

pub use instance::{bandwidth, instance_type_from_path};

const UNKNOWN_BANDWIDTH: &str = "unknown";

/// Best-performing settings for one tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestSettings {
    pub concurrency: usize,
    pub part_size_mb: u64,
    pub throughput_mbps: f64,
}

/// Per-instance entry of `summary.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceSummary {
    pub bandwidth: String,
    pub best_settings: BTreeMap<String, BestSettings>,
}

/// Parses a result file: a JSON array of records, or one record per line.
pub fn parse_results(data: &str) -> Result<Vec<BenchmarkResult>> {
    let trimmed = data.trim_start();
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).context("parse JSON array of results");
    }
    data.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).with_context(|| format!("parse result on line {}", i + 1))
        })
        .collect()
}

/// Loads result files, grouped by instance type (sorted by name).
pub fn load_results(files: &[PathBuf]) -> Result<BTreeMap<String, Vec<BenchmarkResult>>> {
    let mut by_instance: BTreeMap<String, Vec<BenchmarkResult>> = BTreeMap::new();
    for path in files {
        let data = fs::read_to_string(path)
            .with_context(|| format!("read results {}", path.display()))?;
        let results =
            parse_results(&data).with_context(|| format!("results file {}", path.display()))?;
        let instance_type = instance_type_from_path(path);
        tracing::debug!(file = %path.display(), %instance_type, count = results.len(), "loaded results");
        by_instance.entry(instance_type).or_default().extend(results);
    }
    Ok(by_instance)
}

/// Highest-throughput record per tool. On ties the earlier record wins.
pub fn best_settings(results: &[BenchmarkResult]) -> BTreeMap<String, BestSettings> {
    let mut best: BTreeMap<String, BestSettings> = BTreeMap::new();
    for r in results {
        let better = best
            .get(&r.tool)
            .map_or(true, |b| r.avg_throughput_mbps > b.throughput_mbps);
        if better {
            best.insert(
                r.tool.clone(),
                BestSettings {
                    concurrency: r.concurrency,
                    part_size_mb: r.part_size_mb,
                    throughput_mbps: r.avg_throughput_mbps,
                },
            );
        }
    }
    best
}

pub fn summarize(
    by_instance: &BTreeMap<String, Vec<BenchmarkResult>>,
) -> BTreeMap<String, InstanceSummary> {
    by_instance
        .iter()
        .map(|(instance_type, results)| {
            let summary = InstanceSummary {
                bandwidth: bandwidth(instance_type)
                    .unwrap_or(UNKNOWN_BANDWIDTH)
                    .to_string(),
                best_settings: best_settings(results),
            };
            (instance_type.clone(), summary)
        })
        .collect()
}

/// `summary.json` goes next to the first input file.
pub fn summary_path(first_input: &Path) -> PathBuf {
    first_input
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join("summary.json")
}

pub fn write_summary(path: &Path, summary: &BTreeMap<String, InstanceSummary>) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    fs::write(path, json).with_context(|| format!("write summary {}", path.display()))?;
    Ok(())
}
