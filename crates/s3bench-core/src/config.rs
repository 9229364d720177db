use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_TOOL_LABEL: &str = "rust-transfer-manager";

/// Default benchmark settings loaded from `~/.config/s3bench/config.toml`.
/// Command-line flags override every field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// AWS region of the bucket.
    pub region: String,
    /// Named profile from the shared AWS config/credentials files.
    pub profile: Option<String>,
    /// Maximum number of concurrent ranged GETs per download.
    pub concurrency: usize,
    /// Target part size in MiB.
    pub part_size_mb: u64,
    /// Number of timed downloads per run.
    pub iterations: u32,
    /// Label written into the `tool` field of the result record.
    pub tool_label: String,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            profile: None,
            concurrency: 10,
            part_size_mb: 16,
            iterations: 3,
            tool_label: DEFAULT_TOOL_LABEL.to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("s3bench")?;
    Ok(xdg_dirs.get_config_home().join("config.toml"))
}

/// Load configuration from disk. A missing file yields the defaults; nothing is written.
pub fn load_or_default() -> Result<BenchConfig> {
    let path = config_path()?;
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(BenchConfig::default());
    }
    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<BenchConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: BenchConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
