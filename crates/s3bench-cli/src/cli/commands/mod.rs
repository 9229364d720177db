//! CLI command handlers.

mod aggregate;
mod download;

pub use aggregate::run_aggregate;
pub use download::run_download_bench;
