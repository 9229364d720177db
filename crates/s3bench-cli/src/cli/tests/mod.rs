//! CLI parse tests.

use super::{Cli, DownloadArgs};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

pub(super) fn download_args(args: &[&str]) -> DownloadArgs {
    let cli = parse(args);
    assert!(cli.command.is_none(), "expected the download benchmark");
    cli.download
}

mod download;
