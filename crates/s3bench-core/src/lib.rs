pub mod config;
pub mod error;
pub mod logging;

pub mod bench;
pub mod report;
pub mod s3;
pub mod sink;
