//! S3 download capability backed by the transfer manager.
//!
//! The transfer manager splits the GET into ranged part requests and runs up
//! to `concurrency` of them at once. This module only configures it and
//! drains the ordered chunk stream into a `DiscardSink`.

mod profile;

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_s3_transfer_manager::types::{ConcurrencyMode, PartSize};

use crate::bench::{BenchParams, ObjectDownloader};
use crate::error::{BenchError, BoxError};
use crate::sink::DiscardSink;

pub use profile::normalize_profile;

/// Load region and credentials. Credentials are resolved eagerly so a bad
/// profile fails here rather than on the first timed iteration.
pub async fn load_sdk_config(
    region: &str,
    profile: Option<&str>,
) -> Result<SdkConfig, BenchError> {
    let mut loader =
        aws_config::defaults(BehaviorVersion::latest()).region(Region::new(region.to_string()));
    if let Some(profile) = normalize_profile(profile) {
        tracing::debug!(profile, "using named AWS profile");
        loader = loader.profile_name(profile);
    }
    let sdk_config = loader.load().await;

    let provider = sdk_config
        .credentials_provider()
        .ok_or_else(|| BenchError::configuration("no AWS credentials provider configured"))?;
    provider
        .provide_credentials()
        .await
        .map_err(|e| BenchError::Configuration(Box::new(e)))?;

    tracing::info!(region, "AWS config loaded");
    Ok(sdk_config)
}

/// Transfer-manager client set up for one concurrency / part-size combination.
pub struct TransferDownloader {
    client: aws_sdk_s3_transfer_manager::Client,
}

impl TransferDownloader {
    /// Resolve AWS config for `params` and build the downloader.
    pub async fn connect(params: &BenchParams) -> Result<Self, BenchError> {
        let sdk_config = load_sdk_config(&params.region, params.profile.as_deref()).await?;
        Ok(Self::from_sdk_config(
            &sdk_config,
            params.concurrency,
            params.part_size_bytes(),
        ))
    }

    pub fn from_sdk_config(
        sdk_config: &SdkConfig,
        concurrency: usize,
        part_size_bytes: u64,
    ) -> Self {
        let s3_client = aws_sdk_s3::Client::new(sdk_config);
        let tm_config = aws_sdk_s3_transfer_manager::Config::builder()
            .client(s3_client)
            .concurrency(ConcurrencyMode::Explicit(concurrency))
            .part_size(PartSize::Target(part_size_bytes))
            .build();
        tracing::debug!(concurrency, part_size_bytes, "transfer manager configured");
        Self {
            client: aws_sdk_s3_transfer_manager::Client::new(tm_config),
        }
    }
}

impl ObjectDownloader for TransferDownloader {
    async fn download_once(&self, bucket: &str, key: &str) -> Result<u64, BoxError> {
        let sink = DiscardSink::new();
        let mut handle = self.client.download().bucket(bucket).key(key).initiate()?;

        // Chunks arrive in object order.
        let body = handle.body_mut();
        let mut offset = 0u64;
        while let Some(chunk) = body.next().await {
            let data = chunk?.data.into_bytes();
            offset += sink.write_at(offset, &data) as u64;
        }

        tracing::trace!(bucket, key, bytes = sink.bytes_written(), "object drained");
        Ok(sink.extent())
    }
}
