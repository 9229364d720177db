//! In-memory object store standing in for S3 in integration tests.
//!
//! Serves objects part by part into a `DiscardSink`, with a fixed virtual
//! delay per part, so part size and timing behave like a real ranged download
//! under a paused tokio clock.

use s3bench_core::bench::ObjectDownloader;
use s3bench_core::error::BoxError;
use s3bench_core::sink::DiscardSink;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

pub struct MemoryStore {
    objects: HashMap<(String, String), Vec<u8>>,
    part_size: usize,
    part_delay: Duration,
    downloads: AtomicU32,
}

impl MemoryStore {
    pub fn new(part_size: usize, part_delay: Duration) -> Self {
        Self {
            objects: HashMap::new(),
            part_size,
            part_delay,
            downloads: AtomicU32::new(0),
        }
    }

    pub fn with_object(mut self, bucket: &str, key: &str, body: Vec<u8>) -> Self {
        self.objects.insert((bucket.to_string(), key.to_string()), body);
        self
    }

    pub fn downloads(&self) -> u32 {
        self.downloads.load(Ordering::SeqCst)
    }
}

impl ObjectDownloader for &MemoryStore {
    async fn download_once(&self, bucket: &str, key: &str) -> Result<u64, BoxError> {
        self.downloads.fetch_add(1, Ordering::SeqCst);
        let body = self
            .objects
            .get(&(bucket.to_string(), key.to_string()))
            .ok_or_else(|| format!("NoSuchKey: s3://{bucket}/{key}"))?;

        let sink = DiscardSink::new();
        // Serve the last part first to mimic out-of-order part completion.
        let parts: Vec<(usize, &[u8])> = body
            .chunks(self.part_size)
            .enumerate()
            .map(|(i, c)| (i * self.part_size, c))
            .rev()
            .collect();
        for (offset, part) in parts {
            tokio::time::sleep(self.part_delay).await;
            sink.write_at(offset as u64, part);
        }
        Ok(sink.extent())
    }
}
