//! Offset writer that throws the payload away.
//!
//! Downloads only need to be timed, so chunks are "written" here instead of to
//! disk. The sink still tracks how many bytes arrived and how far into the
//! object they reached, which lets the caller sanity-check the transfer.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Discarding writer. Safe to clone and use from multiple tasks; each
/// `write_at` is independent and always succeeds.
#[derive(Debug, Clone, Default)]
pub struct DiscardSink {
    inner: Arc<Counters>,
}

#[derive(Debug, Default)]
struct Counters {
    bytes: AtomicU64,
    extent: AtomicU64,
}

impl DiscardSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept `data` at `offset`. Returns `data.len()`.
    pub fn write_at(&self, offset: u64, data: &[u8]) -> usize {
        let len = data.len() as u64;
        self.inner.bytes.fetch_add(len, Ordering::Relaxed);
        self.inner
            .extent
            .fetch_max(offset.saturating_add(len), Ordering::Relaxed);
        data.len()
    }

    /// Total bytes accepted, including overlapping writes.
    pub fn bytes_written(&self) -> u64 {
        self.inner.bytes.load(Ordering::Relaxed)
    }

    /// Highest `offset + len` seen; equals the object size after a full download.
    pub fn extent(&self) -> u64 {
        self.inner.extent.load(Ordering::Relaxed)
    }
}
