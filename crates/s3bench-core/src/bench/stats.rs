//! Per-iteration samples and their reduction into summary statistics.

use std::time::Duration;

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Throughput in MiB/s for `file_size_bytes` transferred in `elapsed_secs`.
/// Returns 0.0 when no time elapsed.
pub fn throughput_mib_s(file_size_bytes: u64, elapsed_secs: f64) -> f64 {
    if elapsed_secs <= 0.0 {
        return 0.0;
    }
    (file_size_bytes as f64 / BYTES_PER_MIB) / elapsed_secs
}

/// Timing of one download.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationSample {
    pub elapsed_secs: f64,
    pub throughput_mib_s: f64,
}

impl IterationSample {
    pub fn new(elapsed: Duration, file_size_bytes: u64) -> Self {
        let elapsed_secs = elapsed.as_secs_f64();
        Self {
            elapsed_secs,
            throughput_mib_s: throughput_mib_s(file_size_bytes, elapsed_secs),
        }
    }
}

/// Aggregate over all samples of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub avg_elapsed: f64,
    pub avg_throughput_mib_s: f64,
    pub min_elapsed: f64,
    pub max_elapsed: f64,
}

impl Summary {
    /// Reduces `samples`; `None` when there is nothing to average.
    pub fn from_samples(samples: &[IterationSample]) -> Option<Self> {
        let mut acc = RunningSummary::default();
        for s in samples {
            acc.push(s);
        }
        acc.finish()
    }
}

/// Running sums and extremes, so a run's memory doesn't grow with its length.
#[derive(Debug, Clone, Copy)]
pub struct RunningSummary {
    count: u64,
    total_elapsed: f64,
    total_throughput: f64,
    min_elapsed: f64,
    max_elapsed: f64,
}

impl Default for RunningSummary {
    fn default() -> Self {
        Self {
            count: 0,
            total_elapsed: 0.0,
            total_throughput: 0.0,
            min_elapsed: f64::INFINITY,
            max_elapsed: f64::NEG_INFINITY,
        }
    }
}

impl RunningSummary {
    pub fn push(&mut self, sample: &IterationSample) {
        self.count += 1;
        self.total_elapsed += sample.elapsed_secs;
        self.total_throughput += sample.throughput_mib_s;
        self.min_elapsed = self.min_elapsed.min(sample.elapsed_secs);
        self.max_elapsed = self.max_elapsed.max(sample.elapsed_secs);
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// `None` if nothing was pushed.
    pub fn finish(&self) -> Option<Summary> {
        if self.count == 0 {
            return None;
        }
        let n = self.count as f64;
        Some(Summary {
            // min <= avg <= max must hold under float rounding too.
            avg_elapsed: (self.total_elapsed / n).clamp(self.min_elapsed, self.max_elapsed),
            avg_throughput_mib_s: self.total_throughput / n,
            min_elapsed: self.min_elapsed,
            max_elapsed: self.max_elapsed,
        })
    }
}
