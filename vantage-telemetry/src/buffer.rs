//! Bounded, append-only store of runtime metric samples.
//!
//! Eviction is global FIFO across all kinds: the cap protects total
//! memory, so a bursty kind can temporarily crowd out quieter ones.
//! That is a documented trade-off, not per-kind fairness.

use chrono::{DateTime, Utc};
use vantage_core::constants::METRIC_BUFFER_CAPACITY;
use vantage_core::models::{MetricKind, MetricSample};

/// Rolling buffer of metric samples with capacity-based eviction.
///
/// Insertion order is preserved; `record` always succeeds.
#[derive(Debug, Clone)]
pub struct MetricBuffer {
    samples: Vec<MetricSample>,
    /// Maximum samples retained across all kinds.
    capacity: usize,
}

impl MetricBuffer {
    pub fn new() -> Self {
        Self::with_capacity(METRIC_BUFFER_CAPACITY)
    }

    /// Create with a custom capacity. A zero capacity retains nothing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::new(),
            capacity,
        }
    }

    /// Append a sample stamped with the current time.
    pub fn record(&mut self, kind: MetricKind, value: f64) {
        self.record_sample(MetricSample::now(kind, value));
    }

    /// Append a sample the collector has already timestamped.
    pub fn record_sample(&mut self, sample: MetricSample) {
        tracing::debug!(
            event = "metric_recorded",
            kind = %sample.kind,
            value = sample.value,
            "metric recorded"
        );

        self.samples.push(sample);
        if self.samples.len() > self.capacity {
            self.samples.drain(..self.samples.len() - self.capacity);
        }
    }

    /// The most recent samples of one kind, chronological, most-recent-last,
    /// at most `window` long. An absent kind yields an empty vec.
    pub fn recent(&self, kind: MetricKind, window: usize) -> Vec<&MetricSample> {
        let mut matched: Vec<&MetricSample> =
            self.samples.iter().filter(|s| s.kind == kind).collect();
        if matched.len() > window {
            matched.drain(..matched.len() - window);
        }
        matched
    }

    /// Samples of one kind captured at or after `cutoff`, chronological.
    pub fn since(&self, kind: MetricKind, cutoff: DateTime<Utc>) -> Vec<&MetricSample> {
        self.samples
            .iter()
            .filter(|s| s.kind == kind && s.captured_at >= cutoff)
            .collect()
    }

    /// All retained samples in insertion order.
    pub fn samples(&self) -> &[MetricSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for MetricBuffer {
    fn default() -> Self {
        Self::new()
    }
}
