//! [`TelemetryEngine`] — owns the metric buffer and rule set.
//!
//! The buffer is an explicitly sized instance held by the engine, so
//! multiple engines (one per session, say) never share hidden state.

use vantage_core::models::{MetricKind, MetricSample};

use crate::analyzer;
use crate::buffer::MetricBuffer;
use crate::rules::{default_rules, ThresholdRule};

/// Facade tying a [`MetricBuffer`] to a threshold rule set.
#[derive(Debug)]
pub struct TelemetryEngine {
    buffer: MetricBuffer,
    rules: Vec<ThresholdRule>,
}

impl TelemetryEngine {
    /// Engine with the reference rule set and default buffer capacity.
    pub fn new() -> Self {
        Self {
            buffer: MetricBuffer::new(),
            rules: default_rules(),
        }
    }

    /// Engine with a custom rule set and buffer capacity.
    pub fn with_rules(rules: Vec<ThresholdRule>, buffer_capacity: usize) -> Self {
        Self {
            buffer: MetricBuffer::with_capacity(buffer_capacity),
            rules,
        }
    }

    /// Record a sample stamped with the current time.
    pub fn record(&mut self, kind: MetricKind, value: f64) {
        self.buffer.record(kind, value);
    }

    /// Record a collector-timestamped sample.
    pub fn record_sample(&mut self, sample: MetricSample) {
        self.buffer.record_sample(sample);
    }

    /// Current suggestions for the buffered samples.
    pub fn suggestions(&self) -> Vec<String> {
        analyzer::analyze(&self.buffer, &self.rules)
    }

    /// Read access to the underlying buffer.
    pub fn buffer(&self) -> &MetricBuffer {
        &self.buffer
    }

    /// The active rule set, in evaluation order.
    pub fn rules(&self) -> &[ThresholdRule] {
        &self.rules
    }

    /// Serialize the buffered samples and current suggestions to JSON
    /// for the dashboard renderer.
    pub fn snapshot(&self) -> serde_json::Value {
        serde_json::json!({
            "samples": self.buffer.samples(),
            "suggestions": self.suggestions(),
        })
    }
}

impl Default for TelemetryEngine {
    fn default() -> Self {
        Self::new()
    }
}
