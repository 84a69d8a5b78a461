//! # vantage-telemetry
//!
//! Runtime metric collection and anomaly analysis: a bounded rolling
//! buffer of timestamped samples, a static threshold rule set, and a
//! single-pass analyzer that turns recent samples into human-readable
//! suggestions.
//!
//! Everything here is synchronous and allocation-light; the host calls
//! [`MetricBuffer::record`] from its collector and hands the buffer to
//! [`analyzer::analyze`] (or uses the [`TelemetryEngine`] facade) when
//! it wants suggestions.

pub mod analyzer;
pub mod buffer;
pub mod engine;
pub mod rules;
pub mod tracing_setup;

pub use analyzer::analyze;
pub use buffer::MetricBuffer;
pub use engine::TelemetryEngine;
pub use rules::{default_rules, ThresholdRule, Trigger};
