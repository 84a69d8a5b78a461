//! Static threshold rule set, keyed by metric kind.
//!
//! Loaded once, never mutated. At most one rule per kind is meaningful;
//! if a caller supplies duplicates the analyzer uses the first match.

use serde::{Deserialize, Serialize};
use vantage_core::constants::{
    CPU_USAGE_THRESHOLD_PCT, ERROR_RATE_THRESHOLD_PCT, LOAD_TIME_THRESHOLD_MS,
    MEMORY_USAGE_THRESHOLD_BYTES, RESOURCE_COUNT_THRESHOLD,
};
use vantage_core::models::MetricKind;

/// Which side of the threshold trips the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    /// Breached when the value exceeds the threshold.
    Above,
    /// Breached when the value falls below the threshold.
    Below,
}

/// A single threshold rule for one metric kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdRule {
    pub kind: MetricKind,
    pub trigger: Trigger,
    pub threshold: f64,
}

impl ThresholdRule {
    pub fn new(kind: MetricKind, trigger: Trigger, threshold: f64) -> Self {
        Self {
            kind,
            trigger,
            threshold,
        }
    }

    /// Does `value` trip this rule?
    pub fn is_breached(&self, value: f64) -> bool {
        match self.trigger {
            Trigger::Above => value > self.threshold,
            Trigger::Below => value < self.threshold,
        }
    }

    /// Render the suggestion string the dashboard displays verbatim.
    pub fn render(&self, value: f64) -> String {
        match self.kind {
            MetricKind::LoadTime => {
                format!("High load time detected: {}ms", value.round())
            }
            MetricKind::MemoryUsage => {
                format!(
                    "High memory usage detected ({}MB)",
                    (value / 1024.0 / 1024.0).round()
                )
            }
            MetricKind::ResourceCount => {
                format!("High resource count ({} resources)", value.round())
            }
            MetricKind::CpuUsage => {
                format!("High CPU usage detected ({}%)", value.round())
            }
            MetricKind::ErrorRate => {
                format!("Elevated error rate detected ({:.1}%)", value)
            }
        }
    }
}

/// The reference rule set, in declaration order.
pub fn default_rules() -> Vec<ThresholdRule> {
    vec![
        ThresholdRule::new(MetricKind::LoadTime, Trigger::Above, LOAD_TIME_THRESHOLD_MS),
        ThresholdRule::new(
            MetricKind::MemoryUsage,
            Trigger::Above,
            MEMORY_USAGE_THRESHOLD_BYTES,
        ),
        ThresholdRule::new(
            MetricKind::ResourceCount,
            Trigger::Above,
            RESOURCE_COUNT_THRESHOLD,
        ),
        ThresholdRule::new(MetricKind::CpuUsage, Trigger::Above, CPU_USAGE_THRESHOLD_PCT),
        ThresholdRule::new(
            MetricKind::ErrorRate,
            Trigger::Above,
            ERROR_RATE_THRESHOLD_PCT,
        ),
    ]
}
