use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The closed set of runtime metric kinds the engine understands.
///
/// Wire names are camelCase to match the collector payloads
/// (`loadTime`, `memoryUsage`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricKind {
    /// Page load time in milliseconds.
    LoadTime,
    /// Heap usage in bytes.
    MemoryUsage,
    /// Number of loaded resource entries.
    ResourceCount,
    /// CPU usage in percent.
    CpuUsage,
    /// Error rate in percent.
    ErrorRate,
}

impl MetricKind {
    /// All kinds, in rule-set declaration order.
    pub const ALL: [MetricKind; 5] = [
        MetricKind::LoadTime,
        MetricKind::MemoryUsage,
        MetricKind::ResourceCount,
        MetricKind::CpuUsage,
        MetricKind::ErrorRate,
    ];

    /// The camelCase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::LoadTime => "loadTime",
            MetricKind::MemoryUsage => "memoryUsage",
            MetricKind::ResourceCount => "resourceCount",
            MetricKind::CpuUsage => "cpuUsage",
            MetricKind::ErrorRate => "errorRate",
        }
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single timestamped runtime measurement. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSample {
    pub kind: MetricKind,
    pub value: f64,
    pub captured_at: DateTime<Utc>,
}

impl MetricSample {
    /// Create a sample stamped with the current time.
    pub fn now(kind: MetricKind, value: f64) -> Self {
        Self {
            kind,
            value,
            captured_at: Utc::now(),
        }
    }
}
