/// Vantage engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Page load time above this is flagged (milliseconds).
pub const LOAD_TIME_THRESHOLD_MS: f64 = 3000.0;

/// Heap usage above this is flagged (bytes).
pub const MEMORY_USAGE_THRESHOLD_BYTES: f64 = 50.0 * 1024.0 * 1024.0;

/// Resource entry count above this is flagged.
pub const RESOURCE_COUNT_THRESHOLD: f64 = 50.0;

/// CPU usage above this is flagged (percent).
pub const CPU_USAGE_THRESHOLD_PCT: f64 = 80.0;

/// Error rate above this is flagged (percent).
pub const ERROR_RATE_THRESHOLD_PCT: f64 = 1.0;

/// Hard cap on retained metric samples across all kinds.
pub const METRIC_BUFFER_CAPACITY: usize = 1000;

/// Number of most-recent samples per kind considered during analysis.
pub const TREND_WINDOW: usize = 7;

/// Latest sample above this multiple of the window mean counts as degradation.
pub const TREND_DEGRADATION_FACTOR: f64 = 1.2;

/// Default number of ranked content items returned.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Confidence level at or above which an experiment is called significant.
pub const SIGNIFICANCE_THRESHOLD: u8 = 95;
