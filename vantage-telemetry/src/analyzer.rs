//! Single-pass anomaly analysis over recent buffer contents.
//!
//! Two classes of suggestion, in a stable order: threshold breaches
//! first (rule-set declaration order), then the load-time trend check.
//! The analyzer is pure; the same buffer snapshot always yields the
//! same suggestion list.

use vantage_core::constants::{TREND_DEGRADATION_FACTOR, TREND_WINDOW};
use vantage_core::models::MetricKind;

use crate::buffer::MetricBuffer;
use crate::rules::ThresholdRule;

/// Analyze recent samples against the rule set and emit suggestions.
pub fn analyze(buffer: &MetricBuffer, rules: &[ThresholdRule]) -> Vec<String> {
    let mut suggestions = Vec::new();
    let mut seen = Vec::with_capacity(rules.len());

    for rule in rules {
        // First rule per kind wins on duplicates.
        if seen.contains(&rule.kind) {
            continue;
        }
        seen.push(rule.kind);

        let recent = buffer.recent(rule.kind, TREND_WINDOW);
        if let Some(latest) = recent.last() {
            if rule.is_breached(latest.value) {
                suggestions.push(rule.render(latest.value));
            }
        }
    }

    if let Some(degradation) = load_time_trend(buffer) {
        suggestions.push(degradation);
    }

    tracing::debug!(
        event = "buffer_analyzed",
        sample_count = buffer.len(),
        suggestion_count = suggestions.len(),
        "buffer analyzed"
    );

    suggestions
}

/// One-step trend check: flags the latest load time when it exceeds
/// 1.2x the recent-window mean. Needs at least 2 samples, so a lone
/// sample never compares against itself.
fn load_time_trend(buffer: &MetricBuffer) -> Option<String> {
    let recent = buffer.recent(MetricKind::LoadTime, TREND_WINDOW);
    if recent.len() < 2 {
        return None;
    }

    let latest = recent.last()?.value;
    let mean = recent.iter().map(|s| s.value).sum::<f64>() / recent.len() as f64;
    if latest > mean * TREND_DEGRADATION_FACTOR {
        return Some(format!(
            "Performance degradation detected ({}ms vs {}ms avg)",
            latest.round(),
            mean.round()
        ));
    }
    None
}
