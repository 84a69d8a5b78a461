//! Interest inference from click and view logs.
//!
//! Clicks and dwell time are normalized independently against the
//! busiest category, then blended 40/60 in favor of dwell time.

use std::collections::BTreeMap;

use vantage_core::errors::{VantageError, VantageResult};
use vantage_core::models::{ClickEvent, UserPreference, ViewEvent};

/// Per-category accumulator.
#[derive(Debug, Default)]
struct CategoryTally {
    clicks: u64,
    view_ms: f64,
}

/// Infer per-category interest scores from raw interaction logs.
///
/// Every observed category gets an entry; a category seen only in
/// clicks (or only in views) scores 0 on the missing side. Output is
/// sorted by category. The function keeps no memory of prior calls.
pub fn infer(clicks: &[ClickEvent], views: &[ViewEvent]) -> VantageResult<Vec<UserPreference>> {
    // BTreeMap keeps the output deterministic without a second sort.
    let mut tallies: BTreeMap<&str, CategoryTally> = BTreeMap::new();

    for click in clicks {
        if click.category.is_empty() {
            return Err(VantageError::invalid(format!(
                "click on {:?} has an empty category",
                click.content_id
            )));
        }
        tallies.entry(&click.category).or_default().clicks += 1;
    }

    for view in views {
        if view.category.is_empty() {
            return Err(VantageError::invalid(format!(
                "view of {:?} has an empty category",
                view.content_id
            )));
        }
        if !view.duration_ms.is_finite() || view.duration_ms < 0.0 {
            return Err(VantageError::invalid(format!(
                "view of {:?} has an invalid duration: {}",
                view.content_id, view.duration_ms
            )));
        }
        tallies.entry(&view.category).or_default().view_ms += view.duration_ms;
    }

    // Normalize against the busiest category on each axis. An all-zero
    // axis divides by 1 so it contributes 0 instead of NaN.
    let max_clicks = tallies.values().map(|t| t.clicks).max().unwrap_or(0);
    let max_view_ms = tallies.values().map(|t| t.view_ms).fold(0.0f64, f64::max);
    let click_denom = if max_clicks == 0 { 1.0 } else { max_clicks as f64 };
    let view_denom = if max_view_ms == 0.0 { 1.0 } else { max_view_ms };

    let preferences = tallies
        .into_iter()
        .map(|(category, tally)| {
            let clicks_norm = tally.clicks as f64 / click_denom * 100.0;
            let views_norm = tally.view_ms / view_denom * 100.0;
            let interest = (clicks_norm * 0.4 + views_norm * 0.6).round().clamp(0.0, 100.0);
            UserPreference {
                category: category.to_string(),
                interest: interest as u8,
            }
        })
        .collect();

    Ok(preferences)
}
