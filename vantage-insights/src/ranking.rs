//! Preference-weighted content ranking.
//!
//! Factors: popularity base, direct category match, tag matches.
//! The transient score exists only while sorting; callers observe
//! order, never the number.

use vantage_core::constants::DEFAULT_MAX_RESULTS;
use vantage_core::models::{ContentItem, UserPreference};

/// Weights for the three scoring factors.
#[derive(Debug, Clone)]
pub struct ScorerWeights {
    pub popularity: f64,
    pub category_match: f64,
    pub tag_match: f64,
}

impl Default for ScorerWeights {
    fn default() -> Self {
        Self {
            popularity: 0.3,
            category_match: 0.5,
            tag_match: 0.2,
        }
    }
}

/// Candidate carrying its transient score through the sort.
#[derive(Debug)]
struct ScoredItem<'a> {
    item: &'a ContentItem,
    score: f64,
}

/// Rank `catalog` against `preferences` with the default weights and
/// return the top [`DEFAULT_MAX_RESULTS`] items, best first.
pub fn recommend(preferences: &[UserPreference], catalog: &[ContentItem]) -> Vec<ContentItem> {
    recommend_weighted(
        preferences,
        catalog,
        DEFAULT_MAX_RESULTS,
        &ScorerWeights::default(),
    )
}

/// Rank with caller-supplied weights and result cap.
///
/// An empty catalog yields an empty result; empty preferences degrade
/// to pure popularity order. Ties keep catalog order (stable sort).
pub fn recommend_weighted(
    preferences: &[UserPreference],
    catalog: &[ContentItem],
    max_results: usize,
    weights: &ScorerWeights,
) -> Vec<ContentItem> {
    let mut scored: Vec<ScoredItem<'_>> = catalog
        .iter()
        .map(|item| ScoredItem {
            item,
            score: score_item(item, preferences, weights),
        })
        .collect();

    // Stable sort: equal scores keep their catalog order.
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    tracing::debug!(
        event = "catalog_ranked",
        candidates = catalog.len(),
        preferences = preferences.len(),
        returned = max_results.min(catalog.len()),
        "catalog ranked"
    );

    scored
        .into_iter()
        .take(max_results)
        .map(|s| s.item.clone())
        .collect()
}

/// Score one candidate. Scores stay finite: popularity is clamped to
/// [0, 100] and interest is already bounded by its type.
fn score_item(item: &ContentItem, preferences: &[UserPreference], weights: &ScorerWeights) -> f64 {
    let mut score = item.popularity.clamp(0.0, 100.0) * weights.popularity;

    for pref in preferences {
        let interest = f64::from(pref.interest);
        // Category is singular, so at most one direct match per item.
        if item.category == pref.category {
            score += interest * weights.category_match;
        }
        // Tag bonuses stack across preferences.
        if item.tags.iter().any(|t| t == &pref.category) {
            score += interest * weights.tag_match;
        }
    }

    score
}
