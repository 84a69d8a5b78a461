use serde::{Deserialize, Serialize};

/// A catalog entry supplied by the content-management collaborator.
/// Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    /// Singular category; at most one category-match bonus per item.
    pub category: String,
    /// Tag matches stack: one bonus per preference whose category appears here.
    pub tags: Vec<String>,
    /// Popularity on a 0-100 scale, clamped at scoring time.
    pub popularity: f64,
}
