use serde::{Deserialize, Serialize};

/// A tracked click, as delivered by the interaction tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickEvent {
    pub content_id: String,
    pub category: String,
}

/// A tracked content view with dwell time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewEvent {
    pub content_id: String,
    pub category: String,
    /// Dwell time in milliseconds.
    pub duration_ms: f64,
}

/// Inferred interest in one content category.
///
/// Produced fresh on every inference call; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreference {
    pub category: String,
    /// Interest on a 0-100 scale.
    pub interest: u8,
}
