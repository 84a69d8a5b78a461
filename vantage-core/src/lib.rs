//! # vantage-core
//!
//! Foundation crate for the Vantage adaptive scoring engine.
//! Defines the shared models, error taxonomy, and tuning constants.
//! Every other crate in the workspace depends on this.

pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use errors::{VantageError, VantageResult};
pub use models::{
    ClickEvent, ContentItem, MetricKind, MetricSample, SignificanceResult, UserPreference,
    ViewEvent,
};
