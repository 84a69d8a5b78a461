//! Plain data records exchanged with the engine's collaborators.

pub mod content;
pub mod experiment;
pub mod interaction;
pub mod metric;

pub use content::ContentItem;
pub use experiment::SignificanceResult;
pub use interaction::{ClickEvent, UserPreference, ViewEvent};
pub use metric::{MetricKind, MetricSample};
