//! # vantage-insights
//!
//! The scoring half of the engine: infer per-category interest from raw
//! interaction logs, rank a content catalog against those interests, and
//! judge two-variant experiments with an approximate z-test.
//!
//! All three operations are pure functions over caller-owned data; they
//! hold no state between calls.

pub mod experiment;
pub mod preferences;
pub mod ranking;

pub use experiment::significance;
pub use preferences::infer;
pub use ranking::{recommend, recommend_weighted, ScorerWeights};
