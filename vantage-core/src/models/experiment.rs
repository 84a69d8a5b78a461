use serde::{Deserialize, Serialize};

/// Verdict for a two-variant experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignificanceResult {
    /// True when the confidence level clears the 95% threshold.
    pub significant: bool,
    /// Approximate confidence level: one of 70, 80, 90, 95, 99.
    pub confidence_level: u8,
    /// Variant lift over control, in percent. Negative when the variant loses.
    pub relative_improvement: f64,
}
