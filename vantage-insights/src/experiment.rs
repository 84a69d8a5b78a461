//! Two-variant experiment significance via an approximate z-test.
//!
//! The z-score maps to a discrete confidence level through fixed
//! breakpoints; this is a dashboard-grade approximation, not a real
//! hypothesis test.

use vantage_core::constants::SIGNIFICANCE_THRESHOLD;
use vantage_core::errors::{VantageError, VantageResult};
use vantage_core::models::SignificanceResult;

/// Judge a control/variant split from summary counts.
///
/// Rejects arms with zero users, conversion counts exceeding users, and
/// a zero-conversion control (relative improvement divides by the
/// control rate). A degenerate z-score — both arms at 0% or 100% —
/// surfaces as [`VantageError::NonFinite`] instead of a NaN verdict.
pub fn significance(
    control_users: u64,
    control_conversions: u64,
    variant_users: u64,
    variant_conversions: u64,
) -> VantageResult<SignificanceResult> {
    if control_users == 0 || variant_users == 0 {
        return Err(VantageError::invalid("user counts must be positive"));
    }
    if control_conversions > control_users || variant_conversions > variant_users {
        return Err(VantageError::invalid(
            "conversion counts cannot exceed user counts",
        ));
    }
    if control_conversions == 0 {
        return Err(VantageError::invalid(
            "control arm has no conversions; relative improvement is undefined",
        ));
    }

    let control_rate = control_conversions as f64 / control_users as f64;
    let variant_rate = variant_conversions as f64 / variant_users as f64;

    let control_se = (control_rate * (1.0 - control_rate) / control_users as f64).sqrt();
    let variant_se = (variant_rate * (1.0 - variant_rate) / variant_users as f64).sqrt();

    let pooled = (control_se * control_se + variant_se * variant_se).sqrt();
    let z = (variant_rate - control_rate).abs() / pooled;
    if !z.is_finite() {
        return Err(VantageError::NonFinite { quantity: "z-score" });
    }

    let confidence_level = confidence_from_z(z);
    let relative_improvement = (variant_rate - control_rate) / control_rate * 100.0;
    if !relative_improvement.is_finite() {
        return Err(VantageError::NonFinite {
            quantity: "relative improvement",
        });
    }

    Ok(SignificanceResult {
        significant: confidence_level >= SIGNIFICANCE_THRESHOLD,
        confidence_level,
        relative_improvement,
    })
}

/// Map a z-score to the nearest discrete confidence level.
fn confidence_from_z(z: f64) -> u8 {
    if z > 2.576 {
        99
    } else if z > 1.96 {
        95
    } else if z > 1.645 {
        90
    } else if z > 1.28 {
        80
    } else {
        70
    }
}
