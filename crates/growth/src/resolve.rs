//! Resolving a measurement to a gestation-age range.

use atropos_calendar::MAX_GESTATION_DAY;
use atropos_sode::GestationAgeRange;

use crate::curve::GrowthCurve;
use crate::error::GrowthError;

/// Resolves a measured depth to a gestation-age range.
///
/// The depth is interpolated through `curve` to a central age, widened by
/// `half_width_days` on each side, rounded to whole days, and clamped to the
/// admissible gestation span `[1, MAX_GESTATION_DAY]`.
///
/// # Errors
///
/// Returns [`GrowthError::InvalidHalfWidth`] for a negative or non-finite
/// half-width, and propagates curve errors from the interpolation.
pub fn resolve_range(
    curve: &GrowthCurve,
    depth: f64,
    half_width_days: f64,
) -> Result<GestationAgeRange, GrowthError> {
    if !half_width_days.is_finite() || half_width_days < 0.0 {
        return Err(GrowthError::InvalidHalfWidth {
            value: half_width_days,
        });
    }
    let age = curve.age_at(depth)?;
    let min_day = (age - half_width_days).round().clamp(1.0, MAX_GESTATION_DAY as f64) as u16;
    let max_day = (age + half_width_days).round().clamp(1.0, MAX_GESTATION_DAY as f64) as u16;
    Ok(GestationAgeRange::new(min_day, max_day)?)
}
