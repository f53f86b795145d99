//! Convolution of the conception prior with a gestation-age range.

use atropos_calendar::{CycleMap, EXTENDED_CYCLE_LEN};
use tracing::debug;

use crate::calendar::ProbabilityCalendar;
use crate::error::SodeError;
use crate::prior::ConceptionPrior;
use crate::range::GestationAgeRange;

/// Totals at or below this floor cannot be normalized.
const MASS_FLOOR: f64 = 1e-12;

/// Builds the death-date distribution for one specimen.
///
/// Under a discrete-uniform prior over gestation age within `range`, the
/// death date is `conception day + gestation age`. The prior is accumulated
/// into the extended cycle once per gestation age in the range, the
/// accumulator is folded onto the 365-day ring through `cycle`, and the
/// result is normalized to total mass 1.
///
/// Days that receive no contribution stay exactly 0.0. A degenerate range
/// (`min_day == max_day`) reduces to a pure shift-and-fold of the prior.
///
/// # Errors
///
/// Returns [`SodeError::NormalizationFailure`] if the folded array carries
/// no mass (possible only with an all-zero prior window).
pub fn convolve_death_date(
    prior: &ConceptionPrior,
    range: GestationAgeRange,
    cycle: &CycleMap,
) -> Result<ProbabilityCalendar, SodeError> {
    let mut extended = [0.0_f64; EXTENDED_CYCLE_LEN];
    let weights = prior.weights();

    // R[age + i] += C[i] for every gestation age in the range. The range
    // constructor bounds max_day so the window always fits the accumulator.
    for age in range.min_day()..=range.max_day() {
        let window = &mut extended[age as usize..age as usize + weights.len()];
        for (slot, &w) in window.iter_mut().zip(weights) {
            *slot += w;
        }
    }

    let folded = cycle.fold(&extended);
    let total: f64 = folded.iter().sum();
    if total <= MASS_FLOOR {
        return Err(SodeError::NormalizationFailure { total });
    }

    debug!(
        min_day = range.min_day(),
        max_day = range.max_day(),
        total,
        "convolved death-date distribution"
    );

    // 0.0 / total == 0.0, so exact zeros survive normalization.
    let probs = folded.iter().map(|&v| v / total).collect();
    Ok(ProbabilityCalendar::from_probs(probs))
}
