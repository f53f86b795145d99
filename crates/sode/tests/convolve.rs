//! Integration tests for the death-date convolution.

use atropos_calendar::{CycleMap, Doy, MAX_GESTATION_DAY, PRIOR_LEN};
use atropos_sode::{ConceptionPrior, GestationAgeRange, convolve_death_date};

fn cycle() -> CycleMap {
    CycleMap::new(Doy::from_month_day(8, 15).unwrap())
}

/// A mildly peaked prior for tests that need structure.
fn peaked_prior() -> ConceptionPrior {
    let mut weights: Vec<f64> = (0..PRIOR_LEN)
        .map(|i| {
            let x = (i as f64 - 120.0) / 40.0;
            (-0.5 * x * x).exp()
        })
        .collect();
    let total: f64 = weights.iter().sum();
    for w in &mut weights {
        *w /= total;
    }
    ConceptionPrior::new(weights).unwrap()
}

#[test]
fn normalized_for_various_ranges() {
    let prior = peaked_prior();
    let cases = [
        (1, 1),
        (1, 10),
        (50, 60),
        (1, MAX_GESTATION_DAY),
        (MAX_GESTATION_DAY, MAX_GESTATION_DAY),
        (200, 334),
    ];
    for (lo, hi) in cases {
        let range = GestationAgeRange::new(lo, hi).unwrap();
        let cal = convolve_death_date(&prior, range, &cycle()).unwrap();
        assert!(
            (cal.total_mass() - 1.0).abs() < 1e-9,
            "range [{lo}, {hi}] sums to {}",
            cal.total_mass()
        );
        assert!(cal.probs().iter().all(|&p| p >= 0.0));
    }
}

#[test]
fn degenerate_range_is_pure_shift_and_fold() {
    let prior = peaked_prior();
    let cycle = cycle();
    let shift = 90u16;
    let range = GestationAgeRange::new(shift, shift).unwrap();
    let cal = convolve_death_date(&prior, range, &cycle).unwrap();

    // Each prior weight lands exactly on the day of its shifted cycle
    // position; no two positions collide for a single-age range.
    for (i, &w) in prior.weights().iter().enumerate() {
        let day = cycle.day_at(shift as usize + i);
        assert!(
            (cal.day(day) - w).abs() < 1e-12,
            "offset {i}: expected {w}, got {}",
            cal.day(day)
        );
    }

    // Everything else is exactly zero.
    let support = cal.probs().iter().filter(|&&p| p != 0.0).count();
    let prior_support = prior.weights().iter().filter(|&&w| w != 0.0).count();
    assert_eq!(support, prior_support);
}

#[test]
fn uniform_prior_short_range_has_trapezoid_shape() {
    let prior = ConceptionPrior::uniform();
    let cycle = cycle();
    let range = GestationAgeRange::new(1, 10).unwrap();
    let cal = convolve_death_date(&prior, range, &cycle).unwrap();

    assert!((cal.total_mass() - 1.0).abs() < 1e-9);

    // Walk the support in extended-cycle order: positions 1..=254.
    let values: Vec<f64> = (1..=PRIOR_LEN + 9)
        .map(|pos| cal.day(cycle.day_at(pos)))
        .collect();
    assert_eq!(values.len(), 254);

    let max = values.iter().cloned().fold(0.0_f64, f64::max);
    let plateau = values.iter().filter(|&&v| (v - max).abs() < 1e-15).count();
    assert_eq!(plateau, 236, "plateau should span 245 - 10 + 1 days");

    // 9-day strictly increasing ramp on the leading flank.
    for i in 0..9 {
        assert!(
            values[i] < values[i + 1],
            "leading ramp not increasing at {i}"
        );
    }
    // 9-day strictly decreasing ramp on the trailing flank.
    for i in 245..254 {
        assert!(
            values[i - 1] > values[i],
            "trailing ramp not decreasing at {i}"
        );
    }
    // Plateau sits between the ramps.
    assert!((values[9] - max).abs() < 1e-15);
    assert!((values[244] - max).abs() < 1e-15);

    // Days outside the support are exact zeros.
    let support = cal.probs().iter().filter(|&&p| p != 0.0).count();
    assert_eq!(support, 254);
}

#[test]
fn widest_range_covers_the_whole_ring() {
    // Uniform prior over the full admissible age span touches every day,
    // many of them from two cycle positions.
    let prior = ConceptionPrior::uniform();
    let range = GestationAgeRange::new(1, MAX_GESTATION_DAY).unwrap();
    let cal = convolve_death_date(&prior, range, &cycle()).unwrap();
    assert!((cal.total_mass() - 1.0).abs() < 1e-9);
    assert!(cal.probs().iter().all(|&p| p > 0.0));
}

#[test]
fn point_prior_traces_the_range() {
    // All conception mass on one day: the death-date support is exactly the
    // range of gestation ages shifted to that day.
    let mut weights = vec![0.0; PRIOR_LEN];
    weights[40] = 1.0;
    let prior = ConceptionPrior::new(weights).unwrap();
    let cycle = cycle();
    let range = GestationAgeRange::new(100, 130).unwrap();
    let cal = convolve_death_date(&prior, range, &cycle).unwrap();

    let support = cal.probs().iter().filter(|&&p| p != 0.0).count();
    assert_eq!(support, 31);
    let uniform = 1.0 / 31.0;
    for age in 100..=130usize {
        let day = cycle.day_at(age + 40);
        assert!((cal.day(day) - uniform).abs() < 1e-12);
    }
}
