//! Calibration curves mapping bone depth to gestation age.

use crate::error::GrowthError;

/// Strictly monotonic (depth, age in days) calibration points for one
/// anatomical element.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthCurve {
    points: Vec<(f64, f64)>,
}

impl GrowthCurve {
    /// Creates a curve from calibration points sorted by depth.
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::TooFewPoints`] for fewer than two points,
    /// [`GrowthError::NonFinitePoint`] for NaN/infinite coordinates, and
    /// [`GrowthError::NonMonotonic`] unless both depth and age strictly
    /// increase point to point.
    pub fn new(points: Vec<(f64, f64)>) -> Result<Self, GrowthError> {
        if points.len() < 2 {
            return Err(GrowthError::TooFewPoints { n: points.len() });
        }
        for (index, &(depth, age_days)) in points.iter().enumerate() {
            if !depth.is_finite() || !age_days.is_finite() {
                return Err(GrowthError::NonFinitePoint {
                    index,
                    depth,
                    age_days,
                });
            }
        }
        for index in 1..points.len() {
            let (d0, a0) = points[index - 1];
            let (d1, a1) = points[index];
            if d1 <= d0 || a1 <= a0 {
                return Err(GrowthError::NonMonotonic { index });
            }
        }
        Ok(Self { points })
    }

    /// Returns the calibration points.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Smallest calibrated depth.
    pub fn min_depth(&self) -> f64 {
        self.points[0].0
    }

    /// Largest calibrated depth.
    pub fn max_depth(&self) -> f64 {
        self.points[self.points.len() - 1].0
    }

    /// Interpolates the gestation age (in days) for a measured depth.
    ///
    /// Linear between the bracketing calibration points.
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::DepthOutOfRange`] if `depth` falls outside the
    /// calibrated span.
    pub fn age_at(&self, depth: f64) -> Result<f64, GrowthError> {
        if !depth.is_finite() || depth < self.min_depth() || depth > self.max_depth() {
            return Err(GrowthError::DepthOutOfRange {
                depth,
                min_depth: self.min_depth(),
                max_depth: self.max_depth(),
            });
        }
        // Find the first point at or past the depth; the previous point
        // brackets it from below.
        let hi = self
            .points
            .iter()
            .position(|&(d, _)| d >= depth)
            .unwrap_or(self.points.len() - 1);
        if self.points[hi].0 == depth {
            return Ok(self.points[hi].1);
        }
        let (d0, a0) = self.points[hi - 1];
        let (d1, a1) = self.points[hi];
        Ok(a0 + (depth - d0) / (d1 - d0) * (a1 - a0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve() -> GrowthCurve {
        GrowthCurve::new(vec![(5.0, 60.0), (10.0, 120.0), (20.0, 300.0)]).unwrap()
    }

    #[test]
    fn rejects_short_curves() {
        assert_eq!(
            GrowthCurve::new(vec![(1.0, 1.0)]).unwrap_err(),
            GrowthError::TooFewPoints { n: 1 }
        );
    }

    #[test]
    fn rejects_non_finite() {
        assert!(matches!(
            GrowthCurve::new(vec![(1.0, 1.0), (f64::NAN, 2.0)]).unwrap_err(),
            GrowthError::NonFinitePoint { index: 1, .. }
        ));
    }

    #[test]
    fn rejects_non_monotonic_depth() {
        assert_eq!(
            GrowthCurve::new(vec![(5.0, 60.0), (5.0, 120.0)]).unwrap_err(),
            GrowthError::NonMonotonic { index: 1 }
        );
    }

    #[test]
    fn rejects_non_monotonic_age() {
        assert_eq!(
            GrowthCurve::new(vec![(5.0, 60.0), (10.0, 50.0)]).unwrap_err(),
            GrowthError::NonMonotonic { index: 1 }
        );
    }

    #[test]
    fn interpolates_between_points() {
        let c = curve();
        assert!((c.age_at(7.5).unwrap() - 90.0).abs() < 1e-12);
        assert!((c.age_at(15.0).unwrap() - 210.0).abs() < 1e-12);
    }

    #[test]
    fn exact_points_pass_through() {
        let c = curve();
        assert_eq!(c.age_at(5.0).unwrap(), 60.0);
        assert_eq!(c.age_at(10.0).unwrap(), 120.0);
        assert_eq!(c.age_at(20.0).unwrap(), 300.0);
    }

    #[test]
    fn out_of_span_is_rejected() {
        let c = curve();
        assert!(matches!(
            c.age_at(4.9).unwrap_err(),
            GrowthError::DepthOutOfRange { .. }
        ));
        assert!(matches!(
            c.age_at(20.1).unwrap_err(),
            GrowthError::DepthOutOfRange { .. }
        ));
    }
}
