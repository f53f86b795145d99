//! Prior distribution over the conception date.

use atropos_calendar::PRIOR_LEN;

use crate::error::SodeError;

/// Tolerance on the total mass of a supplied prior.
const MASS_TOL: f64 = 1e-6;

/// Prior probability distribution over the date gestation began.
///
/// A linear (non-circular) array of 245 nonnegative weights summing to 1,
/// indexed by offset day from the conception-window start. Supplied once per
/// session and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ConceptionPrior {
    weights: Vec<f64>,
}

impl ConceptionPrior {
    /// Creates a prior from explicit weights.
    ///
    /// # Errors
    ///
    /// Returns [`SodeError::InvalidPriorLength`] if `weights` is not 245 long,
    /// [`SodeError::InvalidPriorWeight`] if any weight is negative or
    /// non-finite, and [`SodeError::PriorMassMismatch`] if the weights do not
    /// sum to 1 within 1e-6.
    pub fn new(weights: Vec<f64>) -> Result<Self, SodeError> {
        if weights.len() != PRIOR_LEN {
            return Err(SodeError::InvalidPriorLength {
                len: weights.len(),
            });
        }
        for (offset, &value) in weights.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(SodeError::InvalidPriorWeight { offset, value });
            }
        }
        let total: f64 = weights.iter().sum();
        if (total - 1.0).abs() > MASS_TOL {
            return Err(SodeError::PriorMassMismatch { total });
        }
        Ok(Self { weights })
    }

    /// The uniform prior: every conception day equally likely.
    pub fn uniform() -> Self {
        Self {
            weights: vec![1.0 / PRIOR_LEN as f64; PRIOR_LEN],
        }
    }

    /// Returns the prior weights (length 245).
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}
