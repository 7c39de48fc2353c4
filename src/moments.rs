//! Closed-form moments of the Poisson binomial distribution.
//!
//! For X = Σ Bernoulli(pᵢ) with independent trials:
//!
//! | Moment | Formula |
//! |---|---|
//! | Mean | Σ pᵢ |
//! | Variance | Σ pᵢ(1 − pᵢ) |
//! | Skewness | Σ pᵢ(1 − pᵢ)(1 − 2pᵢ) / σ³ |
//!
//! These feed [`compute_pmf_approximation`](crate::compute_pmf_approximation)
//! without building any PMF.

use tracing::debug;

use crate::error::{validate_probabilities, PmfError};
use crate::summation::compensated_sum;

/// Mean, standard deviation, and skewness of a Poisson binomial sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    pub mean: f64,
    pub std: f64,
    /// Third standardized moment. Reported as 0.0 when `std == 0`, where it
    /// is mathematically undefined.
    pub skewness: f64,
}

impl Moments {
    pub fn variance(&self) -> f64 {
        self.std * self.std
    }

    /// `true` when every trial is deterministic (or there are none), so the
    /// sum is a single value with certainty.
    pub fn is_degenerate(&self) -> bool {
        self.std == 0.0
    }
}

impl From<Moments> for (f64, f64, f64) {
    fn from(m: Moments) -> Self {
        (m.mean, m.std, m.skewness)
    }
}

/// Computes mean, standard deviation, and skewness of the number of
/// successes among independent Bernoulli trials.
///
/// # Degenerate input
/// If the variance is zero (no trials, or every probability is exactly 0
/// or 1) the skewness is undefined; it is reported as 0.0 and
/// [`Moments::is_degenerate`] returns `true`. Passing such moments to
/// [`compute_pmf_approximation`](crate::compute_pmf_approximation) yields
/// the point mass at the mean.
///
/// # Errors
/// Returns [`PmfError::InvalidProbability`] if any probability is NaN,
/// infinite, or outside `[0, 1]`.
///
/// # Examples
/// ```
/// use poisson_binomial::compute_exp_std_skewness;
/// let m = compute_exp_std_skewness(&[0.5, 0.5]).unwrap();
/// assert_eq!(m.mean, 1.0);
/// assert!((m.std - 0.5_f64.sqrt()).abs() < 1e-15);
/// assert_eq!(m.skewness, 0.0);
/// ```
pub fn compute_exp_std_skewness(probabilities: &[f64]) -> Result<Moments, PmfError> {
    validate_probabilities(probabilities)?;
    debug!(
        trials = probabilities.len(),
        "computing Poisson binomial moments"
    );

    let mean = compensated_sum(probabilities.iter().copied());
    let variance = compensated_sum(probabilities.iter().map(|&p| p * (1.0 - p)));
    let std = variance.sqrt();
    if std == 0.0 {
        return Ok(Moments {
            mean,
            std,
            skewness: 0.0,
        });
    }

    let third = compensated_sum(
        probabilities
            .iter()
            .map(|&p| p * (1.0 - p) * (1.0 - 2.0 * p)),
    );
    // σ³ underflows for tiny variances; divide in two steps instead
    let skewness = third / variance / std;

    Ok(Moments {
        mean,
        std,
        skewness,
    })
}
