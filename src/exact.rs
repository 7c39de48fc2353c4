//! Exact Poisson binomial PMF by generating-function convolution.
//!
//! The probability generating function of a sum of independent Bernoulli
//! trials is the product of the per-trial PGFs:
//!
//! ```text
//! PGF(x) = ∏ᵢ (1 − pᵢ + pᵢ·x)
//! ```
//!
//! Expanding the product one factor at a time yields the PMF coefficients
//! for degrees `0..=n`.
//!
//! # Complexity
//! Time: O(n²), Space: O(n)

use tracing::debug;

use crate::error::{validate_probabilities, PmfError};
use crate::pmf::Pmf;

/// Computes the exact PMF of the number of successes among independent
/// Bernoulli trials with success probabilities `probabilities`.
///
/// The result has `start = 0` and `n + 1` entries. With no trials the
/// result is the point mass at 0.
///
/// # Errors
/// Returns [`PmfError::InvalidProbability`] if any probability is NaN,
/// infinite, or outside `[0, 1]`.
///
/// # Examples
/// ```
/// use poisson_binomial::compute_pmf;
/// let pmf = compute_pmf(&[0.5]).unwrap();
/// assert_eq!(pmf.start(), 0);
/// assert_eq!(pmf.probabilities(), &[0.5, 0.5]);
///
/// let certain = compute_pmf(&[1.0, 1.0]).unwrap();
/// assert_eq!(certain.probabilities(), &[0.0, 0.0, 1.0]);
/// ```
pub fn compute_pmf(probabilities: &[f64]) -> Result<Pmf, PmfError> {
    validate_probabilities(probabilities)?;
    debug!(
        trials = probabilities.len(),
        "computing exact Poisson binomial PMF"
    );

    // Coefficients of the PGF of the trials processed so far; [1] is the
    // empty sum.
    let mut coefficients = vec![1.0_f64];
    for &p in probabilities {
        let q = 1.0 - p;
        let mut next = vec![0.0_f64; coefficients.len() + 1];
        for (i, &c) in coefficients.iter().enumerate() {
            next[i] += c * q;
            next[i + 1] += c * p;
        }
        coefficients = next;
    }

    Ok(Pmf::from_parts(0, coefficients))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_trials_is_point_mass_at_zero() {
        let pmf = compute_pmf(&[]).unwrap();
        assert_eq!(pmf, Pmf::point_mass(0));
    }

    #[test]
    fn test_single_fair_trial() {
        let pmf = compute_pmf(&[0.5]).unwrap();
        assert_eq!(pmf.start(), 0);
        assert_eq!(pmf.probabilities(), &[0.5, 0.5]);
    }

    #[test]
    fn test_all_zero_probabilities() {
        let pmf = compute_pmf(&[0.0, 0.0, 0.0]).unwrap();
        assert_eq!(pmf.start(), 0);
        assert_eq!(pmf.probabilities(), &[1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_all_one_probabilities() {
        let pmf = compute_pmf(&[1.0, 1.0]).unwrap();
        assert_eq!(pmf.start(), 0);
        assert_eq!(pmf.probabilities(), &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_deterministic_trials_shift_mass() {
        // two certain successes plus one fair coin
        let pmf = compute_pmf(&[1.0, 0.5, 1.0, 0.0]).unwrap();
        assert_eq!(pmf.probabilities(), &[0.0, 0.0, 0.5, 0.5, 0.0]);
    }

    #[test]
    fn test_distinct_probabilities() {
        // (0.8 + 0.2x)(0.5 + 0.5x) = 0.4 + 0.5x + 0.1x²
        let pmf = compute_pmf(&[0.2, 0.5]).unwrap();
        let expected = [0.4, 0.5, 0.1];
        for (got, want) in pmf.probabilities().iter().zip(expected) {
            assert!((got - want).abs() < 1e-15, "got {got}, want {want}");
        }
    }

    #[test]
    fn test_identical_trials_match_binomial() {
        // Binomial(10, 0.3) reference values
        let pmf = compute_pmf(&[0.3; 10]).unwrap();
        let expected = [
            (0, 0.028247524900000001),
            (2, 0.2334744405000001),
            (5, 0.10291934519999989),
            (8, 0.0014467004999999982),
            (10, 5.9048999999999975e-06),
        ];
        for (k, want) in expected {
            let got = pmf.probability(k);
            assert!(
                (got - want).abs() < 1e-14,
                "P(X = {k}) = {got}, expected {want}"
            );
        }
    }

    #[test]
    fn test_invalid_probability_rejected() {
        assert_eq!(
            compute_pmf(&[0.5, 1.2]),
            Err(PmfError::InvalidProbability {
                index: 1,
                value: 1.2
            })
        );
        assert!(compute_pmf(&[f64::NAN]).is_err());
        assert!(compute_pmf(&[-0.0001]).is_err());
    }

    #[test]
    fn test_repeatable_bit_for_bit() {
        let ps: Vec<f64> = (0..300).map(|i| (i as f64 * 0.37).fract()).collect();
        let a = compute_pmf(&ps).unwrap();
        let b = compute_pmf(&ps).unwrap();
        assert!(a
            .probabilities()
            .iter()
            .zip(b.probabilities())
            .all(|(x, y)| x.to_bits() == y.to_bits()));
    }
}
