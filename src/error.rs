//! Error type shared by the PMF computations.

use thiserror::Error;

/// Errors raised when a computation receives input outside its contract.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PmfError {
    /// A success probability or PMF entry is NaN, infinite, or outside `[0, 1]`.
    #[error("probability at index {index} must be finite and within [0, 1], got {value}")]
    InvalidProbability { index: usize, value: f64 },
    /// Mean, sigma, or skewness cannot describe a sum of `n` Bernoulli trials.
    #[error("invalid moments: {0}")]
    InvalidMoments(String),
    /// Approximation settings are unusable.
    #[error("invalid approximation config: {0}")]
    InvalidConfig(String),
    /// A PMF needs at least one support value.
    #[error("PMF must have at least one support value")]
    EmptySupport,
    /// The last support value `start + len - 1` does not fit in an `i64`.
    #[error("PMF support starting at {start} with {len} values exceeds the i64 range")]
    SupportOverflow { start: i64, len: usize },
}

/// Checks that every success probability is finite and in `[0, 1]`.
pub(crate) fn validate_probabilities(probabilities: &[f64]) -> Result<(), PmfError> {
    match probabilities
        .iter()
        .position(|p| !(0.0..=1.0).contains(p))
    {
        Some(index) => Err(PmfError::InvalidProbability {
            index,
            value: probabilities[index],
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_closed_unit_interval() {
        assert!(validate_probabilities(&[]).is_ok());
        assert!(validate_probabilities(&[0.0, 0.5, 1.0]).is_ok());
    }

    #[test]
    fn test_reports_first_offending_index() {
        let err = validate_probabilities(&[0.2, 1.5, -0.1]).unwrap_err();
        assert_eq!(
            err,
            PmfError::InvalidProbability {
                index: 1,
                value: 1.5
            }
        );
    }

    #[test]
    fn test_rejects_nan_and_infinity() {
        assert!(matches!(
            validate_probabilities(&[f64::NAN]),
            Err(PmfError::InvalidProbability { index: 0, .. })
        ));
        assert!(validate_probabilities(&[0.1, f64::INFINITY]).is_err());
    }

    #[test]
    fn test_display() {
        let err = PmfError::InvalidProbability {
            index: 3,
            value: 2.0,
        };
        assert_eq!(
            err.to_string(),
            "probability at index 3 must be finite and within [0, 1], got 2"
        );
    }
}
