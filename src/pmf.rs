//! Probability mass functions over a contiguous integer support.
//!
//! A [`Pmf`] is the value returned by both the exact and the approximate
//! computations. Index `i` of [`Pmf::probabilities`] holds `P(X = start + i)`;
//! values outside `[start, end]` have probability zero and are not stored.
//!
//! The query methods ([`Pmf::cdf`], [`Pmf::survival`], [`Pmf::quantile`])
//! cover what callers typically derive from a PMF: tail probabilities and
//! thresholds.

use crate::error::PmfError;
use crate::summation::{compensated_sum, CompensatedAccumulator};

/// Probability mass function of a finite integer-valued distribution.
///
/// # Invariants
/// - At least one support value.
/// - Every entry lies in `[0, 1]`.
/// - Entries sum to 1 for exact results; approximate results may fall
///   short of 1 by the truncated tail mass.
#[derive(Debug, Clone, PartialEq)]
pub struct Pmf {
    start: i64,
    probabilities: Vec<f64>,
}

impl Pmf {
    /// Creates a PMF whose first entry is the probability of `start`.
    ///
    /// # Errors
    /// - [`PmfError::EmptySupport`] if `probabilities` is empty.
    /// - [`PmfError::InvalidProbability`] if an entry is NaN, infinite,
    ///   or outside `[0, 1]`.
    /// - [`PmfError::SupportOverflow`] if the last support value would not
    ///   fit in an `i64`.
    ///
    /// # Examples
    /// ```
    /// use poisson_binomial::Pmf;
    /// let pmf = Pmf::new(2, vec![0.25, 0.75]).unwrap();
    /// assert_eq!(pmf.end(), 3);
    /// assert_eq!(pmf.probability(3), 0.75);
    /// ```
    pub fn new(start: i64, probabilities: Vec<f64>) -> Result<Self, PmfError> {
        if probabilities.is_empty() {
            return Err(PmfError::EmptySupport);
        }
        crate::error::validate_probabilities(&probabilities)?;
        let len = probabilities.len();
        i64::try_from(len - 1)
            .ok()
            .and_then(|offset| start.checked_add(offset))
            .ok_or(PmfError::SupportOverflow { start, len })?;
        Ok(Self {
            start,
            probabilities,
        })
    }

    /// Point mass: `value` occurs with probability 1.
    pub fn point_mass(value: i64) -> Self {
        Self {
            start: value,
            probabilities: vec![1.0],
        }
    }

    /// Unvalidated constructor for the computations in this crate, which
    /// establish the invariants themselves.
    pub(crate) fn from_parts(start: i64, probabilities: Vec<f64>) -> Self {
        debug_assert!(!probabilities.is_empty());
        Self {
            start,
            probabilities,
        }
    }

    /// Smallest stored support value.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Largest stored support value (inclusive).
    pub fn end(&self) -> i64 {
        self.start + self.probabilities.len() as i64 - 1
    }

    /// Number of stored support values.
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    pub fn into_probabilities(self) -> Vec<f64> {
        self.probabilities
    }

    /// `P(X = value)`; zero outside the stored support.
    pub fn probability(&self, value: i64) -> f64 {
        if value < self.start || value > self.end() {
            return 0.0;
        }
        self.probabilities[(value - self.start) as usize]
    }

    /// Sum of all stored probabilities.
    pub fn total_mass(&self) -> f64 {
        compensated_sum(self.probabilities.iter().copied())
    }

    /// Expected value Σ k·P(X = k) over the stored support.
    ///
    /// Mass missing from a truncated PMF is ignored, not renormalized.
    pub fn mean(&self) -> f64 {
        compensated_sum(self.support().map(|(k, p)| k as f64 * p))
    }

    /// Variance Σ (k − mean)²·P(X = k) over the stored support.
    pub fn variance(&self) -> f64 {
        let mean = self.mean();
        compensated_sum(self.support().map(|(k, p)| {
            let d = k as f64 - mean;
            d * d * p
        }))
    }

    /// Cumulative probability `P(X ≤ value)`, clamped to `[0, 1]`.
    ///
    /// # Examples
    /// ```
    /// use poisson_binomial::compute_pmf;
    /// let pmf = compute_pmf(&[0.5, 0.5]).unwrap();
    /// assert_eq!(pmf.cdf(0), 0.25);
    /// assert_eq!(pmf.cdf(1), 0.75);
    /// assert_eq!(pmf.cdf(-1), 0.0);
    /// ```
    pub fn cdf(&self, value: i64) -> f64 {
        if value < self.start {
            return 0.0;
        }
        let upto = (value.saturating_sub(self.start) as usize)
            .saturating_add(1)
            .min(self.probabilities.len());
        compensated_sum(self.probabilities[..upto].iter().copied()).clamp(0.0, 1.0)
    }

    /// Upper tail probability `P(X > value)`, clamped to `[0, 1]`.
    ///
    /// Summed directly over the tail rather than as `1 − cdf`, so small
    /// tails keep their relative precision.
    pub fn survival(&self, value: i64) -> f64 {
        if value >= self.end() {
            return 0.0;
        }
        let from = if value < self.start {
            0
        } else {
            (value - self.start) as usize + 1
        };
        compensated_sum(self.probabilities[from..].iter().copied()).clamp(0.0, 1.0)
    }

    /// Smallest support value `k` with `P(X ≤ k) ≥ q`.
    ///
    /// Returns `None` if `q` is NaN or outside `[0, 1]`. If the stored mass
    /// never reaches `q` (a truncated PMF with `q` near 1) the last support
    /// value is returned.
    pub fn quantile(&self, q: f64) -> Option<i64> {
        if !(0.0..=1.0).contains(&q) {
            return None;
        }
        let mut acc = CompensatedAccumulator::new();
        for (k, p) in self.support() {
            acc.add(p);
            if acc.total() >= q {
                return Some(k);
            }
        }
        Some(self.end())
    }

    /// Total variation distance ½·Σ|P(X = k) − Q(X = k)| over the union of
    /// both supports.
    ///
    /// # Examples
    /// ```
    /// use poisson_binomial::Pmf;
    /// let a = Pmf::point_mass(0);
    /// let b = Pmf::point_mass(1);
    /// assert_eq!(a.total_variation_distance(&b), 1.0);
    /// assert_eq!(a.total_variation_distance(&a), 0.0);
    /// ```
    pub fn total_variation_distance(&self, other: &Pmf) -> f64 {
        let lo = self.start.max(other.start);
        let hi = self.end().min(other.end());
        let mut acc = CompensatedAccumulator::new();
        if lo > hi {
            for &p in self.probabilities.iter().chain(&other.probabilities) {
                acc.add(p);
            }
            return 0.5 * acc.total();
        }

        // mass outside the overlap counts in full; inside, only the difference
        let (a_lo, a_hi) = self.index_range(lo, hi);
        let (b_lo, b_hi) = other.index_range(lo, hi);
        let outside = self.probabilities[..a_lo]
            .iter()
            .chain(&self.probabilities[a_hi..])
            .chain(&other.probabilities[..b_lo])
            .chain(&other.probabilities[b_hi..]);
        for &p in outside {
            acc.add(p);
        }
        let overlap = self.probabilities[a_lo..a_hi]
            .iter()
            .zip(&other.probabilities[b_lo..b_hi]);
        for (p, q) in overlap {
            acc.add((p - q).abs());
        }
        0.5 * acc.total()
    }

    /// Slice bounds of the stored values `lo..=hi`, which must lie within
    /// the support.
    fn index_range(&self, lo: i64, hi: i64) -> (usize, usize) {
        ((lo - self.start) as usize, (hi - self.start) as usize + 1)
    }

    fn support(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.probabilities
            .iter()
            .enumerate()
            .map(move |(i, &p)| (self.start + i as i64, p))
    }
}
