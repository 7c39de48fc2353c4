//! Compensated summation.
//!
//! Moment sums over thousands of trial probabilities and PMF queries over
//! long probability vectors both add many small terms; plain accumulation
//! lets the error grow with `n`.

/// Neumaier compensated summation for O(ε) error independent of `n`.
///
/// Improved Kahan–Babuška: the branch keeps the low-order bits of the
/// smaller operand even when the addend is larger in magnitude than the
/// running sum.
///
/// Reference: Neumaier (1974), "Rundungsfehleranalyse einiger Verfahren
/// zur Summation endlicher Summen", *Zeitschrift für Angewandte
/// Mathematik und Mechanik* 54(1), pp. 39–51.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Examples
/// ```
/// use poisson_binomial::summation::compensated_sum;
/// let total = compensated_sum([1e16, 1.0, -1e16]);
/// assert_eq!(total, 1.0);
/// ```
pub fn compensated_sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut acc = CompensatedAccumulator::new();
    for x in values {
        acc.add(x);
    }
    acc.total()
}

/// Running Neumaier sum for callers that need the partial totals.
///
/// # Examples
/// ```
/// use poisson_binomial::summation::CompensatedAccumulator;
/// let mut acc = CompensatedAccumulator::new();
/// acc.add(0.25);
/// acc.add(0.5);
/// assert_eq!(acc.total(), 0.75);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CompensatedAccumulator {
    sum: f64,
    c: f64,
}

impl CompensatedAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, x: f64) {
        let t = self.sum + x;
        if self.sum.abs() >= x.abs() {
            self.c += (self.sum - t) + x;
        } else {
            self.c += (x - t) + self.sum;
        }
        self.sum = t;
    }

    /// Compensated total of everything added so far.
    pub fn total(&self) -> f64 {
        self.sum + self.c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(compensated_sum(std::iter::empty()), 0.0);
    }

    #[test]
    fn test_basic() {
        assert!((compensated_sum([1.0, 2.0, 3.0]) - 6.0).abs() < 1e-15);
    }

    #[test]
    fn test_preserves_small_addend() {
        // naive summation loses the 1.0
        let result = compensated_sum([1e16, 1.0, -1e16]);
        assert!(
            (result - 1.0).abs() < 1e-10,
            "compensated sum should preserve the 1.0: got {result}"
        );
    }

    #[test]
    fn test_accumulator_partial_totals() {
        let mut acc = CompensatedAccumulator::new();
        assert_eq!(acc.total(), 0.0);
        acc.add(1e16);
        acc.add(1.0);
        assert_eq!(acc.total(), 1e16 + 1.0);
        acc.add(-1e16);
        assert_eq!(acc.total(), 1.0);
    }

    #[test]
    fn test_many_tenths() {
        let result = compensated_sum(std::iter::repeat(0.1).take(1_000_000));
        assert!((result - 100_000.0).abs() < 1e-9, "got {result}");
    }
}
