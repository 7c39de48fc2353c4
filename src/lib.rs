//! # poisson-binomial
//!
//! Probability mass function of the Poisson binomial distribution: the
//! number of successes among independent Bernoulli trials whose success
//! probabilities may all differ.
//!
//! Two strategies are offered and the caller picks between them:
//!
//! - [`compute_pmf`]: exact, by expanding the probability generating
//!   function. O(n²) time.
//! - [`compute_exp_std_skewness`] followed by [`compute_pmf_approximation`]:
//!   a skewness-corrected normal approximation whose output size depends
//!   on σ rather than `n`.
//!
//! The crate has no built-in crossover point between the two; that policy
//! belongs to the caller.
//!
//! ## Modules
//!
//! - [`pmf`] — The [`Pmf`] value type and tail/threshold queries
//! - [`exact`] — Generating-function convolution
//! - [`moments`] — Closed-form mean, standard deviation, skewness
//! - [`approximation`] — Refined normal approximation with tail truncation
//! - [`special`] — Standard normal Φ, φ and the corrected CDF
//! - [`summation`] — Compensated summation
//!
//! ## Example
//!
//! ```
//! use poisson_binomial::{compute_exp_std_skewness, compute_pmf, compute_pmf_approximation};
//!
//! let ps: Vec<f64> = (0..200).map(|i| if i % 2 == 0 { 0.6 } else { 0.2 }).collect();
//! let exact = compute_pmf(&ps).unwrap();
//!
//! let m = compute_exp_std_skewness(&ps).unwrap();
//! let approx = compute_pmf_approximation(m.mean, m.std, m.skewness, ps.len()).unwrap();
//!
//! assert!(exact.total_variation_distance(&approx) < 1e-3);
//! ```
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: no I/O, no shared state; identical inputs give
//!   bit-identical outputs
//! - **Fail fast**: probabilities outside `[0, 1]` and impossible moments
//!   are rejected with [`PmfError`]
//! - **Property-based testing**: distribution invariants verified via proptest

pub mod approximation;
pub mod error;
pub mod exact;
pub mod moments;
pub mod pmf;
pub mod special;
pub mod summation;

pub use approximation::{
    compute_pmf_approximation, compute_pmf_approximation_with_config, ApproximationConfig,
};
pub use error::PmfError;
pub use exact::compute_pmf;
pub use moments::{compute_exp_std_skewness, Moments};
pub use pmf::Pmf;
