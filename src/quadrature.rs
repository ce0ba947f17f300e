//! Composite Simpson quadrature and Gaussian tail-probability estimation.
//!
//! # Algorithm
//!
//! The interval `[a, b]` is split into `n` (even) sub-intervals of width
//! `h = (b − a)/n`. The `n + 1` samples `x_i = a + i·h` are weighted
//! according to [`SimpsonWeights`] and the sum is scaled by `h/3`.
//!
//! # Tail window
//!
//! [`estimate_tail_probability`] integrates a density over a window of
//! width `k·σ` (`k = SimpsonOptions::window_sigmas`, default 5) anchored at
//! the threshold `c`:
//!
//! | Tail | Window |
//! |---|---|
//! | [`Tail::GreaterThan`] | `[c, c + kσ]` |
//! | [`Tail::LessThan`] | `[c − kσ, c]` |
//!
//! Probability mass beyond the far edge of the window is ignored, so the
//! estimate is only meaningful when `c` is within a few σ of the mean. No
//! clamping to `[0, 1]` is applied.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::distributions::check_parameters;
use crate::error::{NumericError, Result};
use crate::options::{SimpsonOptions, SimpsonWeights};

/// Which side of the threshold the probability is taken on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tail {
    /// `P(X > c)`
    GreaterThan,
    /// `P(X < c)`
    LessThan,
}

impl Tail {
    /// Integration bounds for a window of `width` anchored at `threshold`.
    pub fn window(self, threshold: f64, width: f64) -> (f64, f64) {
        match self {
            Tail::GreaterThan => (threshold, threshold + width),
            Tail::LessThan => (threshold - width, threshold),
        }
    }
}

/// Integrates `f` over `[a, b]` with the composite Simpson rule.
///
/// # Errors
/// [`NumericError::DomainPrecondition`] if `options.intervals` is odd or
/// smaller than 2.
///
/// # Examples
/// ```
/// use numrecipes::options::{SimpsonOptions, SimpsonWeights};
/// use numrecipes::quadrature::composite_simpson;
///
/// let opts = SimpsonOptions::default().with_weights(SimpsonWeights::Classic);
/// let area = composite_simpson(|x| x * x, 0.0, 3.0, &opts).unwrap();
/// assert!((area - 9.0).abs() < 1e-9);
/// ```
pub fn composite_simpson<F>(f: F, a: f64, b: f64, options: &SimpsonOptions) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    let n = options.intervals;
    if n < 2 || n % 2 != 0 {
        return Err(NumericError::DomainPrecondition(format!(
            "Simpson's rule requires an even interval count of at least 2, got {n}"
        )));
    }

    let h = (b - a) / n as f64;
    let sum = simpson_sum(&f, a, h, n, options.weights);
    trace!(a, b, n, h, "composite Simpson sum complete");
    Ok(h / 3.0 * sum)
}

fn simpson_sum<F>(f: &F, a: f64, h: f64, n: usize, weights: SimpsonWeights) -> f64
where
    F: Fn(f64) -> f64,
{
    (0..=n)
        .map(|i| weights.weight(i, n) * f(a + i as f64 * h))
        .sum()
}

/// Estimates `P(X > threshold)` or `P(X < threshold)` for N(mean, std_dev²)
/// by integrating `density` over the tail window.
///
/// `density` is any callable `(x, mean, std_dev) -> f(x)`, typically
/// [`crate::special::gaussian_pdf`].
///
/// # Errors
/// [`NumericError::DomainPrecondition`] if `std_dev` is not positive and
/// finite, if `mean` is not finite, or if the interval count is invalid.
///
/// # Examples
/// ```
/// use numrecipes::options::SimpsonOptions;
/// use numrecipes::quadrature::{estimate_tail_probability, Tail};
/// use numrecipes::special::gaussian_pdf;
///
/// let p = estimate_tail_probability(
///     gaussian_pdf, 100.0, 12.5, 105.0, Tail::LessThan, &SimpsonOptions::default(),
/// ).unwrap();
/// assert!((p - 0.655).abs() < 5e-3);
/// ```
pub fn estimate_tail_probability<D>(
    density: D,
    mean: f64,
    std_dev: f64,
    threshold: f64,
    tail: Tail,
    options: &SimpsonOptions,
) -> Result<f64>
where
    D: Fn(f64, f64, f64) -> f64,
{
    check_parameters(mean, std_dev)?;

    let (a, b) = tail.window(threshold, options.window_sigmas * std_dev);
    let p = composite_simpson(|x| density(x, mean, std_dev), a, b, options)?;
    debug!(mean, std_dev, threshold, ?tail, p, "tail probability estimated");
    Ok(p)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::special::gaussian_pdf;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn tails_sum_to_one_at_any_threshold(
            mean in -50.0_f64..50.0,
            sd in 0.1_f64..20.0,
            z in -1.0_f64..1.0,
        ) {
            // both windows are 5σ wide around c = μ + zσ; for |z| ≤ 1 they
            // jointly cover [μ − 4σ, μ + 4σ] or more
            let opts = SimpsonOptions::default().with_weights(SimpsonWeights::Classic);
            let c = mean + z * sd;
            let upper = estimate_tail_probability(gaussian_pdf, mean, sd, c, Tail::GreaterThan, &opts).unwrap();
            let lower = estimate_tail_probability(gaussian_pdf, mean, sd, c, Tail::LessThan, &opts).unwrap();
            prop_assert!((upper + lower - 1.0).abs() < 1e-3, "{upper} + {lower}");
        }

        #[test]
        fn tail_is_non_negative(
            mean in -50.0_f64..50.0,
            sd in 0.1_f64..20.0,
            c in -200.0_f64..200.0,
        ) {
            let p = estimate_tail_probability(gaussian_pdf, mean, sd, c, Tail::GreaterThan, &SimpsonOptions::default()).unwrap();
            prop_assert!(p >= 0.0);
        }
    }
}
