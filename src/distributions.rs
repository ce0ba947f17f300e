//! Validated Gaussian distribution.
//!
//! [`Gaussian`] is the checked counterpart of the raw density functions in
//! [`crate::special`]: its constructor enforces `σ > 0`, so every method is
//! free of the division-by-zero precondition.

use crate::error::{NumericError, Result};
use crate::options::SimpsonOptions;
use crate::quadrature::{self, Tail};
use crate::special;

/// Normal (Gaussian) distribution N(μ, σ²).
///
/// # Mathematical Definition
/// - PDF: φ(x) = (1/(σ√(2π))) exp(−(x−μ)²/(2σ²))
/// - CDF: Φ((x−μ)/σ)
/// - Mean: μ
/// - Variance: σ²
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaussian {
    mean: f64,
    std_dev: f64,
}

impl Gaussian {
    /// Creates N(mean, std_dev²).
    ///
    /// # Errors
    /// [`NumericError::DomainPrecondition`] if `std_dev ≤ 0` or either
    /// parameter is not finite.
    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        check_parameters(mean, std_dev)?;
        Ok(Self { mean, std_dev })
    }

    /// Standard normal N(0, 1).
    pub fn standard() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
        }
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    pub fn variance(&self) -> f64 {
        self.std_dev * self.std_dev
    }

    /// Density at `x`.
    pub fn pdf(&self, x: f64) -> f64 {
        special::gaussian_pdf(x, self.mean, self.std_dev)
    }

    /// Closed-form CDF Φ((x−μ)/σ).
    pub fn cdf(&self, x: f64) -> f64 {
        special::standard_normal_cdf((x - self.mean) / self.std_dev)
    }

    /// Tail probability `P(X > threshold)` or `P(X < threshold)` estimated
    /// by Simpson quadrature of [`special::gaussian_pdf`].
    ///
    /// See [`quadrature::estimate_tail_probability`] for the integration
    /// window.
    ///
    /// # Examples
    /// ```
    /// use numrecipes::distributions::Gaussian;
    /// use numrecipes::options::SimpsonOptions;
    /// use numrecipes::quadrature::Tail;
    ///
    /// let g = Gaussian::new(100.0, 3.0).unwrap();
    /// let p = g.tail_probability(106.0, Tail::GreaterThan, &SimpsonOptions::default()).unwrap();
    /// assert!((p - 0.0228).abs() < 1e-3);
    /// ```
    pub fn tail_probability(
        &self,
        threshold: f64,
        tail: Tail,
        options: &SimpsonOptions,
    ) -> Result<f64> {
        quadrature::estimate_tail_probability(
            special::gaussian_pdf,
            self.mean,
            self.std_dev,
            threshold,
            tail,
            options,
        )
    }
}

/// Checks the `(mean, std_dev)` pair of a Gaussian.
pub(crate) fn check_parameters(mean: f64, std_dev: f64) -> Result<()> {
    if !mean.is_finite() || !std_dev.is_finite() || std_dev <= 0.0 {
        return Err(NumericError::DomainPrecondition(format!(
            "Gaussian requires finite μ and σ > 0, got μ={mean}, σ={std_dev}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gaussian_moments() {
        let g = Gaussian::new(10.0, 2.0).unwrap();
        assert_eq!(g.mean(), 10.0);
        assert_eq!(g.std_dev(), 2.0);
        assert!((g.variance() - 4.0).abs() < 1e-15);
    }

    #[test]
    fn test_gaussian_invalid() {
        assert!(Gaussian::new(0.0, 0.0).is_err());
        assert!(Gaussian::new(0.0, -1.0).is_err());
        assert!(Gaussian::new(f64::NAN, 1.0).is_err());
        assert!(Gaussian::new(0.0, f64::INFINITY).is_err());

        match Gaussian::new(0.0, 0.0) {
            Err(NumericError::DomainPrecondition(msg)) => {
                assert!(msg.contains("σ=0"), "unexpected message: {msg}")
            }
            other => panic!("expected DomainPrecondition, got {other:?}"),
        }
    }

    #[test]
    fn test_gaussian_cdf_at_mean() {
        let g = Gaussian::new(100.0, 12.5).unwrap();
        assert!((g.cdf(100.0) - 0.5).abs() < 1e-7);
        assert!((g.cdf(105.0) - 0.655422).abs() < 1e-6);
    }

    #[test]
    fn test_gaussian_pdf_scaling() {
        let g = Gaussian::new(3.0, 0.5).unwrap();
        let s = Gaussian::standard();
        assert!((g.pdf(3.5) - s.pdf(1.0) / 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_tail_probability_matches_cdf() {
        let g = Gaussian::new(100.0, 12.5).unwrap();
        let opts = SimpsonOptions::default();
        let upper = g.tail_probability(105.0, Tail::GreaterThan, &opts).unwrap();
        // five-σ window plus the endpoint weighting: within a few 1e-3
        assert!((upper - (1.0 - g.cdf(105.0))).abs() < 5e-3, "got {upper}");
    }
}
