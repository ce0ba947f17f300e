//! Scalar root finding by the secant method.
//!
//! # Algorithm
//!
//! Starting from two guesses `x0`, `x1`, each step replaces the derivative
//! of Newton's method with the slope of the chord through the two most
//! recent iterates:
//!
//! ```text
//! x_next = x1 − f(x1)·(x1 − x0) / (f(x1) − f(x0))
//! ```
//!
//! The iteration stops as soon as `|x_next − x1| < tolerance` and returns
//! `x_next`. Only the last two iterates and their function values are kept.
//!
//! Reference: Press et al. (2007), *Numerical Recipes*, 3rd ed., §9.2.

use tracing::{debug, trace};

use crate::error::{NumericError, Result};
use crate::options::SecantOptions;

/// Finds a root of `f` near `x0` and `x1` with the secant method.
///
/// `f` is evaluated once per iteration after the first (two evaluations to
/// start); it must be pure.
///
/// # Errors
/// - [`NumericError::DivisionByZero`] if two consecutive iterates have equal
///   function values, which includes `x0 == x1`.
/// - [`NumericError::ConvergenceFailure`] if `options.max_iterations`
///   updates complete without the step falling below `options.tolerance`.
///
/// # Examples
/// ```
/// use numrecipes::options::SecantOptions;
/// use numrecipes::roots::secant;
///
/// let root = secant(|x: f64| x - 3.0 * x.cos(), 1.0, 2.0, &SecantOptions::default()).unwrap();
/// assert!((root - 1.17012).abs() < 1e-4);
/// ```
pub fn secant<F>(f: F, x0: f64, x1: f64, options: &SecantOptions) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    let (mut x_prev, mut x_curr) = (x0, x1);
    let mut f_prev = f(x_prev);
    let mut f_curr = f(x_curr);
    let mut x_next = x_curr;

    for iteration in 0..options.max_iterations {
        let denom = f_curr - f_prev;
        if denom == 0.0 {
            return Err(NumericError::DivisionByZero {
                iteration,
                x: x_curr,
            });
        }

        x_next = x_curr - f_curr * (x_curr - x_prev) / denom;
        let step = (x_next - x_curr).abs();
        trace!(iteration, x = x_next, step, "secant step");

        if step < options.tolerance {
            debug!(iterations = iteration + 1, root = x_next, "secant method converged");
            return Ok(x_next);
        }

        x_prev = x_curr;
        f_prev = f_curr;
        x_curr = x_next;
        f_curr = f(x_curr);
    }

    Err(NumericError::ConvergenceFailure {
        iterations: options.max_iterations,
        estimate: x_next,
        tolerance: options.tolerance,
    })
}
