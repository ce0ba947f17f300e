//! Error type shared by every algorithm in the crate.
//!
//! All failures are fatal to the operation that raised them: nothing is
//! retried and no partial result is returned. Callers fix their inputs
//! (initial guesses, row order, distribution parameters) and re-invoke.

/// Errors raised by the numerical routines.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NumericError {
    /// An input violates a mathematical precondition of the routine
    /// (non-positive standard deviation, zero diagonal entry, odd interval
    /// count, ...).
    #[error("domain precondition violated: {0}")]
    DomainPrecondition(String),

    /// The secant step has a zero denominator: two consecutive iterates
    /// produced identical function values.
    #[error("secant method division by zero at iteration {iteration}: f({x}) equals the previous function value")]
    DivisionByZero {
        /// Zero-based iteration at which the denominator vanished.
        iteration: usize,
        /// Most recent iterate.
        x: f64,
    },

    /// The iteration budget was exhausted before the step size fell below
    /// the tolerance.
    #[error("did not converge after {iterations} iterations (last estimate {estimate}, tolerance {tolerance:.2e})")]
    ConvergenceFailure {
        /// Number of iterations performed.
        iterations: usize,
        /// Last computed estimate.
        estimate: f64,
        /// Step tolerance that was not reached.
        tolerance: f64,
    },

    /// Matrix or vector shapes are inconsistent.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NumericError>;
