//! # numrecipes
//!
//! Classical numerical recipes with explicit error handling.
//!
//! Three independent algorithms, sharing nothing but the error type and the
//! options structs:
//!
//! - Gaussian tail probabilities by composite Simpson quadrature
//! - Scalar root finding by the secant method
//! - Linear systems by Gauss-Seidel iteration, after a row-pivoting pass
//!   that pushes the matrix towards diagonal dominance
//!
//! ## Modules
//!
//! - [`special`] — Gaussian density (full and reference precision), standard normal PDF/CDF
//! - [`distributions`] — validated [`distributions::Gaussian`]
//! - [`quadrature`] — composite Simpson rule and tail-probability estimation
//! - [`roots`] — secant method
//! - [`linear`] — augmented matrices, pivoting, Gauss-Seidel
//! - [`options`] — tunable parameters with defaults
//! - [`error`] — [`NumericError`]
//!
//! ## Design Philosophy
//!
//! - **Named failures**: domain violations that would otherwise surface as a
//!   division by zero are reported as [`NumericError::DomainPrecondition`]
//! - **Callables, not traits**: densities and root targets are plain `Fn`
//! - **Deterministic**: no randomness, no shared state, no I/O
//! - **Property-based testing**: invariants verified via proptest

pub mod distributions;
pub mod error;
pub mod linear;
pub mod options;
pub mod quadrature;
pub mod roots;
pub mod special;

pub use error::{NumericError, Result};
