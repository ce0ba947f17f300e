//! Tunable parameters for the numerical routines.
//!
//! Every struct implements [`Default`] with the values the algorithms were
//! calibrated against, and deserializes with missing fields falling back to
//! those defaults, so a partial config file is valid.
//!
//! | Struct | Field | Default |
//! |---|---|---|
//! | [`SimpsonOptions`] | `intervals` | 1000 |
//! | | `weights` | [`SimpsonWeights::Alternating`] |
//! | | `window_sigmas` | 5.0 |
//! | [`SecantOptions`] | `max_iterations` | 10 |
//! | | `tolerance` | 1e-5 |
//! | [`GaussSeidelOptions`] | `iterations` | 15 |
//! | | `tolerance` | `None` (fixed sweep budget) |

use serde::{Deserialize, Serialize};

/// Weighting scheme applied to the Simpson samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimpsonWeights {
    /// 2 on every even index (endpoints included), 4 on every odd index.
    ///
    /// Over-weights the two endpoint samples by `(h/3)·(f(a) + f(b))`
    /// compared with the textbook rule.
    #[default]
    Alternating,
    /// Textbook composite rule: 1 on the endpoints, 2 on even interior
    /// indices, 4 on odd interior indices.
    Classic,
}

impl SimpsonWeights {
    /// Weight of sample `i` out of `n` intervals.
    pub fn weight(self, i: usize, n: usize) -> f64 {
        match self {
            SimpsonWeights::Classic if i == 0 || i == n => 1.0,
            _ if i % 2 == 0 => 2.0,
            _ => 4.0,
        }
    }
}

/// Composite Simpson quadrature settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpsonOptions {
    /// Number of sub-intervals. Must be even and at least 2.
    pub intervals: usize,
    /// Sample weighting scheme.
    pub weights: SimpsonWeights,
    /// Width of the tail-estimation window, in standard deviations.
    pub window_sigmas: f64,
}

impl Default for SimpsonOptions {
    fn default() -> Self {
        Self {
            intervals: 1000,
            weights: SimpsonWeights::Alternating,
            window_sigmas: 5.0,
        }
    }
}

impl SimpsonOptions {
    pub fn with_intervals(mut self, intervals: usize) -> Self {
        self.intervals = intervals;
        self
    }

    pub fn with_weights(mut self, weights: SimpsonWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_window_sigmas(mut self, window_sigmas: f64) -> Self {
        self.window_sigmas = window_sigmas;
        self
    }
}

/// Secant method settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecantOptions {
    /// Maximum number of secant updates.
    pub max_iterations: usize,
    /// Convergence threshold on `|x_next − x_curr|`.
    pub tolerance: f64,
}

impl Default for SecantOptions {
    fn default() -> Self {
        Self {
            max_iterations: 10,
            tolerance: 1e-5,
        }
    }
}

impl SecantOptions {
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// Gauss-Seidel settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaussSeidelOptions {
    /// Maximum number of full sweeps over the rows.
    pub iterations: usize,
    /// Optional early-exit threshold on the largest per-component change in
    /// a sweep. `None` always runs the full budget.
    pub tolerance: Option<f64>,
}

impl Default for GaussSeidelOptions {
    fn default() -> Self {
        Self {
            iterations: 15,
            tolerance: None,
        }
    }
}

impl GaussSeidelOptions {
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }
}
