//! Dense linear systems: diagonal-dominance pivoting and Gauss-Seidel.
//!
//! A system `Ax = b` of dimension `n` is stored as an [`AugmentedMatrix`]
//! `[A | b]` of `n` rows with `n + 1` entries each.
//!
//! # Pivoting
//!
//! [`AugmentedMatrix::make_diagonally_dominant`] is a greedy single pass:
//! for each column `i` it moves the row with the largest `|a_ji|` among the
//! rows not yet placed into position `i`. This maximises each diagonal
//! entry column by column but does **not** guarantee diagonal dominance;
//! check [`AugmentedMatrix::is_diagonally_dominant`] when it matters.
//!
//! # Gauss-Seidel
//!
//! Each sweep updates the unknowns in row order,
//!
//! ```text
//! x_i ← (b_i − Σ_{j≠i} a_ij·x_j) / a_ii
//! ```
//!
//! using the values already updated earlier in the same sweep. Convergence
//! is guaranteed for diagonally dominant matrices; otherwise the vector
//! after the sweep budget is returned as is.

use tracing::{debug, trace, warn};

use crate::error::{NumericError, Result};
use crate::options::GaussSeidelOptions;

/// Augmented matrix `[A | b]` of a square linear system.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedMatrix {
    rows: Vec<Vec<f64>>,
}

impl AugmentedMatrix {
    /// Builds the matrix from rows of `n` coefficients followed by the
    /// right-hand-side value.
    ///
    /// # Errors
    /// [`NumericError::DimensionMismatch`] if the matrix is empty or any row
    /// does not have exactly `n + 1` entries.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(NumericError::DimensionMismatch(
                "augmented matrix has no rows".into(),
            ));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n + 1 {
                return Err(NumericError::DimensionMismatch(format!(
                    "row {i} has {} entries, expected {} for a {n}x{n} system",
                    row.len(),
                    n + 1
                )));
            }
        }
        Ok(Self { rows })
    }

    /// Builds `[A | b]` from a coefficient matrix and a right-hand side.
    ///
    /// # Errors
    /// [`NumericError::DimensionMismatch`] if `a` is not square or `b` has
    /// the wrong length.
    ///
    /// # Examples
    /// ```
    /// use numrecipes::linear::AugmentedMatrix;
    ///
    /// let m = AugmentedMatrix::from_system(
    ///     &[vec![4.0, 1.0], vec![1.0, 3.0]],
    ///     &[1.0, 2.0],
    /// ).unwrap();
    /// assert_eq!(m.dim(), 2);
    /// assert_eq!(m.row(1), &[1.0, 3.0, 2.0]);
    /// ```
    pub fn from_system(a: &[Vec<f64>], b: &[f64]) -> Result<Self> {
        if a.len() != b.len() {
            return Err(NumericError::DimensionMismatch(format!(
                "coefficient matrix has {} rows but rhs has {} entries",
                a.len(),
                b.len()
            )));
        }
        let rows = a
            .iter()
            .zip(b)
            .map(|(row, &bi)| {
                let mut r = Vec::with_capacity(row.len() + 1);
                r.extend_from_slice(row);
                r.push(bi);
                r
            })
            .collect();
        Self::from_rows(rows)
    }

    /// System dimension `n`.
    pub fn dim(&self) -> usize {
        self.rows.len()
    }

    /// Row `i` as `[a_i0, …, a_i(n−1), b_i]`.
    ///
    /// # Panics
    /// If `i >= self.dim()`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.rows[i]
    }

    /// All rows, in their current order.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows
    }

    /// Reorders rows in place so that each diagonal entry is as large as the
    /// remaining rows allow, column by column.
    ///
    /// For `i = 0..n`, the row `j* ∈ [i, n)` with the largest `|a_j*i|`
    /// (first one on ties) is swapped into position `i`. Returns the number
    /// of swaps performed; applying it again to its own output performs none.
    ///
    /// Best effort only: a `warn` event is emitted when the result is still
    /// not diagonally dominant.
    pub fn make_diagonally_dominant(&mut self) -> usize {
        let n = self.dim();
        let mut swaps = 0;

        for i in 0..n {
            let mut best = i;
            for j in (i + 1)..n {
                if self.rows[j][i].abs() > self.rows[best][i].abs() {
                    best = j;
                }
            }
            if best != i {
                trace!(row = i, with = best, "swapping rows");
                self.rows.swap(i, best);
                swaps += 1;
            }
        }

        if !self.is_diagonally_dominant() {
            warn!(
                n,
                "matrix is not diagonally dominant after pivoting; Gauss-Seidel may not converge"
            );
        }
        swaps
    }

    /// `true` if `|a_ii| ≥ Σ_{j≠i} |a_ij|` for every row.
    pub fn is_diagonally_dominant(&self) -> bool {
        let n = self.dim();
        self.rows.iter().enumerate().all(|(i, row)| {
            let off: f64 = row[..n]
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, a)| a.abs())
                .sum();
            row[i].abs() >= off
        })
    }

    /// Residual `A·x − b`.
    ///
    /// # Errors
    /// [`NumericError::DimensionMismatch`] if `x.len() != n`.
    pub fn residual(&self, x: &[f64]) -> Result<Vec<f64>> {
        self.check_vector(x)?;
        let n = self.dim();
        Ok(self
            .rows
            .iter()
            .map(|row| dot(&row[..n], x) - row[n])
            .collect())
    }

    fn check_vector(&self, x: &[f64]) -> Result<()> {
        if x.len() != self.dim() {
            return Err(NumericError::DimensionMismatch(format!(
                "solution vector has {} entries, system has {} unknowns",
                x.len(),
                self.dim()
            )));
        }
        Ok(())
    }

    fn check_diagonal(&self) -> Result<()> {
        match (0..self.dim()).find(|&i| self.rows[i][i] == 0.0) {
            Some(i) => Err(NumericError::DomainPrecondition(format!(
                "zero diagonal entry in row {i}; reorder rows before Gauss-Seidel"
            ))),
            None => Ok(()),
        }
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Runs Gauss-Seidel sweeps on `x` in place and returns the number of sweeps
/// performed.
///
/// `x` holds the initial guess on entry and the solution on return; the
/// solution is read back from the caller's slice rather than returned, and
/// the return value is the sweep count. With `options.tolerance == None`
/// exactly `options.iterations` sweeps are run; otherwise iteration stops
/// after the first sweep whose largest component change is below the
/// tolerance. A sweep that produces a non-finite change never counts as
/// converged, so a diverging system runs the whole budget.
///
/// # Errors
/// - [`NumericError::DimensionMismatch`] if `x.len()` differs from the
///   system dimension.
/// - [`NumericError::DomainPrecondition`] if any diagonal entry is zero.
///
/// Both are checked before `x` is touched.
///
/// # Examples
/// ```
/// use numrecipes::linear::{gauss_seidel, AugmentedMatrix};
/// use numrecipes::options::GaussSeidelOptions;
///
/// let m = AugmentedMatrix::from_rows(vec![
///     vec![4.0, 1.0, 9.0],
///     vec![1.0, 3.0, 7.0],
/// ]).unwrap();
/// let mut x = vec![0.0; 2];
/// gauss_seidel(&m, &mut x, &GaussSeidelOptions::default()).unwrap();
/// assert!((x[0] - 20.0 / 11.0).abs() < 1e-9);
/// assert!((x[1] - 19.0 / 11.0).abs() < 1e-9);
/// ```
pub fn gauss_seidel(
    matrix: &AugmentedMatrix,
    x: &mut [f64],
    options: &GaussSeidelOptions,
) -> Result<usize> {
    matrix.check_vector(x)?;
    matrix.check_diagonal()?;

    let n = matrix.dim();
    let mut last_change = f64::INFINITY;

    for sweep in 0..options.iterations {
        last_change = 0.0;
        for (i, row) in matrix.rows.iter().enumerate() {
            let sigma: f64 = (0..n).filter(|&j| j != i).map(|j| row[j] * x[j]).sum();
            let updated = (row[n] - sigma) / row[i];
            // NaN is sticky: `f64::max` would drop it
            let change = (updated - x[i]).abs();
            if change.is_nan() || change > last_change {
                last_change = change;
            }
            x[i] = updated;
        }
        trace!(sweep, change = last_change, "Gauss-Seidel sweep");

        if let Some(tol) = options.tolerance {
            if last_change < tol {
                debug!(sweeps = sweep + 1, "Gauss-Seidel converged");
                return Ok(sweep + 1);
            }
        }
    }

    if let Some(tol) = options.tolerance {
        if options.iterations > 0 {
            warn!(
                sweeps = options.iterations,
                change = last_change,
                tolerance = tol,
                "Gauss-Seidel sweep budget exhausted before reaching tolerance"
            );
        }
    } else {
        debug!(sweeps = options.iterations, change = last_change, "Gauss-Seidel finished");
    }
    Ok(options.iterations)
}
