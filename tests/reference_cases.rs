//! End-to-end runs of the classic sample problems.
//!
//! Each case feeds the same inputs a console driver would and checks the
//! values it would print.

use numrecipes::distributions::Gaussian;
use numrecipes::linear::{gauss_seidel, AugmentedMatrix};
use numrecipes::options::{GaussSeidelOptions, SecantOptions, SimpsonOptions};
use numrecipes::quadrature::{estimate_tail_probability, Tail};
use numrecipes::roots::secant;
use numrecipes::special::gaussian_pdf_reference;
use numrecipes::NumericError;

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Tail probabilities
// ---------------------------------------------------------------------------

#[test]
fn lower_tail_of_n_100_12_5() {
    let p = estimate_tail_probability(
        gaussian_pdf_reference,
        100.0,
        12.5,
        105.0,
        Tail::LessThan,
        &SimpsonOptions::default(),
    )
    .unwrap();
    assert_eq!(round2(p), 0.66);
}

#[test]
fn upper_tail_of_n_100_12_5() {
    let g = Gaussian::new(100.0, 12.5).unwrap();
    let p = g
        .tail_probability(105.0, Tail::GreaterThan, &SimpsonOptions::default())
        .unwrap();
    assert_eq!(round2(p), 0.35);
}

#[test]
fn two_sigma_upper_tail_of_n_100_3() {
    let g = Gaussian::new(100.0, 3.0).unwrap();
    let c = g.mean() + 2.0 * g.std_dev();
    let p = g
        .tail_probability(c, Tail::GreaterThan, &SimpsonOptions::default())
        .unwrap();
    assert_eq!(round2(p), 0.02);
    assert!((p - 0.0228).abs() < 1e-4);
}

// ---------------------------------------------------------------------------
// Secant method
// ---------------------------------------------------------------------------

#[test]
fn secant_on_x_minus_three_cos_x() {
    let root = secant(|x: f64| x - 3.0 * x.cos(), 1.0, 2.0, &SecantOptions::default()).unwrap();
    assert!((root - 1.17012).abs() < 1e-5, "got {root}");
}

#[test]
fn secant_failure_modes() {
    let f = |x: f64| x - 3.0 * x.cos();
    assert!(matches!(
        secant(f, 2.0, 2.0, &SecantOptions::default()),
        Err(NumericError::DivisionByZero { .. })
    ));
    assert!(matches!(
        secant(f, 1.0, 2.0, &SecantOptions::default().with_max_iterations(1)),
        Err(NumericError::ConvergenceFailure { .. })
    ));
}

// ---------------------------------------------------------------------------
// Gauss-Seidel
// ---------------------------------------------------------------------------

fn solve_rounded(a: &[Vec<f64>], b: &[f64]) -> Vec<f64> {
    let mut m = AugmentedMatrix::from_system(a, b).unwrap();
    m.make_diagonally_dominant();
    let mut x = vec![0.0; b.len()];
    gauss_seidel(&m, &mut x, &GaussSeidelOptions::default()).unwrap();
    x.iter().map(|v| v.round()).collect()
}

#[test]
fn three_by_three_system() {
    let c = [
        vec![3.0, 1.0, -1.0],
        vec![1.0, 4.0, 1.0],
        vec![2.0, 1.0, 2.0],
    ];
    let d = [2.0, 12.0, 10.0];
    assert_eq!(solve_rounded(&c, &d), vec![1.0, 2.0, 3.0]);
}

#[test]
fn four_by_four_system() {
    let a = [
        vec![1.0, -10.0, 2.0, 4.0],
        vec![3.0, 1.0, 4.0, 12.0],
        vec![9.0, 2.0, 3.0, 4.0],
        vec![-1.0, 2.0, 7.0, 3.0],
    ];
    let b = [2.0, 12.0, 21.0, 37.0];
    assert_eq!(solve_rounded(&a, &b), vec![1.0, 1.0, 6.0, -1.0]);
}
