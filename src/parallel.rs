//! Parallel batch evaluation using Rayon
//!
//! Enable with the `parallel` feature:
//! ```toml
//! dense_poly = { version = "0.1", features = ["parallel"] }
//! ```

use crate::{MathScalar, Polynomial};
use rayon::prelude::*;

/// Evaluate several polynomials over a shared set of points in parallel.
///
/// # Returns
/// `results[poly_idx][point_idx]`, identical to calling
/// [`Polynomial::evaluate`] for each pair.
///
/// # Example
/// ```ignore
/// use dense_poly::{Polynomial, parallel::evaluate_parallel};
///
/// let p = Polynomial::from_coefficients(vec![1.0, 2.0, 3.0]);
/// let q = Polynomial::from_coefficients(vec![4.0, 5.0]);
/// let results = evaluate_parallel(&[&p, &q], &[0.0, 2.0]);
/// assert_eq!(results, vec![vec![1.0, 17.0], vec![4.0, 14.0]]);
/// ```
pub fn evaluate_parallel<T: MathScalar>(polys: &[&Polynomial<T>], points: &[T]) -> Vec<Vec<T>> {
    polys
        .par_iter()
        .map(|poly| evaluate_points_parallel(poly, points))
        .collect()
}

/// Evaluate one polynomial at many points in parallel
pub fn evaluate_points_parallel<T: MathScalar>(poly: &Polynomial<T>, points: &[T]) -> Vec<T> {
    points.par_iter().map(|&x| poly.evaluate(x)).collect()
}
