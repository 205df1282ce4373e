//! Distance metrics over coordinate vectors.
//!
//! Any `Fn(ArrayView1<f64>, ArrayView1<f64>) -> f64` that returns a
//! non-negative value satisfying the triangle inequality can be passed where
//! these are accepted. Callers are responsible for equal-length vectors; the
//! tree validates query dimensionality before calling into a metric.

use crate::ArrayView1;

/// Euclidean (L2) distance. The default metric throughout the crate.
pub fn euclidean(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Manhattan (L1) distance.
pub fn manhattan(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum()
}
