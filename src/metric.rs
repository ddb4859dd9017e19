//! Distances between lattice vectors.
//!
//! A lattice is either real- or complex-valued, and the metric is chosen once
//! from that scalar kind. Both variants are Euclidean: the complex one treats
//! each component as a point of ℝ², so d(u, v) = sqrt(Σ |u_k − v_k|²).

use num_complex::Complex64;

/// Metric variant, fixed for the lifetime of an adjacency build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricStrategy {
    /// Euclidean distance on ℝⁿ.
    Real,
    /// Euclidean distance on ℂⁿ ≅ ℝ²ⁿ.
    Complex,
}

impl MetricStrategy {
    /// Label string for log output.
    pub fn label(&self) -> &'static str {
        match self {
            MetricStrategy::Real => "real",
            MetricStrategy::Complex => "complex",
        }
    }
}

/// Euclidean distance between two real vectors of equal length.
#[inline]
pub fn euclidean(u: &[f64], v: &[f64]) -> f64 {
    debug_assert_eq!(u.len(), v.len());
    u.iter()
        .zip(v)
        .map(|(a, b)| {
            let d = a - b;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

/// Euclidean distance between two complex vectors of equal length.
#[inline]
pub fn complex_euclidean(u: &[Complex64], v: &[Complex64]) -> f64 {
    debug_assert_eq!(u.len(), v.len());
    u.iter()
        .zip(v)
        .map(|(a, b)| (a - b).norm_sqr())
        .sum::<f64>()
        .sqrt()
}
