//! 3D double-precision vector primitive used throughout the rope engine.
//!
//! `NVec3` is nalgebra's `Vector3<f64>`, which already supplies the
//! arithmetic the engine needs:
//! - `a + b`, `a - b`, `-a`, `a * k`, `a / k` (component-wise)
//! - `norm()` (magnitude), `normalize()`, `normalize_mut()` (in place)
//! - `dot(&b)`, `cross(&b)`
//!
//! [`VectorExt`] adds point-to-point distance and a guarded normalization.

use nalgebra::Vector3;

pub type NVec3 = Vector3<f64>;

/// Extra vector operations not named directly by nalgebra
pub trait VectorExt {
    /// Euclidean distance between two points
    fn distance_to(&self, other: &Self) -> f64;

    /// Unit vector in the same direction, or the zero vector when the
    /// magnitude is zero (plain `normalize()` yields NaN there)
    fn normalized_or_zero(&self) -> Self;
}

impl VectorExt for NVec3 {
    fn distance_to(&self, other: &Self) -> f64 {
        (other - self).norm()
    }

    fn normalized_or_zero(&self) -> Self {
        self.try_normalize(0.0).unwrap_or_else(NVec3::zeros)
    }
}
