//! Conversions to and from nalgebra
//!
//! `q0` maps to nalgebra's `w` and `q1..q3` to `i, j, k`. Both libraries use
//! the same Hamilton product, so `Quaternion * Quaternion` and nalgebra's
//! `Quaternion * Quaternion` agree after conversion.

use nalgebra as na;

use crate::Quaternion;

impl From<na::Quaternion<f64>> for Quaternion {
    fn from(q: na::Quaternion<f64>) -> Self {
        Self::new(q.w, q.i, q.j, q.k)
    }
}

impl From<Quaternion> for na::Quaternion<f64> {
    fn from(q: Quaternion) -> Self {
        na::Quaternion::new(q.q0, q.q1, q.q2, q.q3)
    }
}

/// Unwraps the unit quaternion; no renormalization
impl From<na::UnitQuaternion<f64>> for Quaternion {
    fn from(q: na::UnitQuaternion<f64>) -> Self {
        Self::from(q.into_inner())
    }
}
