//! Quaternion value type and algebra
//!
//! Implements the Hamilton product, inverse, norm and normalization on a plain
//! four-component `f64` value. Every method takes `self` by value and returns
//! a new quaternion; see [`crate::ops`] for the output-parameter forms.

use std::ops::{Mul, MulAssign, Neg};

use approx::{AbsDiffEq, RelativeEq};

use crate::error::{QuaternionError, QuaternionResult};

/// Quaternion `q0 + q1·i + q2·j + q3·k`
///
/// No invariant is enforced: components may be any `f64`, including NaN/Inf,
/// and the norm need not be 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    /// Real part
    pub q0: f64,
    /// i
    pub q1: f64,
    /// j
    pub q2: f64,
    /// k
    pub q3: f64,
}

impl Quaternion {
    /// Multiplicative identity (1, 0, 0, 0)
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Zero quaternion; has no inverse
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(q0: f64, q1: f64, q2: f64, q3: f64) -> Self {
        Self { q0, q1, q2, q3 }
    }

    /// Conjugate (q0, -q1, -q2, -q3)
    pub fn conjugate(self) -> Self {
        Self::new(self.q0, -self.q1, -self.q2, -self.q3)
    }

    /// q0² + q1² + q2² + q3²
    pub fn norm_squared(self) -> f64 {
        self.q0 * self.q0 + self.q1 * self.q1 + self.q2 * self.q2 + self.q3 * self.q3
    }

    /// Euclidean magnitude of the four components
    ///
    /// Always non-negative; zero only for the zero quaternion.
    pub fn norm(self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Multiplicative inverse: conjugate(q) / ‖q‖²
    ///
    /// For unit quaternions this equals the conjugate.
    ///
    /// The zero quaternion has no inverse: the division by zero is not
    /// guarded and the result has non-finite components. Use
    /// [`Quaternion::try_inverse`] to get an error instead.
    pub fn inverse(self) -> Self {
        let n2 = self.norm_squared();
        Self::new(self.q0 / n2, -self.q1 / n2, -self.q2 / n2, -self.q3 / n2)
    }

    /// Scale to unit magnitude
    ///
    /// Every component is divided by [`Quaternion::norm`]. A zero quaternion
    /// yields non-finite components; use [`Quaternion::try_normalized`] to get
    /// an error instead.
    pub fn normalized(self) -> Self {
        let n = self.norm();
        Self::new(self.q0 / n, self.q1 / n, self.q2 / n, self.q3 / n)
    }

    /// Normalize in place. Same zero-norm behavior as [`Quaternion::normalized`].
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Compose `self` (qa) and `qb` so that `qb` happens before `qa`
    ///
    /// This is analogous to the order in which rotation matrices compose: to
    /// rotate v by Ra and then by Rb you write `v' = Rb × Ra × v`, so rotating
    /// by qa and then by qb is `rot(qb × qa, v)`.
    ///
    /// ```text
    /// q0 = a0·b0 - a1·b1 - a2·b2 - a3·b3
    /// q1 = a0·b1 + a1·b0 + a2·b3 - a3·b2
    /// q2 = a0·b2 - a1·b3 + a2·b0 + a3·b1
    /// q3 = a0·b3 + a1·b2 - a2·b1 + a3·b0
    /// ```
    pub fn multiply(self, qb: Self) -> Self {
        let qa = self;
        Self::new(
            qa.q0 * qb.q0 - qa.q1 * qb.q1 - qa.q2 * qb.q2 - qa.q3 * qb.q3,
            qa.q0 * qb.q1 + qa.q1 * qb.q0 + qa.q2 * qb.q3 - qa.q3 * qb.q2,
            qa.q0 * qb.q2 - qa.q1 * qb.q3 + qa.q2 * qb.q0 + qa.q3 * qb.q1,
            qa.q0 * qb.q3 + qa.q1 * qb.q2 - qa.q2 * qb.q1 + qa.q3 * qb.q0,
        )
    }

    /// `self × qb⁻¹`: the inverse of `qb` happens before `self`
    ///
    /// A zero `qb` propagates non-finite components.
    pub fn multiply_inverse(self, qb: Self) -> Self {
        self.multiply(qb.inverse())
    }

    /// `self⁻¹ × qb`: `qb` happens before the inverse of `self`
    ///
    /// Given two absolute orientations a and b, this is the rotation from
    /// frame a to frame b. A zero `self` propagates non-finite components.
    pub fn inverse_multiply(self, qb: Self) -> Self {
        self.inverse().multiply(qb)
    }

    /// True if every component is finite
    pub fn is_finite(self) -> bool {
        self.q0.is_finite() && self.q1.is_finite() && self.q2.is_finite() && self.q3.is_finite()
    }

    /// True if ‖q‖ is within `epsilon` of 1
    pub fn is_unit(self, epsilon: f64) -> bool {
        (self.norm() - 1.0).abs() <= epsilon
    }

    /// Reject quaternions with NaN or Inf components
    ///
    /// Reports the first offending component.
    pub fn validate(self) -> QuaternionResult<Self> {
        let components = [("q0", self.q0), ("q1", self.q1), ("q2", self.q2), ("q3", self.q3)];
        match components.iter().find(|(_, value)| !value.is_finite()) {
            Some(&(component, value)) => Err(QuaternionError::NonFinite { component, value }),
            None => Ok(self),
        }
    }

    /// Checked [`Quaternion::inverse`]
    pub fn try_inverse(self) -> QuaternionResult<Self> {
        if self.norm_squared() == 0.0 {
            return Err(QuaternionError::ZeroNorm);
        }
        Ok(self.inverse())
    }

    /// Checked [`Quaternion::normalized`]
    pub fn try_normalized(self) -> QuaternionResult<Self> {
        if self.norm_squared() == 0.0 {
            return Err(QuaternionError::ZeroNorm);
        }
        Ok(self.normalized())
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from(q: [f64; 4]) -> Self {
        Self::new(q[0], q[1], q[2], q[3])
    }
}

impl From<Quaternion> for [f64; 4] {
    fn from(q: Quaternion) -> Self {
        [q.q0, q.q1, q.q2, q.q3]
    }
}

/// `qa * qb` is [`Quaternion::multiply`]: `qb` happens before `qa`
impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Quaternion) -> Quaternion {
        self.multiply(rhs)
    }
}

impl MulAssign for Quaternion {
    fn mul_assign(&mut self, rhs: Quaternion) {
        *self = self.multiply(rhs);
    }
}

impl Neg for Quaternion {
    type Output = Quaternion;

    fn neg(self) -> Quaternion {
        Self::new(-self.q0, -self.q1, -self.q2, -self.q3)
    }
}

impl AbsDiffEq for Quaternion {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.q0.abs_diff_eq(&other.q0, epsilon)
            && self.q1.abs_diff_eq(&other.q1, epsilon)
            && self.q2.abs_diff_eq(&other.q2, epsilon)
            && self.q3.abs_diff_eq(&other.q3, epsilon)
    }
}

impl RelativeEq for Quaternion {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.q0.relative_eq(&other.q0, epsilon, max_relative)
            && self.q1.relative_eq(&other.q1, epsilon, max_relative)
            && self.q2.relative_eq(&other.q2, epsilon, max_relative)
            && self.q3.relative_eq(&other.q3, epsilon, max_relative)
    }
}
