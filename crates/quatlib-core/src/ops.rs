//! Output-parameter quaternion operations
//!
//! Same algebra as the methods on [`Quaternion`], but each result is written
//! into a caller-supplied location instead of being returned. Useful where a
//! quaternion lives inside a larger structure and is updated in a hot loop.
//!
//! None of these validate their inputs. The zero quaternion has no inverse:
//! [`inverse`], [`normalize`], [`multiply_inverse`] (zero `qb`) and
//! [`inverse_multiply`] (zero `qa`) divide by zero and write `Inf`/`NaN`.

use crate::Quaternion;

/// Set `dst` to `src`, bit for bit
pub fn copy(dst: &mut Quaternion, src: &Quaternion) {
    *dst = *src;
}

/// Set `out` to the inverse of `q`
pub fn inverse(out: &mut Quaternion, q: &Quaternion) {
    *out = q.inverse();
}

/// Norm of `q`
pub fn norm(q: &Quaternion) -> f64 {
    q.norm()
}

/// Normalize `q` to unit magnitude in place
pub fn normalize(q: &mut Quaternion) {
    q.normalize();
}

/// Compose `qa` and `qb` so that `qb` happens before `qa`
///
/// See [`Quaternion::multiply`] for the convention.
pub fn multiply(out: &mut Quaternion, qa: &Quaternion, qb: &Quaternion) {
    *out = qa.multiply(*qb);
}

/// `out = qa × qb⁻¹`
pub fn multiply_inverse(out: &mut Quaternion, qa: &Quaternion, qb: &Quaternion) {
    *out = qa.multiply_inverse(*qb);
}

/// `out = qa⁻¹ × qb`
pub fn inverse_multiply(out: &mut Quaternion, qa: &Quaternion, qb: &Quaternion) {
    *out = qa.inverse_multiply(*qb);
}

/// [`multiply`], returning the composite by value
pub fn multiply_by_value(qa: Quaternion, qb: Quaternion) -> Quaternion {
    qa.multiply(qb)
}
