//! Errors for the checked quaternion operations
//!
//! The core algebra is total and never returns these; only the `try_*` and
//! `validate` methods on [`Quaternion`](crate::Quaternion) do.

use thiserror::Error;

pub type QuaternionResult<T> = Result<T, QuaternionError>;

/// Checked operation errors
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QuaternionError {
    #[error("Quaternion has zero norm")]
    ZeroNorm,
    #[error("Component {component} is not finite: {value}")]
    NonFinite { component: &'static str, value: f64 },
}
