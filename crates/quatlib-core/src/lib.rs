//! # quatlib Core
//!
//! Quaternion arithmetic for orientation and rotation math.
//!
//! A [`Quaternion`] is a plain `Copy` value of four `f64` components
//! `(q0, q1, q2, q3)` representing `q0 + q1·i + q2·j + q3·k`.
//!
//! ## Modules
//!
//! - [`quaternion`]: The value type, value-returning algebra and operators
//! - [`ops`]: Output-parameter forms of every operation, for hot paths
//! - [`display`]: Labeled diagnostic formatting
//! - [`error`]: Errors for the opt-in checked operations
//!
//! ## Composition order
//!
//! `multiply(qa, qb)` composes so that `qb` happens before `qa`, the same way
//! rotation matrices compose:
//!
//! ```text
//! v' = Rb × Ra × v      ~      v' = rot(qb × qa, v)
//! ```
//!
//! ## Zero and non-finite inputs
//!
//! The core operations never validate their inputs. Inverting or normalizing
//! the zero quaternion divides by zero and yields `Inf`/`NaN` components; NaN
//! and Inf inputs propagate through every operation. Use
//! [`Quaternion::try_inverse`], [`Quaternion::try_normalized`] or
//! [`Quaternion::validate`] where a signaled error is wanted.

pub mod quaternion;
pub mod ops;
pub mod display;
pub mod error;

#[cfg(feature = "nalgebra")]
mod interop;

pub use quaternion::Quaternion;
pub use error::{QuaternionError, QuaternionResult};

/// Default absolute tolerance for approximate comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;
