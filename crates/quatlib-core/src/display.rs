//! Diagnostic formatting
//!
//! Components are printed with six decimals and a sign column: a leading
//! space for non-negative values, `-` for negative ones, so columns line up.
//!
//! ```text
//! q_out: [ 0.707107,  0.000000, -0.707107,  0.000000]
//! ```

use std::fmt;

use crate::Quaternion;

/// Quaternion paired with an optional label, for `{}` formatting
#[derive(Debug, Clone, Copy)]
pub struct Labeled<'a> {
    label: Option<&'a str>,
    quat: &'a Quaternion,
}

impl fmt::Display for Labeled<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(label) = self.label {
            write!(f, "{label}: ")?;
        }
        write!(f, "{}", self.quat)
    }
}

/// Wrap `quat` for display with an optional label
pub fn labeled<'a>(label: Option<&'a str>, quat: &'a Quaternion) -> Labeled<'a> {
    Labeled { label, quat }
}

/// Format `quat` as a single diagnostic line (no trailing newline)
pub fn format(label: Option<&str>, quat: &Quaternion) -> String {
    labeled(label, quat).to_string()
}

/// Write the diagnostic line to stdout
pub fn print(label: Option<&str>, quat: &Quaternion) {
    println!("{}", labeled(label, quat));
}

/// Emit the diagnostic line as a `tracing` debug event
#[cfg(feature = "tracing")]
pub fn trace(label: Option<&str>, quat: &Quaternion) {
    tracing::debug!(
        label = label.unwrap_or_default(),
        norm = quat.norm(),
        "{}",
        quat
    );
}

fn write_component(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let sign = if value.is_sign_negative() { '-' } else { ' ' };
    write!(f, "{sign}{:.6}", value.abs())
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        write_component(f, self.q0)?;
        for value in [self.q1, self.q2, self.q3] {
            write!(f, ", ")?;
            write_component(f, value)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_sign_column() {
        let q = Quaternion::new(1.0, -0.5, 0.0, 0.25);
        assert_eq!(q.to_string(), "[ 1.000000, -0.500000,  0.000000,  0.250000]");
    }

    #[test]
    fn test_negative_zero_keeps_sign() {
        let q = Quaternion::new(-0.0, 0.0, 0.0, 0.0);
        assert_eq!(q.to_string(), "[-0.000000,  0.000000,  0.000000,  0.000000]");
    }

    #[test]
    fn test_rounds_to_six_decimals() {
        let q = Quaternion::new(0.123456789, -2.0000004, 10.0, 0.0);
        assert_eq!(q.to_string(), "[ 0.123457, -2.000000,  10.000000,  0.000000]");
    }

    #[test]
    fn test_format_with_label() {
        let q = Quaternion::IDENTITY;
        assert_eq!(
            format(Some("q_out"), &q),
            "q_out: [ 1.000000,  0.000000,  0.000000,  0.000000]"
        );
        assert_eq!(format(None, &q), q.to_string());
    }

    #[test]
    fn test_non_finite_components() {
        let q = Quaternion::new(f64::INFINITY, f64::NEG_INFINITY, 0.0, 0.0);
        assert_eq!(q.to_string(), "[ inf, -inf,  0.000000,  0.000000]");
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn test_trace_without_subscriber() {
        trace(Some("q"), &Quaternion::IDENTITY);
        trace(None, &Quaternion::ZERO);
    }
}
