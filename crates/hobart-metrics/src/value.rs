//! Metric values with explicit missing-data sentinels.
//!
//! An auditor reading a zero must be able to trust that the filing reported
//! zero. Every computation in this crate therefore carries absence as data:
//! a [`MetricValue::Missing`] with a reason code, never a substituted 0,
//! `NaN`, or infinity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a metric could not be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissingReason {
    /// A required operand did not resolve to a reported value.
    Unresolved,
    /// The denominator of a ratio was exactly zero.
    ZeroDenominator,
    /// The statement the metric reads from was not supplied at all.
    NoStatement,
}

/// A derived metric outcome: a number, or a reason it is absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MetricValue {
    /// A computed numeric value.
    Value(f64),
    /// The metric could not be produced; the reason is preserved for display.
    Missing(MissingReason),
}

impl MetricValue {
    /// The numeric value, if present.
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::Missing(_) => None,
        }
    }

    /// Whether this outcome is a missing sentinel.
    pub const fn is_missing(self) -> bool {
        matches!(self, Self::Missing(_))
    }

    /// The missing reason, if this outcome is a sentinel.
    pub const fn missing_reason(self) -> Option<MissingReason> {
        match self {
            Self::Value(_) => None,
            Self::Missing(reason) => Some(reason),
        }
    }

    /// Divide the value by a uniform unit divisor (e.g. `1e9` for billions).
    ///
    /// Missing stays missing, and a non-finite or zero divisor leaves the
    /// value unscaled; scaling never manufactures a number or a `NaN`.
    pub fn scaled(self, divisor: f64) -> Self {
        match self {
            Self::Value(v) if divisor.is_finite() && divisor != 0.0 => Self::Value(v / divisor),
            other => other,
        }
    }

    /// Quotient of two outcomes.
    ///
    /// A missing operand propagates its reason; a denominator of exactly
    /// zero yields [`MissingReason::ZeroDenominator`] so downstream
    /// formatting never sees `inf`.
    pub fn ratio(numerator: Self, denominator: Self) -> Self {
        match (numerator, denominator) {
            (Self::Missing(reason), _) | (Self::Value(_), Self::Missing(reason)) => {
                Self::Missing(reason)
            }
            (Self::Value(_), Self::Value(d)) if d == 0.0 => {
                Self::Missing(MissingReason::ZeroDenominator)
            }
            (Self::Value(n), Self::Value(d)) => Self::Value(n / d),
        }
    }

    /// Difference of two outcomes; a missing operand propagates its reason.
    pub fn difference(minuend: Self, subtrahend: Self) -> Self {
        match (minuend, subtrahend) {
            (Self::Missing(reason), _) | (Self::Value(_), Self::Missing(reason)) => {
                Self::Missing(reason)
            }
            (Self::Value(a), Self::Value(b)) => Self::Value(a - b),
        }
    }
}

impl From<Option<f64>> for MetricValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Missing(MissingReason::Unresolved), Self::Value)
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v}"),
            Self::Missing(MissingReason::Unresolved) => f.write_str("N/A"),
            Self::Missing(MissingReason::ZeroDenominator) => f.write_str("N/A (zero denominator)"),
            Self::Missing(MissingReason::NoStatement) => {
                f.write_str("N/A (statement unavailable)")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ratio_of_values() {
        let ratio = MetricValue::ratio(MetricValue::Value(300.0), MetricValue::Value(100.0));
        assert_relative_eq!(ratio.value().unwrap(), 3.0);
    }

    #[test]
    fn test_zero_denominator_is_reason_coded() {
        let ratio = MetricValue::ratio(MetricValue::Value(0.0), MetricValue::Value(500.0));
        assert_relative_eq!(ratio.value().unwrap(), 0.0);

        let ratio = MetricValue::ratio(MetricValue::Value(500.0), MetricValue::Value(0.0));
        assert_eq!(
            ratio.missing_reason(),
            Some(MissingReason::ZeroDenominator)
        );
    }

    #[test]
    fn test_missing_operand_propagates_reason() {
        let missing = MetricValue::Missing(MissingReason::Unresolved);
        assert_eq!(
            MetricValue::ratio(missing, MetricValue::Value(1.0)),
            missing
        );
        assert_eq!(
            MetricValue::ratio(MetricValue::Value(1.0), missing),
            missing
        );
        assert_eq!(
            MetricValue::difference(missing, MetricValue::Value(1.0)),
            missing
        );
    }

    #[test]
    fn test_scaling_preserves_missing() {
        let missing = MetricValue::Missing(MissingReason::Unresolved);
        assert_eq!(missing.scaled(1e9), missing);

        let value = MetricValue::Value(2_000_000_000.0);
        assert_relative_eq!(value.scaled(1e9).value().unwrap(), 2.0);
    }

    #[test]
    fn test_degenerate_divisor_leaves_value_unscaled() {
        let value = MetricValue::Value(42.0);
        assert_eq!(value.scaled(0.0), value);
        assert_eq!(value.scaled(f64::NAN), value);
        assert_eq!(value.scaled(f64::INFINITY), value);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(MetricValue::from(Some(1.5)), MetricValue::Value(1.5));
        assert_eq!(
            MetricValue::from(None),
            MetricValue::Missing(MissingReason::Unresolved)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(MetricValue::Value(2.5).to_string(), "2.5");
        assert_eq!(
            MetricValue::Missing(MissingReason::ZeroDenominator).to_string(),
            "N/A (zero denominator)"
        );
    }
}
