//! Numeric primitives and their guards.
//!
//! The wire format carries plain JSON numbers; these newtypes carry the range
//! each one must respect once decoded.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// A number outside the range its type allows.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum NumberError {
    /// An angle outside of one full turn either way.
    #[error("angle {0} is outside -360..=360 degrees")]
    Angle(f64),
    /// A negative or non-finite distance.
    #[error("distance {0} is negative or not finite")]
    Distance(f64),
}

/// An angle in degrees, from a negative full turn to a positive full turn.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Angle(f64);

impl Angle {
    /// The largest magnitude an angle may have.
    pub const FULL_TURN: f64 = 360.0;

    /// Creates an angle, checking it lies within one full turn.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::Angle`] if `degrees` is outside `-360..=360`.
    pub fn new(degrees: f64) -> Result<Self, NumberError> {
        if (-Self::FULL_TURN..=Self::FULL_TURN).contains(&degrees) {
            Ok(Self(degrees))
        } else {
            Err(NumberError::Angle(degrees))
        }
    }

    /// The angle in degrees.
    #[must_use]
    pub const fn degrees(self) -> f64 {
        self.0
    }

    /// The angle in radians.
    #[must_use]
    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }
}

/// A non-negative distance between two points.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Distance(f64);

impl Distance {
    /// Creates a distance, checking it is finite and not negative.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::Distance`] for negative or non-finite input.
    pub fn new(value: f64) -> Result<Self, NumberError> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(NumberError::Distance(value))
        }
    }

    /// The distance as a plain number.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

/// A natural number: 0, 1, 2, ...
pub type Nat = u64;

/// Largest integer a JSON number carries exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Returns `true` for a number within `-360..=360`.
#[must_use]
pub fn is_angle(value: &Value) -> bool {
    value.as_f64().is_some_and(|degrees| Angle::new(degrees).is_ok())
}

/// Returns `true` for a non-negative number.
#[must_use]
pub fn is_distance(value: &Value) -> bool {
    value.as_f64().is_some_and(|distance| Distance::new(distance).is_ok())
}

/// Returns `true` for a non-negative integer.
#[must_use]
pub fn is_nat(value: &Value) -> bool {
    as_nat(value).is_some()
}

/// Reads a non-negative integer, accepting integral floats such as `3.0`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn as_nat(value: &Value) -> Option<Nat> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|number| number.fract() == 0.0 && (0.0..=MAX_EXACT_INTEGER).contains(number))
            .map(|number| number as Nat)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(0), true)]
    #[case(json!(-360), true)]
    #[case(json!(360.0), true)]
    #[case(json!(360.5), false)]
    #[case(json!(-1000), false)]
    #[case(json!("45"), false)]
    #[case(json!(null), false)]
    fn is_angle_checks_range(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_angle(&value), expected);
    }

    #[rstest]
    #[case(json!(0), true)]
    #[case(json!(12.5), true)]
    #[case(json!(-0.1), false)]
    #[case(json!([1]), false)]
    fn is_distance_rejects_negatives(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_distance(&value), expected);
    }

    #[rstest]
    #[case(json!(0), true)]
    #[case(json!(7), true)]
    #[case(json!(3.0), true)]
    #[case(json!(3.5), false)]
    #[case(json!(-1), false)]
    #[case(json!(true), false)]
    fn is_nat_requires_non_negative_integers(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_nat(&value), expected);
    }

    #[rstest]
    fn angle_converts_to_radians() {
        let angle = Angle::new(180.0).unwrap();
        assert!((angle.radians() - std::f64::consts::PI).abs() < 1e-12);
    }

    #[rstest]
    fn distance_rejects_non_finite_values() {
        assert_eq!(Distance::new(f64::INFINITY), Err(NumberError::Distance(f64::INFINITY)));
    }

    #[rstest]
    fn newtypes_serialize_as_plain_numbers() {
        let value = serde_json::to_value(Distance::new(400.0).unwrap()).unwrap();
        assert_eq!(value, json!(400.0));
    }
}
