//! Validated type for parallel error accumulation.
//!
//! Unlike `Result`, `Validated` accumulates all errors when combining
//! validations with [`Validated::map2`], [`Validated::map3`] or
//! [`Validated::zip`]. Composite validators use it to report every mismatch in
//! a payload rather than only the first one.
//!
//! # Examples
//!
//! ```rust
//! use opening_optics::validate::{FieldPath, Validated, ValidationError};
//!
//! let valid1: Validated<i32> = Validated::valid(1);
//! let valid2: Validated<i32> = Validated::valid(2);
//! assert_eq!(valid1.map2(valid2, |a, b| a + b), Validated::valid(3));
//!
//! let invalid1: Validated<i32> =
//!     Validated::invalid(ValidationError::new(FieldPath::root().field("A"), "number", "string"));
//! let invalid2: Validated<i32> =
//!     Validated::invalid(ValidationError::new(FieldPath::root().field("B"), "number", "null"));
//! let result = invalid1.map2(invalid2, |a, b| a + b);
//! assert_eq!(result.errors().map(|errors| errors.len()), Some(2));
//! ```

use std::fmt;

use super::path::FieldPath;

/// A single structural mismatch: where it happened and what was expected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Location of the offending value, relative to the validated root.
    pub path: FieldPath,
    /// Name of the shape the validator expected at `path`.
    pub expected: String,
    /// Short description of what was found instead.
    pub found: String,
}

impl ValidationError {
    /// Creates a new validation error.
    #[must_use]
    pub fn new(path: FieldPath, expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self {
            path,
            expected: expected.into(),
            found: found.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}: expected {}, found {}",
            self.path, self.expected, self.found
        )
    }
}

impl std::error::Error for ValidationError {}

/// An ordered, non-empty collection of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Creates a new collection with a single error.
    #[must_use]
    pub fn single(error: ValidationError) -> Self {
        Self(vec![error])
    }

    /// Returns the number of errors.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; kept for symmetry with `len`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the errors, in the order they were found.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Returns the first error.
    #[must_use]
    pub fn first(&self) -> &ValidationError {
        &self.0[0]
    }

    /// Returns `true` if some error was reported at exactly `path`.
    #[must_use]
    pub fn contains_path(&self, path: &str) -> bool {
        self.0.iter().any(|error| error.path.to_string() == path)
    }

    /// Combines two error collections, keeping their order.
    #[must_use]
    pub fn combine(mut self, mut other: Self) -> Self {
        self.0.append(&mut other.0);
        self
    }

    /// Converts to a vector of errors.
    #[must_use]
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(formatter, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self::single(error)
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A validation result that accumulates errors.
///
/// `Validated<A>` is either:
/// - `Valid(A)` - a successful validation with the narrowed value
/// - `Invalid(ValidationErrors)` - a failed validation with accumulated errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validated<A> {
    /// A successful validation result.
    Valid(A),
    /// A failed validation with accumulated errors.
    Invalid(ValidationErrors),
}

impl<A> Validated<A> {
    /// Creates a valid result.
    #[must_use]
    pub const fn valid(value: A) -> Self {
        Self::Valid(value)
    }

    /// Creates an invalid result with a single error.
    #[must_use]
    pub fn invalid(error: ValidationError) -> Self {
        Self::Invalid(ValidationErrors::single(error))
    }

    /// Returns true if this is a valid result.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns true if this is an invalid result.
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Returns the errors if this is invalid.
    #[must_use]
    pub const fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    /// Applies a function to the valid value.
    #[must_use]
    pub fn map<B, F>(self, function: F) -> Validated<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Valid(value) => Validated::Valid(function(value)),
            Self::Invalid(errors) => Validated::Invalid(errors),
        }
    }

    /// Chains a validation that depends on the valid value.
    ///
    /// This short-circuits: errors of `function` are only reported when
    /// `self` is valid.
    #[must_use]
    pub fn and_then<B, F>(self, function: F) -> Validated<B>
    where
        F: FnOnce(A) -> Validated<B>,
    {
        match self {
            Self::Valid(value) => function(value),
            Self::Invalid(errors) => Validated::Invalid(errors),
        }
    }

    /// Pairs two validations, accumulating the errors of both.
    #[must_use]
    pub fn zip<B>(self, other: Validated<B>) -> Validated<(A, B)> {
        self.map2(other, |a, b| (a, b))
    }

    /// Combines two validations, accumulating the errors of both.
    #[must_use]
    pub fn map2<B, C, F>(self, other: Validated<B>, function: F) -> Validated<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Valid(a), Validated::Valid(b)) => Validated::Valid(function(a, b)),
            (Self::Invalid(e1), Validated::Invalid(e2)) => Validated::Invalid(e1.combine(e2)),
            (Self::Invalid(errors), Validated::Valid(_))
            | (Self::Valid(_), Validated::Invalid(errors)) => Validated::Invalid(errors),
        }
    }

    /// Combines three validations, accumulating the errors of all of them.
    #[must_use]
    pub fn map3<B, C, D, F>(self, second: Validated<B>, third: Validated<C>, function: F) -> Validated<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        self.zip(second)
            .map2(third, |(a, b), c| function(a, b, c))
    }

    /// Converts to a `Result`.
    ///
    /// # Errors
    ///
    /// Returns `Err(ValidationErrors)` if this is an invalid result.
    pub fn to_result(self) -> Result<A, ValidationErrors> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors),
        }
    }

    /// Converts to an Option, discarding errors.
    #[must_use]
    pub fn to_option(self) -> Option<A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }
}

impl<A> From<Result<A, ValidationErrors>> for Validated<A> {
    fn from(result: Result<A, ValidationErrors>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(errors) => Self::Invalid(errors),
        }
    }
}

impl<A> FromIterator<Validated<A>> for Validated<Vec<A>> {
    fn from_iter<I: IntoIterator<Item = Validated<A>>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::Valid(Vec::new()), |accumulated, item| {
                accumulated.map2(item, |mut values, value| {
                    values.push(value);
                    values
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn error(field: &'static str) -> ValidationError {
        ValidationError::new(FieldPath::root().field(field), "number", "string")
    }

    #[rstest]
    fn validation_error_display_shows_path_expected_and_found() {
        let error = ValidationError::new(
            FieldPath::root().field("Measure").field("Direction"),
            "one of up",
            "\"down\"",
        );

        assert_eq!(
            error.to_string(),
            "Measure.Direction: expected one of up, found \"down\""
        );
    }

    #[rstest]
    fn map2_accumulates_errors_in_order() {
        let first: Validated<i32> = Validated::invalid(error("A"));
        let second: Validated<i32> = Validated::invalid(error("B"));

        let combined = first.map2(second, |a, b| a + b);
        let paths: Vec<String> = combined
            .errors()
            .into_iter()
            .flatten()
            .map(|error| error.path.to_string())
            .collect();

        assert_eq!(paths, vec!["A".to_string(), "B".to_string()]);
    }

    #[rstest]
    fn map3_combines_valid_values() {
        let result = Validated::valid(1).map3(Validated::valid(2), Validated::valid(3), |a, b, c| {
            a + b + c
        });

        assert_eq!(result, Validated::valid(6));
    }

    #[rstest]
    fn and_then_short_circuits_on_invalid() {
        let invalid: Validated<i32> = Validated::invalid(error("A"));
        let chained = invalid.and_then(|_| Validated::<i32>::invalid(error("B")));

        assert_eq!(chained.errors().map(ValidationErrors::len), Some(1));
    }

    #[rstest]
    fn collect_keeps_every_error() {
        let collected: Validated<Vec<i32>> = vec![
            Validated::valid(1),
            Validated::invalid(error("A")),
            Validated::invalid(error("B")),
        ]
        .into_iter()
        .collect();

        assert_eq!(collected.errors().map(ValidationErrors::len), Some(2));
    }

    #[rstest]
    fn to_result_round_trips() {
        assert_eq!(Validated::valid(5).to_result(), Ok(5));
        assert!(Validated::<i32>::invalid(error("A")).to_result().is_err());
    }
}
