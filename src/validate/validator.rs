//! First-class, composable structural validators.

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use super::path::FieldPath;
use super::validated::{Validated, ValidationError, ValidationErrors};

type Run<T> = dyn Fn(&Value, &FieldPath) -> Validated<T> + Send + Sync;

/// A validator decoding untyped JSON into a `T`.
///
/// A validator is a named function from `(input, path)` to [`Validated<T>`].
/// It never panics: malformed, partial or out-of-range input yields
/// `Invalid` with every mismatch and its path. Validators are cheap to clone
/// and can be shared between threads.
///
/// Self-referential shapes are built with [`Validator::lazy`], which defers
/// construction of the composite validator until input is actually checked.
///
/// # Examples
///
/// ```
/// use opening_optics::validate::{primitives, Validator};
/// use serde_json::json;
///
/// let point = Validator::object("Point", |object| {
///     object
///         .field("X", &primitives::number())
///         .zip(object.field("Y", &primitives::number()))
/// });
///
/// assert_eq!(point.decode(&json!({"X": 1, "Y": 2})).ok(), Some((1.0, 2.0)));
///
/// let errors = point.decode(&json!({"X": "one"})).unwrap_err();
/// assert_eq!(errors.len(), 2);
/// assert!(errors.contains_path("X"));
/// assert!(errors.contains_path("Y"));
/// ```
pub struct Validator<T> {
    name: Arc<str>,
    run: Arc<Run<T>>,
}

impl<T: 'static> Validator<T> {
    /// Creates a validator from a name and a checking function.
    pub fn new<F>(name: impl Into<String>, run: F) -> Self
    where
        F: Fn(&Value, &FieldPath) -> Validated<T> + Send + Sync + 'static,
    {
        Self {
            name: Arc::from(name.into()),
            run: Arc::new(run),
        }
    }

    /// Creates a validator whose body is produced by `thunk` on every use.
    ///
    /// This is how recursive shapes refer to themselves: the composite for a
    /// tree node is only built when a node is validated, so its definition
    /// may mention the tree validator again without recursing at build time.
    pub fn lazy<F>(name: impl Into<String>, thunk: F) -> Self
    where
        F: Fn() -> Self + Send + Sync + 'static,
    {
        Self::new(name, move |input, path| thunk().validate_at(input, path))
    }

    /// Creates a validator for a JSON object; `fields` validates its members.
    pub fn object<F>(name: impl Into<String>, fields: F) -> Self
    where
        F: Fn(&Object<'_>) -> Validated<T> + Send + Sync + 'static,
    {
        let name = name.into();
        let expected = name.clone();
        Self::new(name, move |input, path| match input {
            Value::Object(map) => fields(&Object {
                map,
                path: path.clone(),
            }),
            other => Validated::invalid(ValidationError::new(
                path.clone(),
                expected.as_str(),
                describe(other),
            )),
        })
    }

    /// The name of the shape this validator accepts.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validates `input` as the root of a payload.
    #[must_use]
    pub fn validate(&self, input: &Value) -> Validated<T> {
        self.validate_at(input, &FieldPath::root())
    }

    /// Validates `input` found at `path`.
    #[must_use]
    pub fn validate_at(&self, input: &Value, path: &FieldPath) -> Validated<T> {
        (self.run)(input, path)
    }

    /// Decodes `input`, rejecting it as a whole if any part is invalid.
    ///
    /// # Errors
    ///
    /// Returns every mismatch found, in document order.
    pub fn decode(&self, input: &Value) -> Result<T, ValidationErrors> {
        let result = self.validate(input).to_result();
        if let Err(errors) = &result {
            tracing::debug!(
                shape = %self.name,
                mismatches = errors.len(),
                first = %errors.first(),
                "payload rejected"
            );
        }
        result
    }

    /// Returns `true` if `input` has this validator's shape.
    #[must_use]
    pub fn is_valid(&self, input: &Value) -> bool {
        self.validate(input).is_valid()
    }

    /// Transforms the decoded value.
    #[must_use]
    pub fn map<U, F>(self, function: F) -> Validator<U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let run = self.run;
        Validator {
            name: self.name,
            run: Arc::new(move |input: &Value, path: &FieldPath| {
                run(input, path).map(&function)
            }),
        }
    }

    /// Renames the shape reported in mismatches raised directly by this validator.
    #[must_use]
    pub fn named(self, name: impl Into<String>) -> Self {
        Self {
            name: Arc::from(name.into()),
            run: self.run,
        }
    }

    /// Accepts `null` as `None` in addition to this validator's shape.
    #[must_use]
    pub fn nullable(self) -> Validator<Option<T>> {
        let name = format!("{} | null", self.name);
        Validator::new(name, move |input, path| match input {
            Value::Null => Validated::valid(None),
            other => self.validate_at(other, path).map(Some),
        })
    }

    /// Accepts a JSON array whose every element has this validator's shape.
    #[must_use]
    pub fn array(self) -> Validator<Vec<T>> {
        let name = format!("Array<{}>", self.name);
        let expected = name.clone();
        Validator::new(name, move |input, path| match input {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| self.validate_at(item, &path.index(index)))
                .collect(),
            other => Validated::invalid(ValidationError::new(
                path.clone(),
                expected.as_str(),
                describe(other),
            )),
        })
    }
}

impl<T> Clone for Validator<T> {
    fn clone(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            run: Arc::clone(&self.run),
        }
    }
}

impl<T> fmt::Debug for Validator<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Validator")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A JSON object being validated field by field.
///
/// Unknown fields are ignored; only the fields asked for are checked.
#[derive(Debug)]
pub struct Object<'v> {
    map: &'v Map<String, Value>,
    path: FieldPath,
}

impl<'v> Object<'v> {
    /// The path of this object.
    #[must_use]
    pub const fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Returns the raw value of a field, if present.
    #[must_use]
    pub fn raw(&self, name: &str) -> Option<&'v Value> {
        self.map.get(name)
    }

    /// Validates a required field.
    #[must_use]
    pub fn field<T: 'static>(&self, name: &'static str, validator: &Validator<T>) -> Validated<T> {
        let path = self.path.field(name);
        match self.map.get(name) {
            Some(value) => validator.validate_at(value, &path),
            None => Validated::invalid(ValidationError::new(path, validator.name(), "missing")),
        }
    }

    /// Validates a field that may be absent.
    #[must_use]
    pub fn optional<T: 'static>(
        &self,
        name: &'static str,
        validator: &Validator<T>,
    ) -> Validated<Option<T>> {
        match self.map.get(name) {
            Some(value) => validator.validate_at(value, &self.path.field(name)).map(Some),
            None => Validated::valid(None),
        }
    }

    /// Reads a string discriminant, mapping it through `table`.
    ///
    /// Callers match on the returned kind, so a discriminant without an
    /// entry in `table` is rejected here rather than decoded as some other
    /// variant.
    #[must_use]
    pub fn tag<K: Copy>(&self, name: &'static str, table: &[(&'static str, K)]) -> Validated<K> {
        let path = self.path.field(name);
        let found = self.map.get(name);
        let matched = found
            .and_then(Value::as_str)
            .and_then(|tag| table.iter().find(|(candidate, _)| *candidate == tag));
        match matched {
            Some((_, kind)) => Validated::valid(*kind),
            None => {
                let allowed: Vec<&str> = table.iter().map(|(candidate, _)| *candidate).collect();
                Validated::invalid(ValidationError::new(
                    path,
                    one_of(&allowed),
                    found.map_or("missing".to_string(), describe),
                ))
            }
        }
    }
}

/// Formats a set of alternatives for a mismatch message.
#[must_use]
pub fn one_of(allowed: &[&str]) -> String {
    let quoted: Vec<String> = allowed.iter().map(|item| format!("\"{item}\"")).collect();
    format!("one of {}", quoted.join(" | "))
}

/// Describes a JSON value for a mismatch message.
///
/// Scalars are shown verbatim, containers by their kind.
#[must_use]
pub fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => format!("\"{text}\""),
        Value::Array(items) => format!("array of {}", items.len()),
        Value::Object(_) => "object".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::primitives;
    use rstest::rstest;
    use serde_json::json;

    static_assertions::assert_impl_all!(Validator<f64>: Send, Sync, Clone);

    #[rstest]
    fn object_rejects_non_objects_at_the_current_path() {
        let validator = Validator::object("Thing", |_| Validated::valid(()));

        let errors = validator.decode(&json!([1, 2])).unwrap_err();

        assert_eq!(errors.first().path, FieldPath::root());
        assert_eq!(errors.first().expected, "Thing");
        assert_eq!(errors.first().found, "array of 2");
    }

    #[rstest]
    fn missing_fields_are_reported_as_missing() {
        let validator =
            Validator::object("Thing", |object| object.field("Size", &primitives::number()));

        let errors = validator.decode(&json!({})).unwrap_err();

        assert_eq!(errors.first().to_string(), "Size: expected number, found missing");
    }

    #[rstest]
    fn extra_fields_are_ignored() {
        let validator =
            Validator::object("Thing", |object| object.field("Size", &primitives::number()));

        assert_eq!(
            validator.decode(&json!({"Size": 3, "Added": "by the server"})).ok(),
            Some(3.0)
        );
    }

    #[rstest]
    fn array_reports_indices() {
        let validator = primitives::number().array();

        let errors = validator.decode(&json!([1, "two", 3, null])).unwrap_err();
        let paths: Vec<String> = errors.iter().map(|error| error.path.to_string()).collect();

        assert_eq!(paths, vec!["[1]".to_string(), "[3]".to_string()]);
    }

    #[rstest]
    fn nullable_accepts_null() {
        let validator = primitives::number().nullable();

        assert_eq!(validator.decode(&json!(null)).ok(), Some(None));
        assert_eq!(validator.decode(&json!(2.5)).ok(), Some(Some(2.5)));
        assert!(!validator.is_valid(&json!("2.5")));
    }

    #[rstest]
    fn tag_lists_alternatives() {
        let validator = Validator::object("Tagged", |object| object.tag("type", &[("A", 1), ("B", 2)]));

        assert_eq!(validator.decode(&json!({"type": "B"})).ok(), Some(2));

        let errors = validator.decode(&json!({"type": "C"})).unwrap_err();

        assert_eq!(errors.first().expected, "one of \"A\" | \"B\"");
        assert_eq!(errors.first().found, "\"C\"");
    }

    #[rstest]
    fn lazy_validators_can_refer_to_themselves() {
        #[derive(Debug, PartialEq)]
        struct Chain(Option<Box<Chain>>);

        fn chain() -> Validator<Chain> {
            Validator::lazy("Chain", || {
                Validator::object("Chain", |object| {
                    object
                        .field("Next", &chain().nullable())
                        .map(|next| Chain(next.map(Box::new)))
                })
            })
        }

        let decoded = chain().decode(&json!({"Next": {"Next": null}})).ok();
        assert_eq!(decoded, Some(Chain(Some(Box::new(Chain(None))))));

        let errors = chain().decode(&json!({"Next": {"Next": 1}})).unwrap_err();
        assert!(errors.contains_path("Next.Next"));
    }
}
