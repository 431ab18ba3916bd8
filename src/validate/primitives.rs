//! Validators for scalar values.

use serde_json::Value;

use super::path::FieldPath;
use super::validated::{Validated, ValidationError};
use super::validator::{describe, one_of, Validator};
use crate::numbers::{as_nat, Angle, Distance, Nat};

fn mismatch<T>(path: &FieldPath, expected: &str, found: &Value) -> Validated<T> {
    Validated::invalid(ValidationError::new(path.clone(), expected, describe(found)))
}

/// Accepts any JSON number.
#[must_use]
pub fn number() -> Validator<f64> {
    Validator::new("number", |input, path| match input.as_f64() {
        Some(number) => Validated::valid(number),
        None => mismatch(path, "number", input),
    })
}

/// Accepts any JSON string.
#[must_use]
pub fn string() -> Validator<String> {
    Validator::new("string", |input, path| match input {
        Value::String(text) => Validated::valid(text.clone()),
        other => mismatch(path, "string", other),
    })
}

/// Accepts any JSON boolean.
#[must_use]
pub fn boolean() -> Validator<bool> {
    Validator::new("boolean", |input, path| match input {
        Value::Bool(flag) => Validated::valid(*flag),
        other => mismatch(path, "boolean", other),
    })
}

/// Accepts only the literal `true`.
#[must_use]
pub fn literal_true() -> Validator<()> {
    Validator::new("true", |input, path| match input {
        Value::Bool(true) => Validated::valid(()),
        other => mismatch(path, "true", other),
    })
}

/// Accepts anything, keeping it as opaque JSON.
#[must_use]
pub fn any() -> Validator<Value> {
    Validator::new("unknown", |input, _| Validated::valid(input.clone()))
}

/// Accepts a number within one full turn.
#[must_use]
pub fn angle() -> Validator<Angle> {
    Validator::new("Angle", |input, path| {
        match input.as_f64().map(Angle::new) {
            Some(Ok(angle)) => Validated::valid(angle),
            _ => mismatch(path, "Angle", input),
        }
    })
}

/// Accepts a non-negative number.
#[must_use]
pub fn distance() -> Validator<Distance> {
    Validator::new("Distance", |input, path| {
        match input.as_f64().map(Distance::new) {
            Some(Ok(distance)) => Validated::valid(distance),
            _ => mismatch(path, "Distance", input),
        }
    })
}

/// Accepts a non-negative integer.
#[must_use]
pub fn nat() -> Validator<Nat> {
    Validator::new("Nat", |input, path| match as_nat(input) {
        Some(nat) => Validated::valid(nat),
        None => mismatch(path, "Nat", input),
    })
}

/// Accepts one of a fixed set of strings, mapping each to a value.
#[must_use]
pub fn keyword<T>(name: &'static str, table: &'static [(&'static str, T)]) -> Validator<T>
where
    T: Copy + Send + Sync + 'static,
{
    Validator::new(name, move |input, path| {
        let found = input
            .as_str()
            .and_then(|text| table.iter().find(|(key, _)| *key == text));
        match found {
            Some((_, value)) => Validated::valid(*value),
            None => {
                let keys: Vec<&str> = table.iter().map(|(key, _)| *key).collect();
                mismatch(path, &one_of(&keys), input)
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use serde_json::json;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Colour {
        Red,
        Blue,
    }

    const COLOURS: &[(&str, Colour)] = &[("red", Colour::Red), ("blue", Colour::Blue)];

    #[rstest]
    #[case(json!("red"), Some(Colour::Red))]
    #[case(json!("blue"), Some(Colour::Blue))]
    #[case(json!("Red"), None)]
    #[case(json!(1), None)]
    fn keyword_is_case_sensitive(#[case] input: Value, #[case] expected: Option<Colour>) {
        assert_eq!(keyword("Colour", COLOURS).decode(&input).ok(), expected);
    }

    #[rstest]
    fn keyword_lists_alternatives() {
        let errors = keyword("Colour", COLOURS).decode(&json!("green")).unwrap_err();
        assert_eq!(errors.first().expected, "one of \"red\" | \"blue\"");
    }

    #[rstest]
    #[case(json!(true), true)]
    #[case(json!(false), false)]
    #[case(json!("true"), false)]
    fn literal_true_accepts_only_true(#[case] input: Value, #[case] expected: bool) {
        assert_eq!(literal_true().is_valid(&input), expected);
    }

    #[rstest]
    fn nat_reports_path() {
        let errors = nat()
            .validate_at(&json!(-2), &FieldPath::root().field("Corner"))
            .to_result()
            .unwrap_err();
        assert_eq!(errors.first().to_string(), "Corner: expected Nat, found -2");
    }

    fn arbitrary_json() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            prop::arbitrary::any::<bool>().prop_map(Value::Bool),
            prop::arbitrary::any::<f64>().prop_map(|number| json!(number)),
            prop::arbitrary::any::<i64>().prop_map(|number| json!(number)),
            ".*".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 16, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::hash_map("[A-Za-z]{1,6}", inner, 0..4)
                    .prop_map(|map| Value::Object(map.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn prop_primitive_guards_are_total(input in arbitrary_json()) {
            let _ = number().validate(&input);
            let _ = angle().validate(&input);
            let _ = distance().validate(&input);
            let _ = nat().validate(&input);
            let _ = string().validate(&input);
            let _ = literal_true().validate(&input);
        }

        #[test]
        fn prop_angle_guard_agrees_with_predicate(number in -1000.0f64..1000.0) {
            let input = json!(number);
            prop_assert_eq!(angle().is_valid(&input), crate::numbers::is_angle(&input));
        }
    }
}
