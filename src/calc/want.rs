//! Slots of a calculation request.

use serde::Serialize;

use crate::validate::{Validated, Validator};

/// A slot of a calculation request.
///
/// The client either does not want the slot computed (`null`), sends a
/// partial `S` for the service to complete, or already holds the resolved
/// `T`. The service answers with the same envelope, filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Want<S, T> {
    /// Not wanted; serialized as `null`.
    NotWanted,
    /// A request for the service to complete.
    Partial(S),
    /// An already resolved value.
    Resolved(T),
}

impl<S, T> Want<S, T> {
    /// The resolved value, if any.
    #[must_use]
    pub fn resolved(self) -> Option<T> {
        match self {
            Self::Resolved(value) => Some(value),
            Self::NotWanted | Self::Partial(_) => None,
        }
    }
}

/// Accepts `null`, then an `S`, then a `T`, in that order.
///
/// When neither shape matches, the mismatches of both are reported.
#[must_use]
pub fn want<S, T>(partial: Validator<S>, resolved: Validator<T>) -> Validator<Want<S, T>>
where
    S: 'static,
    T: 'static,
{
    let name = format!("Want<{}, {}>", partial.name(), resolved.name());
    Validator::new(name, move |input, path| {
        if input.is_null() {
            return Validated::valid(Want::NotWanted);
        }
        match partial.validate_at(input, path) {
            Validated::Valid(value) => Validated::valid(Want::Partial(value)),
            Validated::Invalid(partial_errors) => match resolved.validate_at(input, path) {
                Validated::Valid(value) => Validated::valid(Want::Resolved(value)),
                Validated::Invalid(resolved_errors) => {
                    Validated::Invalid(partial_errors.combine(resolved_errors))
                }
            },
        }
    })
}
