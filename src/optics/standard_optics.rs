//! Standard optics that are commonly used.

use std::marker::PhantomData;

use super::{FunctionLens, Lens, Optional};

/// The identity optional: always focuses on the whole source.
///
/// It is the neutral element of optional composition, and the starting point
/// when folding a list of navigation steps.
pub struct Identity<S> {
    _marker: PhantomData<fn(S) -> S>,
}

impl<S: Clone> Optional<S, S> for Identity<S> {
    fn get_option(&self, source: &S) -> Option<S> {
        Some(source.clone())
    }

    fn set(&self, _source: S, value: S) -> S {
        value
    }
}

impl<S> Clone for Identity<S> {
    fn clone(&self) -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<S> std::fmt::Debug for Identity<S> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("Identity")
    }
}

/// Creates the identity optional.
///
/// # Example
///
/// ```
/// use opening_optics::optics::{id_optional, Optional};
///
/// let identity = id_optional::<i32>();
///
/// assert_eq!(identity.get_option(&42), Some(42));
/// assert_eq!(identity.set(42, 7), 7);
/// ```
#[must_use]
pub const fn id_optional<S: Clone>() -> Identity<S> {
    Identity {
        _marker: PhantomData,
    }
}

/// A lens that reads a value as present and ignores writes of `None`.
///
/// Writing `Some(value)` replaces the source; writing `None` keeps it. This
/// lets a nullable field of an edited copy be merged back without erasing
/// the original.
///
/// This is not a lawful lens: after writing `None`, reading gives back
/// `Some` of the source, so PutGet fails for `None`. GetPut and PutPut hold.
///
/// # Example
///
/// ```
/// use opening_optics::optics::{null_no_change, Lens};
///
/// let keep = null_no_change::<i32>();
///
/// assert_eq!(keep.get(&3), Some(3));
/// assert_eq!(keep.set(3, None), 3);
/// assert_eq!(keep.set(3, Some(4)), 4);
/// ```
#[must_use]
pub fn null_no_change<A: Clone>() -> impl Lens<A, Option<A>> + Clone {
    FunctionLens::new(
        |source: &A| Some(source.clone()),
        |source: A, value: Option<A>| value.unwrap_or(source),
    )
}
