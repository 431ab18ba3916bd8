//! Prism optics for focusing on one variant of a sum type.
//!
//! # Laws
//!
//! 1. **PreviewReview Law**: Building then matching yields the value.
//!    ```text
//!    prism.preview(&prism.review(value.clone())) == Some(value)
//!    ```
//!
//! 2. **ReviewPreview Law**: Rebuilding a matched value yields the source.
//!    ```text
//!    prism.preview(&source).map(|value| prism.review(value)) == Some(source)
//!    // whenever the preview succeeds
//!    ```
//!
//! # Examples
//!
//! ```
//! use opening_optics::prism;
//! use opening_optics::optics::Prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape {
//!     Circle(f64),
//!     Square(f64),
//! }
//!
//! let circle = prism!(Shape, Circle);
//!
//! assert_eq!(circle.preview(&Shape::Circle(5.0)), Some(5.0));
//! assert_eq!(circle.preview(&Shape::Square(3.0)), None);
//! assert_eq!(circle.review(1.0), Shape::Circle(1.0));
//! ```

use std::marker::PhantomData;

use super::optional::Optional;

/// A Prism focuses on one variant of a sum type.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole sum)
/// - `A`: The payload of the focused variant
pub trait Prism<S, A> {
    /// Matches the focused variant.
    ///
    /// # Returns
    ///
    /// The payload if `source` is the focused variant, `None` otherwise
    fn preview(&self, source: &S) -> Option<A>;

    /// Builds the focused variant from its payload.
    fn review(&self, value: A) -> S;

    /// Replaces the payload if `source` is the focused variant, otherwise
    /// returns `source` unchanged.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        Self: Sized,
        F: FnOnce(A) -> A,
    {
        match self.preview(&source) {
            Some(value) => self.review(function(value)),
            None => source,
        }
    }

    /// Views this prism as an optional.
    fn as_optional(self) -> PrismAsOptional<Self>
    where
        Self: Sized,
    {
        PrismAsOptional::new(self)
    }
}

/// A prism implemented using matching and building functions.
///
/// The [`prism!`](crate::prism) macro generates a `FunctionPrism` for a
/// tuple variant.
pub struct FunctionPrism<S, A, Pr, Re>
where
    Pr: Fn(&S) -> Option<A>,
    Re: Fn(A) -> S,
{
    preview: Pr,
    review: Re,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, Pr, Re> FunctionPrism<S, A, Pr, Re>
where
    Pr: Fn(&S) -> Option<A>,
    Re: Fn(A) -> S,
{
    /// Creates a new `FunctionPrism`.
    ///
    /// # Arguments
    ///
    /// * `preview` - Extracts the payload when the variant matches
    /// * `review` - Builds the variant from a payload
    #[must_use]
    pub const fn new(preview: Pr, review: Re) -> Self {
        Self {
            preview,
            review,
            _marker: PhantomData,
        }
    }
}

impl<S, A, Pr, Re> Prism<S, A> for FunctionPrism<S, A, Pr, Re>
where
    Pr: Fn(&S) -> Option<A>,
    Re: Fn(A) -> S,
{
    fn preview(&self, source: &S) -> Option<A> {
        (self.preview)(source)
    }

    fn review(&self, value: A) -> S {
        (self.review)(value)
    }
}

impl<S, A, Pr, Re> Clone for FunctionPrism<S, A, Pr, Re>
where
    Pr: Fn(&S) -> Option<A> + Clone,
    Re: Fn(A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            preview: self.preview.clone(),
            review: self.review.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, Pr, Re> std::fmt::Debug for FunctionPrism<S, A, Pr, Re>
where
    Pr: Fn(&S) -> Option<A>,
    Re: Fn(A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FunctionPrism").finish_non_exhaustive()
    }
}

/// A prism viewed as an optional.
///
/// Setting replaces the payload only when the source already is the focused
/// variant; any other variant is returned unchanged.
#[derive(Clone, Debug)]
pub struct PrismAsOptional<P> {
    prism: P,
}

impl<P> PrismAsOptional<P> {
    /// Wraps a prism.
    #[must_use]
    pub const fn new(prism: P) -> Self {
        Self { prism }
    }
}

impl<S, A, P> Optional<S, A> for PrismAsOptional<P>
where
    P: Prism<S, A>,
{
    fn get_option(&self, source: &S) -> Option<A> {
        self.prism.preview(source)
    }

    fn set(&self, source: S, value: A) -> S {
        if self.prism.preview(&source).is_some() {
            self.prism.review(value)
        } else {
            source
        }
    }
}

/// Creates a prism for a tuple variant with a single payload.
///
/// The payload is cloned on preview, so it must be `Clone`.
///
/// # Syntax
///
/// ```text
/// prism!(EnumType, Variant)
/// prism!(EnumType<A, B>, Variant)
/// ```
#[macro_export]
macro_rules! prism {
    ($enum_type:ident, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type| match source {
                $enum_type::$variant(value) => Some(::std::clone::Clone::clone(value)),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| $enum_type::$variant(value),
        )
    };
    ($enum_type:ident < $($generic:tt),+ >, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type<$($generic),+>| match source {
                $enum_type::$variant(value) => Some(::std::clone::Clone::clone(value)),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| $enum_type::$variant(value),
        )
    };
    ($enum_type:path, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type| match source {
                <$enum_type>::$variant(value) => Some(::std::clone::Clone::clone(value)),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| <$enum_type>::$variant(value),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Clone, PartialEq, Debug)]
    enum Shape {
        Circle(f64),
        Square(f64),
    }

    #[rstest]
    fn as_optional_leaves_other_variants_alone() {
        let circle = prism!(Shape, Circle).as_optional();

        assert_eq!(circle.set(Shape::Square(2.0), 9.0), Shape::Square(2.0));
        assert_eq!(circle.set(Shape::Circle(2.0), 9.0), Shape::Circle(9.0));
    }

    #[rstest]
    fn modify_only_touches_the_focused_variant() {
        let square = prism!(Shape, Square);

        assert_eq!(square.modify(Shape::Square(2.0), |side| side * 2.0), Shape::Square(4.0));
        assert_eq!(square.modify(Shape::Circle(2.0), |side| side * 2.0), Shape::Circle(2.0));
    }
}
