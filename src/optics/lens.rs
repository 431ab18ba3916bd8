//! Lens optics for focusing on a part that is always present.
//!
//! A Lens reads and replaces one part of a larger structure. The part need not
//! be a stored field: a lens may derive its focus on read and fold a written
//! value back into the source, as long as the laws below hold.
//!
//! # Laws
//!
//! 1. **GetPut Law**: Setting what was read changes nothing.
//!    ```text
//!    lens.set(source.clone(), lens.get(&source)) == source
//!    ```
//!
//! 2. **PutGet Law**: Reading what was set yields it back.
//!    ```text
//!    lens.get(&lens.set(source, value.clone())) == value
//!    ```
//!
//! 3. **PutPut Law**: The last write wins.
//!    ```text
//!    lens.set(lens.set(source, v1), v2) == lens.set(source, v2)
//!    ```
//!
//! # Examples
//!
//! ```
//! use opening_optics::lens;
//! use opening_optics::optics::Lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = lens!(Point, x);
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(x_lens.get(&point), 10);
//!
//! let updated = x_lens.set(point, 100);
//! assert_eq!(updated.x, 100);
//! ```

use std::marker::PhantomData;

use super::optional::{ComposedOptional, Optional};
use super::prism::{Prism, PrismAsOptional};

/// A Lens focuses on a part that is always present.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused part)
pub trait Lens<S, A> {
    /// Reads the focused part.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure
    ///
    /// # Returns
    ///
    /// The focused part
    fn get(&self, source: &S) -> A;

    /// Replaces the focused part, returning a new source.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure (consumed)
    /// * `value` - The new value for the focused part
    ///
    /// # Returns
    ///
    /// A new source with the focused part replaced
    fn set(&self, source: S, value: A) -> S;

    /// Replaces the focused part by applying a function to it.
    ///
    /// # Example
    ///
    /// ```
    /// use opening_optics::lens;
    /// use opening_optics::optics::Lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x_lens = lens!(Point, x);
    /// let doubled = x_lens.modify(Point { x: 10, y: 20 }, |x| x * 2);
    /// assert_eq!(doubled.x, 20);
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        Self: Sized,
        F: FnOnce(A) -> A,
    {
        let current = self.get(&source);
        self.set(source, function(current))
    }

    /// Composes this lens with another lens to focus on a nested part.
    ///
    /// # Example
    ///
    /// ```
    /// use opening_optics::lens;
    /// use opening_optics::optics::Lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Inner { value: i32 }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Outer { inner: Inner }
    ///
    /// let value = lens!(Outer, inner).compose(lens!(Inner, value));
    ///
    /// let updated = value.set(Outer { inner: Inner { value: 1 } }, 42);
    /// assert_eq!(updated.inner.value, 42);
    /// ```
    fn compose<B, L>(self, other: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, other)
    }

    /// Composes this lens with an optional, giving an optional.
    fn compose_optional<B, O>(self, other: O) -> ComposedOptional<LensAsOptional<Self>, O, A>
    where
        Self: Sized,
        O: Optional<A, B>,
    {
        ComposedOptional::new(LensAsOptional::new(self), other)
    }

    /// Composes this lens with a prism, giving an optional.
    fn compose_prism<B, P>(
        self,
        prism: P,
    ) -> ComposedOptional<LensAsOptional<Self>, PrismAsOptional<P>, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedOptional::new(LensAsOptional::new(self), PrismAsOptional::new(prism))
    }

    /// Views this lens as an optional that always focuses.
    fn as_optional(self) -> LensAsOptional<Self>
    where
        Self: Sized,
    {
        LensAsOptional::new(self)
    }
}

/// A lens implemented using getter and setter functions.
///
/// The [`lens!`](crate::lens) macro generates a `FunctionLens` for a field.
///
/// # Example
///
/// ```
/// use opening_optics::optics::{FunctionLens, Lens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Celsius(f64);
///
/// let fahrenheit = FunctionLens::new(
///     |celsius: &Celsius| celsius.0 * 9.0 / 5.0 + 32.0,
///     |_: Celsius, fahrenheit: f64| Celsius((fahrenheit - 32.0) * 5.0 / 9.0),
/// );
///
/// assert!((fahrenheit.get(&Celsius(100.0)) - 212.0).abs() < 1e-9);
/// ```
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    /// Creates a new `FunctionLens` from a getter and setter.
    ///
    /// # Arguments
    ///
    /// * `getter` - Reads the focus from the source
    /// * `setter` - Builds a new source with the focus replaced
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    fn get(&self, source: &S) -> A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> std::fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FunctionLens").finish_non_exhaustive()
    }
}

/// A lens composed of two lenses.
///
/// # Type Parameters
///
/// - `L1`: The outer lens
/// - `L2`: The inner lens
/// - `A`: The intermediate type (target of `L1`, source of `L2`)
pub struct ComposedLens<L1, L2, A> {
    first: L1,
    second: L2,
    _marker: PhantomData<fn() -> A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Creates a new composed lens.
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
{
    fn get(&self, source: &S) -> B {
        self.second.get(&self.first.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        let intermediate = self.first.get(&source);
        let new_intermediate = self.second.set(intermediate, value);
        self.first.set(source, new_intermediate)
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, A> std::fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// A lens viewed as an optional that always focuses.
#[derive(Clone, Debug)]
pub struct LensAsOptional<L> {
    lens: L,
}

impl<L> LensAsOptional<L> {
    /// Wraps a lens.
    #[must_use]
    pub const fn new(lens: L) -> Self {
        Self { lens }
    }
}

impl<S, A, L> Optional<S, A> for LensAsOptional<L>
where
    L: Lens<S, A>,
{
    fn get_option(&self, source: &S) -> Option<A> {
        Some(self.lens.get(source))
    }

    fn set(&self, source: S, value: A) -> S {
        self.lens.set(source, value)
    }
}

/// Creates a lens for a struct field.
///
/// The focus is cloned on read, so the field type must be `Clone`.
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field_name)
/// lens!(StructType<A, B>, field_name)
/// ```
///
/// # Example
///
/// ```
/// use opening_optics::lens;
/// use opening_optics::optics::Lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let y_lens = lens!(Point, y);
/// assert_eq!(y_lens.set(Point { x: 1, y: 2 }, 5), Point { x: 1, y: 5 });
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| ::std::clone::Clone::clone(&source.$field),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type<$($generic),+>| ::std::clone::Clone::clone(&source.$field),
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| ::std::clone::Clone::clone(&source.$field),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}
