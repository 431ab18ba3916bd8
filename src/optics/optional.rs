//! Optional optics for focusing on a part that may be absent.
//!
//! An Optional is the general case of a focus: an index that may be out of
//! range, a variant that may not match, or a path through a tree that may
//! stop early. Reading an absent focus yields `None`; writing to one returns
//! the source unchanged, so updates through a stale or invalid path are
//! harmless.
//!
//! # Laws
//!
//! 1. **`GetOptionSet` Law**: Setting what was read changes nothing.
//!    ```text
//!    if let Some(value) = optional.get_option(&source) then
//!        optional.set(source.clone(), value) == source
//!    ```
//!
//! 2. **`SetGetOption` Law**: Reading what was set yields it back.
//!    ```text
//!    if optional.get_option(&source).is_some() then
//!        optional.get_option(&optional.set(source, value.clone())) == Some(value)
//!    ```
//!
//! 3. **Safety**: Writing to an absent focus changes nothing.
//!    ```text
//!    if optional.get_option(&source).is_none() then
//!        optional.set(source.clone(), value) == source
//!    ```
//!
//! # Examples
//!
//! ```
//! use opening_optics::optics::{FunctionOptional, Optional};
//!
//! let second = FunctionOptional::new(
//!     |items: &Vec<i32>| items.get(1).copied(),
//!     |mut items: Vec<i32>, value: i32| {
//!         if let Some(slot) = items.get_mut(1) {
//!             *slot = value;
//!         }
//!         items
//!     },
//! );
//!
//! assert_eq!(second.get_option(&vec![1, 2, 3]), Some(2));
//! assert_eq!(second.set(vec![1], 9), vec![1]);
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

use super::lens::{Lens, LensAsOptional};
use super::prism::{Prism, PrismAsOptional};

/// An Optional focuses on a part that may be absent.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused part, if present)
pub trait Optional<S, A> {
    /// Reads the focused part, if present.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure
    ///
    /// # Returns
    ///
    /// The focused part if present, `None` otherwise
    fn get_option(&self, source: &S) -> Option<A>;

    /// Replaces the focused part.
    ///
    /// When the focus is absent, `source` is returned unchanged.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure (consumed)
    /// * `value` - The new value for the focused part
    fn set(&self, source: S, value: A) -> S;

    /// Replaces the focused part by applying a function to it, or returns
    /// `source` unchanged when the focus is absent.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        Self: Sized,
        F: FnOnce(A) -> A,
    {
        match self.get_option(&source) {
            Some(value) => self.set(source, function(value)),
            None => source,
        }
    }

    /// Returns `true` if the focused part is present.
    fn is_present(&self, source: &S) -> bool {
        self.get_option(source).is_some()
    }

    /// Composes this optional with another optional.
    fn compose<B, O>(self, other: O) -> ComposedOptional<Self, O, A>
    where
        Self: Sized,
        O: Optional<A, B>,
    {
        ComposedOptional::new(self, other)
    }

    /// Composes this optional with a lens.
    fn compose_lens<B, L>(self, lens: L) -> ComposedOptional<Self, LensAsOptional<L>, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedOptional::new(self, LensAsOptional::new(lens))
    }

    /// Composes this optional with a prism.
    fn compose_prism<B, P>(self, prism: P) -> ComposedOptional<Self, PrismAsOptional<P>, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedOptional::new(self, PrismAsOptional::new(prism))
    }

    /// Erases the type of this optional.
    ///
    /// Boxed optionals of the same source and target share one type, so a
    /// runtime list of them can be folded together.
    fn boxed(self) -> BoxedOptional<S, A>
    where
        Self: Sized + Send + Sync + 'static,
    {
        BoxedOptional::new(self)
    }
}

/// An optional implemented using getter and setter functions.
///
/// The setter must leave the source unchanged when the focus is absent.
pub struct FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, G, St> FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    /// Creates a new `FunctionOptional` from a getter and setter.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Optional<S, A> for FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    fn get_option(&self, source: &S) -> Option<A> {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, St> Clone for FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A> + Clone,
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

impl<S, A, G, St> std::fmt::Debug for FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FunctionOptional").finish_non_exhaustive()
    }
}

/// The result of composing two optionals.
///
/// # Type Parameters
///
/// - `O1`: The outer optional
/// - `O2`: The inner optional
/// - `A`: The intermediate type
pub struct ComposedOptional<O1, O2, A> {
    first: O1,
    second: O2,
    _marker: PhantomData<fn() -> A>,
}

impl<O1, O2, A> ComposedOptional<O1, O2, A> {
    /// Creates a new `ComposedOptional`.
    #[must_use]
    pub const fn new(first: O1, second: O2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, O1, O2> Optional<S, B> for ComposedOptional<O1, O2, A>
where
    O1: Optional<S, A>,
    O2: Optional<A, B>,
{
    fn get_option(&self, source: &S) -> Option<B> {
        self.first
            .get_option(source)
            .and_then(|intermediate| self.second.get_option(&intermediate))
    }

    fn set(&self, source: S, value: B) -> S {
        // A miss on either focus leaves `source` untouched, even when the
        // outer setter would normalize what it writes back.
        match self.first.get_option(&source) {
            Some(intermediate) if self.second.is_present(&intermediate) => {
                let new_intermediate = self.second.set(intermediate, value);
                self.first.set(source, new_intermediate)
            }
            _ => source,
        }
    }
}

impl<O1: Clone, O2: Clone, A> Clone for ComposedOptional<O1, O2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<O1: std::fmt::Debug, O2: std::fmt::Debug, A> std::fmt::Debug for ComposedOptional<O1, O2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedOptional")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// A type-erased, shareable optional.
pub struct BoxedOptional<S, A> {
    inner: Arc<dyn Optional<S, A> + Send + Sync>,
}

impl<S, A> BoxedOptional<S, A> {
    /// Erases the type of `optional`.
    pub fn new<O>(optional: O) -> Self
    where
        O: Optional<S, A> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(optional),
        }
    }
}

impl<S, A> Optional<S, A> for BoxedOptional<S, A> {
    fn get_option(&self, source: &S) -> Option<A> {
        self.inner.get_option(source)
    }

    fn set(&self, source: S, value: A) -> S {
        self.inner.set(source, value)
    }
}

impl<S, A> Clone for BoxedOptional<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, A> std::fmt::Debug for BoxedOptional<S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("BoxedOptional").finish_non_exhaustive()
    }
}
