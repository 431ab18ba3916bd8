//! Container shapes shared by the model: [`NonEmpty`] sequences and the
//! bounded branching node [`OneOrUptoThree`].
//!
//! Both are immutable: the editing methods consume `self` and return the
//! updated container.

#[cfg(feature = "optics")]
pub mod optics;

use serde::Serialize;
use serde_json::Value;

use crate::validate::{describe, Validated, ValidationError, Validator};

/// A sequence with at least one element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NonEmpty<T>(Vec<T>);

impl<T> NonEmpty<T> {
    /// Creates a sequence holding a single element.
    #[must_use]
    pub fn new(head: T) -> Self {
        Self(vec![head])
    }

    /// Creates a sequence from a vector, or `None` if it is empty.
    #[must_use]
    pub fn from_vec(items: Vec<T>) -> Option<Self> {
        if items.is_empty() { None } else { Some(Self(items)) }
    }

    /// Appends an element.
    #[must_use]
    pub fn pushed(mut self, item: T) -> Self {
        self.0.push(item);
        self
    }

    /// The first element, which always exists.
    #[must_use]
    pub fn first(&self) -> &T {
        &self.0[0]
    }

    /// The element at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Number of elements, at least one.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// The elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Gives back the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }

    /// Replaces the element at `index`; out-of-range indices leave the
    /// sequence unchanged.
    #[must_use]
    pub fn replaced(mut self, index: usize, value: T) -> Self {
        if let Some(slot) = self.0.get_mut(index) {
            *slot = value;
        }
        self
    }

    /// Applies `function` to every element.
    #[must_use]
    pub fn map<U, F>(self, function: F) -> NonEmpty<U>
    where
        F: FnMut(T) -> U,
    {
        NonEmpty(self.0.into_iter().map(function).collect())
    }
}

impl<'a, T> IntoIterator for &'a NonEmpty<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A sequence of one, two or three elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UptoThree<T>(Vec<T>);

impl<T> UptoThree<T> {
    /// The most elements an `UptoThree` may hold.
    pub const MAX: usize = 3;

    /// A single element.
    #[must_use]
    pub fn one(first: T) -> Self {
        Self(vec![first])
    }

    /// Two elements.
    #[must_use]
    pub fn two(first: T, second: T) -> Self {
        Self(vec![first, second])
    }

    /// Three elements.
    #[must_use]
    pub fn three(first: T, second: T, third: T) -> Self {
        Self(vec![first, second, third])
    }

    /// Creates the sequence from a vector holding one to three elements.
    #[must_use]
    pub fn from_vec(items: Vec<T>) -> Option<Self> {
        if (1..=Self::MAX).contains(&items.len()) { Some(Self(items)) } else { None }
    }

    /// The element at `branch`, if that many elements exist.
    #[must_use]
    pub fn get(&self, branch: Branch) -> Option<&T> {
        self.0.get(branch.index())
    }

    /// Number of elements, between one and three.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// The elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Replaces the element at `branch`; a missing branch leaves the
    /// sequence unchanged.
    #[must_use]
    pub fn replaced(mut self, branch: Branch, value: T) -> Self {
        if let Some(slot) = self.0.get_mut(branch.index()) {
            *slot = value;
        }
        self
    }
}

/// Selects one of the (at most three) branches of an [`UptoThree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Branch {
    /// Branch `0`.
    First,
    /// Branch `1`.
    Second,
    /// Branch `2`.
    Third,
}

impl Branch {
    /// All branches in order.
    pub const ALL: [Self; 3] = [Self::First, Self::Second, Self::Third];

    /// The zero-based position of this branch.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Third => 2,
        }
    }
}

impl TryFrom<usize> for Branch {
    type Error = usize;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL.get(index).copied().ok_or(index)
    }
}

/// A tree node: exactly one `A`, or one to three `B`s.
///
/// Serializes as the bare `A`, or as an array of `B`s.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum OneOrUptoThree<A, B> {
    /// A single terminal value.
    One(A),
    /// One to three further values.
    Many(UptoThree<B>),
}

impl<A, B> OneOrUptoThree<A, B> {
    /// Returns `true` for the single-`A` arm.
    #[must_use]
    pub const fn is_one(&self) -> bool {
        matches!(self, Self::One(_))
    }

    /// The single `A`, if this is that arm.
    #[must_use]
    pub const fn as_one(&self) -> Option<&A> {
        match self {
            Self::One(one) => Some(one),
            Self::Many(_) => None,
        }
    }

    /// The `B`s; empty for the single-`A` arm.
    #[must_use]
    pub fn branches(&self) -> &[B] {
        match self {
            Self::One(_) => &[],
            Self::Many(many) => many.as_slice(),
        }
    }

    /// The `B` at `branch`, if this node holds that many.
    #[must_use]
    pub fn branch(&self, branch: Branch) -> Option<&B> {
        match self {
            Self::One(_) => None,
            Self::Many(many) => many.get(branch),
        }
    }
}

/// Validates a sequence with at least one element of `item`'s shape.
#[must_use]
pub fn non_empty<T: 'static>(item: Validator<T>) -> Validator<NonEmpty<T>> {
    let name = format!("NonEmpty<{}>", item.name());
    let expected = name.clone();
    let items = item.array();
    Validator::new(name, move |input, path| match input {
        Value::Array(elements) if elements.is_empty() => Validated::invalid(ValidationError::new(
            path.clone(),
            expected.as_str(),
            describe(input),
        )),
        _ => items
            .validate_at(input, path)
            .map(NonEmpty),
    })
}

/// Validates either a single `one`, or an array of one to three `many`.
#[must_use]
pub fn one_or_upto_three<A, B>(one: Validator<A>, many: Validator<B>) -> Validator<OneOrUptoThree<A, B>>
where
    A: 'static,
    B: 'static,
{
    let name = format!("{} | UptoThree<{}>", one.name(), many.name());
    let expected = name.clone();
    let branches = many.array();
    Validator::new(name, move |input, path| {
        let single = one.validate_at(input, path);
        if single.is_valid() {
            return single.map(OneOrUptoThree::One);
        }
        match input {
            Value::Array(elements) if (1..=UptoThree::<B>::MAX).contains(&elements.len()) => branches
                .validate_at(input, path)
                .map(|items| OneOrUptoThree::Many(UptoThree(items))),
            Value::Array(_) => Validated::invalid(ValidationError::new(
                path.clone(),
                expected.as_str(),
                describe(input),
            )),
            _ => single.map(OneOrUptoThree::One),
        }
    })
}
