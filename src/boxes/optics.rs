//! Optics into the container shapes.

use crate::optics::{FunctionOptional, Optional, Prism};
use crate::prism;

use super::{Branch, NonEmpty, OneOrUptoThree};

/// Focus on the single `A` of a [`OneOrUptoThree`].
#[must_use]
pub fn one<A: Clone, B>() -> impl Prism<OneOrUptoThree<A, B>, A> + Clone {
    prism!(OneOrUptoThree<A, B>, One)
}

/// Focus on the `B` at `branch`, when the node holds that many.
#[must_use]
pub fn upto_three<A, B: Clone>(branch: Branch) -> impl Optional<OneOrUptoThree<A, B>, B> + Clone {
    FunctionOptional::new(
        move |source: &OneOrUptoThree<A, B>| source.branch(branch).cloned(),
        move |source: OneOrUptoThree<A, B>, value: B| match source {
            OneOrUptoThree::Many(many) => OneOrUptoThree::Many(many.replaced(branch, value)),
            one @ OneOrUptoThree::One(_) => one,
        },
    )
}

/// Focus on the element at `index` of a [`NonEmpty`].
#[must_use]
pub fn non_empty_index<T: Clone>(index: usize) -> impl Optional<NonEmpty<T>, T> + Clone {
    FunctionOptional::new(
        move |source: &NonEmpty<T>| source.get(index).cloned(),
        move |source: NonEmpty<T>, value: T| source.replaced(index, value),
    )
}
