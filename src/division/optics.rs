//! Optics into divisions and strategies.

use crate::optics::{BoxedOptional, FunctionLens, FunctionOptional, Lens, Optional, Prism, id_optional};
use crate::prism;

use super::{Divided, Division, DivisionStep, Strategy};

/// Resolve a [`Strategy`] to the [`Division`] it stands for.
///
/// Reading a minimal strategy synthesizes a single whole panel, which may not
/// match the division the calculation service computes for the face. Any
/// write stores a manual strategy, so a synthesized division never turns
/// back into a minimal one.
///
/// # Example
///
/// ```
/// use opening_optics::division::{Division, Strategy};
/// use opening_optics::division::optics::strategy_division;
/// use opening_optics::optics::Lens;
///
/// let lens = strategy_division::<(), &str>();
/// let minimal = Strategy::Minimal { info: "clear" };
///
/// assert_eq!(lens.get(&minimal), Division::whole("clear"));
/// assert_eq!(
///     lens.set(minimal, Division::whole("frosted")),
///     Strategy::Manual { division: Division::whole("frosted") },
/// );
/// ```
#[must_use]
pub fn strategy_division<A: Clone, B: Clone>() -> impl Lens<Strategy<A, B>, Division<A, B>> + Clone {
    FunctionLens::new(
        |source: &Strategy<A, B>| source.clone().resolve(),
        |_: Strategy<A, B>, division: Division<A, B>| Strategy::Manual { division },
    )
}

/// Focus on the [`Divided`] arm of a [`Division`].
#[must_use]
pub fn divided<A: Clone, B: Clone>() -> impl Prism<Division<A, B>, Divided<A, B>> + Clone {
    prism!(Division<A, B>, Divided)
}

/// Focus on one half of a divided panel; misses on a whole panel.
#[must_use]
pub fn division_step<A: Clone, B: Clone>(
    step: DivisionStep,
) -> impl Optional<Division<A, B>, Division<A, B>> + Clone {
    FunctionOptional::new(
        move |source: &Division<A, B>| source.child(step).cloned(),
        move |source: Division<A, B>, value: Division<A, B>| match source {
            Division::Divided(divided) => Division::Divided(match step {
                DivisionStep::Left => Divided {
                    left: Box::new(value),
                    ..divided
                },
                DivisionStep::Right => Divided {
                    right: Box::new(value),
                    ..divided
                },
            }),
            whole @ Division::Whole { .. } => whole,
        },
    )
}

/// Focus on the division reached by following `path` from the root.
///
/// An empty path focuses on the whole division; the focus misses as soon as
/// the path reaches a whole panel.
#[must_use]
pub fn division_division<A, B>(path: &[DivisionStep]) -> BoxedOptional<Division<A, B>, Division<A, B>>
where
    A: Clone + 'static,
    B: Clone + 'static,
{
    path.iter()
        .fold(id_optional::<Division<A, B>>().boxed(), |optic, &step| {
            optic.compose(division_step::<A, B>(step)).boxed()
        })
}
