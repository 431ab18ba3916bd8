//! Optics into the opening model.
//!
//! Field lenses follow the wire names; navigation through the section tree
//! uses [`Branch`] steps, one per level, and misses (without touching the
//! tree) as soon as a level ends in a wall or has fewer branches.

use crate::boxes::optics::{non_empty_index, upto_three};
use crate::boxes::{Branch, NonEmpty};
use crate::lens;
use crate::numbers::{Angle, Distance};
use crate::optics::{BoxedOptional, FunctionLens, Lens, Optional, id_optional};

use super::{
    Curb, Directed, Direction, In, Joint, Left, Measure, Measurement, OffsetMeasure,
    Opening, Out, Rest, Right, Section, SectionTree, Stretch, Wall,
};
use super::{Bottom, Top};

/// Focus on the left [`Stretch`] of an [`Opening`].
#[must_use]
pub fn opening_left<A: Clone, B, C, D>() -> impl Lens<Opening<A, B, C, D>, Stretch<Left, A>> + Clone {
    lens!(Opening<A, B, C, D>, left)
}

/// Focus on the information of an [`Opening`].
#[must_use]
pub fn opening_info<A, B, C, D: Clone>() -> impl Lens<Opening<A, B, C, D>, D> + Clone {
    lens!(Opening<A, B, C, D>, info)
}

/// Focus on the [`SectionTree`] of an [`Opening`].
#[must_use]
pub fn opening_section<A, B, C, D>() -> impl Lens<Opening<A, B, C, D>, SectionTree<A, B, C>> + Clone
where
    A: Clone,
    B: Clone,
    C: Clone,
{
    lens!(Opening<A, B, C, D>, section)
}

/// Focus on what follows the top section of a tree.
#[must_use]
pub fn section_rest<A, B, C>() -> impl Lens<SectionTree<A, B, C>, Rest<A, B, C>> + Clone
where
    A: Clone,
    B: Clone,
    C: Clone,
{
    lens!(SectionTree<A, B, C>, rest)
}

/// Focus on the top [`Section`] of a tree, keeping what follows it.
#[must_use]
pub fn section_tree_section<A, B, C>() -> impl Lens<SectionTree<A, B, C>, Section<A, B, C>> + Clone
where
    A: Clone,
    B: Clone,
    C: Clone,
{
    lens!(SectionTree<A, B, C>, section)
}

/// Focus on the child tree at `step`, if the tree branches that far.
#[must_use]
pub fn section_section_step<A, B, C>(
    step: Branch,
) -> impl Optional<SectionTree<A, B, C>, SectionTree<A, B, C>> + Clone
where
    A: Clone,
    B: Clone,
    C: Clone,
{
    section_rest::<A, B, C>().compose_optional(upto_three::<Wall<A, B>, SectionTree<A, B, C>>(step))
}

/// Focus on the tree reached by following `path` from the root.
///
/// An empty path focuses on the whole tree.
///
/// # Example
///
/// ```
/// use opening_optics::boxes::Branch;
/// use opening_optics::opening::optics::section_tree;
/// use opening_optics::optics::Optional;
/// # use opening_optics::opening::SectionTree;
/// # fn check(tree: SectionTree<(), (), ()>) {
/// let third = section_tree::<(), (), ()>(&[Branch::Third]);
/// if third.get_option(&tree).is_none() {
///     assert_eq!(third.set(tree.clone(), tree.clone()), tree);
/// }
/// # }
/// ```
#[must_use]
pub fn section_tree<A, B, C>(path: &[Branch]) -> BoxedOptional<SectionTree<A, B, C>, SectionTree<A, B, C>>
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
{
    path.iter()
        .fold(id_optional::<SectionTree<A, B, C>>().boxed(), |optic, &step| {
            optic.compose(section_section_step(step)).boxed()
        })
}

/// Focus on the [`Section`] reached by following `path` from the root.
#[must_use]
pub fn section_section<A, B, C>(
    path: &[Branch],
) -> impl Optional<SectionTree<A, B, C>, Section<A, B, C>> + Clone
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
{
    section_tree::<A, B, C>(path).compose_lens(section_tree_section::<A, B, C>())
}

/// Focus on the information of a [`Section`].
#[must_use]
pub fn section_info<A, B, C: Clone>() -> impl Lens<Section<A, B, C>, C> + Clone {
    lens!(Section<A, B, C>, info)
}

/// Focus on the joint of a [`Section`].
#[must_use]
pub fn section_angle<A, B: Clone, C>() -> impl Lens<Section<A, B, C>, Joint<B>> + Clone {
    lens!(Section<A, B, C>, angle)
}

/// Focus on the ceiling of a [`Section`].
#[must_use]
pub fn section_ceiling<A: Clone, B, C>() -> impl Lens<Section<A, B, C>, Stretch<Top, A>> + Clone {
    lens!(Section<A, B, C>, ceiling)
}

/// Focus on the floor of a [`Section`].
#[must_use]
pub fn section_floor<A: Clone, B, C>() -> impl Lens<Section<A, B, C>, Stretch<Bottom, A>> + Clone {
    lens!(Section<A, B, C>, floor)
}

/// Focus on the right edge of a [`Wall`].
#[must_use]
pub fn wall_right<A: Clone, B>() -> impl Lens<Wall<A, B>, Stretch<Right, A>> + Clone {
    lens!(Wall<A, B>, right)
}

/// Focus on the joint of a [`Wall`].
#[must_use]
pub fn wall_angle<A, B: Clone>() -> impl Lens<Wall<A, B>, Joint<B>> + Clone {
    lens!(Wall<A, B>, angle)
}

/// Focus on the angle of a [`Joint`].
#[must_use]
pub fn joint_angle<B>() -> impl Lens<Joint<B>, Angle> + Clone {
    lens!(Joint<B>, angle)
}

/// Focus on the curbs of a [`Stretch`].
#[must_use]
pub fn stretch_curbs<S: Directed, A: Clone>() -> impl Lens<Stretch<S, A>, NonEmpty<Curb<S, A>>> + Clone {
    lens!(Stretch<S, A>, curbs)
}

/// Focus on the curb at `index` of a [`Stretch`].
#[must_use]
pub fn stretch_curb<S: Directed, A: Clone>(index: usize) -> impl Optional<Stretch<S, A>, Curb<S, A>> + Clone {
    stretch_curbs::<S, A>().compose_optional(non_empty_index::<Curb<S, A>>(index))
}

/// Focus on the inside measurement of a [`Stretch`].
#[must_use]
pub fn stretch_inner<S, A>() -> impl Lens<Stretch<S, A>, Option<Measurement<In>>> + Clone {
    lens!(Stretch<S, A>, inner)
}

/// Focus on the outside measurement of a [`Stretch`].
#[must_use]
pub fn stretch_outer<S, A>() -> impl Lens<Stretch<S, A>, Option<Measurement<Out>>> + Clone {
    lens!(Stretch<S, A>, outer)
}

/// Focus on the measurement of a [`Curb`].
#[must_use]
pub fn curb_measure<S: Directed, A>() -> impl Lens<Curb<S, A>, Measurement<S>> + Clone {
    lens!(Curb<S, A>, measure)
}

/// Focus on the inside measurement of a [`Curb`].
#[must_use]
pub fn curb_inner<S, A>() -> impl Lens<Curb<S, A>, Option<Measurement<In>>> + Clone {
    lens!(Curb<S, A>, inner)
}

/// Focus on the outside measurement of a [`Curb`].
#[must_use]
pub fn curb_outer<S, A>() -> impl Lens<Curb<S, A>, Option<Measurement<Out>>> + Clone {
    lens!(Curb<S, A>, outer)
}

/// Focus on the measurement of the curb at `index` of a [`Stretch`].
#[must_use]
pub fn stretch_measure<S: Directed, A: Clone>(
    index: usize,
) -> impl Optional<Stretch<S, A>, Measurement<S>> + Clone {
    stretch_curb::<S, A>(index).compose_lens(curb_measure::<S, A>())
}

/// Focus on the major distance of the curb at `index` of a [`Stretch`].
#[must_use]
pub fn stretch_measure_major<S: Directed, A: Clone>(
    index: usize,
) -> impl Optional<Stretch<S, A>, Option<Distance>> + Clone {
    stretch_measure::<S, A>(index).compose_lens(measure_major::<S>())
}

/// Focus on the minor offset of the curb at `index` of a [`Stretch`].
#[must_use]
pub fn stretch_measure_minor<S: Directed, A: Clone>(index: usize) -> impl Optional<Stretch<S, A>, f64> + Clone {
    stretch_measure::<S, A>(index).compose_lens(measure_minor::<S>())
}

/// Focus on the major distance of a measurement, whatever its shape.
///
/// For a straight measurement this is its length.
#[must_use]
pub fn measure_major<S: Directed>() -> impl Lens<Measurement<S>, Option<Distance>> + Clone {
    FunctionLens::new(
        |source: &Measurement<S>| source.measure.major(),
        |source: Measurement<S>, major: Option<Distance>| {
            source.with_measure(source.measure.with_major(major))
        },
    )
}

/// Focus on the minor offset of a measurement, whatever its shape.
///
/// For a straight measurement this is its outage. For an angle measurement
/// the offset is derived from the angle (see [`Measure::minor`]); writing it
/// changes the angle, and is ignored while the major distance is unknown.
///
/// # Example
///
/// ```
/// use opening_optics::numbers::{Angle, Distance};
/// use opening_optics::opening::{AngleMeasure, Direction, Measure, Measurement, Top};
/// use opening_optics::opening::optics::measure_minor;
/// use opening_optics::optics::Lens;
///
/// let measure = Measure::Angle(AngleMeasure {
///     major: Some(Distance::new(100.0)?),
///     angle: Angle::new(45.0)?,
/// });
/// let measurement = Measurement::<Top>::new(Direction::Up, measure)?;
///
/// assert!((measure_minor().get(&measurement) - 100.0).abs() < 1e-9);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn measure_minor<S: Directed>() -> impl Lens<Measurement<S>, f64> + Clone {
    FunctionLens::new(
        |source: &Measurement<S>| source.measure.minor(),
        |source: Measurement<S>, minor: f64| source.with_measure(source.measure.with_minor(minor)),
    )
}

/// Views a measurement that may be missing as always present.
///
/// A missing measurement reads as an axial one of unknown major distance and
/// no offset, taken in `direction` (or the side's default direction when `S`
/// does not allow it). Any write stores the measurement.
///
/// This is not a lawful lens: writing back what was read from `None` stores
/// the blank measurement, so GetPut fails for a missing measurement. PutGet
/// and PutPut hold.
#[must_use]
pub fn nullable_measure<S: Directed>(
    direction: Direction,
) -> impl Lens<Option<Measurement<S>>, Measurement<S>> + Clone {
    FunctionLens::new(
        move |source: &Option<Measurement<S>>| {
            source.unwrap_or_else(|| {
                let blank = Measure::Axial(OffsetMeasure {
                    major: None,
                    minor: 0.0,
                });
                Measurement::new(direction, blank).unwrap_or_else(|_| Measurement::along(blank))
            })
        },
        |_: Option<Measurement<S>>, value: Measurement<S>| Some(value),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxes::{OneOrUptoThree, UptoThree};
    use crate::opening::Join;
    use rstest::rstest;

    type Tree = SectionTree<u8, (), u8>;

    fn joint() -> Joint<()> {
        Joint {
            angle: Angle::new(90.0).unwrap(),
            corner: Join::Bevel,
            info: (),
        }
    }

    fn section(info: u8) -> Section<u8, (), u8> {
        Section {
            angle: joint(),
            ceiling: Stretch::single(Curb::axial(Direction::Up, None, 0.0, info).unwrap()),
            floor: Stretch::single(Curb::axial(Direction::Up, None, 0.0, info).unwrap()),
            info,
        }
    }

    fn leaf(info: u8) -> Tree {
        SectionTree::walled(
            section(info),
            Wall {
                angle: joint(),
                right: Stretch::single(Curb::axial(Direction::Up, None, 0.0, info).unwrap()),
            },
        )
    }

    fn forked() -> Tree {
        SectionTree {
            section: section(0),
            rest: OneOrUptoThree::Many(UptoThree::two(
                leaf(1),
                SectionTree {
                    section: section(2),
                    rest: OneOrUptoThree::Many(UptoThree::one(leaf(3))),
                },
            )),
        }
    }

    #[rstest]
    #[case(&[], Some(0))]
    #[case(&[Branch::First], Some(1))]
    #[case(&[Branch::Second], Some(2))]
    #[case(&[Branch::Second, Branch::First], Some(3))]
    #[case(&[Branch::Third], None)]
    #[case(&[Branch::First, Branch::First], None)]
    fn section_section_follows_the_path(#[case] path: &[Branch], #[case] expected: Option<u8>) {
        let info = section_section::<u8, (), u8>(path).compose_lens(section_info::<u8, (), u8>());

        assert_eq!(info.get_option(&forked()), expected);
    }

    #[rstest]
    fn setting_a_deep_section_keeps_its_siblings() {
        let info = section_section::<u8, (), u8>(&[Branch::Second, Branch::First])
            .compose_lens(section_info::<u8, (), u8>());

        let updated = info.set(forked(), 30);

        assert_eq!(info.get_option(&updated), Some(30));
        assert_eq!(updated.rest.branch(Branch::First), Some(&leaf(1)));
        assert_eq!(updated.section, forked().section);
    }

    #[rstest]
    fn section_tree_section_keeps_the_rest() {
        let updated = section_tree_section::<u8, (), u8>().set(forked(), section(9));

        assert_eq!(updated.section, section(9));
        assert_eq!(updated.rest, forked().rest);
    }

    #[rstest]
    fn stretch_curb_misses_past_the_end() {
        let stretch = section(1).ceiling;

        assert!(stretch_curb::<Top, u8>(0).is_present(&stretch));
        assert_eq!(stretch_curb::<Top, u8>(1).set(stretch.clone(), stretch.curbs.first().clone()), stretch);
    }

    #[rstest]
    fn stretch_measure_major_writes_through() {
        let stretch = section(1).floor;
        let major = Distance::new(250.0).ok();

        let updated = stretch_measure_major::<Bottom, u8>(0).set(stretch, major);

        assert_eq!(updated.curbs.first().measure.measure.major(), major);
    }

    #[rstest]
    fn nullable_measure_synthesizes_an_axial_measurement() {
        let lens = nullable_measure::<In>(Direction::In);

        let synthesized = lens.get(&None);

        assert_eq!(synthesized.direction(), Direction::In);
        assert_eq!(synthesized.measure.major(), None);
        assert_eq!(lens.set(None, synthesized), Some(synthesized));
    }

    #[rstest]
    fn nullable_measure_falls_back_to_the_side_default() {
        assert_eq!(nullable_measure::<Left>(Direction::Up).get(&None).direction(), Direction::Down);
    }

    #[rstest]
    fn joint_angle_reads_the_angle() {
        assert_eq!(joint_angle::<()>().get(&joint()), Angle::new(90.0).unwrap());
    }
}
