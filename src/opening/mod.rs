//! The opening model: a left edge and a tree of straight sections.
//!
//! Every type is parameterized over the information attached to it, so the
//! same shape describes both a design-time placeholder and a fully resolved
//! opening:
//!
//! - `A`: information on each curb (edge info)
//! - `B`: information on each joint
//! - `C`: information on each section, usually its division [`Strategy`]
//! - `D`: information on the opening as a whole
//!
//! Walls branch into at most three further sections at each joint, which
//! [`OneOrUptoThree`] enforces.
//!
//! [`Strategy`]: crate::division::Strategy

mod measurement;
pub mod validate;

#[cfg(feature = "optics")]
pub mod optics;

pub use measurement::{
    AngleMeasure, Bottom, Directed, Direction, DirectionError, In, Left, Measure, Measurement,
    OffsetMeasure, Out, Right, StraightMeasure, Top,
};

use serde::Serialize;

use crate::boxes::{NonEmpty, OneOrUptoThree};
use crate::numbers::{Angle, Distance};

/// An opening in a structure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Opening<A, B, C, D> {
    /// Information on the whole opening.
    pub info: D,
    /// The left edge.
    pub left: Stretch<Left, A>,
    /// The first section and everything downstream of it.
    pub section: SectionTree<A, B, C>,
}

/// What follows a section: a terminating wall or one to three sections.
pub type Rest<A, B, C> = OneOrUptoThree<Wall<A, B>, SectionTree<A, B, C>>;

/// A [`Section`] together with whatever follows it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SectionTree<A, B, C> {
    /// The section itself.
    #[serde(flatten)]
    pub section: Section<A, B, C>,
    /// The downstream wall or sections.
    pub rest: Rest<A, B, C>,
}

impl<A, B, C> SectionTree<A, B, C> {
    /// A section ending in a wall.
    #[must_use]
    pub const fn walled(section: Section<A, B, C>, wall: Wall<A, B>) -> Self {
        Self {
            section,
            rest: OneOrUptoThree::One(wall),
        }
    }

    /// Number of sections in this tree, this one included.
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.rest.branches().iter().map(Self::count).sum::<usize>()
    }
}

/// The end of a branch: its joint and the right edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Wall<A, B> {
    /// The joint to the last section.
    pub angle: Joint<B>,
    /// The right edge.
    pub right: Stretch<Right, A>,
}

/// A straight run of ceiling and floor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Section<A, B, C> {
    /// The joint to the previous run.
    pub angle: Joint<B>,
    /// The curbs along the top.
    pub ceiling: Stretch<Top, A>,
    /// The curbs along the bottom.
    pub floor: Stretch<Bottom, A>,
    /// Information on the section's face.
    pub info: C,
}

/// A joint between two runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Joint<A> {
    /// The angle between the runs.
    pub angle: Angle,
    /// The shape of the corner.
    pub corner: Join,
    /// Information on the joint.
    pub info: A,
}

/// The shape of a corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Join {
    /// Mitered.
    Miter,
    /// Rounded.
    Round,
    /// Bevelled.
    Bevel,
}

impl Join {
    /// The wire names of every join.
    pub const NAMES: &'static [(&'static str, Self)] =
        &[("miter", Self::Miter), ("round", Self::Round), ("bevel", Self::Bevel)];
}

/// The curbs along one side, with the side's own boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase", bound(serialize = "A: Serialize"))]
pub struct Stretch<S, A> {
    /// The curbs in order.
    pub curbs: NonEmpty<Curb<S, A>>,
    /// Distance to the inside, if measured.
    pub inner: Option<Measurement<In>>,
    /// Distance to the outside, if measured.
    pub outer: Option<Measurement<Out>>,
}

impl<S, A> Stretch<S, A> {
    /// A stretch of the given curbs with no boundary measured.
    #[must_use]
    pub const fn new(curbs: NonEmpty<Curb<S, A>>) -> Self {
        Self {
            curbs,
            inner: None,
            outer: None,
        }
    }

    /// A stretch of a single curb with no boundary measured.
    #[must_use]
    pub fn single(curb: Curb<S, A>) -> Self {
        Self::new(NonEmpty::new(curb))
    }
}

/// One measured piece of curb.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase", bound(serialize = "A: Serialize"))]
pub struct Curb<S, A> {
    /// Marks a curb in the middle of a run.
    #[serde(rename = "!mid", skip_serializing_if = "std::ops::Not::not")]
    pub mid: bool,
    /// Information on the curb.
    pub info: A,
    /// The curb's measurement, in a direction allowed on `S`.
    pub measure: Measurement<S>,
    /// Distance to the inside, if measured.
    pub inner: Option<Measurement<In>>,
    /// Distance to the outside, if measured.
    pub outer: Option<Measurement<Out>>,
}

impl<S: Directed, A> Curb<S, A> {
    /// A curb with the given measurement and no boundary.
    #[must_use]
    pub const fn new(measure: Measurement<S>, info: A) -> Self {
        Self {
            mid: false,
            info,
            measure,
            inner: None,
            outer: None,
        }
    }

    /// A straight curb.
    ///
    /// # Errors
    ///
    /// Returns [`DirectionError`] if `direction` is not allowed on `S`.
    pub fn straight(
        direction: Direction,
        distance: Option<Distance>,
        outage: f64,
        info: A,
    ) -> Result<Self, DirectionError> {
        let measure = Measure::Straight(StraightMeasure { distance, outage });
        Ok(Self::new(Measurement::new(direction, measure)?, info))
    }

    /// An axial curb.
    ///
    /// # Errors
    ///
    /// Returns [`DirectionError`] if `direction` is not allowed on `S`.
    pub fn axial(
        direction: Direction,
        major: Option<Distance>,
        minor: f64,
        info: A,
    ) -> Result<Self, DirectionError> {
        let measure = Measure::Axial(OffsetMeasure { major, minor });
        Ok(Self::new(Measurement::new(direction, measure)?, info))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxes::UptoThree;
    use rstest::rstest;
    use serde_json::json;

    fn joint() -> Joint<()> {
        Joint {
            angle: Angle::new(90.0).unwrap(),
            corner: Join::Miter,
            info: (),
        }
    }

    fn section() -> Section<(), (), ()> {
        Section {
            angle: joint(),
            ceiling: Stretch::single(Curb::axial(Direction::Left, None, 0.0, ()).unwrap()),
            floor: Stretch::single(Curb::axial(Direction::Right, None, 0.0, ()).unwrap()),
            info: (),
        }
    }

    fn wall() -> Wall<(), ()> {
        Wall {
            angle: joint(),
            right: Stretch::single(Curb::axial(Direction::Up, None, 0.0, ()).unwrap()),
        }
    }

    #[rstest]
    fn straight_rejects_a_direction_the_side_does_not_allow() {
        let error = Curb::<Left, ()>::straight(Direction::Up, None, 0.0, ()).unwrap_err();

        assert_eq!(error.direction, Direction::Up);
        assert_eq!(error.side, "Left");
    }

    #[rstest]
    fn count_includes_every_branch() {
        let leaf = SectionTree::walled(section(), wall());
        let tree = SectionTree {
            section: section(),
            rest: OneOrUptoThree::Many(UptoThree::two(leaf.clone(), leaf)),
        };

        assert_eq!(tree.count(), 3);
    }

    #[rstest]
    fn curb_serializes_mid_only_when_set() {
        let curb = Curb::<Right, ()>::axial(Direction::Up, None, 1.0, ()).unwrap();
        let flagged = Curb { mid: true, ..curb.clone() };

        let plain = serde_json::to_value(&curb).unwrap();
        assert!(plain.get("!mid").is_none());
        assert_eq!(plain["Inner"], json!(null));
        assert_eq!(serde_json::to_value(&flagged).unwrap()["!mid"], json!(true));
    }

    #[rstest]
    fn section_tree_flattens_its_section() {
        let value = serde_json::to_value(SectionTree::walled(section(), wall())).unwrap();

        for key in ["Angle", "Ceiling", "Floor", "Info", "Rest"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(value["Angle"]["Corner"], json!("miter"));
        assert!(value["Rest"].is_object());
    }
}
