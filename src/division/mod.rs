//! Division of a planar face into panels.
//!
//! A [`Division`] is an unbounded binary tree: a face is either left whole or
//! cut in two by a [`Curve`], each half dividing further. A [`Strategy`]
//! decides whether the division is given explicitly or left to the
//! calculation service.
//!
//! Type parameters: `A` is the information on each cut edge, `B` the
//! information on each panel.

pub mod validate;

#[cfg(feature = "optics")]
pub mod optics;

use serde::Serialize;

use crate::numbers::{Angle, Distance, Nat};

/// A side of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The left side.
    Left,
    /// The right side.
    Right,
    /// The top side.
    Top,
    /// The bottom side.
    Bottom,
}

impl Side {
    /// The wire names of every side.
    pub const NAMES: &'static [(&'static str, Self)] = &[
        ("left", Self::Left),
        ("right", Self::Right),
        ("top", Self::Top),
        ("bottom", Self::Bottom),
    ];
}

/// A cut made a distance from a corner along a side, at an angle to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AngledCurve {
    /// The side the cut starts from.
    pub side: Side,
    /// The angle relative to the side.
    pub angle: Angle,
    /// Which corner of the side to measure from.
    pub corner: Nat,
    /// How far from the corner the cut starts.
    pub distance: Distance,
}

/// A third degree bezier across the panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BezierCurve {
    /// The side the cut starts from.
    pub side: Side,
}

/// The cut dividing a panel in two.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Curve {
    /// A straight cut at an angle.
    Angled(AngledCurve),
    /// A bezier cut.
    Bezier(BezierCurve),
}

impl Curve {
    /// The side the cut starts from.
    #[must_use]
    pub const fn side(&self) -> Side {
        match self {
            Self::Angled(angled) => angled.side,
            Self::Bezier(bezier) => bezier.side,
        }
    }
}

/// A panel cut in two, each half dividing further.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Divided<A, B> {
    /// The division of the left half.
    pub left: Box<Division<A, B>>,
    /// The edge on the left of the cut.
    pub left_edge: A,
    /// The division of the right half.
    pub right: Box<Division<A, B>>,
    /// The edge on the right of the cut.
    pub right_edge: A,
    /// The cut.
    pub curve: Curve,
}

/// How a face is divided into panels.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Division<A, B> {
    /// A single undivided panel.
    Whole {
        /// Information on the panel.
        #[serde(rename = "Info")]
        info: B,
    },
    /// A panel cut in two.
    Divided(Divided<A, B>),
}

impl<A, B> Division<A, B> {
    /// A single undivided panel.
    #[must_use]
    pub const fn whole(info: B) -> Self {
        Self::Whole { info }
    }

    /// Cuts a panel in two.
    #[must_use]
    pub fn divided(left: Self, left_edge: A, right: Self, right_edge: A, curve: Curve) -> Self {
        Self::Divided(Divided {
            left: Box::new(left),
            left_edge,
            right: Box::new(right),
            right_edge,
            curve,
        })
    }

    /// Returns `true` for an undivided panel.
    #[must_use]
    pub const fn is_whole(&self) -> bool {
        matches!(self, Self::Whole { .. })
    }

    /// The half of a divided panel at `step`; `None` for a whole panel.
    #[must_use]
    pub fn child(&self, step: DivisionStep) -> Option<&Self> {
        match self {
            Self::Whole { .. } => None,
            Self::Divided(divided) => Some(match step {
                DivisionStep::Left => divided.left.as_ref(),
                DivisionStep::Right => divided.right.as_ref(),
            }),
        }
    }

    /// Number of panels the face is divided into.
    #[must_use]
    pub fn panels(&self) -> usize {
        match self {
            Self::Whole { .. } => 1,
            Self::Divided(divided) => divided.left.panels() + divided.right.panels(),
        }
    }
}

/// One step down a [`Division`]: into its left or right half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DivisionStep {
    /// The left half.
    Left,
    /// The right half.
    Right,
}

/// How the division of a face is determined.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Strategy<A, B> {
    /// An explicitly given division.
    Manual {
        /// The division.
        #[serde(rename = "Division")]
        division: Division<A, B>,
    },
    /// As few panels as possible, decided by the calculation service.
    Minimal {
        /// Information on the panels.
        #[serde(rename = "Info")]
        info: B,
    },
}

impl<A, B> Strategy<A, B> {
    /// Returns `true` for an explicitly given division.
    #[must_use]
    pub const fn is_manual(&self) -> bool {
        matches!(self, Self::Manual { .. })
    }

    /// The division this strategy stands for.
    ///
    /// A minimal strategy is read as a single whole panel, which may differ
    /// from the division the calculation service would compute.
    #[must_use]
    pub fn resolve(self) -> Division<A, B> {
        match self {
            Self::Manual { division } => division,
            Self::Minimal { info } => Division::Whole { info },
        }
    }
}
