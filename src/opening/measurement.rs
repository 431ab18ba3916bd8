//! Measurements along curbs, walls and ceilings.
//!
//! Measurements run counter-clockwise around an opening, so each side only
//! admits a few directions. The side is carried in the type as a marker
//! implementing [`Directed`], and [`Measurement::new`] refuses any direction
//! the side does not allow.

use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;
use thiserror::Error;

use crate::numbers::{Angle, Distance};

/// The way a measurement runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Upwards.
    Up,
    /// Downwards.
    Down,
    /// Towards the left.
    Left,
    /// Towards the right.
    Right,
    /// Into the opening.
    In,
    /// Out of the opening.
    Out,
}

impl Direction {
    /// Every direction.
    pub const ALL: [Self; 6] = [
        Self::Up,
        Self::Down,
        Self::Left,
        Self::Right,
        Self::In,
        Self::Out,
    ];

    /// The wire name of this direction.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::In => "in",
            Self::Out => "out",
        }
    }

    /// Parses a wire name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|direction| direction.as_str() == name)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A side of an opening, and the directions measurements on it may take.
pub trait Directed: Copy + fmt::Debug + PartialEq + Send + Sync + 'static {
    /// The side's name, as used in shape names.
    const NAME: &'static str;
    /// The directions allowed on this side, never empty.
    const ALLOWED: &'static [Direction];
    /// The direction used when none is given.
    const DEFAULT: Direction;

    /// Returns `true` if `direction` may be used on this side.
    #[must_use]
    fn allows(direction: Direction) -> bool {
        Self::ALLOWED.contains(&direction)
    }
}

macro_rules! directed {
    ($(#[$doc:meta])* $side:ident => [$default:ident $(, $rest:ident)*]) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $side;

        impl Directed for $side {
            const NAME: &'static str = stringify!($side);
            const ALLOWED: &'static [Direction] = &[Direction::$default $(, Direction::$rest)*];
            const DEFAULT: Direction = Direction::$default;
        }
    };
}

directed!(
    /// The floor: measured up, down or right.
    Bottom => [Up, Down, Right]
);
directed!(
    /// The left edge: measured down.
    Left => [Down]
);
directed!(
    /// The right edge of a wall: measured up.
    Right => [Up]
);
directed!(
    /// The ceiling: measured up, down or left.
    Top => [Up, Down, Left]
);
directed!(
    /// Towards the inside of a curb: measured in.
    In => [In]
);
directed!(
    /// Towards the outside of a curb: measured out.
    Out => [Out]
);

/// A direction that is not allowed on a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("direction {direction} is not allowed on side {side}")]
pub struct DirectionError {
    /// The side measured.
    pub side: &'static str,
    /// The rejected direction.
    pub direction: Direction,
}

/// A straight measurement: length along a straight line and its outage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StraightMeasure {
    /// The length, if known.
    pub distance: Option<Distance>,
    /// How far the line is out of true.
    pub outage: f64,
}

/// A plumb or level distance with a secondary offset.
///
/// Shared by the axial, bowed and round shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OffsetMeasure {
    /// The plumb or level distance, if known.
    pub major: Option<Distance>,
    /// The other offset.
    pub minor: f64,
}

/// A plumb or level distance with an angle off straight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AngleMeasure {
    /// The plumb or level distance, if known.
    pub major: Option<Distance>,
    /// The angle off straight in the current direction.
    pub angle: Angle,
}

/// The shape of a measurement, without its direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Measure {
    /// Length along a straight line.
    Straight(StraightMeasure),
    /// Plumb or level distance and the other offset.
    Axial(OffsetMeasure),
    /// Plumb or level distance and the amount of bow.
    Bowed(OffsetMeasure),
    /// Plumb or level distance and the offset of an elliptical curve.
    Round(OffsetMeasure),
    /// Plumb or level distance and the angle off straight.
    Angle(AngleMeasure),
}

impl Measure {
    /// The wire discriminant of this shape.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Straight(_) => "Straight",
            Self::Axial(_) => "Axial",
            Self::Bowed(_) => "Bowed",
            Self::Round(_) => "Round",
            Self::Angle(_) => "Angle",
        }
    }

    /// The major distance; the length for a straight measurement.
    #[must_use]
    pub const fn major(&self) -> Option<Distance> {
        match self {
            Self::Straight(straight) => straight.distance,
            Self::Axial(offset) | Self::Bowed(offset) | Self::Round(offset) => offset.major,
            Self::Angle(angled) => angled.major,
        }
    }

    /// Replaces the major distance.
    #[must_use]
    pub const fn with_major(self, major: Option<Distance>) -> Self {
        match self {
            Self::Straight(straight) => Self::Straight(StraightMeasure {
                distance: major,
                ..straight
            }),
            Self::Axial(offset) => Self::Axial(OffsetMeasure { major, ..offset }),
            Self::Bowed(offset) => Self::Bowed(OffsetMeasure { major, ..offset }),
            Self::Round(offset) => Self::Round(OffsetMeasure { major, ..offset }),
            Self::Angle(angled) => Self::Angle(AngleMeasure { major, ..angled }),
        }
    }

    /// The minor offset; the outage for a straight measurement.
    ///
    /// An angle measurement derives it as `major * tan(angle)`, which is
    /// `NaN` while the major distance is unknown.
    #[must_use]
    pub fn minor(&self) -> f64 {
        match self {
            Self::Straight(straight) => straight.outage,
            Self::Axial(offset) | Self::Bowed(offset) | Self::Round(offset) => offset.minor,
            Self::Angle(angled) => angled
                .major
                .map_or(f64::NAN, |major| major.value() * angled.angle.radians().tan()),
        }
    }

    /// Replaces the minor offset.
    ///
    /// An angle measurement stores `atan2(minor, major)` as its angle when
    /// the major distance is known, and is left unchanged otherwise.
    /// A `NaN` or infinite `minor` has no wire form, so any measurement is
    /// left unchanged by one.
    #[must_use]
    pub fn with_minor(self, minor: f64) -> Self {
        if !minor.is_finite() {
            return self;
        }
        match self {
            Self::Straight(straight) => Self::Straight(StraightMeasure {
                outage: minor,
                ..straight
            }),
            Self::Axial(offset) => Self::Axial(OffsetMeasure { minor, ..offset }),
            Self::Bowed(offset) => Self::Bowed(OffsetMeasure { minor, ..offset }),
            Self::Round(offset) => Self::Round(OffsetMeasure { minor, ..offset }),
            Self::Angle(angled) => {
                let angle = angled.major.map_or(angled.angle, |major| {
                    Angle::new(minor.atan2(major.value()).to_degrees()).unwrap_or(angled.angle)
                });
                Self::Angle(AngleMeasure { angle, ..angled })
            }
        }
    }
}

/// A [`Measure`] taken in a direction allowed on side `S`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(bound(serialize = ""))]
pub struct Measurement<S> {
    #[serde(rename = "Direction")]
    direction: Direction,
    /// The shape of the measurement.
    #[serde(flatten)]
    pub measure: Measure,
    #[serde(skip)]
    side: PhantomData<fn() -> S>,
}

impl<S: Directed> Measurement<S> {
    /// Creates a measurement.
    ///
    /// # Errors
    ///
    /// Returns [`DirectionError`] if `direction` is not allowed on `S`.
    pub fn new(direction: Direction, measure: Measure) -> Result<Self, DirectionError> {
        if S::allows(direction) {
            Ok(Self {
                direction,
                measure,
                side: PhantomData,
            })
        } else {
            Err(DirectionError {
                side: S::NAME,
                direction,
            })
        }
    }

    /// Creates a measurement in the side's default direction.
    #[must_use]
    pub const fn along(measure: Measure) -> Self {
        Self {
            direction: S::DEFAULT,
            measure,
            side: PhantomData,
        }
    }

    /// The direction, always one allowed on `S`.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Changes the direction.
    ///
    /// # Errors
    ///
    /// Returns [`DirectionError`] if `direction` is not allowed on `S`.
    pub fn with_direction(self, direction: Direction) -> Result<Self, DirectionError> {
        Self::new(direction, self.measure)
    }

    /// Replaces the shape, keeping the direction.
    #[must_use]
    pub fn with_measure(self, measure: Measure) -> Self {
        Self { measure, ..self }
    }
}
