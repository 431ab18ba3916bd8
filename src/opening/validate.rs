//! Structural validators for the opening model.
//!
//! Each validator takes the validators of the information slots it carries.
//! [`section_tree`] refers to itself through [`Validator::lazy`].

use crate::boxes::{non_empty, one_or_upto_three};
use crate::validate::{describe, one_of, primitives, Object, Validated, ValidationError, Validator};

use super::{
    AngleMeasure, Curb, Directed, Direction, Join, Joint, Measure, Measurement, OffsetMeasure,
    Opening, Section, SectionTree, Stretch, StraightMeasure, Wall,
};
use super::{In, Left, Out, Right, Top, Bottom};

/// Accepts a direction allowed on side `S`.
#[must_use]
pub fn direction<S: Directed>() -> Validator<Direction> {
    let name = format!("Directed {}", S::NAME);
    Validator::new(name, |input, path| {
        match input.as_str().and_then(Direction::from_name) {
            Some(direction) if S::allows(direction) => Validated::valid(direction),
            _ => {
                let allowed: Vec<&str> = S::ALLOWED.iter().map(|direction| direction.as_str()).collect();
                Validated::invalid(ValidationError::new(
                    path.clone(),
                    one_of(&allowed),
                    describe(input),
                ))
            }
        }
    })
}

fn offset(object: &Object<'_>) -> Validated<OffsetMeasure> {
    object
        .field("Major", &primitives::distance().nullable())
        .map2(object.field("Minor", &primitives::number()), |major, minor| {
            OffsetMeasure { major, minor }
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Straight,
    Axial,
    Bowed,
    Round,
    Angle,
}

const SHAPES: &[(&str, Shape)] = &[
    ("Straight", Shape::Straight),
    ("Axial", Shape::Axial),
    ("Bowed", Shape::Bowed),
    ("Round", Shape::Round),
    ("Angle", Shape::Angle),
];

fn shape(object: &Object<'_>, kind: Shape) -> Validated<Measure> {
    match kind {
        Shape::Straight => object
            .field("Distance", &primitives::distance().nullable())
            .map2(object.field("Outage", &primitives::number()), |distance, outage| {
                Measure::Straight(StraightMeasure { distance, outage })
            }),
        Shape::Axial => offset(object).map(Measure::Axial),
        Shape::Bowed => offset(object).map(Measure::Bowed),
        Shape::Round => offset(object).map(Measure::Round),
        Shape::Angle => object
            .field("Major", &primitives::distance().nullable())
            .map2(object.field("Angle", &primitives::angle()), |major, angle| {
                Measure::Angle(AngleMeasure { major, angle })
            }),
    }
}

/// Accepts any of the five measurement shapes, ignoring the direction.
#[must_use]
pub fn measure() -> Validator<Measure> {
    Validator::object("Measure", |object| {
        object
            .tag("type", SHAPES)
            .and_then(|kind| shape(object, kind))
    })
}

/// Accepts a measurement whose direction is allowed on side `S`.
#[must_use]
pub fn measurement<S: Directed>() -> Validator<Measurement<S>> {
    let name = format!("Measurement<{}>", S::NAME);
    Validator::object(name, |object| {
        let direction = object.field("Direction", &direction::<S>());
        let shape = object
            .tag("type", SHAPES)
            .and_then(|kind| shape(object, kind));
        direction
            .map2(shape, |direction, measure| Measurement::<S>::new(direction, measure))
            .and_then(|built| match built {
                Ok(measurement) => Validated::valid(measurement),
                Err(error) => Validated::invalid(ValidationError::new(
                    object.path().field("Direction"),
                    format!("Directed {}", error.side),
                    error.direction.as_str(),
                )),
            })
    })
}

/// Accepts `miter`, `round` or `bevel`.
#[must_use]
pub fn join() -> Validator<Join> {
    primitives::keyword("Join", Join::NAMES)
}

/// Accepts a joint carrying `info`.
#[must_use]
pub fn joint<B: 'static>(info: Validator<B>) -> Validator<Joint<B>> {
    Validator::object("Joint", move |object| {
        object.field("Angle", &primitives::angle()).map3(
            object.field("Corner", &join()),
            object.field("Info", &info),
            |angle, corner, info| Joint {
                angle,
                corner,
                info,
            },
        )
    })
}

fn edges(object: &Object<'_>) -> Validated<(Option<Measurement<In>>, Option<Measurement<Out>>)> {
    object
        .field("Inner", &measurement::<In>().nullable())
        .zip(object.field("Outer", &measurement::<Out>().nullable()))
}

/// Accepts a curb on side `S` carrying `info`.
///
/// The measurement's direction must be one allowed on `S`; a mismatch is
/// reported at `Measure.Direction`.
#[must_use]
pub fn curb<S: Directed, A: 'static>(info: Validator<A>) -> Validator<Curb<S, A>> {
    let name = format!("Curb<{}>", S::NAME);
    Validator::object(name, move |object| {
        let mid = object.optional("!mid", &primitives::literal_true());
        let measure = object.field("Measure", &measurement::<S>());
        mid.zip(object.field("Info", &info)).map3(
            measure,
            edges(object),
            |(mid, info), measure, (inner, outer)| Curb {
                mid: mid.is_some(),
                info,
                measure,
                inner,
                outer,
            },
        )
    })
}

/// Accepts a non-empty stretch of curbs on side `S`.
#[must_use]
pub fn stretch<S: Directed, A: 'static>(info: Validator<A>) -> Validator<Stretch<S, A>> {
    let name = format!("Stretch<{}>", S::NAME);
    let curbs = non_empty(curb::<S, A>(info));
    Validator::object(name, move |object| {
        object
            .field("Curbs", &curbs)
            .map2(edges(object), |curbs, (inner, outer)| Stretch {
                curbs,
                inner,
                outer,
            })
    })
}

/// Accepts a wall.
#[must_use]
pub fn wall<A, B>(edge: Validator<A>, joint_info: Validator<B>) -> Validator<Wall<A, B>>
where
    A: 'static,
    B: 'static,
{
    let angle = joint(joint_info);
    let right = stretch::<Right, A>(edge);
    Validator::object("Wall", move |object| {
        object
            .field("Angle", &angle)
            .map2(object.field("Right", &right), |angle, right| Wall { angle, right })
    })
}

fn section_fields<A, B, C>(
    object: &Object<'_>,
    angle: &Validator<Joint<B>>,
    ceiling: &Validator<Stretch<Top, A>>,
    floor: &Validator<Stretch<Bottom, A>>,
    info: &Validator<C>,
) -> Validated<Section<A, B, C>>
where
    A: 'static,
    B: 'static,
    C: 'static,
{
    object
        .field("Angle", angle)
        .zip(object.field("Ceiling", ceiling))
        .map3(
            object.field("Floor", floor),
            object.field("Info", info),
            |(angle, ceiling), floor, info| Section {
                angle,
                ceiling,
                floor,
                info,
            },
        )
}

/// Accepts a section.
#[must_use]
pub fn section<A, B, C>(
    edge: Validator<A>,
    joint_info: Validator<B>,
    info: Validator<C>,
) -> Validator<Section<A, B, C>>
where
    A: 'static,
    B: 'static,
    C: 'static,
{
    let angle = joint(joint_info);
    let ceiling = stretch::<Top, A>(edge.clone());
    let floor = stretch::<Bottom, A>(edge);
    Validator::object("Section", move |object| {
        section_fields(object, &angle, &ceiling, &floor, &info)
    })
}

/// Accepts a section tree, recursively.
///
/// `Rest` must be a single wall or an array of one to three further trees.
#[must_use]
pub fn section_tree<A, B, C>(
    edge: Validator<A>,
    joint_info: Validator<B>,
    info: Validator<C>,
) -> Validator<SectionTree<A, B, C>>
where
    A: 'static,
    B: 'static,
    C: 'static,
{
    Validator::lazy("SectionTree", move || {
        section_tree_node(edge.clone(), joint_info.clone(), info.clone())
    })
}

fn section_tree_node<A, B, C>(
    edge: Validator<A>,
    joint_info: Validator<B>,
    info: Validator<C>,
) -> Validator<SectionTree<A, B, C>>
where
    A: 'static,
    B: 'static,
    C: 'static,
{
    let angle = joint(joint_info.clone());
    let ceiling = stretch::<Top, A>(edge.clone());
    let floor = stretch::<Bottom, A>(edge.clone());
    let rest = one_or_upto_three(
        wall(edge.clone(), joint_info.clone()),
        section_tree(edge, joint_info, info.clone()),
    );
    Validator::object("SectionTree", move |object| {
        section_fields(object, &angle, &ceiling, &floor, &info)
            .map2(object.field("Rest", &rest), |section, rest| SectionTree {
                section,
                rest,
            })
    })
}

/// Accepts an opening.
#[must_use]
pub fn opening<A, B, C, D>(
    edge: Validator<A>,
    joint_info: Validator<B>,
    section_info: Validator<C>,
    info: Validator<D>,
) -> Validator<Opening<A, B, C, D>>
where
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
{
    let left = stretch::<Left, A>(edge.clone());
    let tree = section_tree(edge, joint_info, section_info);
    Validator::object("Opening", move |object| {
        object.field("Info", &info).map3(
            object.field("Left", &left),
            object.field("Section", &tree),
            |info, left, section| Opening {
                info,
                left,
                section,
            },
        )
    })
}
