//! Structural validators for divisions and strategies.

use crate::validate::{primitives, Object, Validated, Validator};

use super::{AngledCurve, BezierCurve, Curve, Divided, Division, Side, Strategy};

/// Accepts `left`, `right`, `top` or `bottom`.
#[must_use]
pub fn side() -> Validator<Side> {
    primitives::keyword("Side", Side::NAMES)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CurveKind {
    Angled,
    Bezier,
}

const CURVES: &[(&str, CurveKind)] = &[("Angled", CurveKind::Angled), ("Bezier", CurveKind::Bezier)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DivisionKind {
    Whole,
    Divided,
}

const DIVISIONS: &[(&str, DivisionKind)] =
    &[("Whole", DivisionKind::Whole), ("Divided", DivisionKind::Divided)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StrategyKind {
    Manual,
    Minimal,
}

const STRATEGIES: &[(&str, StrategyKind)] =
    &[("Manual", StrategyKind::Manual), ("Minimal", StrategyKind::Minimal)];

/// Accepts an angled or bezier curve.
#[must_use]
pub fn curve() -> Validator<Curve> {
    Validator::object("Curve", |object| {
        object
            .tag("type", CURVES)
            .and_then(|kind| match kind {
                CurveKind::Angled => object.field("Side", &side()).zip(object.field("Angle", &primitives::angle())).map3(
                    object.field("Corner", &primitives::nat()),
                    object.field("Distance", &primitives::distance()),
                    |(side, angle), corner, distance| {
                        Curve::Angled(AngledCurve {
                            side,
                            angle,
                            corner,
                            distance,
                        })
                    },
                ),
                CurveKind::Bezier => object
                    .field("Side", &side())
                    .map(|side| Curve::Bezier(BezierCurve { side })),
            })
    })
}

/// Accepts a division, recursively.
#[must_use]
pub fn division<A, B>(edge: Validator<A>, panel: Validator<B>) -> Validator<Division<A, B>>
where
    A: 'static,
    B: 'static,
{
    Validator::lazy("Division", move || division_node(edge.clone(), panel.clone()))
}

fn division_node<A, B>(edge: Validator<A>, panel: Validator<B>) -> Validator<Division<A, B>>
where
    A: 'static,
    B: 'static,
{
    let child = division(edge.clone(), panel.clone());
    let curve = curve();
    Validator::object("Division", move |object| {
        object
            .tag("type", DIVISIONS)
            .and_then(|kind| match kind {
                DivisionKind::Whole => object.field("Info", &panel).map(Division::whole),
                DivisionKind::Divided => divided(object, &child, &edge, &curve),
            })
    })
}

fn divided<A, B>(
    object: &Object<'_>,
    child: &Validator<Division<A, B>>,
    edge: &Validator<A>,
    curve: &Validator<Curve>,
) -> Validated<Division<A, B>>
where
    A: 'static,
    B: 'static,
{
    let left = object.field("Left", child).zip(object.field("LeftEdge", edge));
    let right = object.field("Right", child).zip(object.field("RightEdge", edge));
    left.map3(right, object.field("Curve", curve), |(left, left_edge), (right, right_edge), curve| {
        Division::Divided(Divided {
            left: Box::new(left),
            left_edge,
            right: Box::new(right),
            right_edge,
            curve,
        })
    })
}

/// Accepts a manual or minimal strategy.
#[must_use]
pub fn strategy<A, B>(edge: Validator<A>, panel: Validator<B>) -> Validator<Strategy<A, B>>
where
    A: 'static,
    B: 'static,
{
    let division = division(edge, panel.clone());
    Validator::object("Strategy", move |object| {
        object
            .tag("type", STRATEGIES)
            .and_then(|kind| match kind {
                StrategyKind::Manual => object
                    .field("Division", &division)
                    .map(|division| Strategy::Manual { division }),
                StrategyKind::Minimal => object
                    .field("Info", &panel)
                    .map(|info| Strategy::Minimal { info }),
            })
    })
}
