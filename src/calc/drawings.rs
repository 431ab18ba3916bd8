//! Drawings of an opening, rendered by the calculation service.

use serde::Serialize;

use super::message::Message;
use super::projection::{projection, Projection};
use super::want::{want, Want};
use super::{calc, CalcConfig, CalcError, Requestor};
use crate::concrete;
use crate::validate::{primitives, Validator};

/// Where rulers are drawn relative to the opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RulerDirection {
    /// Pointing out of the opening.
    Out,
    /// Pointing away from the viewer.
    Away,
}

impl RulerDirection {
    /// Wire names of the ruler directions.
    pub const NAMES: &'static [(&'static str, Self)] = &[("out", Self::Out), ("away", Self::Away)];
}

/// A drawing to request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Draw {
    /// The opening itself.
    Opening {
        /// How the drawing is projected.
        #[serde(rename = "Projection")]
        projection: Projection,
        /// Whether curb edges are drawn.
        #[serde(rename = "CurbEdges")]
        curb_edges: bool,
        /// Whether the floor is drawn.
        #[serde(rename = "DrawFloor")]
        draw_floor: bool,
        /// Where rulers point.
        #[serde(rename = "RulerDirection")]
        ruler_direction: RulerDirection,
    },
    /// The panels filling the opening.
    Panels {
        /// How the drawing is projected.
        #[serde(rename = "Projection")]
        projection: Projection,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Opening,
    Panels,
}

const KINDS: &[(&str, Kind)] = &[("Opening", Kind::Opening), ("Panels", Kind::Panels)];

/// Accepts a drawing request.
#[must_use]
pub fn draw() -> Validator<Draw> {
    let projection = projection();
    let ruler = primitives::keyword("RulerDirection", RulerDirection::NAMES);
    Validator::object("Draw", move |object| {
        object
            .tag("type", KINDS)
            .and_then(|kind| match kind {
                Kind::Opening => object
                    .field("Projection", &projection)
                    .zip(object.field("CurbEdges", &primitives::boolean()))
                    .map3(
                        object.field("DrawFloor", &primitives::boolean()),
                        object.field("RulerDirection", &ruler),
                        |(projection, curb_edges), draw_floor, ruler_direction| Draw::Opening {
                            projection,
                            curb_edges,
                            draw_floor,
                            ruler_direction,
                        },
                    ),
                Kind::Panels => object
                    .field("Projection", &projection)
                    .map(|projection| Draw::Panels { projection }),
            })
    })
}

/// The drawing request envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetDrawings {
    /// The opening to draw, or `true` in a response that echoes it back.
    #[serde(rename = "silicaOpening")]
    pub opening: Want<bool, concrete::Opening>,
    /// The drawings to render, or the rendered drawings.
    #[serde(rename = "silicaDrawings")]
    pub drawings: Want<Vec<Draw>, Vec<String>>,
}

/// Accepts a drawing response envelope.
#[must_use]
pub fn get_drawings_response() -> Validator<GetDrawings> {
    let opening = want(primitives::literal_true().map(|()| true), concrete::opening());
    let drawings = want(draw().array(), primitives::string().array());
    Validator::object("GetDrawings", move |object| {
        object
            .field("silicaOpening", &opening)
            .map2(object.field("silicaDrawings", &drawings), |opening, drawings| {
                GetDrawings { opening, drawings }
            })
    })
}

/// Rendered drawings, with the messages returned alongside them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drawings {
    /// One rendered drawing per request, in request order.
    pub drawings: Vec<String>,
    /// Messages returned by the service.
    pub messages: Vec<Message>,
}

/// Requests one rendered drawing of `opening` per entry of `draws`.
///
/// # Errors
///
/// Returns [`CalcError::DrawingCount`] when the service does not return
/// exactly one drawing per request, or any error of [`calc`].
pub async fn get_drawings<R: Requestor>(
    requestor: &R,
    config: &CalcConfig,
    opening: &concrete::Opening,
    draws: &[Draw],
) -> Result<Drawings, CalcError> {
    let request = GetDrawings {
        opening: Want::Resolved(opening.clone()),
        drawings: Want::Partial(draws.to_vec()),
    };
    let calculated = calc(requestor, config, &request, &get_drawings_response()).await?;
    let received = match calculated.value.drawings {
        Want::Resolved(drawings) => drawings,
        Want::Partial(requested) if requested.is_empty() => Vec::new(),
        Want::NotWanted | Want::Partial(_) => {
            return Err(CalcError::DrawingCount {
                expected: draws.len(),
                received: 0,
                messages: calculated.messages,
            });
        }
    };
    if received.len() == draws.len() {
        Ok(Drawings {
            drawings: received,
            messages: calculated.messages,
        })
    } else {
        Err(CalcError::DrawingCount {
            expected: draws.len(),
            received: received.len(),
            messages: calculated.messages,
        })
    }
}
