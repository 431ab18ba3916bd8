//! How a drawing is projected onto the page.

use serde::Serialize;

use crate::numbers::Angle;
use crate::validate::{primitives, Validated, Validator};

/// A projection of the opening onto the page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Projection {
    /// Two dimensional, ignoring changes along the depth axis.
    Flat,
    /// Two dimensional, looking down from above.
    FloorPlan,
    /// Three dimensional, without perspective shrinking.
    Isometric {
        /// Rotation about the vertical axis.
        #[serde(rename = "Rotate", skip_serializing_if = "Option::is_none")]
        rotate: Option<Angle>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Flat,
    FloorPlan,
    Isometric,
}

const KINDS: &[(&str, Kind)] = &[
    ("Flat", Kind::Flat),
    ("FloorPlan", Kind::FloorPlan),
    ("Isometric", Kind::Isometric),
];

/// Accepts a projection.
#[must_use]
pub fn projection() -> Validator<Projection> {
    Validator::object("Projection", |object| {
        object
            .tag("type", KINDS)
            .and_then(|kind| match kind {
                Kind::Flat => Validated::valid(Projection::Flat),
                Kind::FloorPlan => Validated::valid(Projection::FloorPlan),
                Kind::Isometric => object
                    .optional("Rotate", &primitives::angle())
                    .map(|rotate| Projection::Isometric { rotate }),
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{json, Value};

    #[rstest]
    #[case(json!({ "type": "Flat" }), Projection::Flat)]
    #[case(json!({ "type": "Isometric" }), Projection::Isometric { rotate: None })]
    #[case(
        json!({ "type": "Isometric", "Rotate": 30 }),
        Projection::Isometric { rotate: Angle::new(30.0).ok() }
    )]
    fn projection_decodes(#[case] input: Value, #[case] expected: Projection) {
        assert_eq!(projection().decode(&input).unwrap(), expected);
    }

    #[rstest]
    #[case(json!({ "type": "Oblique" }))]
    #[case(json!({ "type": "flat" }))]
    #[case(json!({ "Rotate": 30 }))]
    fn projection_rejects_unknown_kinds(#[case] input: Value) {
        let errors = projection().decode(&input).unwrap_err();

        assert!(errors.contains_path("type"));
    }

    #[rstest]
    fn isometric_omits_an_absent_rotation() {
        let encoded = serde_json::to_value(Projection::Isometric { rotate: None }).unwrap();

        assert_eq!(encoded, json!({ "type": "Isometric" }));
    }

    #[rstest]
    fn projection_rejects_an_out_of_range_rotation() {
        let errors = projection()
            .decode(&json!({ "type": "Isometric", "Rotate": 400 }))
            .unwrap_err();

        assert!(errors.contains_path("Rotate"));
    }
}
