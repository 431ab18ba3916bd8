//! The concrete shapes exchanged with the calculation service.
//!
//! Every information slot is opaque JSON, except the information on a
//! section, which is the [`Strategy`](crate::division::Strategy) dividing its
//! face into panels.

use serde_json::Value;

use crate::division;
use crate::opening;
use crate::validate::{primitives, Validator};

/// Information on a curb or a cut edge.
pub type EdgeInfo = Value;
/// Information on a joint between sections.
pub type JointInfo = Value;
/// Information on a panel.
pub type PanelInfo = Value;
/// Information on a whole opening.
pub type OpeningInfo = Value;
/// Information on a section: how its face is divided.
pub type SectionInfo = division::Strategy<EdgeInfo, PanelInfo>;

/// A concrete opening.
pub type Opening = opening::Opening<EdgeInfo, JointInfo, SectionInfo, OpeningInfo>;
/// A concrete section tree.
pub type SectionTree = opening::SectionTree<EdgeInfo, JointInfo, SectionInfo>;
/// A concrete section.
pub type Section = opening::Section<EdgeInfo, JointInfo, SectionInfo>;
/// A concrete division of a face.
pub type Division = division::Division<EdgeInfo, PanelInfo>;
/// A concrete division strategy.
pub type Strategy = division::Strategy<EdgeInfo, PanelInfo>;

/// Accepts a concrete division strategy.
#[must_use]
pub fn strategy() -> Validator<Strategy> {
    division::validate::strategy(primitives::any(), primitives::any())
}

/// Accepts a concrete division.
#[must_use]
pub fn division() -> Validator<Division> {
    division::validate::division(primitives::any(), primitives::any())
}

/// Accepts a concrete section tree.
#[must_use]
pub fn section_tree() -> Validator<SectionTree> {
    opening::validate::section_tree(primitives::any(), primitives::any(), strategy())
}

/// Accepts a concrete opening.
///
/// # Example
///
/// ```
/// use opening_optics::concrete;
/// use serde_json::json;
///
/// let errors = concrete::opening()
///     .decode(&json!({ "Info": null }))
///     .expect_err("an opening needs a left edge and a section");
/// assert!(errors.contains_path("Left"));
/// assert!(errors.contains_path("Section"));
/// ```
#[must_use]
pub fn opening() -> Validator<Opening> {
    opening::validate::opening(primitives::any(), primitives::any(), strategy(), primitives::any())
}

#[cfg(feature = "optics")]
pub use self::optics::{opening_division, section_division};

#[cfg(feature = "optics")]
mod optics {
    use crate::boxes::Branch;
    use crate::division::DivisionStep;
    use crate::division::optics::{division_division, strategy_division};
    use crate::opening::optics::{opening_section, section_info, section_section};
    use crate::optics::{Lens, Optional};

    use super::{Division, EdgeInfo, JointInfo, Opening, PanelInfo, Section, SectionInfo};

    /// Focus on the division of a section's face, resolving a minimal
    /// strategy to a single whole panel.
    #[must_use]
    pub fn section_division() -> impl Lens<Section, Division> + Clone {
        section_info::<EdgeInfo, JointInfo, SectionInfo>()
            .compose(strategy_division::<EdgeInfo, PanelInfo>())
    }

    /// Focus on one panel of one section of an opening.
    ///
    /// `section_path` leads through the section tree and `division_path`
    /// through the division of the section found there. The focus misses if
    /// either path leads nowhere, and writing to a missed focus changes
    /// nothing.
    #[must_use]
    pub fn opening_division(
        section_path: &[Branch],
        division_path: &[DivisionStep],
    ) -> impl Optional<Opening, Division> + Clone {
        opening_section::<EdgeInfo, JointInfo, SectionInfo, super::OpeningInfo>()
            .compose_optional(section_section::<EdgeInfo, JointInfo, SectionInfo>(section_path))
            .compose_lens(section_division())
            .compose(division_division::<EdgeInfo, PanelInfo>(division_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn curb(direction: &str) -> Value {
        json!({
            "Info": null,
            "Measure": { "type": "Axial", "Direction": direction, "Major": 100, "Minor": 0 },
            "Inner": null,
            "Outer": null,
        })
    }

    fn stretch(direction: &str) -> Value {
        json!({ "Curbs": [curb(direction)], "Inner": null, "Outer": null })
    }

    fn payload() -> Value {
        json!({
            "Info": { "name": "Shower" },
            "Left": stretch("down"),
            "Section": {
                "Angle": { "Angle": 90, "Corner": "miter", "Info": null },
                "Ceiling": stretch("up"),
                "Floor": stretch("right"),
                "Info": { "type": "Minimal", "Info": { "glass": "clear" } },
                "Rest": {
                    "Angle": { "Angle": 90, "Corner": "bevel", "Info": null },
                    "Right": stretch("up"),
                },
            },
        })
    }

    #[rstest]
    fn opening_decodes_a_complete_payload() {
        let opening = opening().decode(&payload()).unwrap();

        assert_eq!(opening.info, json!({ "name": "Shower" }));
        assert!(!opening.section.section.info.is_manual());
        assert_eq!(opening.section.count(), 1);
    }

    #[rstest]
    fn serialized_openings_validate_to_themselves() {
        let opening = opening().decode(&payload()).unwrap();

        let encoded = serde_json::to_value(&opening).unwrap();

        assert_eq!(super::opening().decode(&encoded).unwrap(), opening);
    }

    #[rstest]
    fn section_info_must_be_a_strategy() {
        let mut payload = payload();
        payload["Section"]["Info"] = json!({ "type": "Largest" });

        let errors = opening().decode(&payload).unwrap_err();

        assert!(errors.contains_path("Section.Info.type"));
    }

    fn domain_json() -> impl proptest::strategy::Strategy<Value = Value> {
        use proptest::prelude::*;

        let keys = prop::sample::select(vec![
            "type", "Info", "Left", "Right", "Section", "Rest", "Curbs", "Measure", "Direction",
            "Major", "Minor", "Angle", "Corner", "Ceiling", "Floor", "Division", "Curve", "Side",
        ]);
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            (-400.0..400.0_f64).prop_map(|number| json!(number)),
            prop::sample::select(vec!["Whole", "Divided", "Minimal", "Manual", "Axial", "Angle", "up", "down", "miter"])
                .prop_map(|text| json!(text)),
        ];
        leaf.prop_recursive(4, 48, 6, move |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::vec((keys.clone(), inner), 0..6).prop_map(|fields| {
                    Value::Object(fields.into_iter().map(|(key, value)| (key.to_string(), value)).collect())
                }),
            ]
        })
    }

    proptest::proptest! {
        #[test]
        fn prop_concrete_validators_are_total(input in domain_json()) {
            let decoded = opening().validate(&input);
            proptest::prop_assert_eq!(decoded.is_valid(), opening().is_valid(&input));
            let _ = section_tree().validate(&input);
            let _ = division().validate(&input);
            let _ = strategy().validate(&input);
        }
    }

    mod generated {
        use super::*;
        use crate::boxes::{NonEmpty, OneOrUptoThree, UptoThree};
        use crate::division::{AngledCurve, BezierCurve, Curve, Side};
        use crate::numbers::{Angle, Distance};
        use crate::opening::{
            AngleMeasure, Bottom, Curb, Directed, In, Join, Joint, Left, Measure, Measurement,
            OffsetMeasure, Out, Right, StraightMeasure, Stretch, Top, Wall,
        };
        use proptest::prelude::{prop, prop_assert_eq, prop_oneof, proptest, Just};
        use proptest::strategy::{BoxedStrategy, Strategy as _};

        type Generated<T> = BoxedStrategy<T>;

        fn quarters(range: std::ops::RangeInclusive<i32>) -> Generated<f64> {
            range.prop_map(|steps| f64::from(steps) / 4.0).boxed()
        }

        fn distance() -> Generated<Distance> {
            quarters(0..=40_000).prop_map(|value| Distance::new(value).unwrap()).boxed()
        }

        fn angle() -> Generated<Angle> {
            quarters(-1_440..=1_440).prop_map(|degrees| Angle::new(degrees).unwrap()).boxed()
        }

        fn info() -> Generated<Value> {
            prop_oneof![
                Just(Value::Null),
                (-1_000..1_000_i64).prop_map(Value::from),
                "[a-z]{0,6}".prop_map(Value::from),
            ]
            .boxed()
        }

        fn measure() -> Generated<Measure> {
            let offset = || {
                (prop::option::of(distance()), quarters(-2_000..=2_000))
                    .prop_map(|(major, minor)| OffsetMeasure { major, minor })
            };
            prop_oneof![
                (prop::option::of(distance()), quarters(-2_000..=2_000))
                    .prop_map(|(distance, outage)| Measure::Straight(StraightMeasure { distance, outage })),
                offset().prop_map(Measure::Axial),
                offset().prop_map(Measure::Bowed),
                offset().prop_map(Measure::Round),
                (prop::option::of(distance()), angle())
                    .prop_map(|(major, angle)| Measure::Angle(AngleMeasure { major, angle })),
            ]
            .boxed()
        }

        fn measurement<S: Directed>() -> Generated<Measurement<S>> {
            (prop::sample::select(S::ALLOWED), measure())
                .prop_map(|(direction, measure)| Measurement::<S>::new(direction, measure).unwrap())
                .boxed()
        }

        fn curb<S: Directed>() -> Generated<Curb<S, EdgeInfo>> {
            (
                prop::bool::ANY,
                info(),
                measurement::<S>(),
                prop::option::of(measurement::<In>()),
                prop::option::of(measurement::<Out>()),
            )
                .prop_map(|(mid, info, measure, inner, outer)| Curb {
                    mid,
                    info,
                    measure,
                    inner,
                    outer,
                })
                .boxed()
        }

        fn stretch<S: Directed>() -> Generated<Stretch<S, EdgeInfo>> {
            (
                prop::collection::vec(curb::<S>(), 1..=3),
                prop::option::of(measurement::<In>()),
                prop::option::of(measurement::<Out>()),
            )
                .prop_map(|(curbs, inner, outer)| Stretch {
                    curbs: NonEmpty::from_vec(curbs).unwrap(),
                    inner,
                    outer,
                })
                .boxed()
        }

        fn joint() -> Generated<Joint<JointInfo>> {
            (angle(), prop::sample::select(Join::NAMES), info())
                .prop_map(|(angle, (_, corner), info)| Joint { angle, corner, info })
                .boxed()
        }

        fn curve() -> Generated<Curve> {
            prop_oneof![
                prop::sample::select(Side::NAMES).prop_map(|(_, side)| Curve::Bezier(BezierCurve { side })),
                (prop::sample::select(Side::NAMES), angle(), 0..20_u64, distance()).prop_map(
                    |((_, side), angle, corner, distance)| Curve::Angled(AngledCurve {
                        side,
                        angle,
                        corner,
                        distance,
                    })
                ),
            ]
            .boxed()
        }

        fn division() -> Generated<Division> {
            info()
                .prop_map(Division::whole)
                .prop_recursive(3, 8, 2, |inner| {
                    (inner.clone(), info(), inner, info(), curve()).prop_map(
                        |(left, left_edge, right, right_edge, curve)| {
                            Division::divided(left, left_edge, right, right_edge, curve)
                        },
                    )
                })
                .boxed()
        }

        fn strategy() -> Generated<Strategy> {
            prop_oneof![
                info().prop_map(|info| Strategy::Minimal { info }),
                division().prop_map(|division| Strategy::Manual { division }),
            ]
            .boxed()
        }

        fn section() -> Generated<Section> {
            (joint(), stretch::<Top>(), stretch::<Bottom>(), strategy())
                .prop_map(|(angle, ceiling, floor, info)| Section {
                    angle,
                    ceiling,
                    floor,
                    info,
                })
                .boxed()
        }

        fn section_tree() -> Generated<SectionTree> {
            let wall = (joint(), stretch::<Right>()).prop_map(|(angle, right)| Wall { angle, right });
            (section(), wall)
                .prop_map(|(section, wall)| SectionTree::walled(section, wall))
                .prop_recursive(2, 6, 3, |inner| {
                    (section(), prop::collection::vec(inner, 1..=3)).prop_map(|(section, children)| {
                        SectionTree {
                            section,
                            rest: OneOrUptoThree::Many(UptoThree::from_vec(children).unwrap()),
                        }
                    })
                })
                .boxed()
        }

        fn openings() -> Generated<Opening> {
            (info(), stretch::<Left>(), section_tree())
                .prop_map(|(info, left, section)| Opening { info, left, section })
                .boxed()
        }

        proptest! {
            #![proptest_config(proptest::test_runner::Config::with_cases(64))]

            #[test]
            fn prop_generated_openings_validate_to_themselves(generated in openings()) {
                let encoded = serde_json::to_value(&generated).unwrap();
                prop_assert_eq!(opening().decode(&encoded).unwrap(), generated);
            }

            #[test]
            fn prop_generated_strategies_validate_to_themselves(generated in strategy()) {
                let encoded = serde_json::to_value(&generated).unwrap();
                prop_assert_eq!(crate::concrete::strategy().decode(&encoded).unwrap(), generated);
            }
        }
    }

    #[cfg(feature = "optics")]
    mod optics {
        use super::*;
        use crate::boxes::Branch;
        use crate::division::{BezierCurve, Curve, DivisionStep, Side};
        use crate::optics::Optional;

        fn halves() -> Division {
            Division::divided(
                Division::whole(json!("left")),
                Value::Null,
                Division::whole(json!("right")),
                Value::Null,
                Curve::Bezier(BezierCurve { side: Side::Top }),
            )
        }

        #[rstest]
        fn minimal_strategy_reads_as_a_whole_panel_and_writes_back_manual() {
            let opening = opening().decode(&payload()).unwrap();
            let root = opening_division(&[], &[]);

            assert_eq!(root.get_option(&opening), Some(Division::whole(json!({ "glass": "clear" }))));

            let updated = root.set(opening, halves());

            assert_eq!(
                updated.section.section.info,
                Strategy::Manual { division: halves() }
            );
            assert_eq!(
                opening_division(&[], &[DivisionStep::Right]).get_option(&updated),
                Some(Division::whole(json!("right")))
            );
        }

        #[rstest]
        #[case(&[Branch::First], &[])]
        #[case(&[], &[DivisionStep::Left])]
        fn missing_paths_change_nothing(#[case] sections: &[Branch], #[case] panels: &[DivisionStep]) {
            let opening = opening().decode(&payload()).unwrap();
            let focus = opening_division(sections, panels);

            assert_eq!(focus.get_option(&opening), None);
            assert_eq!(focus.set(opening.clone(), halves()), opening);
        }
    }
}
