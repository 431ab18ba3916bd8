//! Property-based tests for Lens laws.
//!
//! - **GetPut Law**: `lens.set(source, lens.get(&source)) == source`
//! - **PutGet Law**: `lens.get(&lens.set(source, value)) == value`
//! - **PutPut Law**: `lens.set(lens.set(source, v1), v2) == lens.set(source, v2)`
//!
//! The derived minor offset of an angle measurement only satisfies the laws
//! up to floating point error, and only while the major distance is known.

use opening_optics::division::optics::strategy_division;
use opening_optics::division::{self, Division};
use opening_optics::numbers::{Angle, Distance};
use opening_optics::opening::optics::{measure_major, measure_minor};
use opening_optics::opening::{
    AngleMeasure, Direction, Measure, Measurement, OffsetMeasure, StraightMeasure, Top,
};
use opening_optics::optics::Lens;
use proptest::prelude::*;

#[derive(Clone, PartialEq, Debug)]
struct Pane {
    width: u32,
    height: u32,
}

fn distance() -> impl Strategy<Value = Option<Distance>> {
    prop::option::of((0.0..10_000.0_f64).prop_map(|value| Distance::new(value).unwrap()))
}

fn measure() -> impl Strategy<Value = Measure> {
    prop_oneof![
        (distance(), -500.0..500.0_f64)
            .prop_map(|(distance, outage)| Measure::Straight(StraightMeasure { distance, outage })),
        (distance(), -500.0..500.0_f64)
            .prop_map(|(major, minor)| Measure::Axial(OffsetMeasure { major, minor })),
        (distance(), -500.0..500.0_f64)
            .prop_map(|(major, minor)| Measure::Bowed(OffsetMeasure { major, minor })),
        (distance(), -500.0..500.0_f64)
            .prop_map(|(major, minor)| Measure::Round(OffsetMeasure { major, minor })),
        (distance(), -89.0..89.0_f64).prop_map(|(major, degrees)| Measure::Angle(AngleMeasure {
            major,
            angle: Angle::new(degrees).unwrap(),
        })),
    ]
}

fn measurement() -> impl Strategy<Value = Measurement<Top>> {
    (prop::sample::select(vec![Direction::Up, Direction::Down, Direction::Left]), measure())
        .prop_map(|(direction, measure)| Measurement::new(direction, measure).unwrap())
}

fn close(left: f64, right: f64) -> bool {
    (left - right).abs() <= 1e-6 * left.abs().max(right.abs()).max(1.0)
}

proptest! {
    #[test]
    fn prop_lens_macro_get_put_law(width in any::<u32>(), height in any::<u32>()) {
        let width_lens = opening_optics::lens!(Pane, width);
        let pane = Pane { width, height };
        prop_assert_eq!(width_lens.set(pane.clone(), width_lens.get(&pane)), pane);
    }

    #[test]
    fn prop_lens_macro_put_put_law(width in any::<u32>(), first in any::<u32>(), second in any::<u32>()) {
        let width_lens = opening_optics::lens!(Pane, width);
        let pane = Pane { width, height: 1 };
        prop_assert_eq!(
            width_lens.set(width_lens.set(pane.clone(), first), second),
            width_lens.set(pane, second)
        );
    }

    #[test]
    fn prop_measure_major_get_put_law(measurement in measurement()) {
        let major = measure_major::<Top>();
        prop_assert_eq!(major.set(measurement, major.get(&measurement)), measurement);
    }

    #[test]
    fn prop_measure_major_put_get_law(measurement in measurement(), value in distance()) {
        let major = measure_major::<Top>();
        prop_assert_eq!(major.get(&major.set(measurement, value)), value);
    }

    #[test]
    fn prop_measure_major_put_put_law(measurement in measurement(), first in distance(), second in distance()) {
        let major = measure_major::<Top>();
        prop_assert_eq!(major.set(major.set(measurement, first), second), major.set(measurement, second));
    }

    #[test]
    fn prop_measure_minor_put_get_law(measurement in measurement(), value in -5_000.0..5_000.0_f64) {
        let minor = measure_minor::<Top>();
        let unknown_major = matches!(
            measurement.measure,
            Measure::Angle(AngleMeasure { major, .. }) if major.is_none_or(|major| major.value() < 1.0)
        );
        prop_assume!(!unknown_major);
        prop_assert!(close(minor.get(&minor.set(measurement, value)), value));
    }

    #[test]
    fn prop_measure_minor_keeps_the_direction_and_major(measurement in measurement(), value in -5_000.0..5_000.0_f64) {
        let updated = measure_minor::<Top>().set(measurement, value);
        prop_assert_eq!(updated.direction(), measurement.direction());
        prop_assert_eq!(updated.measure.major(), measurement.measure.major());
        prop_assert_eq!(updated.measure.kind(), measurement.measure.kind());
    }

    #[test]
    fn prop_strategy_division_put_get_law(info in any::<u8>(), panel in any::<u8>(), manual in any::<bool>()) {
        let strategy: division::Strategy<(), u8> = if manual {
            division::Strategy::Manual { division: Division::whole(info) }
        } else {
            division::Strategy::Minimal { info }
        };
        let lens = strategy_division();
        prop_assert_eq!(lens.get(&lens.set(strategy, Division::whole(panel))), Division::whole(panel));
    }

    #[test]
    fn prop_strategy_division_get_put_law_for_manual(info in any::<u8>()) {
        let strategy: division::Strategy<(), u8> = division::Strategy::Manual { division: Division::whole(info) };
        let lens = strategy_division();
        prop_assert_eq!(lens.set(strategy.clone(), lens.get(&strategy)), strategy);
    }
}
