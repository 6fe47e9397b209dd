use proptest::prelude::*;
use std::f64::consts::TAU;

use jvdt_explorer::radar::{parse_csv, scores_from_csv, to_csv, to_polar_polygon, to_table, VERTEX_COUNT};
use jvdt_explorer::scoring::{
    build_profile, classify, normalize, Axis, AxisScores, ProfileConfig, AXIS_COUNT,
};

fn any_scores() -> impl Strategy<Value = AxisScores> {
    prop::array::uniform7(0u8..=100).prop_map(|values| AxisScores::new(values).unwrap())
}

proptest! {
    #[test]
    fn normalized_values_are_score_over_hundred(scores in any_scores()) {
        let normalized = normalize(&scores);
        for (axis, score) in scores.iter() {
            let value = normalized.get(axis);
            prop_assert_eq!(value, f64::from(score) / 100.0);
            prop_assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn type_code_has_one_letter_per_axis(scores in any_scores()) {
        let code = classify(&scores);
        prop_assert_eq!(code.len(), AXIS_COUNT);
        for (axis, score) in scores.iter() {
            let (high, low) = axis.letters();
            let expected = if score >= 50 { high } else { low };
            prop_assert_eq!(code.letter(axis), expected);
        }
    }

    #[test]
    fn polygon_closes_with_even_spacing(scores in any_scores()) {
        let polygon = to_polar_polygon(&scores);
        prop_assert_eq!(polygon.len(), VERTEX_COUNT);
        prop_assert_eq!(polygon[VERTEX_COUNT - 1], polygon[0]);
        for (i, pair) in polygon[..AXIS_COUNT].windows(2).enumerate() {
            prop_assert!((pair[1].angle - pair[0].angle - TAU / AXIS_COUNT as f64).abs() < 1e-12);
            prop_assert_eq!(pair[0].radius, f64::from(scores.values()[i]));
        }
    }

    #[test]
    fn csv_export_reads_back(scores in any_scores()) {
        let csv = to_csv(&to_table(&scores));
        prop_assert_eq!(parse_csv(&csv).unwrap(), to_table(&scores));
        prop_assert_eq!(scores_from_csv(&csv).unwrap(), scores);
    }

    #[test]
    fn profile_stays_in_bounds(scores in any_scores()) {
        let profile = build_profile(&scores, &ProfileConfig::default());
        prop_assert!((0.0..=1.0).contains(&profile.integration_index));
        prop_assert!((1..=5).contains(&profile.overall_stage.level()));
        prop_assert_eq!(profile.readings.len(), AXIS_COUNT);
    }

    #[test]
    fn out_of_range_scores_are_rejected(value in prop_oneof![-1000i64..0, 101i64..1000]) {
        prop_assert!(AxisScores::uniform(value).is_err());
    }
}

#[test]
fn all_seventies() {
    let scores = AxisScores::uniform(70).unwrap();
    let normalized = normalize(&scores);
    assert!(Axis::ALL.iter().all(|&axis| normalized.get(axis) == 0.7));
    assert_eq!(classify(&scores).to_string(), "ARIDSTL");

    let first = to_polar_polygon(&scores)[0];
    assert_eq!(first.angle, 0.0);
    assert_eq!(first.radius, 70.0);
    let (x, y) = first.to_cartesian();
    assert!(x.abs() < 1e-12);
    assert!((y - 70.0).abs() < 1e-12);
}

#[test]
fn all_forties() {
    let scores = AxisScores::uniform(40).unwrap();
    assert_eq!(classify(&scores).to_string(), "NCEPMHR");
}
