// File: crates/fuelband-core/tests/band_geometry.rs
// Purpose: Validate band envelope synthesis: fades, fills, stubs and bounds.

use chrono::NaiveDate;
use fuelband_core::{BandGeometry, BandSample, CalendarDay, ChartSpace, GeometryError, Point};

fn day(d: u32) -> CalendarDay {
    CalendarDay::new(NaiveDate::from_ymd_opt(2024, 6, d).unwrap())
}

fn sample(d: u32, high: i16, low: i16) -> BandSample {
    BandSample { day: day(d), high, low }
}

/// Observations on days 1-3, a gap on day 4, an isolated day 5.
fn gapped_scenario() -> Vec<BandSample> {
    vec![
        sample(1, 100, 90),
        sample(2, 110, 95),
        sample(3, 105, 92),
        sample(5, 108, 98),
    ]
}

#[test]
fn gapped_scenario_partitions_and_bounds() {
    let space = ChartSpace::default();
    let geo = BandGeometry::new(&space, gapped_scenario()).unwrap();

    // Run A (days 1-3) is the only run long enough for a main line + fill.
    assert_eq!(geo.high_lines.len(), 1);
    assert_eq!(geo.low_lines.len(), 1);
    assert_eq!(geo.fill_areas.len(), 1);
    assert_eq!(geo.high_lines[0].points.len(), 3);

    // Both runs contribute fades.
    assert_eq!(geo.fade_in_high.len(), 2);
    assert_eq!(geo.fade_out_high.len(), 2);
    assert_eq!(geo.fade_in_areas.len(), 2);
    assert_eq!(geo.fade_out_areas.len(), 2);

    // Bounds span both runs; height comes from run A's 110 tenths.
    assert_eq!(geo.x_start, space.x_value(day(1)));
    assert_eq!(geo.x_end, space.x_value(day(5)));
    assert_eq!(geo.x_end - geo.x_start, 4.0);
    assert_eq!(geo.y_height, 11.0);
}

#[test]
fn fill_area_is_closed_with_two_points_per_day() {
    let space = ChartSpace::default();
    let geo = BandGeometry::new(&space, gapped_scenario()).unwrap();

    let fill = &geo.fill_areas[0];
    assert_eq!(fill.vertex_count(), 6, "2 x run length");
    let pts = fill.points();
    assert_eq!(pts.first(), pts.last(), "closed polygon");

    // High boundary forward, then low boundary reversed.
    let x0 = space.x_value(day(1));
    assert_eq!(pts[0], Point::new(x0, 10.0));
    assert_eq!(pts[1], Point::new(x0 + 1.0, 11.0));
    assert_eq!(pts[2], Point::new(x0 + 2.0, 10.5));
    assert_eq!(pts[3], Point::new(x0 + 2.0, 9.2));
    assert_eq!(pts[4], Point::new(x0 + 1.0, 9.5));
    assert_eq!(pts[5], Point::new(x0, 9.0));
}

#[test]
fn fades_extrapolate_a_third_of_the_sample_gap() {
    let space = ChartSpace::default();
    let geo = BandGeometry::new(&space, gapped_scenario()).unwrap();
    let third = 1.0 / 3.0;

    let x0 = space.x_value(day(1));
    let fade_in = &geo.fade_in_high[0];
    assert_eq!(fade_in.points, vec![Point::new(x0 - third, 10.0), Point::new(x0, 10.0)]);

    let x2 = space.x_value(day(3));
    let fade_out = &geo.fade_out_low[0];
    assert_eq!(fade_out.points, vec![Point::new(x2, 9.2), Point::new(x2 + third, 9.2)]);

    // Fade areas are trapezoids bridging high to low across the gap edge.
    let ramp = &geo.fade_in_areas[0];
    assert_eq!(ramp.vertex_count(), 4);
    assert_eq!(ramp.points()[0], Point::new(x0 - third, 10.0));
    assert_eq!(ramp.points()[3], Point::new(x0 - third, 9.0));
}

#[test]
fn length_one_run_emits_stubs_on_separate_boundaries() {
    let space = ChartSpace::default();
    let geo = BandGeometry::new(&space, gapped_scenario()).unwrap();
    let third = 1.0 / 3.0;
    let x5 = space.x_value(day(5));

    // The isolated day's stubs route to distinct high/low collections.
    assert_eq!(
        geo.fade_in_high[1].points,
        vec![Point::new(x5 - third, 10.8), Point::new(x5, 10.8)]
    );
    assert_eq!(
        geo.fade_in_low[1].points,
        vec![Point::new(x5 - third, 9.8), Point::new(x5, 9.8)]
    );
    assert_eq!(
        geo.fade_out_high[1].points,
        vec![Point::new(x5, 10.8), Point::new(x5 + third, 10.8)]
    );

    // Stub trapezoid spans high to low around the lone sample.
    let stub = &geo.fade_out_areas[1];
    assert_eq!(stub.vertex_count(), 4);
    assert_eq!(stub.points()[0], Point::new(x5, 10.8));
    assert_eq!(stub.points()[2], Point::new(x5 + third, 9.8));
}

#[test]
fn gapless_input_has_boundary_fades_only() {
    let space = ChartSpace::default();
    let geo = BandGeometry::new(
        &space,
        (1..=6).map(|d| sample(d, 100 + d as i16, 90 + d as i16)),
    )
    .unwrap();

    assert_eq!(geo.high_lines.len(), 1);
    assert_eq!(geo.high_lines[0].points.len(), 6);
    assert_eq!(geo.fade_in_high.len(), 1);
    assert_eq!(geo.fade_out_high.len(), 1);
    assert_eq!(geo.fill_areas[0].vertex_count(), 12);
}

#[test]
fn generation_is_order_independent() {
    let space = ChartSpace::default();
    let forward = BandGeometry::new(&space, gapped_scenario()).unwrap();

    let mut shuffled = gapped_scenario();
    shuffled.swap(0, 3);
    shuffled.swap(1, 2);
    let reordered = BandGeometry::new(&space, shuffled).unwrap();

    assert_eq!(forward, reordered);
}

#[test]
fn bounds_accumulate_per_run_not_per_dataset() {
    let space = ChartSpace::default();
    // Three runs: days 1, 10-11, 20.
    let geo = BandGeometry::new(
        &space,
        vec![sample(1, 50, 40), sample(10, 80, 70), sample(11, 90, 75), sample(20, 60, 55)],
    )
    .unwrap();

    assert_eq!(geo.x_start, space.x_value(day(1)));
    assert_eq!(geo.x_end, space.x_value(day(20)));
    assert_eq!(geo.y_height, 9.0, "middle run's high wins");
}

#[test]
fn empty_input_signals_no_data() {
    let space = ChartSpace::default();
    let err = BandGeometry::new(&space, Vec::new()).unwrap_err();
    assert_eq!(err, GeometryError::NoData);
}

#[test]
fn conflicting_duplicate_days_are_rejected() {
    let space = ChartSpace::default();
    let err = BandGeometry::new(&space, vec![sample(1, 100, 90), sample(1, 101, 90)]).unwrap_err();
    assert_eq!(err, GeometryError::ConflictingDay { day: day(1) });

    // An identical repeat is not a conflict.
    let geo = BandGeometry::new(&space, vec![sample(1, 100, 90), sample(1, 100, 90)]).unwrap();
    assert_eq!(geo.fade_in_high.len(), 1);
}

#[test]
fn sample_invariant_rejects_inverted_band() {
    assert!(BandSample::try_new(day(1), 90, 100).is_err());
    assert!(BandSample::try_new(day(1), 100, 90).is_ok());
}
