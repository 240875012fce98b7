#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- TrackLayout ---

#[test]
fn measure_derives_spacing() {
    let track = TrackLayout::measure(300.0, 4);
    assert!(track.is_ready());
    assert_eq!(track.spacing, 75.0);
    assert_eq!(track.total_steps, 4);
}

#[test]
fn unmeasured_track_is_not_ready() {
    assert!(!TrackLayout::unmeasured(4).is_ready());
    assert!(!TrackLayout::default().is_ready());
}

#[test]
fn measure_rejects_degenerate_width() {
    assert!(!TrackLayout::measure(0.0, 4).is_ready());
    assert!(!TrackLayout::measure(-10.0, 4).is_ready());
    assert!(!TrackLayout::measure(f64::NAN, 4).is_ready());
    assert!(!TrackLayout::measure(f64::INFINITY, 4).is_ready());
}

#[test]
fn measure_rejects_zero_steps() {
    assert!(!TrackLayout::measure(300.0, 0).is_ready());
}

#[test]
fn remeasure_recomputes_spacing() {
    let narrow = TrackLayout::measure(300.0, 4);
    let wide = TrackLayout::measure(600.0, 4);
    assert_eq!(narrow.spacing, 75.0);
    assert_eq!(wide.spacing, 150.0);
}

#[test]
fn clamp_pixel_bounds_to_track() {
    let track = TrackLayout::measure(300.0, 4);
    assert_eq!(track.clamp_pixel(-1.0), 0.0);
    assert_eq!(track.clamp_pixel(120.0), 120.0);
    assert_eq!(track.clamp_pixel(301.0), 300.0);
    assert_eq!(track.clamp_pixel(f64::NAN), 0.0);
}

#[test]
fn point_to_pixel_places_points_on_grid() {
    let track = TrackLayout::measure(300.0, 4);
    assert_eq!(track.point_to_pixel(0), 0.0);
    assert_eq!(track.point_to_pixel(2), 150.0);
    assert_eq!(track.point_to_pixel(4), 300.0);
}

#[test]
fn last_point_lands_exactly_on_track_end() {
    let track = TrackLayout::measure(351.0, 30);
    assert_eq!(track.point_to_pixel(30), 351.0);
    assert_eq!(track.point_to_pixel(31), 351.0);
}

// --- build_point_grid ---

#[test]
fn grid_skips_first_and_last_point() {
    let grid = build_point_grid(300.0, 4);
    assert_eq!(grid, vec![75.0, 150.0, 225.0]);
}

#[test]
fn grid_has_one_fewer_than_steps() {
    let grid = build_point_grid(351.0, 30);
    assert_eq!(grid.len(), 29);
    assert!(approx_eq(grid[0], 11.7));
    assert!(approx_eq(grid[28], 339.3));
}

#[test]
fn grid_is_evenly_spaced() {
    let grid = build_point_grid(500.0, 10);
    for pair in grid.windows(2) {
        assert!(approx_eq(pair[1] - pair[0], 50.0));
    }
}

#[test]
fn grid_for_single_step_is_empty() {
    assert!(build_point_grid(300.0, 1).is_empty());
}

#[test]
fn grid_for_unmeasured_track_is_empty() {
    assert!(build_point_grid(0.0, 4).is_empty());
}

// --- FillSpan ---

#[test]
fn single_fill_runs_from_track_start() {
    assert_eq!(FillSpan::single(120.0), FillSpan { offset: 0.0, width: 120.0 });
}

#[test]
fn range_fill_spans_between_thumbs() {
    assert_eq!(FillSpan::between(75.0, 225.0), FillSpan { offset: 75.0, width: 150.0 });
}

#[test]
fn range_fill_never_negative() {
    assert_eq!(FillSpan::between(200.0, 100.0).width, 0.0);
}
