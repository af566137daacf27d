//! Kernel invariant tests.
//!
//! End-to-end checks of the geometry kernel's load-bearing contracts: arc
//! closure, spline endpoint fidelity, gap isolation, LTTB anchors, hull
//! correctness, and the no-NaN guarantee.

#![allow(clippy::unwrap_used)]

use std::borrow::Cow;
use std::f64::consts::PI;

use trazo::prelude::*;

// ============================================================================
// ARC CLOSURE: slice spans sum to the configured near-full turn and
// consecutive slices are angularly contiguous
// ============================================================================

#[test]
fn donut_spans_sum_to_near_full_turn() {
    let layout = DonutLayout::new(0.0, 0.0, 100.0, 100.0);
    for values in [vec![1.0], vec![3.0, 7.0], vec![1.0, 2.0, 3.0, 4.0, 5.0]] {
        let slices = layout.slices(&values);
        let total: f64 = slices.iter().map(|s| s.ratio).sum();
        assert!(
            (total - PI * 1.99999).abs() < 1e-9,
            "spans sum to {total}, expected near-2pi"
        );
    }
}

#[test]
fn donut_slices_are_contiguous() {
    let slices = DonutLayout::new(50.0, 50.0, 40.0, 40.0).slices(&[4.0, 1.0, 2.0, 3.0]);
    for pair in slices.windows(2) {
        assert!(
            (pair[1].arc.start_x - pair[0].arc.end_x).abs() < 1e-9,
            "slice {} does not start where slice {} ends",
            pair[1].index,
            pair[0].index
        );
        assert!((pair[1].arc.start_y - pair[0].arc.end_y).abs() < 1e-9);
    }
}

// ============================================================================
// SINGLE-SERIES FULL TURN: one value always spans the whole ring
// ============================================================================

#[test]
fn donut_single_value_spans_full_turn_regardless_of_value() {
    for value in [0.0, 1e-12, 1.0, 1e9] {
        let slices = DonutLayout::new(0.0, 0.0, 10.0, 10.0).slices(&[value]);
        assert_eq!(slices.len(), 1);
        assert!((slices[0].proportion - 1.0).abs() < f64::EPSILON);
        assert!((slices[0].ratio - PI * 1.99999).abs() < 1e-9);
    }
}

// ============================================================================
// SPLINE ENDPOINT FIDELITY: the curve passes through the run boundaries
// ============================================================================

#[test]
fn smooth_path_hits_first_and_last_point_exactly() {
    let points = [
        Point::new(0.5, 1.25),
        Point::new(2.0, -3.0),
        Point::new(4.75, 8.5),
        Point::new(9.0, 2.0),
    ];
    let path = smooth_path(&points);
    assert!(path.starts_with("M0.5 1.25"));
    assert!(path.ends_with("9 2"));
}

// ============================================================================
// GAP ISOLATION: a gap yields disconnected sub-paths, never a bridge
// ============================================================================

#[test]
fn gap_produces_exactly_one_extra_move() {
    let data = [
        DataPoint::new(0.0, 0.0, 0.0),
        DataPoint::new(1.0, 1.0, 1.0),
        DataPoint::gap(),
        DataPoint::new(2.0, 2.0, 2.0),
        DataPoint::new(3.0, 1.0, 1.0),
    ];
    for path in [smooth_path_with_gaps(&data), straight_path_with_gaps(&data)] {
        assert_eq!(
            path.matches('M').count(),
            2,
            "expected exactly one move after the gap in {path}"
        );
    }
}

#[test]
fn area_builder_survives_all_gaps() {
    let data = [DataPoint::gap(), DataPoint::gap()];
    assert_eq!(smooth_area_with_gaps(&data, 0.0), "");
    assert_eq!(straight_area_with_gaps(&data, 0.0), "");
}

// ============================================================================
// LTTB INVARIANTS: length, anchors, and the borrowed no-op
// ============================================================================

#[test]
fn lttb_length_and_anchors() {
    let data: Vec<Point> = (0..1_000)
        .map(|i| Point::new(f64::from(i), (f64::from(i) * 0.05).sin()))
        .collect();
    for t in [3, 7, 128, 999] {
        let reduced = lttb(&data, t);
        assert_eq!(reduced.len(), t);
        assert_eq!(reduced[0], data[0]);
        assert_eq!(reduced[reduced.len() - 1], data[data.len() - 1]);
    }
}

#[test]
fn lttb_noop_returns_same_reference() {
    let data: Vec<Point> = (0..10).map(|i| Point::new(f64::from(i), 0.0)).collect();
    assert!(matches!(lttb(&data, 10), Cow::Borrowed(_)));
    assert!(matches!(lttb(&data, 11), Cow::Borrowed(_)));
    assert!(matches!(lttb(&data, 2), Cow::Borrowed(_)));
}

// ============================================================================
// HULL CORRECTNESS: interior points excluded, consistent winding
// ============================================================================

#[test]
fn hull_excludes_interior_point() {
    let cloud = [
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
        Point::new(5.0, 5.0),
    ];
    assert_eq!(gift_wrap(&cloud), "0,0 10,0 10,10 0,10");
}

// ============================================================================
// NO-NAN GUARANTEE: malformed numeric input degrades, never leaks
// ============================================================================

#[test]
fn no_nan_in_any_emitted_path() {
    let layout = DonutLayout::new(f64::NAN, 0.0, f64::NAN, -5.0);
    for slice in layout.slices(&[0.0, 0.0, 0.0]) {
        assert!(!slice.path.contains("NaN"), "NaN in {}", slice.path);
    }

    let arc = Arc::new(
        Point::new(f64::INFINITY, f64::NAN),
        (f64::NAN, f64::NAN),
        f64::NAN,
        f64::NAN,
        f64::NAN,
    );
    assert!(!arc.path.contains("NaN"));

    let data = [
        DataPoint::new(f64::NAN, 1.0, 1.0),
        DataPoint::new(1.0, f64::INFINITY, 2.0),
        DataPoint::new(2.0, 2.0, 2.0),
        DataPoint::new(3.0, 0.0, 0.0),
    ];
    for path in [
        smooth_path_with_gaps(&data),
        straight_path_with_gaps(&data),
        smooth_area_with_gaps(&data, f64::NAN),
    ] {
        assert!(!path.contains("NaN"), "NaN in {path}");
    }
}

// ============================================================================
// END TO END: kernel output embeds into a renderable document
// ============================================================================

#[test]
fn full_chart_renders_without_nan() {
    let raw: Vec<Point> = (0..5_000)
        .map(|i| Point::new(f64::from(i), (f64::from(i) * 0.01).sin() * 40.0 + 50.0))
        .collect();
    let reduced = lttb(&raw, 200);
    let samples: Vec<DataPoint> = reduced
        .iter()
        .map(|p| DataPoint::new(p.x / 25.0, p.y, p.y))
        .collect();

    let line = smooth_path_with_gaps(&samples);
    let area = smooth_area_with_gaps(&samples, 100.0);
    let slices = DonutLayout::new(100.0, 100.0, 30.0, 30.0).slices(&[3.0, 5.0, 2.0]);

    let mut canvas = SvgCanvas::new(200, 200)
        .unwrap()
        .path(area, Some(trazo::color::SERIES[0].with_alpha(80)), None, 0.0)
        .path(line, None, Some(trazo::color::SERIES[0]), 1.5);
    for slice in &slices {
        canvas = canvas.path(
            slice.path.clone(),
            Some(trazo::color::SERIES[slice.index % trazo::color::SERIES.len()]),
            None,
            0.0,
        );
    }
    let svg = canvas.render();
    assert!(svg.contains("<path"));
    assert!(!svg.contains("NaN"));
}
