//! Smooth and straight path builders.
//!
//! Produces SVG path data that passes through every input point exactly.
//! The smooth builders use monotone cubic Hermite interpolation: tangents
//! are zeroed at local extrema and otherwise set to the harmonic mean of the
//! adjacent secant slopes, so the curve never exceeds the local min/max of
//! its two bounding points. A chart curve must never visually imply a value
//! the data does not contain, which rules out overshooting splines such as
//! naive Catmull-Rom.
//!
//! The `*_with_gaps` variants partition their input into maximal valid runs
//! (breaking on gap markers), interpolate per run, and join runs with
//! explicit `M` commands; no implicit line ever bridges missing data.
//!
//! # References
//!
//! - Fritsch, F. N., & Carlson, R. E. (1980). "Monotone Piecewise Cubic
//!   Interpolation." *SIAM Journal on Numerical Analysis*, 17(2), 238-246.

use std::fmt::Write;

use crate::geometry::{finite_or_zero, DataPoint, Point};

/// Smooth path through a single run of points.
///
/// Coordinates are sanitized through the non-finite guard. Zero points yield
/// an empty string; a single point yields a bare move.
#[must_use]
pub fn smooth_path(points: &[Point]) -> String {
    let run: Vec<Point> = points.iter().map(|p| p.sanitized()).collect();
    let mut out = String::new();
    match run.len() {
        0 => {}
        1 => push_move(&mut out, run[0]),
        _ => push_smooth_run(&mut out, &run),
    }
    out
}

/// Smooth path over gap-separated runs.
///
/// Single-point runs are discarded (a spline needs at least two points).
#[must_use]
pub fn smooth_path_with_gaps(points: &[DataPoint]) -> String {
    let mut out = String::new();
    for run in valid_runs(points) {
        if !out.is_empty() {
            out.push(' ');
        }
        push_smooth_run(&mut out, &run);
    }
    out
}

/// Smooth fill region over gap-separated runs, each run closed down to
/// `y = baseline` on both ends.
///
/// Zero valid runs returns an empty string, never panics.
#[must_use]
pub fn smooth_area_with_gaps(points: &[DataPoint], baseline: f64) -> String {
    let baseline = finite_or_zero(baseline);
    let mut out = String::new();
    for run in valid_runs(points) {
        if !out.is_empty() {
            out.push(' ');
        }
        push_area_run(&mut out, &run, baseline, push_smooth_segments);
    }
    out
}

/// Straight polyline through a single run of points, used when
/// interpolation is disabled.
#[must_use]
pub fn straight_path(points: &[Point]) -> String {
    let run: Vec<Point> = points.iter().map(|p| p.sanitized()).collect();
    let mut out = String::new();
    match run.len() {
        0 => {}
        1 => push_move(&mut out, run[0]),
        _ => push_straight_run(&mut out, &run),
    }
    out
}

/// Straight path over gap-separated runs, same segmentation as
/// [`smooth_path_with_gaps`].
#[must_use]
pub fn straight_path_with_gaps(points: &[DataPoint]) -> String {
    let mut out = String::new();
    for run in valid_runs(points) {
        if !out.is_empty() {
            out.push(' ');
        }
        push_straight_run(&mut out, &run);
    }
    out
}

/// Straight fill region over gap-separated runs, closed to `y = baseline`.
#[must_use]
pub fn straight_area_with_gaps(points: &[DataPoint], baseline: f64) -> String {
    let baseline = finite_or_zero(baseline);
    let mut out = String::new();
    for run in valid_runs(points) {
        if !out.is_empty() {
            out.push(' ');
        }
        push_area_run(&mut out, &run, baseline, push_straight_segments);
    }
    out
}

/// Partition samples into maximal valid runs, dropping runs shorter than
/// two points.
fn valid_runs(points: &[DataPoint]) -> Vec<Vec<Point>> {
    let mut runs = Vec::new();
    let mut current: Vec<Point> = Vec::new();
    for p in points {
        if p.is_gap() {
            if current.len() >= 2 {
                runs.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
        } else {
            current.push(p.position().sanitized());
        }
    }
    if current.len() >= 2 {
        runs.push(current);
    }
    runs
}

/// Per-point tangents for a run of at least two points.
///
/// Boundary tangents copy the adjacent secant slope. Interior tangents are
/// zero where the adjacent slopes disagree in sign or either is zero, and
/// the harmonic mean of the two slopes otherwise.
fn monotone_tangents(run: &[Point]) -> Vec<f64> {
    let n = run.len();
    let mut slope = Vec::with_capacity(n - 1);
    for w in run.windows(2) {
        let dx = w[1].x - w[0].x;
        // Coincident x collapses the segment; treat it as flat.
        let s = if dx == 0.0 { 0.0 } else { (w[1].y - w[0].y) / dx };
        slope.push(finite_or_zero(s));
    }

    let mut tangent = vec![0.0; n];
    tangent[0] = slope[0];
    tangent[n - 1] = slope[n - 2];
    for i in 1..n - 1 {
        let s0 = slope[i - 1];
        let s1 = slope[i];
        tangent[i] = if s0 * s1 <= 0.0 {
            0.0
        } else {
            2.0 * s0 * s1 / (s0 + s1)
        };
    }
    tangent
}

fn push_move(out: &mut String, p: Point) {
    let _ = write!(out, "M{} {}", p.x, p.y);
}

fn push_smooth_run(out: &mut String, run: &[Point]) {
    push_move(out, run[0]);
    push_smooth_segments(out, run);
}

/// One cubic Bézier per segment, control points a third of the x-step out
/// along the Hermite tangents.
fn push_smooth_segments(out: &mut String, run: &[Point]) {
    let tangent = monotone_tangents(run);
    for i in 0..run.len() - 1 {
        let (p0, p1) = (run[i], run[i + 1]);
        let dx = (p1.x - p0.x) / 3.0;
        let c0 = Point::new(p0.x + dx, p0.y + tangent[i] * dx).sanitized();
        let c1 = Point::new(p1.x - dx, p1.y - tangent[i + 1] * dx).sanitized();
        let _ = write!(
            out,
            " C {} {}, {} {}, {} {}",
            c0.x, c0.y, c1.x, c1.y, p1.x, p1.y
        );
    }
}

fn push_straight_run(out: &mut String, run: &[Point]) {
    push_move(out, run[0]);
    push_straight_segments(out, run);
}

fn push_straight_segments(out: &mut String, run: &[Point]) {
    for p in &run[1..] {
        let _ = write!(out, " L {} {}", p.x, p.y);
    }
}

/// Close a run down to the baseline on both ends: move to the baseline under
/// the first point, rise to the run, emit its segments, drop back to the
/// baseline under the last point, close.
fn push_area_run(
    out: &mut String,
    run: &[Point],
    baseline: f64,
    segments: fn(&mut String, &[Point]),
) {
    let first = run[0];
    let last = run[run.len() - 1];
    let _ = write!(out, "M{} {} L {} {}", first.x, baseline, first.x, first.y);
    segments(out, run);
    let _ = write!(out, " L {} {} Z", last.x, baseline);
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================
