//! Convex hull via gift wrapping (Jarvis march).
//!
//! O(n²) and intentionally so: hull inputs are small after upstream
//! downsampling, and the march is robust against the degenerate point sets
//! charts produce (duplicates, collinear clusters, single points).
//!
//! # References
//!
//! - Jarvis, R. A. (1973). "On the identification of the convex hull of a
//!   finite set of points in the plane." *Information Processing Letters*,
//!   2(1), 18-21.

use crate::geometry::Point;

/// Ordered hull vertices for a point cloud.
///
/// Non-finite points are dropped and exact duplicates deduplicated first; a
/// repeated coordinate must not corrupt the hull. Degenerate inputs return
/// degenerate hulls: zero or one point passes through, two distinct points
/// yield both.
#[must_use]
pub fn hull(points: &[Point]) -> Vec<Point> {
    let mut pts: Vec<Point> = points
        .iter()
        .copied()
        .filter(|p| p.x.is_finite() && p.y.is_finite())
        .collect();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    pts.dedup();

    if pts.len() < 2 {
        return pts;
    }

    // Lexicographically smallest point is on the hull; the sort above put it
    // first.
    let start = pts[0];
    let mut boundary = vec![start];
    let mut current = start;

    // Hard bound: a hull has at most n vertices, so n + 2 selection steps
    // only run out on numerically pathological orientation ties.
    for _ in 0..pts.len() + 2 {
        let mut next = if pts[0] == current { pts[1] } else { pts[0] };
        for &candidate in &pts {
            if candidate == current {
                continue;
            }
            let orient = cross(current, next, candidate);
            let farther = distance_sq(current, candidate) > distance_sq(current, next);
            if orient < 0.0 || (orient == 0.0 && farther) {
                next = candidate;
            }
        }
        if next == start {
            break;
        }
        boundary.push(next);
        current = next;
    }
    boundary
}

/// Hull as a flat `"x,y x,y …"` coordinate string, vertices rounded to
/// integer device units.
#[must_use]
pub fn gift_wrap(points: &[Point]) -> String {
    hull(points)
        .iter()
        .map(|p| format!("{},{}", p.x.round() as i64, p.y.round() as i64))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cross product of `(b - a) × (c - a)`: positive when `c` lies to the left
/// of the directed edge `a → b`.
fn cross(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

fn distance_sq(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx * dx + dy * dy
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// The march terminates within its safety bound and never leaks NaN,
        /// whatever the cloud looks like.
        #[test]
        fn prop_bounded_output(coords in prop::collection::vec((any::<f64>(), any::<f64>()), 0..64)) {
            let cloud: Vec<Point> = coords.iter().map(|&(x, y)| Point::new(x, y)).collect();
            let boundary = hull(&cloud);
            prop_assert!(boundary.len() <= cloud.len() + 3);
            prop_assert!(!gift_wrap(&cloud).contains("NaN"));
        }

        /// Every input point lies inside or on the hull: no candidate sits
        /// strictly outside any boundary edge.
        #[test]
        fn prop_contains_all_points(coords in prop::collection::vec((-1e3f64..1e3, -1e3f64..1e3), 3..32)) {
            let cloud: Vec<Point> = coords.iter().map(|&(x, y)| Point::new(x, y)).collect();
            let boundary = hull(&cloud);
            if boundary.len() >= 3 {
                for i in 0..boundary.len() {
                    let a = boundary[i];
                    let b = boundary[(i + 1) % boundary.len()];
                    for &p in &cloud {
                        prop_assert!(cross(a, b, p) >= -1e-6);
                    }
                }
            }
        }
    }
}
