//! Donut-ring slice generation.
//!
//! Converts a slice of series values into angularly contiguous ring
//! segments. Each segment carries its outer [`Arc`], a closed fillable
//! path, a label-placement sub-arc anchored at the slice's center of mass,
//! and the inner-edge points used to draw slice dividers.

use std::f64::consts::PI;
use std::fmt::Write;

use crate::arc::{ellipse_point, push_arc_to, Arc};
use crate::geometry::Point;

/// Fraction of a half turn each full ring spans: deliberately just under 2
/// so a single-value ring never degenerates into the zero-length arc an
/// exact 2π sweep produces.
const NEAR_FULL_TURN: f64 = 1.99999;

/// Layout parameters for a donut ring.
///
/// Construct with [`DonutLayout::new`] and refine with the builder setters;
/// all parameters must be fully resolved numbers (the kernel performs no
/// defaulting of caller data).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutLayout {
    center: Point,
    radii: (f64, f64),
    hole: f64,
    rotation: f64,
    label_offset: f64,
}

impl DonutLayout {
    /// Create a layout centered at `(cx, cy)` with outer radii `(rx, ry)`.
    ///
    /// Defaults: hole scale 0.6, rotation 0, label offset 1.45.
    #[must_use]
    pub fn new(cx: f64, cy: f64, rx: f64, ry: f64) -> Self {
        Self {
            center: Point::new(cx, cy),
            radii: (rx, ry),
            hole: 0.6,
            rotation: 0.0,
            label_offset: 1.45,
        }
    }

    /// Set the inner-radius scale (0 = pie, approaching 1 = thin ring).
    #[must_use]
    pub fn hole(mut self, scale: f64) -> Self {
        self.hole = scale;
        self
    }

    /// Set the ring rotation in radians.
    #[must_use]
    pub fn rotation(mut self, radians: f64) -> Self {
        self.rotation = radians;
        self
    }

    /// Set the label-anchor radius scale relative to the outer radii.
    #[must_use]
    pub fn label_offset(mut self, scale: f64) -> Self {
        self.label_offset = scale;
        self
    }

    /// Generate one [`RingSlice`] per value, angularly contiguous.
    ///
    /// Slice *i* spans `proportion_i · π · 1.99999` radians where
    /// `proportion_i = v_i / Σv`, forced to 1 for a single-value ring and to
    /// 0 when the sum is non-positive. Offsets accumulate iteratively, so
    /// consecutive slices share their boundary angle exactly.
    #[must_use]
    pub fn slices(&self, values: &[f64]) -> Vec<RingSlice> {
        let sum: f64 = values.iter().sum();
        let (rx, ry) = self.radii;
        let inner_radii = (rx * self.hole, ry * self.hole);
        let label_radii = (rx * self.label_offset, ry * self.label_offset);
        let first_separator = ellipse_point(self.center, inner_radii, 0.0, self.rotation);

        let mut out = Vec::with_capacity(values.len());
        let mut acc = 0.0;
        for (index, &value) in values.iter().enumerate() {
            let mut proportion = if sum > 0.0 { value / sum } else { 0.0 };
            if values.len() == 1 {
                proportion = 1.0;
            }
            let ratio = proportion * (PI * NEAR_FULL_TURN);
            // Half the slice's own share lands the anchor on its center of
            // mass rather than its angular midpoint.
            let mid_ratio = if sum > 0.0 {
                value / 2.0 / sum * (PI * 2.0)
            } else {
                0.0
            };

            let arc = Arc::new(self.center, self.radii, acc, ratio, self.rotation);
            let inner = Arc::reversed(self.center, inner_radii, acc, ratio, self.rotation);
            let label = Arc::new(self.center, label_radii, acc, mid_ratio, self.rotation);

            // Outer sweep, bridge to the inner edge, traverse it backwards,
            // bridge home: one closed fillable region.
            let mut path = arc.path.clone();
            let _ = write!(path, " L {} {} ", inner.end_x, inner.end_y);
            push_arc_to(
                &mut path,
                inner.rx,
                inner.ry,
                inner.x_rotation,
                inner.large_arc,
                inner.sweep,
                Point::new(inner.start_x, inner.start_y),
            );
            let _ = write!(path, " L {} {} Z", arc.start_x, arc.start_y);

            out.push(RingSlice {
                index,
                value,
                proportion,
                ratio,
                separator: Point::new(inner.start_x, inner.start_y),
                first_separator,
                arc,
                label,
                path,
            });
            acc += ratio;
        }
        out
    }
}

/// One slice of a donut ring.
#[derive(Debug, Clone, PartialEq)]
pub struct RingSlice {
    /// Position of the slice in the input series.
    pub index: usize,
    /// The raw series value.
    pub value: f64,
    /// Share of the total, 0..1.
    pub proportion: f64,
    /// Angular span in radians.
    pub ratio: f64,
    /// The outer arc of the slice.
    pub arc: Arc,
    /// Closed ring-segment path, usable as a single fill region.
    pub path: String,
    /// Sub-arc whose end point anchors the slice label.
    pub label: Arc,
    /// Inner-edge point at the slice's start angle, for divider drawing.
    pub separator: Point,
    /// Inner-edge point of the ring's first slice, repeated on every slice
    /// so divider drawing needs no lookback.
    pub first_separator: Point,
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================
