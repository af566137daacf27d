//! Elliptical arc construction.
//!
//! Builds single-arc path fragments in the SVG elliptical-arc mini-language:
//! `M<start> A <rx> <ry> <x-rotation> <large-arc> <sweep> <end>`. The two
//! flags select which of the four possible arcs between the endpoints is
//! drawn; see the W3C SVG 1.1 specification, section 8.3.8.
//!
//! All coordinates pass through [`finite_or_zero`] before emission: an arc
//! never writes a `NaN` token into path data, whatever the input.

use std::f64::consts::PI;
use std::fmt::Write;

use crate::geometry::{finite_or_zero, Mat2, Point};

/// Encoding options for [`Arc`] construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcOptions {
    /// Degrees in one full turn of the x-axis-rotation encoding.
    pub sweep_degrees: f64,
    /// Multiplier of π defining one full turn, used to normalize the sweep
    /// angle and to rescale the rotation into degrees.
    pub turn_scale: f64,
    /// Reverse traversal: flips the sweep flag and emits the path end to
    /// start, which closes the inner edge of a ring slice against its outer
    /// edge into one continuous fillable region.
    pub reverse: bool,
}

impl Default for ArcOptions {
    fn default() -> Self {
        Self {
            sweep_degrees: 360.0,
            turn_scale: 2.0,
            reverse: false,
        }
    }
}

/// An elliptical arc between two parametrized endpoints.
///
/// `start_*`/`end_*` always hold the parametrization order (`θ = start` and
/// `θ = start + sweep`), independent of traversal direction. The resolved
/// `A`-command parameters are kept so callers can re-emit the arc command
/// when composing closed regions.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    /// X coordinate at `θ = start angle`.
    pub start_x: f64,
    /// Y coordinate at `θ = start angle`.
    pub start_y: f64,
    /// X coordinate at `θ = start angle + sweep angle`.
    pub end_x: f64,
    /// Y coordinate at `θ = start angle + sweep angle`.
    pub end_y: f64,
    /// Horizontal radius of the `A` command.
    pub rx: f64,
    /// Vertical radius of the `A` command.
    pub ry: f64,
    /// X-axis rotation of the `A` command, in degrees.
    pub x_rotation: f64,
    /// Large-arc flag: the sweep exceeds a half turn.
    pub large_arc: bool,
    /// Sweep flag: positive angular direction (flipped for reversed arcs).
    pub sweep: bool,
    /// Complete `M … A …` path fragment.
    pub path: String,
}

impl Arc {
    /// Build an arc with default encoding (360-degree sweep encoding, 2π
    /// turn, forward traversal).
    #[must_use]
    pub fn new(
        center: Point,
        radii: (f64, f64),
        start_angle: f64,
        sweep_angle: f64,
        rotation: f64,
    ) -> Self {
        Self::with_options(
            center,
            radii,
            start_angle,
            sweep_angle,
            rotation,
            ArcOptions::default(),
        )
    }

    /// Build a reversed arc: same endpoints, flipped sweep flag, path
    /// traversal end to start.
    #[must_use]
    pub fn reversed(
        center: Point,
        radii: (f64, f64),
        start_angle: f64,
        sweep_angle: f64,
        rotation: f64,
    ) -> Self {
        Self::with_options(
            center,
            radii,
            start_angle,
            sweep_angle,
            rotation,
            ArcOptions {
                reverse: true,
                ..ArcOptions::default()
            },
        )
    }

    /// Build an arc with explicit encoding options.
    ///
    /// The sweep angle is normalized modulo one full turn
    /// (`turn_scale · π`) first, guarding multi-turn overflow. Endpoints are
    /// the ellipse parametrization
    /// `center + Rotation(rotation) · (rx·cos θ, ry·sin θ)`.
    #[must_use]
    pub fn with_options(
        center: Point,
        radii: (f64, f64),
        start_angle: f64,
        sweep_angle: f64,
        rotation: f64,
        options: ArcOptions,
    ) -> Self {
        let full_turn = options.turn_scale * PI;
        let sweep_angle = sweep_angle % full_turn;

        let (rx, ry) = radii;
        let start = ellipse_point(center, radii, start_angle, rotation);
        let end = ellipse_point(center, radii, start_angle + sweep_angle, rotation);

        let large_arc = sweep_angle > PI;
        let sweep = (sweep_angle > 0.0) != options.reverse;
        let x_rotation = finite_or_zero(rotation / full_turn * options.sweep_degrees);
        let rx = finite_or_zero(rx);
        let ry = finite_or_zero(ry);

        let (from, to) = if options.reverse {
            (end, start)
        } else {
            (start, end)
        };
        let mut path = String::with_capacity(64);
        let _ = write!(path, "M{} {} ", from.x, from.y);
        push_arc_to(&mut path, rx, ry, x_rotation, large_arc, sweep, to);

        Self {
            start_x: start.x,
            start_y: start.y,
            end_x: end.x,
            end_y: end.y,
            rx,
            ry,
            x_rotation,
            large_arc,
            sweep,
            path,
        }
    }
}

/// Sanitized point on a rotated ellipse at parameter `theta`.
pub(crate) fn ellipse_point(center: Point, radii: (f64, f64), theta: f64, rotation: f64) -> Point {
    let (rx, ry) = radii;
    Mat2::rotation(rotation)
        .apply(Point::new(rx * theta.cos(), ry * theta.sin()))
        .translate(center)
        .sanitized()
}

/// Append an `A` command ending at `to`. All numeric arguments are guarded.
pub(crate) fn push_arc_to(
    out: &mut String,
    rx: f64,
    ry: f64,
    x_rotation: f64,
    large_arc: bool,
    sweep: bool,
    to: Point,
) {
    let to = to.sanitized();
    let _ = write!(
        out,
        "A {} {} {} {} {} {} {}",
        finite_or_zero(rx),
        finite_or_zero(ry),
        finite_or_zero(x_rotation),
        u8::from(large_arc),
        u8::from(sweep),
        to.x,
        to.y
    );
}
