//! # Trazo
//!
//! Pure geometry synthesis kernel for chart components: stateless numeric
//! routines that convert raw datasets into renderable vector geometry,
//! emitted as SVG path-data strings and coordinate arrays.
//!
//! The surrounding chart stack (layout, theming, configuration merging,
//! DOM/event plumbing) lives elsewhere; callers hand this kernel fully
//! resolved numbers and embed what comes back into a drawable surface.
//!
//! ## Features
//!
//! - **Angular geometry**: elliptical arc construction and donut-ring slice
//!   generation with exact angular bookkeeping
//! - **Smooth paths**: monotone cubic Hermite interpolation that never
//!   overshoots the data, with gap-aware sub-path segmentation
//! - **Convex hull**: gift wrapping with degenerate-input handling
//! - **Downsampling**: the LTTB family for shape-preserving data reduction
//! - **Silent degradation**: malformed numeric input never panics and never
//!   leaks `NaN` into path data
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use trazo::prelude::*;
//!
//! let slices = DonutLayout::new(100.0, 100.0, 80.0, 80.0)
//!     .rotation(-std::f64::consts::FRAC_PI_2)
//!     .slices(&[40.0, 25.0, 35.0]);
//!
//! let mut canvas = SvgCanvas::new(200, 200)?;
//! for (slice, color) in slices.iter().zip(trazo::color::SERIES.iter().cycle()) {
//!     canvas = canvas.path(slice.path.clone(), Some(*color), None, 0.0);
//! }
//! canvas.write_to_file("donut.svg")?;
//! ```
//!
//! ## Academic References
//!
//! This library implements algorithms from peer-reviewed research:
//!
//! - Fritsch, F. N., & Carlson, R. E. (1980). "Monotone Piecewise Cubic
//!   Interpolation." SIAM Journal on Numerical Analysis.
//! - Jarvis, R. A. (1973). "On the identification of the convex hull of a
//!   finite set of points in the plane." Information Processing Letters.
//! - Steinarsson, S. (2013). *Downsampling Time Series for Visual
//!   Representation.* MSc thesis, University of Iceland.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Kernel Modules
// ============================================================================

/// Elliptical arc construction.
pub mod arc;

/// Donut-ring slice generation.
pub mod donut;

/// LTTB downsampling family.
pub mod downsample;

/// Geometric primitives (points, rotation, gap-aware samples).
pub mod geometry;

/// Convex hull via gift wrapping.
pub mod hull;

/// Smooth and straight path builders.
pub mod spline;

// ============================================================================
// Surface Modules
// ============================================================================

/// Color data: RGBA value type and static palettes.
pub mod color;

/// Output encoders (SVG document assembly).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trazo operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust,ignore
/// use trazo::prelude::*;
/// ```
pub mod prelude {
    pub use crate::arc::{Arc, ArcOptions};
    pub use crate::color::Rgba;
    pub use crate::donut::{DonutLayout, RingSlice};
    pub use crate::downsample::{lttb, lttb_by, lttb_values};
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{finite_or_zero, DataPoint, Mat2, Point};
    pub use crate::hull::{gift_wrap, hull};
    pub use crate::output::{SvgCanvas, TextAnchor};
    pub use crate::spline::{
        smooth_area_with_gaps, smooth_path, smooth_path_with_gaps, straight_area_with_gaps,
        straight_path, straight_path_with_gaps,
    };
}
