//! Output encoders.
//!
//! The kernel's deliverables are path strings and coordinate arrays; this
//! module supplies the minimal drawable surface that embeds them into an
//! SVG document for end-to-end use and testing.

pub mod svg;

pub use svg::{SvgCanvas, SvgElement, TextAnchor};
