//! SVG document assembly.
//!
//! A vector-only canvas: kernel output (path data, polylines, hull
//! polygons) goes in, an SVG document comes out — as a string, a file, or a
//! base64 `data:` URI.

use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::color::Rgba;
use crate::error::{Error, Result};

/// A vector drawing surface accumulating SVG elements.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    width: u32,
    height: u32,
    background: Option<Rgba>,
    elements: Vec<SvgElement>,
}

/// An SVG element.
///
/// Field names match SVG attribute names.
#[derive(Debug, Clone)]
#[allow(missing_docs)]
pub enum SvgElement {
    /// Rectangle
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Rgba,
    },
    /// Circle
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: Rgba,
    },
    /// Line
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Rgba,
        stroke_width: f64,
    },
    /// Polyline, rendered as a polygon when filled
    Polyline {
        points: String,
        stroke: Rgba,
        stroke_width: f64,
        fill: Option<Rgba>,
    },
    /// Path (SVG path data)
    Path {
        d: String,
        fill: Option<Rgba>,
        stroke: Option<Rgba>,
        stroke_width: f64,
    },
    /// Text
    Text {
        x: f64,
        y: f64,
        text: String,
        font_size: f64,
        fill: Rgba,
        anchor: TextAnchor,
    },
}

/// Text anchor position for SVG text alignment.
#[derive(Debug, Clone, Copy, Default)]
pub enum TextAnchor {
    /// Align text start at position (left-aligned for LTR)
    #[default]
    Start,
    /// Center text at position
    Middle,
    /// Align text end at position (right-aligned for LTR)
    End,
}

impl TextAnchor {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

impl SvgCanvas {
    /// Create a canvas with the given pixel dimensions and a white
    /// background.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] when either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            background: Some(Rgba::WHITE),
            elements: Vec::new(),
        })
    }

    /// Set the background color (`None` for transparent).
    #[must_use]
    pub fn background(mut self, color: Option<Rgba>) -> Self {
        self.background = color;
        self
    }

    /// Add a filled and/or stroked path from kernel path data.
    #[must_use]
    pub fn path(
        mut self,
        d: impl Into<String>,
        fill: Option<Rgba>,
        stroke: Option<Rgba>,
        stroke_width: f64,
    ) -> Self {
        self.elements.push(SvgElement::Path {
            d: d.into(),
            fill,
            stroke,
            stroke_width,
        });
        self
    }

    /// Add a polyline from a flat `"x,y x,y …"` coordinate string (the
    /// convex-hull output format).
    #[must_use]
    pub fn polyline(mut self, points: impl Into<String>, stroke: Rgba, stroke_width: f64) -> Self {
        self.elements.push(SvgElement::Polyline {
            points: points.into(),
            stroke,
            stroke_width,
            fill: None,
        });
        self
    }

    /// Add a filled polygon from a flat coordinate string.
    #[must_use]
    pub fn polygon(
        mut self,
        points: impl Into<String>,
        fill: Rgba,
        stroke: Option<Rgba>,
        stroke_width: f64,
    ) -> Self {
        self.elements.push(SvgElement::Polyline {
            points: points.into(),
            stroke: stroke.unwrap_or(fill),
            stroke_width,
            fill: Some(fill),
        });
        self
    }

    /// Add a rectangle.
    #[must_use]
    pub fn rect(mut self, x: f64, y: f64, width: f64, height: f64, fill: Rgba) -> Self {
        self.elements.push(SvgElement::Rect {
            x,
            y,
            width,
            height,
            fill,
        });
        self
    }

    /// Add a circle.
    #[must_use]
    pub fn circle(mut self, cx: f64, cy: f64, r: f64, fill: Rgba) -> Self {
        self.elements.push(SvgElement::Circle { cx, cy, r, fill });
        self
    }

    /// Add a line.
    #[must_use]
    pub fn line(mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: Rgba, stroke_width: f64) -> Self {
        self.elements.push(SvgElement::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            stroke_width,
        });
        self
    }

    /// Add text.
    #[must_use]
    pub fn text(self, x: f64, y: f64, text: &str, font_size: f64, fill: Rgba) -> Self {
        self.text_anchored(x, y, text, font_size, fill, TextAnchor::Start)
    }

    /// Add text with an explicit anchor.
    #[must_use]
    pub fn text_anchored(
        mut self,
        x: f64,
        y: f64,
        text: &str,
        font_size: f64,
        fill: Rgba,
        anchor: TextAnchor,
    ) -> Self {
        self.elements.push(SvgElement::Text {
            x,
            y,
            text: text.to_string(),
            font_size,
            fill,
            anchor,
        });
        self
    }

    /// Render to an SVG document string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut svg = String::with_capacity(1024);
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        );
        if let Some(bg) = self.background {
            let _ = writeln!(svg, r#"  <rect width="100%" height="100%" fill="{}"/>"#, bg.css());
        }
        for element in &self.elements {
            let _ = writeln!(svg, "  {}", element_markup(element));
        }
        svg.push_str("</svg>\n");
        svg
    }

    /// Write the document to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.render().as_bytes())?;
        Ok(())
    }

    /// Export the document as a base64 `data:image/svg+xml` URI, suitable
    /// for direct embedding.
    #[must_use]
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:image/svg+xml;base64,{}",
            STANDARD.encode(self.render())
        )
    }
}

fn element_markup(element: &SvgElement) -> String {
    match element {
        SvgElement::Rect {
            x,
            y,
            width,
            height,
            fill,
        } => {
            format!(
                r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" fill="{}"/>"#,
                fill.css()
            )
        }
        SvgElement::Circle { cx, cy, r, fill } => {
            format!(r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{}"/>"#, fill.css())
        }
        SvgElement::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            stroke_width,
        } => {
            format!(
                r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{}" stroke-width="{stroke_width}"/>"#,
                stroke.css()
            )
        }
        SvgElement::Polyline {
            points,
            stroke,
            stroke_width,
            fill,
        } => {
            let fill_attr = fill.map_or_else(|| "none".to_string(), |f| f.css());
            let tag = if fill.is_some() { "polygon" } else { "polyline" };
            format!(
                r#"<{tag} points="{points}" fill="{fill_attr}" stroke="{}" stroke-width="{stroke_width}"/>"#,
                stroke.css()
            )
        }
        SvgElement::Path {
            d,
            fill,
            stroke,
            stroke_width,
        } => {
            let fill_attr = fill.map_or_else(|| "none".to_string(), |f| f.css());
            let stroke_attr = stroke
                .map(|s| format!(r#" stroke="{}" stroke-width="{stroke_width}""#, s.css()))
                .unwrap_or_default();
            format!(r#"<path d="{d}" fill="{fill_attr}"{stroke_attr}/>"#)
        }
        SvgElement::Text {
            x,
            y,
            text,
            font_size,
            fill,
            anchor,
        } => {
            let escaped = text
                .replace('&', "&amp;")
                .replace('<', "&lt;")
                .replace('>', "&gt;")
                .replace('"', "&quot;");
            format!(
                r#"<text x="{x}" y="{y}" font-size="{font_size}" fill="{}" text-anchor="{}" font-family="sans-serif">{escaped}</text>"#,
                fill.css(),
                anchor.as_str()
            )
        }
    }
}
