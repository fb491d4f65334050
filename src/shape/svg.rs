//! SVG backend serializing placed shapes as markup

use crate::color::palette::Color;
use crate::io::error::Result;
use crate::shape::geometry::ShapeGeometry;
use crate::shape::{PlacedShape, ShapeSink};

/// Decimal places kept for coordinates
const PRECISION: usize = 3;

/// Format a coordinate with at most three decimals and no trailing zeros
pub fn format_number(value: f64) -> String {
    let text = format!("{value:.PRECISION$}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" || trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// SVG document assembled one element per shape
#[derive(Debug, Default)]
pub struct SvgDocument {
    width: u32,
    height: u32,
    elements: Vec<String>,
}

impl SvgDocument {
    /// Create an empty document; size and background come from [`ShapeSink::begin`]
    pub const fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            elements: Vec::new(),
        }
    }

    /// Number of elements emitted so far, background included
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Complete SVG markup
    pub fn finish(self) -> String {
        let mut out = format!(
            "<svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
            w = self.width,
            h = self.height
        );
        for element in &self.elements {
            out.push_str("  ");
            out.push_str(element);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }
}

/// Shared `fill`, `stroke` and `transform` attributes of one element
///
/// The stroke is applied to the filled element itself, so the markup keeps
/// exactly one element per cell.
fn shape_attributes(shape: &PlacedShape) -> String {
    let mut attrs = format!(r#"fill="{}""#, shape.fill.to_hex());
    if let Some((_, outline)) = &shape.stroke {
        attrs.push_str(&format!(
            r#" stroke="{}" stroke-width="{}""#,
            outline.color.to_hex(),
            format_number(outline.width)
        ));
    }
    attrs.push_str(&format!(
        r#" transform="translate({},{}) rotate({})""#,
        format_number(shape.x),
        format_number(shape.y),
        format_number(shape.rotation_degrees)
    ));
    attrs
}

fn shape_element(shape: &PlacedShape) -> String {
    let attrs = shape_attributes(shape);
    match &shape.fill_geometry {
        ShapeGeometry::Rect {
            x,
            y,
            width,
            height,
        } => format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" {attrs} />"#,
            format_number(*x),
            format_number(*y),
            format_number(*width),
            format_number(*height)
        ),
        ShapeGeometry::Circle { radius } => {
            format!(
                r#"<circle cx="0" cy="0" r="{}" {attrs} />"#,
                format_number(*radius)
            )
        }
        ShapeGeometry::Polygon(points) => {
            let points = points
                .iter()
                .map(|&(x, y)| format!("{},{}", format_number(x), format_number(y)))
                .collect::<Vec<_>>()
                .join(" ");
            format!(r#"<polygon points="{points}" {attrs} />"#)
        }
    }
}

impl ShapeSink for SvgDocument {
    fn begin(&mut self, width: u32, height: u32, background: Color) -> Result<()> {
        self.width = width;
        self.height = height;
        self.elements.clear();
        self.elements.push(format!(
            r#"<rect x="0" y="0" width="{width}" height="{height}" fill="{}" />"#,
            background.to_hex()
        ));
        Ok(())
    }

    fn draw(&mut self, shape: &PlacedShape) -> Result<()> {
        self.elements.push(shape_element(shape));
        Ok(())
    }
}
