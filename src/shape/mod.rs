//! Shape placement and the two drawing backends
//!
//! [`render_shape`] turns one cell into a [`PlacedShape`]: position,
//! rotation, fill color, and the fill and outline geometry from
//! [`geometry::shape_geometry`]. Backends implement [`ShapeSink`] and only
//! translate that description into pixels or markup.

/// Shared outline geometry
pub mod geometry;
/// tiny-skia raster backend
pub mod raster;
/// SVG markup backend
pub mod svg;

use crate::color::palette::Color;
use crate::io::error::Result;
use clap::ValueEnum;
use geometry::{ShapeGeometry, shape_geometry};
use std::fmt;

/// Shape drawn for each cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ShapeKind {
    /// Axis-aligned square
    #[default]
    Square,
    /// Circle
    Circle,
    /// Equilateral triangle, apex up
    Triangle,
    /// Regular hexagon
    Hexagon,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Square => "square",
            Self::Circle => "circle",
            Self::Triangle => "triangle",
            Self::Hexagon => "hexagon",
        };
        f.write_str(name)
    }
}

/// Stroke drawn around every shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    /// Stroke width in pixels; zero disables the stroke
    pub width: f64,
    /// Stroke color
    pub color: Color,
}

/// A fully resolved shape ready for a backend
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedShape {
    /// Horizontal translation of the shape origin
    pub x: f64,
    /// Vertical translation of the shape origin
    pub y: f64,
    /// Clockwise rotation in degrees, applied before translation
    pub rotation_degrees: f64,
    /// Fill color
    pub fill: Color,
    /// Filled outline including the seam expansion
    pub fill_geometry: ShapeGeometry,
    /// Stroke outline at the un-expanded size, with its style
    pub stroke: Option<(ShapeGeometry, Outline)>,
}

/// Size and style parameters shared by every shape of a render
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    /// Shape drawn for each cell
    pub kind: ShapeKind,
    /// Multiplier on the cell size
    pub size_multiplier: f64,
    /// Extra fill on every side to hide seams between neighbours
    pub fill_expansion: f64,
    /// Optional stroke
    pub outline: Option<Outline>,
}

/// Resolve one shape at `(x, y)` for a cell of `base_size`
///
/// The fill uses `base_size * size_multiplier + 2 * fill_expansion`; the
/// stroke uses the size without expansion and is omitted unless its width
/// is positive.
pub fn render_shape(
    x: f64,
    y: f64,
    fill: Color,
    base_size: f64,
    rotation_degrees: f64,
    style: &ShapeStyle,
) -> PlacedShape {
    let effective_size = base_size * style.size_multiplier;
    let fill_size = style.fill_expansion.mul_add(2.0, effective_size);

    let stroke = style
        .outline
        .filter(|outline| outline.width > 0.0)
        .map(|outline| (shape_geometry(style.kind, effective_size), outline));

    PlacedShape {
        x,
        y,
        rotation_degrees,
        fill,
        fill_geometry: shape_geometry(style.kind, fill_size),
        stroke,
    }
}

/// Drawing target for placed shapes
pub trait ShapeSink {
    /// Prepare a `width` x `height` surface filled with `background`
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot be created
    fn begin(&mut self, width: u32, height: u32, background: Color) -> Result<()>;

    /// Draw one shape on top of everything drawn so far
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot accept the shape
    fn draw(&mut self, shape: &PlacedShape) -> Result<()>;
}
