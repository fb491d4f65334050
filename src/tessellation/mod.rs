//! Tessellation samplers that enumerate cells over a bounded canvas
//!
//! Every sampler yields [`Cell`]s lazily: where to draw the shape, which
//! block of source pixels feeds its color, and the base rotation of the
//! layout. The raster and SVG backends both consume the same iterators.

/// Square grid sampler
pub mod grid;
/// Pointy-top and flat-top hexagonal samplers
pub mod hexagonal;
/// Grid offset patterns
pub mod offset;
/// Triangular sampler
pub mod triangular;

use crate::io::error::{PixelateError, Result};
use clap::ValueEnum;
use grid::GridCells;
use hexagonal::{HexCells, HexOrientation};
use offset::GridOffset;
use rand::rngs::StdRng;
use std::fmt;
use triangular::TriangularCells;

/// Spatial layout of the cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TessellationKind {
    /// Square cells on a regular grid
    #[default]
    Grid,
    /// Hexagons with a vertex at the top, rows staggered
    #[value(alias = "hexagonal")]
    HexagonalPointy,
    /// Hexagons with an edge at the top, columns staggered
    HexagonalFlat,
    /// Alternating triangle rows
    Triangular,
}

impl fmt::Display for TessellationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Grid => "grid",
            Self::HexagonalPointy => "hexagonal-pointy",
            Self::HexagonalFlat => "hexagonal-flat",
            Self::Triangular => "triangular",
        };
        f.write_str(name)
    }
}

/// Block of source pixels averaged for one cell
///
/// The origin is clamped to be non-negative; the extent may be fractional
/// and may run past the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRect {
    /// Left pixel column
    pub x: i64,
    /// Top pixel row
    pub y: i64,
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

impl SampleRect {
    /// Sample block for a bounding box whose origin may be negative or fractional
    pub fn clipped(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: (x.floor() as i64).max(0),
            y: (y.floor() as i64).max(0),
            width,
            height,
        }
    }

    /// Whether any pixel of the block lies on a `width` x `height` canvas
    pub fn overlaps(&self, width: u32, height: u32) -> bool {
        box_overlaps_canvas(
            self.x as f64,
            self.y as f64,
            self.width,
            self.height,
            f64::from(width),
            f64::from(height),
        )
    }
}

/// One tessellation cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// Horizontal draw position of the shape center
    pub center_x: f64,
    /// Vertical draw position of the shape center
    pub center_y: f64,
    /// Source block that determines the cell color
    pub sample: SampleRect,
    /// Layout rotation in degrees, before any user rotation
    pub rotation_degrees: f64,
}

pub(crate) fn box_overlaps_canvas(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    canvas_width: f64,
    canvas_height: f64,
) -> bool {
    x < canvas_width && y < canvas_height && x + width > 0.0 && y + height > 0.0
}

pub(crate) const fn is_odd(index: i64) -> bool {
    index.rem_euclid(2) == 1
}

/// Reject geometry that cannot produce a finite, non-empty tessellation
///
/// # Errors
///
/// Returns [`PixelateError::InvalidGeometry`] for a zero cell size or a
/// canvas with zero area
pub fn validate_geometry(width: u32, height: u32, cell_size: u32) -> Result<()> {
    if cell_size == 0 || width == 0 || height == 0 {
        return Err(PixelateError::InvalidGeometry {
            width,
            height,
            cell_size,
        });
    }
    Ok(())
}

/// Cell iterator for any tessellation kind
pub enum Cells<'a> {
    /// Square grid cells
    Grid(GridCells<'a>),
    /// Hexagonal cells
    Hexagonal(HexCells),
    /// Triangular cells
    Triangular(TriangularCells),
}

impl<'a> Cells<'a> {
    /// Cells of `kind` covering a `width` x `height` canvas
    ///
    /// `offset` only applies to the grid; `rng` feeds random grid offsets.
    ///
    /// # Errors
    ///
    /// Returns an error if the geometry is invalid
    pub fn new(
        kind: TessellationKind,
        width: u32,
        height: u32,
        cell_size: u32,
        offset: GridOffset,
        rng: &'a mut StdRng,
    ) -> Result<Self> {
        validate_geometry(width, height, cell_size)?;
        let side = f64::from(cell_size);
        Ok(match kind {
            TessellationKind::Grid => {
                Self::Grid(GridCells::new(width, height, cell_size, offset, rng))
            }
            TessellationKind::HexagonalPointy => {
                Self::Hexagonal(HexCells::new(width, height, side, HexOrientation::PointyTop))
            }
            TessellationKind::HexagonalFlat => {
                Self::Hexagonal(HexCells::new(width, height, side, HexOrientation::FlatTop))
            }
            TessellationKind::Triangular => {
                Self::Triangular(TriangularCells::new(width, height, side))
            }
        })
    }
}

impl Iterator for Cells<'_> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        match self {
            Self::Grid(cells) => cells.next(),
            Self::Hexagonal(cells) => cells.next(),
            Self::Triangular(cells) => cells.next(),
        }
    }
}
