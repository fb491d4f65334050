//! Hexagonal sampler with pointy-top and flat-top layouts
//!
//! Pointy-top layouts run in rows with odd rows shifted right by half a
//! hexagon width. Flat-top layouts run in columns with odd columns shifted
//! down by half a hexagon height. Both start one cell before the origin so
//! hexagons clipped by the top and left edges are still drawn.

use crate::tessellation::{Cell, SampleRect, box_overlaps_canvas, is_odd};

/// Hexagon orientation within the tiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexOrientation {
    /// Vertex at the top, rows staggered
    PointyTop,
    /// Edge at the top, columns staggered
    FlatTop,
}

/// Derived hexagon dimensions and step sizes for a given side length
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexLayout {
    /// Orientation of every hexagon
    pub orientation: HexOrientation,
    /// Bounding box width of one hexagon
    pub hex_width: f64,
    /// Bounding box height of one hexagon
    pub hex_height: f64,
    /// Distance between neighbouring centers along x
    pub x_step: f64,
    /// Distance between neighbouring centers along y
    pub y_step: f64,
    /// Rotation applied to every shape before the user rotation
    pub base_rotation_degrees: f64,
}

impl HexLayout {
    /// Layout for hexagons with the given side length
    pub fn new(side: f64, orientation: HexOrientation) -> Self {
        let root3 = 3.0_f64.sqrt();
        match orientation {
            HexOrientation::PointyTop => {
                let hex_width = side * root3;
                let hex_height = side * 2.0;
                Self {
                    orientation,
                    hex_width,
                    hex_height,
                    x_step: hex_width,
                    y_step: hex_height * 0.75,
                    base_rotation_degrees: 30.0,
                }
            }
            HexOrientation::FlatTop => {
                let hex_width = side * 2.0;
                let hex_height = side * root3;
                Self {
                    orientation,
                    hex_width,
                    hex_height,
                    x_step: hex_width * 0.75,
                    y_step: hex_height,
                    base_rotation_degrees: 0.0,
                }
            }
        }
    }

    /// Top-left corner of the bounding box for the cell on `major`/`minor`
    ///
    /// `major` is the row for pointy-top layouts and the column for flat-top.
    fn box_origin(&self, major: i64, minor: i64) -> (f64, f64) {
        match self.orientation {
            HexOrientation::PointyTop => {
                let shift = if is_odd(major) {
                    self.hex_width / 2.0
                } else {
                    0.0
                };
                (minor as f64 * self.x_step + shift, major as f64 * self.y_step)
            }
            HexOrientation::FlatTop => {
                let shift = if is_odd(major) {
                    self.hex_height / 2.0
                } else {
                    0.0
                };
                (major as f64 * self.x_step, minor as f64 * self.y_step + shift)
            }
        }
    }
}

/// Iterator over hexagonal cells overlapping the canvas
///
/// Index ranges are fixed up front from the canvas size and step lengths.
pub struct HexCells {
    layout: HexLayout,
    width: f64,
    height: f64,
    major: i64,
    minor: i64,
    major_last: i64,
    minor_last: i64,
}

/// First row/column index, one cell before the origin
const FIRST_INDEX: i64 = -1;

impl HexCells {
    /// Create an iterator for a canvas of `width` x `height` pixels
    pub fn new(width: u32, height: u32, side: f64, orientation: HexOrientation) -> Self {
        let layout = HexLayout::new(side, orientation);
        let (width, height) = (f64::from(width), f64::from(height));
        let rows_last = (height / layout.y_step).floor() as i64;
        let cols_last = (width / layout.x_step).floor() as i64;
        let (major_last, minor_last) = match orientation {
            HexOrientation::PointyTop => (rows_last, cols_last),
            HexOrientation::FlatTop => (cols_last, rows_last),
        };
        Self {
            layout,
            width,
            height,
            major: FIRST_INDEX,
            minor: FIRST_INDEX,
            major_last,
            minor_last,
        }
    }

    /// Layout shared by every emitted cell
    pub const fn layout(&self) -> &HexLayout {
        &self.layout
    }
}

impl Iterator for HexCells {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        while self.major <= self.major_last {
            if self.minor > self.minor_last {
                self.major += 1;
                self.minor = FIRST_INDEX;
                continue;
            }
            let (x0, y0) = self.layout.box_origin(self.major, self.minor);
            self.minor += 1;

            let HexLayout {
                hex_width,
                hex_height,
                ..
            } = self.layout;
            if !box_overlaps_canvas(x0, y0, hex_width, hex_height, self.width, self.height) {
                continue;
            }

            return Some(Cell {
                center_x: x0 + hex_width / 2.0,
                center_y: y0 + hex_height / 2.0,
                sample: SampleRect::clipped(x0, y0, hex_width, hex_height),
                rotation_degrees: self.layout.base_rotation_degrees,
            });
        }
        None
    }
}
