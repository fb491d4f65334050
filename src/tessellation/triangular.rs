//! Triangular sampler
//!
//! Cells are `side` x `side * sqrt(3) / 2` boxes laid out in rows, odd rows
//! shifted by half a side. Scanning starts two cells before the origin.

use crate::tessellation::{Cell, SampleRect, box_overlaps_canvas, is_odd};

const FIRST_INDEX: i64 = -2;

/// Iterator over triangular cells overlapping the canvas
pub struct TriangularCells {
    side: f64,
    tri_height: f64,
    width: f64,
    height: f64,
    row: i64,
    col: i64,
    row_last: i64,
    col_last: i64,
}

impl TriangularCells {
    /// Create an iterator for a canvas of `width` x `height` pixels
    pub fn new(width: u32, height: u32, side: f64) -> Self {
        let tri_height = side * 3.0_f64.sqrt() / 2.0;
        let (width, height) = (f64::from(width), f64::from(height));
        Self {
            side,
            tri_height,
            width,
            height,
            row: FIRST_INDEX,
            col: FIRST_INDEX,
            row_last: (height / tri_height + 0.5).floor() as i64,
            col_last: (width / side + 0.5).floor() as i64,
        }
    }

    fn base(&self, row: i64, col: i64) -> (f64, f64) {
        let shift = if is_odd(row) { self.side / 2.0 } else { 0.0 };
        (
            (col as f64).mul_add(self.side, shift) + self.side / 2.0,
            (row as f64).mul_add(self.tri_height, self.tri_height / 2.0),
        )
    }
}

impl Iterator for TriangularCells {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        while self.row <= self.row_last {
            if self.col > self.col_last {
                self.row += 1;
                self.col = FIRST_INDEX;
                continue;
            }
            let (x_base, y_base) = self.base(self.row, self.col);
            self.col += 1;

            if !box_overlaps_canvas(
                x_base,
                y_base,
                self.side,
                self.tri_height,
                self.width,
                self.height,
            ) {
                continue;
            }

            return Some(Cell {
                center_x: x_base + self.side / 2.0,
                center_y: y_base + self.tri_height / 2.0,
                sample: SampleRect::clipped(x_base, y_base, self.side, self.tri_height),
                rotation_degrees: 0.0,
            });
        }
        None
    }
}
