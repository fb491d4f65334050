//! Square grid sampler

use crate::tessellation::offset::GridOffset;
use crate::tessellation::{Cell, SampleRect};
use rand::rngs::StdRng;

/// Row-major iterator over square cells covering the canvas
///
/// Emits `ceil(width / cell) * ceil(height / cell)` cells. The last row and
/// column may hang past the canvas edge; their samples average only the
/// in-bounds pixels.
pub struct GridCells<'a> {
    cell_size: u32,
    cols: u32,
    rows: u32,
    next: u64,
    offset: GridOffset,
    rng: &'a mut StdRng,
}

impl<'a> GridCells<'a> {
    /// Create a grid iterator; `cell_size` must be non-zero
    pub fn new(
        width: u32,
        height: u32,
        cell_size: u32,
        offset: GridOffset,
        rng: &'a mut StdRng,
    ) -> Self {
        let cell_size = cell_size.max(1);
        Self {
            cell_size,
            cols: width.div_ceil(cell_size),
            rows: height.div_ceil(cell_size),
            next: 0,
            offset,
            rng,
        }
    }

    fn total(&self) -> u64 {
        u64::from(self.cols) * u64::from(self.rows)
    }
}

impl Iterator for GridCells<'_> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.next >= self.total() {
            return None;
        }
        let row = (self.next / u64::from(self.cols)) as u32;
        let col = (self.next % u64::from(self.cols)) as u32;
        self.next += 1;

        let size = f64::from(self.cell_size);
        let x = i64::from(col) * i64::from(self.cell_size);
        let y = i64::from(row) * i64::from(self.cell_size);
        let (dx, dy) = self.offset.displacement(row, col, &mut *self.rng);

        Some(Cell {
            center_x: x as f64 + size / 2.0 + dx,
            center_y: y as f64 + size / 2.0 + dy,
            sample: SampleRect {
                x,
                y,
                width: size,
                height: size,
            },
            rotation_degrees: 0.0,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total().saturating_sub(self.next) as usize;
        (remaining, Some(remaining))
    }
}
