//! Per-cell draw offsets for the square grid

use clap::ValueEnum;
use rand::Rng;

/// Axis (or axes) that receive an offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OffsetDirection {
    /// No offset on either axis
    #[default]
    None,
    /// Shift along x
    Horizontal,
    /// Shift along y
    Vertical,
    /// Shift along both axes
    Checkerboard,
}

/// How offsets are distributed over the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OffsetPattern {
    /// Every cell stays on its grid position
    #[default]
    None,
    /// Odd rows, odd columns or odd checkerboard squares shift by the full magnitude
    Alternating,
    /// Each cell draws an independent shift in `[0, magnitude)`
    Random,
}

/// Offset configuration for grid cells
///
/// Offsets move the drawn shape only; the sampled block stays on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GridOffset {
    /// Horizontal magnitude in pixels
    pub x: f64,
    /// Vertical magnitude in pixels
    pub y: f64,
    /// Axes that receive an offset
    pub direction: OffsetDirection,
    /// Distribution of offsets over the grid
    pub pattern: OffsetPattern,
}

impl GridOffset {
    /// Draw offset for the cell at `(row, col)`
    pub fn displacement<R: Rng + ?Sized>(&self, row: u32, col: u32, rng: &mut R) -> (f64, f64) {
        match self.pattern {
            OffsetPattern::None => (0.0, 0.0),
            OffsetPattern::Alternating => match self.direction {
                OffsetDirection::Horizontal if row % 2 == 1 => (self.x, 0.0),
                OffsetDirection::Vertical if col % 2 == 1 => (0.0, self.y),
                OffsetDirection::Checkerboard if (row + col) % 2 == 1 => (self.x, self.y),
                _ => (0.0, 0.0),
            },
            OffsetPattern::Random => {
                let shift_x = matches!(
                    self.direction,
                    OffsetDirection::Horizontal | OffsetDirection::Checkerboard
                );
                let shift_y = matches!(
                    self.direction,
                    OffsetDirection::Vertical | OffsetDirection::Checkerboard
                );
                let dx = if shift_x {
                    rng.random::<f64>() * self.x
                } else {
                    0.0
                };
                let dy = if shift_y {
                    rng.random::<f64>() * self.y
                } else {
                    0.0
                };
                (dx, dy)
            }
        }
    }
}
