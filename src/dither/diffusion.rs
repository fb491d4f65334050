//! Error diffusion dithering (Floyd-Steinberg and Atkinson)
//!
//! Both algorithms walk the buffer in raster order, replace each pixel with
//! its nearest palette color and push the quantization error onto
//! not-yet-visited neighbours. They differ only in the kernel.

use crate::color::palette::{Color, nearest_color};
use crate::color::pixels::PixelBuffer;
use crate::io::error::{PixelateError, Result};
use ndarray::Array3;

/// Error diffusion kernel
///
/// Each neighbour at `(x + dx, y + dy)` receives `error * weight / divisor`.
/// When the weights sum to less than the divisor the remainder of the
/// error is dropped.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// `(dx, dy, weight)` entries; `dy` is never negative
    pub entries: &'static [(i64, i64, f32)],
    /// Common denominator for every weight
    pub divisor: f32,
}

impl Kernel {
    /// Fraction of the quantization error this kernel propagates
    pub fn propagated_fraction(&self) -> f32 {
        self.entries.iter().map(|&(_, _, weight)| weight).sum::<f32>() / self.divisor
    }
}

/// Floyd-Steinberg kernel, propagates 16/16 of the error
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[(1, 0, 7.0), (-1, 1, 3.0), (0, 1, 5.0), (1, 1, 1.0)],
    divisor: 16.0,
};

/// Atkinson kernel, propagates 6/8 of the error
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
pub const ATKINSON: Kernel = Kernel {
    entries: &[
        (1, 0, 1.0),
        (2, 0, 1.0),
        (-1, 1, 1.0),
        (0, 1, 1.0),
        (1, 1, 1.0),
        (0, 2, 1.0),
    ],
    divisor: 8.0,
};

/// Quantize `buffer` in place against `palette`, diffusing error with `kernel`
///
/// The working copy is `f32` so accumulated error can leave the 8-bit range
/// before it is redistributed. Alpha is neither quantized nor diffused.
///
/// # Errors
///
/// Returns [`PixelateError::EmptyPalette`] if `palette` is empty
pub fn diffuse(buffer: &mut PixelBuffer, palette: &[Color], kernel: &Kernel) -> Result<()> {
    if palette.is_empty() {
        return Err(PixelateError::EmptyPalette);
    }

    let width = buffer.width() as usize;
    let height = buffer.height() as usize;
    let mut work = Array3::from_shape_fn((height, width, 3), |(y, x, c)| {
        buffer
            .get_bytes(x as i64, y as i64)
            .and_then(|px| px.get(c).copied())
            .map_or(0.0, f32::from)
    });

    for y in 0..height {
        for x in 0..width {
            let (xi, yi) = (x as i64, y as i64);
            let Some([_, _, _, alpha]) = buffer.get_bytes(xi, yi) else {
                continue;
            };
            let channel = |c: usize| work.get((y, x, c)).copied().unwrap_or(0.0);
            let old = Color::new(
                f64::from(channel(0)),
                f64::from(channel(1)),
                f64::from(channel(2)),
                f64::from(alpha),
            );

            let quantized = nearest_color(old, palette)?;
            buffer.set_pixel(xi, yi, quantized.with_alpha(f64::from(alpha)));

            let error = [
                (old.r - quantized.r) as f32,
                (old.g - quantized.g) as f32,
                (old.b - quantized.b) as f32,
            ];

            for &(dx, dy, weight) in kernel.entries {
                let (tx, ty) = (xi + dx, yi + dy);
                if tx < 0 || ty < 0 || tx >= width as i64 || ty >= height as i64 {
                    continue;
                }
                let share = weight / kernel.divisor;
                for (c, channel_error) in error.iter().enumerate() {
                    if let Some(value) = work.get_mut((ty as usize, tx as usize, c)) {
                        *value += channel_error * share;
                    }
                }
            }
        }
    }

    Ok(())
}

/// Floyd-Steinberg error diffusion over the whole buffer
///
/// # Errors
///
/// Returns [`PixelateError::EmptyPalette`] if `palette` is empty
pub fn floyd_steinberg(buffer: &mut PixelBuffer, palette: &[Color]) -> Result<()> {
    diffuse(buffer, palette, &FLOYD_STEINBERG)
}

/// Atkinson error diffusion over the whole buffer
///
/// # Errors
///
/// Returns [`PixelateError::EmptyPalette`] if `palette` is empty
pub fn atkinson(buffer: &mut PixelBuffer, palette: &[Color]) -> Result<()> {
    diffuse(buffer, palette, &ATKINSON)
}
