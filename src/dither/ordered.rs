//! Ordered dithering with a 4x4 Bayer threshold matrix

use crate::color::palette::{Color, nearest_color};
use crate::color::pixels::PixelBuffer;
use crate::io::error::{PixelateError, Result};

/// Bayer threshold matrix, values 0 to 15
pub const BAYER_4X4: [[u8; 4]; 4] = [[0, 8, 2, 10], [12, 4, 14, 6], [3, 11, 1, 9], [15, 7, 13, 5]];

const MATRIX_SIZE: usize = 4;
const MATRIX_LEVELS: f64 = 16.0;
const MIDPOINT: f64 = 127.0;

/// Normalized threshold in `[0, 1)` for pixel `(x, y)`
pub fn threshold(x: usize, y: usize) -> f64 {
    BAYER_4X4
        .get(y % MATRIX_SIZE)
        .and_then(|row| row.get(x % MATRIX_SIZE))
        .map_or(0.0, |&level| f64::from(level) / MATRIX_LEVELS)
}

/// Push a channel toward 0 or 255, whichever side of the midpoint it is on
pub fn perturb_channel(value: f64, threshold: f64) -> f64 {
    if value > MIDPOINT {
        (255.0 - value).mul_add(threshold, value)
    } else {
        value.mul_add(-threshold, value)
    }
}

/// Quantize `buffer` in place with per-pixel Bayer thresholds
///
/// Stateless per pixel: nothing carries over between neighbours. Alpha is
/// kept from the source pixel.
///
/// # Errors
///
/// Returns [`PixelateError::EmptyPalette`] if `palette` is empty
pub fn ordered(buffer: &mut PixelBuffer, palette: &[Color]) -> Result<()> {
    if palette.is_empty() {
        return Err(PixelateError::EmptyPalette);
    }

    for y in 0..buffer.height() as usize {
        for x in 0..buffer.width() as usize {
            let (xi, yi) = (x as i64, y as i64);
            let Some(old) = buffer.get_pixel(xi, yi) else {
                continue;
            };
            let t = threshold(x, y);
            let perturbed = Color::new(
                perturb_channel(old.r, t),
                perturb_channel(old.g, t),
                perturb_channel(old.b, t),
                old.a,
            );
            let quantized = nearest_color(perturbed, palette)?;
            buffer.set_pixel(xi, yi, quantized.with_alpha(old.a));
        }
    }

    Ok(())
}
