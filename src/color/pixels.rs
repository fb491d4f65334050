//! Flat RGBA pixel buffer with bounds-checked access and block averaging

use crate::color::palette::Color;
use crate::io::error::{PixelateError, Result};

/// Bytes per pixel (R, G, B, A)
pub const CHANNELS: usize = 4;

/// Row-major RGBA buffer, 8 bits per channel
///
/// Pixel `(x, y)` starts at byte `(y * width + x) * 4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap existing RGBA bytes
    ///
    /// # Errors
    ///
    /// Returns an error if `data` is not exactly `width * height * 4` bytes
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(PixelateError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a buffer where every pixel holds `rgba`
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let pixels = width as usize * height as usize;
        let data = rgba.iter().copied().cycle().take(pixels * CHANNELS).collect();
        Self {
            width,
            height,
            data,
        }
    }

    /// Width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return its bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    fn offset(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * CHANNELS)
    }

    /// Raw channels at `(x, y)`, or `None` outside the buffer
    pub fn get_bytes(&self, x: i64, y: i64) -> Option<[u8; 4]> {
        let start = self.offset(x, y)?;
        let px = self.data.get(start..start + CHANNELS)?;
        <[u8; 4]>::try_from(px).ok()
    }

    /// Color at `(x, y)`, or `None` outside the buffer
    pub fn get_pixel(&self, x: i64, y: i64) -> Option<Color> {
        self.get_bytes(x, y).map(Color::from_bytes)
    }

    /// Write `color` at `(x, y)`, rounding and clamping each channel
    ///
    /// Writes outside the buffer are ignored.
    pub fn set_pixel(&mut self, x: i64, y: i64, color: Color) {
        let Some(start) = self.offset(x, y) else {
            return;
        };
        if let Some(px) = self.data.get_mut(start..start + CHANNELS) {
            px.copy_from_slice(&color.to_bytes());
        }
    }

    /// Mean color over every in-bounds pixel of a block
    ///
    /// The block covers integer columns `x` with `start_x <= x < start_x + width`
    /// and likewise for rows, so fractional extents include the partially
    /// covered last column or row. Pixels outside the buffer are skipped; a
    /// block with no in-bounds pixel averages to [`Color::TRANSPARENT`].
    pub fn average_color(&self, start_x: i64, start_y: i64, width: f64, height: f64) -> Color {
        let end_x = (start_x as f64 + width).ceil() as i64;
        let end_y = (start_y as f64 + height).ceil() as i64;

        let x0 = start_x.max(0);
        let y0 = start_y.max(0);
        let x1 = end_x.min(i64::from(self.width));
        let y1 = end_y.min(i64::from(self.height));
        if x0 >= x1 || y0 >= y1 {
            return Color::TRANSPARENT;
        }

        let mut sums = [0u64; CHANNELS];
        let row_bytes = self.width as usize * CHANNELS;
        for y in y0..y1 {
            let row_start = y as usize * row_bytes;
            let span = row_start + x0 as usize * CHANNELS..row_start + x1 as usize * CHANNELS;
            let Some(row) = self.data.get(span) else {
                continue;
            };
            for px in row.chunks_exact(CHANNELS) {
                for (sum, &value) in sums.iter_mut().zip(px) {
                    *sum += u64::from(value);
                }
            }
        }

        let count = ((x1 - x0) * (y1 - y0)) as f64;
        Color::new(
            sums[0] as f64 / count,
            sums[1] as f64 / count,
            sums[2] as f64 / count,
            sums[3] as f64 / count,
        )
    }
}
