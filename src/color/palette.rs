//! Color values, palette generation and nearest-color quantization

use crate::io::configuration::MAX_COLOR_COUNT;
use crate::io::error::{PixelateError, Result, invalid_parameter};
use rand::Rng;

/// RGBA color with real-valued channels
///
/// Channels are nominally in `[0, 255]` but may leave that range while
/// error diffusion is in flight. Conversion back to bytes clamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel
    pub r: f64,
    /// Green channel
    pub g: f64,
    /// Blue channel
    pub b: f64,
    /// Alpha channel (255 = opaque)
    pub a: f64,
}

impl Color {
    /// Opaque black
    pub const BLACK: Self = Self::opaque(0.0, 0.0, 0.0);
    /// Opaque white
    pub const WHITE: Self = Self::opaque(255.0, 255.0, 255.0);
    /// Fully transparent black, the average of an empty sample
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a color from four channel values
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color
    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 255.0)
    }

    /// Create a color from 8-bit RGBA channels
    pub const fn from_bytes(rgba: [u8; 4]) -> Self {
        Self::new(rgba[0] as f64, rgba[1] as f64, rgba[2] as f64, rgba[3] as f64)
    }

    /// Round and clamp every channel to an 8-bit value
    pub fn to_bytes(self) -> [u8; 4] {
        [
            clamp_channel(self.r),
            clamp_channel(self.g),
            clamp_channel(self.b),
            clamp_channel(self.a),
        ]
    }

    /// Same color with a different alpha
    pub const fn with_alpha(self, a: f64) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Format as `#rrggbb`; alpha is not encoded
    pub fn to_hex(self) -> String {
        let [r, g, b, _] = self.to_bytes();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Parse `#rrggbb` or `#rgb` (leading `#` optional) into an opaque color
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not three or six hex digits
    pub fn from_hex(text: &str) -> Result<Self> {
        let digits = text.trim().trim_start_matches('#');
        let reject = || invalid_parameter("color", &text, &"expected #rrggbb or #rgb");

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(reject());
        }

        let channel = |range: std::ops::Range<usize>, repeat: bool| -> Result<f64> {
            let part = digits.get(range).ok_or_else(reject)?;
            let value = u8::from_str_radix(part, 16).map_err(|_parse| reject())?;
            Ok(f64::from(if repeat { value * 17 } else { value }))
        };

        match digits.len() {
            6 => Ok(Self::opaque(
                channel(0..2, false)?,
                channel(2..4, false)?,
                channel(4..6, false)?,
            )),
            3 => Ok(Self::opaque(
                channel(0..1, true)?,
                channel(1..2, true)?,
                channel(2..3, true)?,
            )),
            _ => Err(reject()),
        }
    }

    /// Squared Euclidean distance over the RGB channels
    pub fn distance_squared(self, other: Self) -> f64 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        dr.mul_add(dr, dg.mul_add(dg, db * db))
    }
}

fn clamp_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}

/// Find the palette entry closest to `color` in RGB space
///
/// Alpha is ignored. Ties resolve to the entry that appears first.
///
/// # Errors
///
/// Returns [`PixelateError::EmptyPalette`] if the palette has no entries
pub fn nearest_color(color: Color, palette: &[Color]) -> Result<Color> {
    let mut best: Option<(Color, f64)> = None;

    for &candidate in palette {
        let distance = color.distance_squared(candidate);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((candidate, distance)),
        }
    }

    best.map(|(candidate, _)| candidate)
        .ok_or(PixelateError::EmptyPalette)
}

/// Smallest per-channel step count whose cube holds `count` colors
fn steps_per_channel(count: usize) -> usize {
    let holds = |steps: usize| steps.checked_pow(3).is_none_or(|cube| cube >= count);
    let mut steps = (count as f64).cbrt().round().max(1.0) as usize;
    while !holds(steps) {
        steps += 1;
    }
    while steps > 1 && holds(steps - 1) {
        steps -= 1;
    }
    steps
}

/// Generate a uniform palette of exactly `count` colors
///
/// Walks an evenly spaced RGB cube in red, green, blue nesting order and
/// stops once `count` entries exist. The cube always covers `count`, so
/// the random padding branch only fires if that ever stops holding; it
/// draws from `rng` so seeded callers stay reproducible.
///
/// # Errors
///
/// Returns an error if `count` exceeds [`MAX_COLOR_COUNT`]
pub fn generate_palette<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Result<Vec<Color>> {
    if count > MAX_COLOR_COUNT {
        return Err(invalid_parameter(
            "colors",
            &count,
            &format!("palette holds at most {MAX_COLOR_COUNT} colors"),
        ));
    }
    let mut palette = Vec::with_capacity(count);
    if count == 0 {
        return Ok(palette);
    }

    let steps = steps_per_channel(count);
    let step_size = if steps > 1 {
        255.0 / (steps - 1) as f64
    } else {
        0.0
    };
    let level = |index: usize| (index as f64 * step_size).round();

    'cube: for i in 0..steps {
        for j in 0..steps {
            for k in 0..steps {
                palette.push(Color::opaque(level(i), level(j), level(k)));
                if palette.len() >= count {
                    break 'cube;
                }
            }
        }
    }

    while palette.len() < count {
        palette.push(Color::opaque(
            f64::from(rng.random::<u8>()),
            f64::from(rng.random::<u8>()),
            f64::from(rng.random::<u8>()),
        ));
    }

    Ok(palette)
}
