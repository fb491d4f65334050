//! Palette dithering applied to the whole source buffer before sampling

/// Floyd-Steinberg and Atkinson error diffusion
pub mod diffusion;
/// Bayer ordered dithering
pub mod ordered;

use crate::color::palette::Color;
use crate::color::pixels::PixelBuffer;
use crate::io::error::Result;
use clap::ValueEnum;
use std::fmt;

/// Dithering algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DitherKind {
    /// No dithering; cell averages are quantized directly
    #[default]
    None,
    /// Floyd-Steinberg error diffusion
    FloydSteinberg,
    /// Atkinson error diffusion
    Atkinson,
    /// 4x4 Bayer ordered dithering
    Ordered,
}

impl fmt::Display for DitherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::FloydSteinberg => "floyd-steinberg",
            Self::Atkinson => "atkinson",
            Self::Ordered => "ordered",
        };
        f.write_str(name)
    }
}

/// Run the selected dithering pass over `buffer` in place
///
/// [`DitherKind::None`] leaves the buffer untouched.
///
/// # Errors
///
/// Returns an error if a dithering pass runs against an empty palette
pub fn apply_dithering(kind: DitherKind, buffer: &mut PixelBuffer, palette: &[Color]) -> Result<()> {
    match kind {
        DitherKind::None => Ok(()),
        DitherKind::FloydSteinberg => diffusion::floyd_steinberg(buffer, palette),
        DitherKind::Atkinson => diffusion::atkinson(buffer, palette),
        DitherKind::Ordered => ordered::ordered(buffer, palette),
    }
}
