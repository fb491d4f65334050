//! Color values, palettes and raw pixel access

/// Color type, palette generation and nearest-color search
pub mod palette;
/// RGBA pixel buffer with bounds-checked accessors
pub mod pixels;

pub use palette::Color;
pub use pixels::PixelBuffer;
