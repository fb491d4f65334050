//! Shape-mosaic pixelation of raster images
//!
//! A source buffer is sampled cell by cell over a grid, hexagonal or
//! triangular tessellation. Each cell's average color, optionally quantized
//! through a uniform palette and dithered, fills one square, circle,
//! triangle or hexagon. The same render drives a tiny-skia raster backend
//! and an SVG serializer.

#![forbid(unsafe_code)]

/// Colors, palettes and the RGBA pixel buffer
pub mod color;
/// Floyd-Steinberg, Atkinson and ordered dithering
pub mod dither;
/// Input/output operations and error handling
pub mod io;
/// Render settings, orchestration and diagnostics
pub mod render;
/// Shape geometry with raster and SVG backends
pub mod shape;
/// Grid, hexagonal and triangular cell samplers
pub mod tessellation;

pub use io::error::{PixelateError, Result};
