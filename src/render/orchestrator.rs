//! Single-pass render: palette, dithering, cell sampling and shape drawing

use crate::color::palette::{Color, generate_palette, nearest_color};
use crate::color::pixels::PixelBuffer;
use crate::dither::{DitherKind, apply_dithering};
use crate::io::configuration::SEAM_FILL_EXPANSION;
use crate::io::error::Result;
use crate::render::settings::RenderSettings;
use crate::shape::raster::RasterCanvas;
use crate::shape::svg::SvgDocument;
use crate::shape::{ShapeKind, ShapeSink, ShapeStyle, render_shape};
use crate::tessellation::{Cells, TessellationKind, validate_geometry};
use rand::{SeedableRng, rngs::StdRng};
use std::borrow::Cow;
use std::fmt;
use std::time::{Duration, Instant};

/// Wall-clock time spent in each render phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PhaseTimings {
    /// Surface allocation and background fill
    pub canvas_init: Duration,
    /// Palette generation (zero without a color limit)
    pub palette_generation: Duration,
    /// Dithering pass (zero when none runs)
    pub dithering: Duration,
    /// Cell sampling and shape drawing
    pub shape_drawing: Duration,
}

/// Diagnostics returned by every render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderReport {
    /// Per-phase durations
    pub timings: PhaseTimings,
    /// Duration of the whole render
    pub total: Duration,
    /// Final palette size; `None` when color limiting is off
    pub palette_size: Option<usize>,
    /// Number of shapes handed to the backend
    pub cells_drawn: usize,
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

impl fmt::Display for RenderReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let colors = self
            .palette_size
            .map_or_else(|| "N/A".to_string(), |size| size.to_string());
        write!(
            f,
            "total {:.2} ms (canvas init {:.2} ms, palette {:.2} ms, dithering {:.2} ms, \
             shapes {:.2} ms), {} cells, final colors: {colors}",
            millis(self.total),
            millis(self.timings.canvas_init),
            millis(self.timings.palette_generation),
            millis(self.timings.dithering),
            millis(self.timings.shape_drawing),
            self.cells_drawn,
        )
    }
}

/// Extra fill around each shape that hides seams between neighbours
///
/// Grid layouts only expand squares; hexagonal and triangular layouts
/// expand every shape.
pub const fn fill_expansion(tessellation: TessellationKind, shape: ShapeKind) -> f64 {
    let grid_without_squares = matches!(tessellation, TessellationKind::Grid)
        && !matches!(shape, ShapeKind::Square);
    if grid_without_squares {
        0.0
    } else {
        SEAM_FILL_EXPANSION
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

/// Render `source` into any [`ShapeSink`]
///
/// Both backends share this loop, so raster and SVG output enumerate
/// exactly the same cells with the same colors. The source buffer is never
/// modified; dithering works on a private copy.
///
/// # Errors
///
/// Returns an error if the settings or canvas geometry are invalid, or if
/// the backend rejects the surface or a shape
pub fn render_into<S: ShapeSink>(
    source: &PixelBuffer,
    settings: &RenderSettings,
    sink: &mut S,
) -> Result<RenderReport> {
    settings.validate()?;
    let (width, height) = (source.width(), source.height());
    validate_geometry(width, height, settings.cell_size)?;

    let started = Instant::now();
    let mut timings = PhaseTimings::default();
    let mut rng = seeded_rng(settings.seed);

    let phase = Instant::now();
    sink.begin(width, height, settings.background)?;
    timings.canvas_init = phase.elapsed();

    let phase = Instant::now();
    let palette: Option<Vec<Color>> = settings
        .color_limit
        .map(|count| generate_palette(count, &mut rng))
        .transpose()?;
    timings.palette_generation = phase.elapsed();

    let phase = Instant::now();
    let dithering = settings.effective_dithering();
    let sampled: Cow<'_, PixelBuffer> = match palette.as_deref() {
        Some(colors) if dithering != DitherKind::None => {
            let mut working = source.clone();
            apply_dithering(dithering, &mut working, colors)?;
            Cow::Owned(working)
        }
        _ => Cow::Borrowed(source),
    };
    timings.dithering = phase.elapsed();

    let phase = Instant::now();
    // Averages of an already dithered buffer are not quantized a second time
    let quantize_palette = palette
        .as_deref()
        .filter(|_| dithering == DitherKind::None);
    let style = ShapeStyle {
        kind: settings.shape,
        size_multiplier: settings.shape_size,
        fill_expansion: fill_expansion(settings.tessellation, settings.shape),
        outline: settings.outline,
    };
    let base_size = f64::from(settings.cell_size);

    let mut cells_drawn = 0;
    let cells = Cells::new(
        settings.tessellation,
        width,
        height,
        settings.cell_size,
        settings.offset,
        &mut rng,
    )?;
    for cell in cells {
        let sample = cell.sample;
        let average = sampled.average_color(sample.x, sample.y, sample.width, sample.height);
        let fill = match quantize_palette {
            Some(colors) => nearest_color(average, colors)?,
            None => average,
        };
        let shape = render_shape(
            cell.center_x,
            cell.center_y,
            fill,
            base_size,
            cell.rotation_degrees + settings.rotation_degrees,
            &style,
        );
        sink.draw(&shape)?;
        cells_drawn += 1;
    }
    timings.shape_drawing = phase.elapsed();

    let report = RenderReport {
        timings,
        total: started.elapsed(),
        palette_size: palette.as_ref().map(Vec::len),
        cells_drawn,
    };
    tracing::debug!(
        tessellation = %settings.tessellation,
        shape = %settings.shape,
        dithering = %dithering,
        cells = cells_drawn,
        "render finished: {report}"
    );
    Ok(report)
}

/// Render `source` to a new RGBA buffer of the same size
///
/// # Errors
///
/// Returns an error if the render fails or the surface cannot be read back
pub fn render_raster(
    source: &PixelBuffer,
    settings: &RenderSettings,
) -> Result<(PixelBuffer, RenderReport)> {
    let mut canvas = RasterCanvas::new();
    let report = render_into(source, settings, &mut canvas)?;
    Ok((canvas.into_buffer()?, report))
}

/// Render `source` to a complete SVG document
///
/// # Errors
///
/// Returns an error if the render fails
pub fn render_svg(source: &PixelBuffer, settings: &RenderSettings) -> Result<(String, RenderReport)> {
    let mut document = SvgDocument::new();
    let report = render_into(source, settings, &mut document)?;
    tracing::debug!(elements = document.element_count(), "svg document assembled");
    Ok((document.finish(), report))
}
