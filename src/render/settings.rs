//! Immutable configuration snapshot for one render

use crate::color::palette::Color;
use crate::dither::DitherKind;
use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_ROTATION_DEGREES, DEFAULT_SHAPE_SIZE, MAX_COLOR_COUNT,
};
use crate::io::error::{Result, invalid_parameter};
use crate::shape::{Outline, ShapeKind};
use crate::tessellation::TessellationKind;
use crate::tessellation::offset::GridOffset;

/// Render parameters, constructed once per request and read-only afterwards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    /// Edge length of one tessellation cell in pixels
    pub cell_size: u32,
    /// Spatial layout of the cells
    pub tessellation: TessellationKind,
    /// Shape drawn per cell
    pub shape: ShapeKind,
    /// Multiplier on the drawn shape size
    pub shape_size: f64,
    /// User rotation in degrees, added to the layout rotation
    pub rotation_degrees: f64,
    /// Draw offsets for grid cells
    pub offset: GridOffset,
    /// Canvas background
    pub background: Color,
    /// Target palette size; `None` disables color limiting
    pub color_limit: Option<usize>,
    /// Dithering pass, only effective with a color limit
    pub dithering: DitherKind,
    /// Stroke around every shape
    pub outline: Option<Outline>,
    /// Seed for random offsets and palette padding; `None` draws from the OS
    pub seed: Option<u64>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            tessellation: TessellationKind::default(),
            shape: ShapeKind::default(),
            shape_size: DEFAULT_SHAPE_SIZE,
            rotation_degrees: DEFAULT_ROTATION_DEGREES,
            offset: GridOffset::default(),
            background: Color::BLACK,
            color_limit: None,
            dithering: DitherKind::default(),
            outline: None,
            seed: None,
        }
    }
}

impl RenderSettings {
    /// Whether cell colors go through a palette
    pub const fn limits_colors(&self) -> bool {
        self.color_limit.is_some()
    }

    /// Dithering pass that will actually run
    ///
    /// Dithering needs a palette, so without a color limit it is always
    /// [`DitherKind::None`].
    pub const fn effective_dithering(&self) -> DitherKind {
        if self.limits_colors() {
            self.dithering
        } else {
            DitherKind::None
        }
    }

    /// Check every numeric setting
    ///
    /// # Errors
    ///
    /// Returns an error if a size, count or width is zero, negative or not
    /// finite, or if the palette is larger than [`MAX_COLOR_COUNT`]
    pub fn validate(&self) -> Result<()> {
        if self.cell_size == 0 {
            return Err(invalid_parameter(
                "cell_size",
                &self.cell_size,
                &"must be at least 1 pixel",
            ));
        }
        if !self.shape_size.is_finite() || self.shape_size <= 0.0 {
            return Err(invalid_parameter(
                "shape_size",
                &self.shape_size,
                &"must be a positive number",
            ));
        }
        if !self.rotation_degrees.is_finite() {
            return Err(invalid_parameter(
                "rotation",
                &self.rotation_degrees,
                &"must be finite",
            ));
        }
        for (name, value) in [("offset_x", self.offset.x), ("offset_y", self.offset.y)] {
            if !value.is_finite() {
                return Err(invalid_parameter(name, &value, &"must be finite"));
            }
        }
        match self.color_limit {
            Some(0) => {
                return Err(invalid_parameter(
                    "colors",
                    &0,
                    &"palette needs at least one color",
                ));
            }
            Some(count) if count > MAX_COLOR_COUNT => {
                return Err(invalid_parameter(
                    "colors",
                    &count,
                    &format!("palette holds at most {MAX_COLOR_COUNT} colors"),
                ));
            }
            _ => {}
        }
        if let Some(outline) = self.outline
            && (!outline.width.is_finite() || outline.width < 0.0)
        {
            return Err(invalid_parameter(
                "outline_width",
                &outline.width,
                &"must be zero or a positive number",
            ));
        }
        Ok(())
    }
}
