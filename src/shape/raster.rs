//! Raster backend drawing placed shapes onto a tiny-skia pixmap

use crate::color::palette::Color;
use crate::color::pixels::PixelBuffer;
use crate::io::error::{PixelateError, Result};
use crate::shape::geometry::ShapeGeometry;
use crate::shape::{PlacedShape, ShapeSink};
use tiny_skia::{
    FillRule, LineJoin, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform,
};

/// Anti-aliased RGBA drawing surface
#[derive(Debug, Default)]
pub struct RasterCanvas {
    pixmap: Option<Pixmap>,
}

impl RasterCanvas {
    /// Create a canvas; the surface is allocated by [`ShapeSink::begin`]
    pub const fn new() -> Self {
        Self { pixmap: None }
    }

    /// Read the canvas back as straight-alpha RGBA
    ///
    /// # Errors
    ///
    /// Returns an error if nothing has been drawn yet
    pub fn into_buffer(self) -> Result<PixelBuffer> {
        let pixmap = self.pixmap.ok_or_else(|| PixelateError::Raster {
            reason: "canvas was never initialised".to_string(),
        })?;
        let data = pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let straight = pixel.demultiply();
                [
                    straight.red(),
                    straight.green(),
                    straight.blue(),
                    straight.alpha(),
                ]
            })
            .collect();
        PixelBuffer::from_raw(pixmap.width(), pixmap.height(), data)
    }
}

fn paint_for(color: Color) -> Paint<'static> {
    let [r, g, b, a] = color.to_bytes();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

fn to_path(geometry: &ShapeGeometry) -> Option<Path> {
    if geometry.is_degenerate() {
        return None;
    }
    match geometry {
        ShapeGeometry::Rect {
            x,
            y,
            width,
            height,
        } => Rect::from_xywh(*x as f32, *y as f32, *width as f32, *height as f32)
            .map(PathBuilder::from_rect),
        ShapeGeometry::Circle { radius } => PathBuilder::from_circle(0.0, 0.0, *radius as f32),
        ShapeGeometry::Polygon(points) => {
            let mut builder = PathBuilder::new();
            let mut vertices = points.iter();
            let &(x0, y0) = vertices.next()?;
            builder.move_to(x0 as f32, y0 as f32);
            for &(x, y) in vertices {
                builder.line_to(x as f32, y as f32);
            }
            builder.close();
            builder.finish()
        }
    }
}

impl ShapeSink for RasterCanvas {
    fn begin(&mut self, width: u32, height: u32, background: Color) -> Result<()> {
        let mut pixmap = Pixmap::new(width, height).ok_or_else(|| PixelateError::Raster {
            reason: format!("cannot allocate a {width}x{height} pixmap"),
        })?;
        let [r, g, b, a] = background.to_bytes();
        pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
        self.pixmap = Some(pixmap);
        Ok(())
    }

    fn draw(&mut self, shape: &PlacedShape) -> Result<()> {
        let pixmap = self.pixmap.as_mut().ok_or_else(|| PixelateError::Raster {
            reason: "draw called before begin".to_string(),
        })?;
        let transform = Transform::from_rotate(shape.rotation_degrees as f32)
            .post_translate(shape.x as f32, shape.y as f32);

        if let Some(path) = to_path(&shape.fill_geometry) {
            pixmap.fill_path(
                &path,
                &paint_for(shape.fill),
                FillRule::Winding,
                transform,
                None,
            );
        }

        if let Some((geometry, outline)) = &shape.stroke {
            if let Some(path) = to_path(geometry) {
                let stroke = Stroke {
                    width: outline.width as f32,
                    line_join: LineJoin::Round,
                    ..Stroke::default()
                };
                pixmap.stroke_path(&path, &paint_for(outline.color), &stroke, transform, None);
            }
        }

        Ok(())
    }
}
