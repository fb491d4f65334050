//! Tests for the tiny-skia raster backend

#[cfg(test)]
mod tests {
    use pixeltile::PixelateError;
    use pixeltile::color::palette::Color;
    use pixeltile::shape::raster::RasterCanvas;
    use pixeltile::shape::{Outline, ShapeKind, ShapeSink, ShapeStyle, render_shape};

    fn style(kind: ShapeKind, outline: Option<Outline>) -> ShapeStyle {
        ShapeStyle {
            kind,
            size_multiplier: 1.0,
            fill_expansion: 0.0,
            outline,
        }
    }

    // Tests the background fills the whole surface
    // Verified by skipping the background fill
    #[test]
    fn test_background_fill() {
        let mut canvas = RasterCanvas::new();
        assert!(canvas.begin(3, 2, Color::opaque(10.0, 20.0, 30.0)).is_ok());
        let buffer = canvas.into_buffer();
        assert!(buffer.is_ok_and(|b| {
            b.width() == 3
                && b.height() == 2
                && b.as_bytes().chunks_exact(4).all(|px| px == [10, 20, 30, 255])
        }));
    }

    // Tests a cell-sized square covers the canvas
    // Verified by drawing at the top-left corner instead of the center
    #[test]
    fn test_square_covers_cell() {
        let mut canvas = RasterCanvas::new();
        assert!(canvas.begin(4, 4, Color::BLACK).is_ok());
        let shape = render_shape(2.0, 2.0, Color::WHITE, 4.0, 0.0, &style(ShapeKind::Square, None));
        assert!(canvas.draw(&shape).is_ok());

        let buffer = canvas.into_buffer();
        assert!(buffer.is_ok_and(|b| b.as_bytes().iter().all(|&v| v == 255)));
    }

    // Tests a circle leaves the corners on the background
    // Verified by drawing circles as squares
    #[test]
    fn test_circle_leaves_corners() {
        let mut canvas = RasterCanvas::new();
        assert!(canvas.begin(10, 10, Color::BLACK).is_ok());
        let shape = render_shape(5.0, 5.0, Color::WHITE, 10.0, 0.0, &style(ShapeKind::Circle, None));
        assert!(canvas.draw(&shape).is_ok());

        let Ok(buffer) = canvas.into_buffer() else {
            unreachable!("canvas was initialised");
        };
        assert_eq!(buffer.get_bytes(5, 5), Some([255, 255, 255, 255]));
        assert_eq!(buffer.get_bytes(0, 0), Some([0, 0, 0, 255]));
        assert_eq!(buffer.get_bytes(9, 9), Some([0, 0, 0, 255]));
    }

    // Tests the outline is stroked over the fill
    // Verified by stroking before filling
    #[test]
    fn test_outline_over_fill() {
        let outline = Outline {
            width: 2.0,
            color: Color::opaque(0.0, 0.0, 255.0),
        };
        let mut canvas = RasterCanvas::new();
        assert!(canvas.begin(10, 10, Color::BLACK).is_ok());
        let shape = render_shape(
            5.0,
            5.0,
            Color::opaque(255.0, 0.0, 0.0),
            6.0,
            0.0,
            &style(ShapeKind::Square, Some(outline)),
        );
        assert!(canvas.draw(&shape).is_ok());

        let Ok(buffer) = canvas.into_buffer() else {
            unreachable!("canvas was initialised");
        };
        // Edge at x = 2 with a 2px stroke covers columns 1 and 2
        assert_eq!(buffer.get_bytes(2, 5), Some([0, 0, 255, 255]));
        assert_eq!(buffer.get_bytes(1, 5), Some([0, 0, 255, 255]));
        assert_eq!(buffer.get_bytes(5, 5), Some([255, 0, 0, 255]));
        assert_eq!(buffer.get_bytes(0, 5), Some([0, 0, 0, 255]));
    }

    // Tests transparent fills leave the background visible
    // Verified by replacing pixels instead of compositing
    #[test]
    fn test_transparent_fill_composites() {
        let mut canvas = RasterCanvas::new();
        assert!(canvas.begin(2, 2, Color::WHITE).is_ok());
        let shape = render_shape(1.0, 1.0, Color::TRANSPARENT, 2.0, 0.0, &style(ShapeKind::Square, None));
        assert!(canvas.draw(&shape).is_ok());
        let buffer = canvas.into_buffer();
        assert!(buffer.is_ok_and(|b| b.as_bytes().iter().all(|&v| v == 255)));
    }

    // Tests using the canvas before begin is an error rather than a panic
    // Verified by lazily allocating a 1x1 surface
    #[test]
    fn test_draw_before_begin() {
        let mut canvas = RasterCanvas::new();
        let shape = render_shape(0.0, 0.0, Color::WHITE, 1.0, 0.0, &style(ShapeKind::Square, None));
        assert!(matches!(canvas.draw(&shape), Err(PixelateError::Raster { .. })));
        assert!(matches!(
            RasterCanvas::new().into_buffer(),
            Err(PixelateError::Raster { .. })
        ));
    }

    // Tests a zero-sized surface is reported
    // Verified by unwrapping the pixmap allocation
    #[test]
    fn test_zero_sized_surface() {
        let mut canvas = RasterCanvas::new();
        assert!(matches!(
            canvas.begin(0, 5, Color::BLACK),
            Err(PixelateError::Raster { .. })
        ));
    }
}
