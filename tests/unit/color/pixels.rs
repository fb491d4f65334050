//! Tests for bounds-checked pixel access and block averaging

#[cfg(test)]
mod tests {
    use pixeltile::PixelateError;
    use pixeltile::color::palette::Color;
    use pixeltile::color::pixels::PixelBuffer;

    fn gradient_row() -> PixelBuffer {
        let data = vec![0, 0, 0, 255, 100, 100, 100, 255, 200, 200, 200, 255];
        PixelBuffer::from_raw(3, 1, data).unwrap_or_else(|_| PixelBuffer::filled(3, 1, [0; 4]))
    }

    // Tests raw data must match the declared dimensions
    // Verified by skipping the length check
    #[test]
    fn test_from_raw_checks_length() {
        let result = PixelBuffer::from_raw(2, 2, vec![0; 15]);
        assert!(matches!(
            result,
            Err(PixelateError::BufferSize {
                expected: 16,
                actual: 15
            })
        ));
        assert!(PixelBuffer::from_raw(2, 2, vec![0; 16]).is_ok());
    }

    // Tests reads outside the buffer return None
    // Verified by wrapping negative coordinates
    #[test]
    fn test_get_pixel_out_of_bounds() {
        let buffer = PixelBuffer::filled(2, 2, [1, 2, 3, 4]);
        assert_eq!(
            buffer.get_pixel(1, 1),
            Some(Color::new(1.0, 2.0, 3.0, 4.0))
        );
        assert_eq!(buffer.get_pixel(-1, 0), None);
        assert_eq!(buffer.get_pixel(0, 2), None);
        assert_eq!(buffer.get_pixel(2, 0), None);
    }

    // Tests writes outside the buffer are ignored
    // Verified by writing to the clamped coordinate
    #[test]
    fn test_set_pixel_out_of_bounds_is_noop() {
        let mut buffer = PixelBuffer::filled(2, 2, [9, 9, 9, 9]);
        let before = buffer.clone();
        buffer.set_pixel(2, 0, Color::WHITE);
        buffer.set_pixel(0, -1, Color::WHITE);
        assert_eq!(buffer, before);
    }

    // Tests writes clamp every channel into 0..=255
    // Verified by letting values wrap
    #[test]
    fn test_set_pixel_clamps() {
        let mut buffer = PixelBuffer::filled(1, 1, [0; 4]);
        buffer.set_pixel(0, 0, Color::new(-20.0, 260.0, 64.4, 128.0));
        assert_eq!(buffer.get_bytes(0, 0), Some([0, 255, 64, 128]));
    }

    // Tests the average of a uniform block is exactly that color
    // Verified by dividing by the block area instead of the in-bounds count
    #[test]
    fn test_average_of_uniform_block() {
        let buffer = PixelBuffer::filled(6, 6, [10, 20, 30, 255]);
        for size in [1.0, 2.0, 3.0, 6.0] {
            assert_eq!(
                buffer.average_color(0, 0, size, size),
                Color::new(10.0, 20.0, 30.0, 255.0)
            );
        }
    }

    // Tests blocks hanging off the edge average only in-bounds pixels
    // Verified by counting out-of-bounds pixels as black
    #[test]
    fn test_average_clips_to_buffer() {
        let buffer = PixelBuffer::filled(4, 4, [40, 80, 120, 255]);
        assert_eq!(
            buffer.average_color(2, 2, 10.0, 10.0),
            Color::new(40.0, 80.0, 120.0, 255.0)
        );
        assert_eq!(
            buffer.average_color(-3, -3, 4.0, 4.0),
            Color::new(40.0, 80.0, 120.0, 255.0)
        );
    }

    // Tests a block with no in-bounds pixels averages to transparent black
    // Verified by dividing by zero
    #[test]
    fn test_average_of_empty_block() {
        let buffer = PixelBuffer::filled(4, 4, [255; 4]);
        assert_eq!(buffer.average_color(10, 10, 3.0, 3.0), Color::TRANSPARENT);
        assert_eq!(buffer.average_color(0, 0, 0.0, 3.0), Color::TRANSPARENT);
    }

    // Tests fractional extents include the partially covered column
    // Verified by truncating the block end
    #[test]
    fn test_average_fractional_width() {
        let buffer = gradient_row();
        assert_eq!(
            buffer.average_color(0, 0, 1.5, 1.0),
            Color::new(50.0, 50.0, 50.0, 255.0)
        );
        assert_eq!(
            buffer.average_color(1, 0, 1.0, 1.0),
            Color::new(100.0, 100.0, 100.0, 255.0)
        );
    }
}
