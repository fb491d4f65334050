//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use pixeltile::PixelateError;
    use pixeltile::io::error::{invalid_parameter, io_error};
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let error = PixelateError::FileSystem {
            path: "/tmp/out.svg".into(),
            operation: "write svg",
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("write svg"));
        assert!(error.to_string().contains("/tmp/out.svg"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let message = invalid_parameter("cell_size", &0, &"must be positive").to_string();

        assert!(message.contains("cell_size"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be positive"));
    }

    // Tests geometry errors name the canvas and cell size
    // Verified by dropping dimensions from message
    #[test]
    fn test_invalid_geometry_error() {
        let error = PixelateError::InvalidGeometry {
            width: 0,
            height: 12,
            cell_size: 4,
        };

        let message = error.to_string();
        assert!(message.contains("0x12"));
        assert!(message.contains("cell size 4"));
        assert!(error.source().is_none());
    }

    // Tests buffer and palette errors render their details
    // Verified by swapping expected and actual
    #[test]
    fn test_buffer_and_palette_errors() {
        let message = PixelateError::BufferSize {
            expected: 64,
            actual: 60,
        }
        .to_string();
        assert!(message.contains("60 bytes"));
        assert!(message.contains("require 64"));

        assert!(PixelateError::EmptyPalette.to_string().contains("no colors"));
    }

    // Tests path helper reports the path parameter
    // Verified by changing parameter name
    #[test]
    fn test_io_error_helper() {
        let error = io_error("Target must be an image file or directory");
        assert!(matches!(
            error,
            PixelateError::InvalidParameter { parameter: "path", .. }
        ));
    }

    // Tests I/O conversion keeps the underlying error
    // Verified by discarding source in From impl
    #[test]
    fn test_io_conversion() {
        let error: PixelateError = std::io::Error::other("disk").into();
        assert!(error.source().is_some_and(|s| s.to_string() == "disk"));
    }
}
