//! Error types for rendering, configuration and file operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all pixelation operations
#[derive(Debug)]
pub enum PixelateError {
    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Setting validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Canvas or cell dimensions cannot produce a finite tessellation
    ///
    /// Raised before any sampler iterates, so a zero cell size or an empty
    /// canvas never reaches the cell enumeration loops.
    InvalidGeometry {
        /// Canvas width in pixels
        width: u32,
        /// Canvas height in pixels
        height: u32,
        /// Requested cell size in pixels
        cell_size: u32,
    },

    /// Nearest-color search was asked to pick from an empty palette
    EmptyPalette,

    /// Pixel data length does not match the declared dimensions
    BufferSize {
        /// Byte count implied by width, height and four channels
        expected: usize,
        /// Byte count actually supplied
        actual: usize,
    },

    /// Drawing surface could not be created or read back
    Raster {
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for PixelateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidGeometry {
                width,
                height,
                cell_size,
            } => {
                write!(
                    f,
                    "Cannot tessellate a {width}x{height} canvas with cell size {cell_size}"
                )
            }
            Self::EmptyPalette => write!(f, "Palette contains no colors"),
            Self::BufferSize { expected, actual } => {
                write!(
                    f,
                    "Pixel buffer holds {actual} bytes but dimensions require {expected}"
                )
            }
            Self::Raster { reason } => write!(f, "Raster surface error: {reason}"),
        }
    }
}

impl std::error::Error for PixelateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pixelation results
pub type Result<T> = std::result::Result<T, PixelateError>;

impl From<std::io::Error> for PixelateError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PixelateError {
    PixelateError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a path-related error for CLI target handling
pub fn io_error(msg: &str) -> PixelateError {
    PixelateError::InvalidParameter {
        parameter: "path",
        value: String::new(),
        reason: msg.to_string(),
    }
}
