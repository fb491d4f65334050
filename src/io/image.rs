//! Image loading, aspect-ratio cropping, margin padding and export

use crate::color::pixels::PixelBuffer;
use crate::io::configuration::ICON_SIZE;
use crate::io::error::{PixelateError, Result, invalid_parameter};
use clap::ValueEnum;
use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Target aspect ratio for the centered source crop
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AspectRatio {
    /// Keep the source proportions
    #[default]
    Original,
    /// 1:1
    Square,
    /// 16:9
    Wide,
    /// 4:3
    Standard,
    /// Any positive width / height ratio
    Custom(f64),
}

impl AspectRatio {
    /// Width divided by height, or `None` to keep the source ratio
    pub const fn ratio(self) -> Option<f64> {
        match self {
            Self::Original => None,
            Self::Square => Some(1.0),
            Self::Wide => Some(16.0 / 9.0),
            Self::Standard => Some(4.0 / 3.0),
            Self::Custom(ratio) => Some(ratio),
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Original => f.write_str("original"),
            Self::Square => f.write_str("1:1"),
            Self::Wide => f.write_str("16:9"),
            Self::Standard => f.write_str("4:3"),
            Self::Custom(ratio) => write!(f, "{ratio}"),
        }
    }
}

impl FromStr for AspectRatio {
    type Err = PixelateError;

    /// Accepts `original`, `1:1`, `16:9`, `4:3`, any `w:h` pair or a bare ratio
    fn from_str(text: &str) -> Result<Self> {
        let reject = |reason: &str| invalid_parameter("aspect", &text, &reason);
        match text.trim() {
            "original" => return Ok(Self::Original),
            "1:1" | "square" => return Ok(Self::Square),
            "16:9" => return Ok(Self::Wide),
            "4:3" => return Ok(Self::Standard),
            _ => {}
        }

        let ratio = match text.trim().split_once(':') {
            Some((w, h)) => {
                let w: f64 = w.trim().parse().map_err(|_parse| reject("width is not a number"))?;
                let h: f64 = h.trim().parse().map_err(|_parse| reject("height is not a number"))?;
                w / h
            }
            None => text
                .trim()
                .parse()
                .map_err(|_parse| reject("expected original, 1:1, 16:9, 4:3, w:h or a ratio"))?,
        };

        if ratio.is_finite() && ratio > 0.0 {
            Ok(Self::Custom(ratio))
        } else {
            Err(reject("ratio must be a positive finite number"))
        }
    }
}

/// Centered source rectangle in (possibly fractional) pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRegion {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl CropRegion {
    /// Whole-pixel bounds `(x, y, width, height)`, truncated and at least 1x1
    pub fn pixel_bounds(&self) -> (u32, u32, u32, u32) {
        (
            self.x.max(0.0) as u32,
            self.y.max(0.0) as u32,
            (self.width as u32).max(1),
            (self.height as u32).max(1),
        )
    }
}

/// Largest centered region of a `width` x `height` image with the requested ratio
///
/// Wider sources lose columns on both sides, taller sources lose rows at
/// the top and bottom. Matching ratios keep the full image.
pub fn crop_parameters(width: u32, height: u32, aspect: AspectRatio) -> CropRegion {
    let (width, height) = (f64::from(width), f64::from(height));
    let full = CropRegion {
        x: 0.0,
        y: 0.0,
        width,
        height,
    };
    if height <= 0.0 {
        return full;
    }
    let source_ratio = width / height;
    let target = aspect.ratio().unwrap_or(source_ratio);

    if source_ratio > target {
        let cropped = height * target;
        CropRegion {
            x: (width - cropped) / 2.0,
            width: cropped,
            ..full
        }
    } else if source_ratio < target {
        let cropped = width / target;
        CropRegion {
            y: (height - cropped) / 2.0,
            height: cropped,
            ..full
        }
    } else {
        full
    }
}

/// Load any supported image format as RGBA
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|e| PixelateError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgba8())
}

/// Crop to `aspect`, then add a transparent border of `margin` pixels
///
/// # Errors
///
/// Returns an error if the padded image is too large to address
pub fn prepare_source(img: &RgbaImage, aspect: AspectRatio, margin: u32) -> Result<PixelBuffer> {
    let (x, y, width, height) = crop_parameters(img.width(), img.height(), aspect).pixel_bounds();
    let cropped = imageops::crop_imm(img, x, y, width, height).to_image();

    let padded_width = add_margin(cropped.width(), margin)?;
    let padded_height = add_margin(cropped.height(), margin)?;
    let mut canvas = RgbaImage::new(padded_width, padded_height);
    imageops::replace(&mut canvas, &cropped, i64::from(margin), i64::from(margin));

    PixelBuffer::from_raw(padded_width, padded_height, canvas.into_raw())
}

fn add_margin(extent: u32, margin: u32) -> Result<u32> {
    margin
        .checked_mul(2)
        .and_then(|border| extent.checked_add(border))
        .ok_or_else(|| invalid_parameter("margin", &margin, &"padded size overflows"))
}

fn to_image(buffer: &PixelBuffer) -> Result<RgbaImage> {
    RgbaImage::from_raw(buffer.width(), buffer.height(), buffer.as_bytes().to_vec()).ok_or(
        PixelateError::BufferSize {
            expected: buffer.width() as usize * buffer.height() as usize * 4,
            actual: buffer.as_bytes().len(),
        },
    )
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| PixelateError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}

/// Save a rendered buffer as PNG
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image cannot be saved
pub fn export_png(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    to_image(buffer)?
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| PixelateError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Save a 64x64 downscale of a rendered buffer as PNG data
///
/// The file carries whatever extension `path` has; icon consumers that
/// accept PNG-encoded icons read it directly.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image cannot be saved
pub fn export_icon(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    let icon = imageops::resize(&to_image(buffer)?, ICON_SIZE, ICON_SIZE, FilterType::Triangle);
    icon.save_with_format(path, ImageFormat::Png)
        .map_err(|e| PixelateError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Write SVG markup to disk
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file cannot be written
pub fn export_svg(markup: &str, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    std::fs::write(path, markup).map_err(|e| PixelateError::FileSystem {
        path: path.to_path_buf(),
        operation: "write svg",
        source: e,
    })
}

/// Output encodings offered by the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum ExportFormat {
    /// Raster render as PNG
    Png,
    /// Text render as SVG
    Svg,
    /// 64x64 PNG written with an `.ico` extension
    Ico,
}

impl ExportFormat {
    /// File extension for this format
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Ico => "ico",
        }
    }

    /// Whether the format is produced from the raster render
    pub const fn needs_raster(self) -> bool {
        matches!(self, Self::Png | Self::Ico)
    }
}
