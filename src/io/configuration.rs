//! Default render settings and output naming constants

// Rendering defaults mirror the values a fresh session starts with
/// Default edge length of one tessellation cell in pixels
pub const DEFAULT_CELL_SIZE: u32 = 20;
/// Default multiplier applied to the drawn shape size
pub const DEFAULT_SHAPE_SIZE: f64 = 1.0;
/// Default user rotation of each shape in degrees
pub const DEFAULT_ROTATION_DEGREES: f64 = 0.0;
/// Default canvas background color
pub const DEFAULT_BACKGROUND: &str = "#000000";

// Color limiting
/// Default palette size when color limiting is enabled
pub const DEFAULT_COLOR_COUNT: usize = 16;
/// Largest palette size, one entry per 24-bit RGB color
pub const MAX_COLOR_COUNT: usize = 256 * 256 * 256;

// Outline
/// Default outline stroke width in pixels
pub const DEFAULT_OUTLINE_WIDTH: f64 = 1.0;
/// Default outline stroke color
pub const DEFAULT_OUTLINE_COLOR: &str = "#000000";

// Fill expansion hides hairline seams between neighbouring cells
/// Fill expansion for square cells on the grid and every cell on hex/triangular layouts
pub const SEAM_FILL_EXPANSION: f64 = 0.5;

// Host-side preparation
/// Default transparent border added around the cropped source
pub const DEFAULT_MARGIN: u32 = 0;
/// Edge length of the square icon export
pub const ICON_SIZE: u32 = 64;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_pixelated";
/// Extensions accepted as input images when scanning a directory
pub const INPUT_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "bmp", "webp"];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "pixeltile=info";
/// Log filter used with `--quiet`
pub const QUIET_LOG_FILTER: &str = "pixeltile=warn";
