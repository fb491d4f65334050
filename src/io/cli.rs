//! Command-line interface for batch pixelation of image files

use crate::color::palette::Color;
use crate::dither::DitherKind;
use crate::io::configuration::{
    DEFAULT_BACKGROUND, DEFAULT_CELL_SIZE, DEFAULT_COLOR_COUNT, DEFAULT_MARGIN,
    DEFAULT_OUTLINE_COLOR, DEFAULT_OUTLINE_WIDTH, DEFAULT_ROTATION_DEGREES, DEFAULT_SHAPE_SIZE,
    INPUT_EXTENSIONS, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, io_error};
use crate::io::image::{
    AspectRatio, ExportFormat, export_icon, export_png, export_svg, load_image, prepare_source,
};
use crate::io::progress::ProgressManager;
use crate::render::orchestrator::{render_raster, render_svg};
use crate::render::settings::RenderSettings;
use crate::shape::{Outline, ShapeKind};
use crate::tessellation::TessellationKind;
use crate::tessellation::offset::{GridOffset, OffsetDirection, OffsetPattern};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;

fn parse_color(text: &str) -> std::result::Result<Color, String> {
    Color::from_hex(text).map_err(|e| e.to_string())
}

fn parse_aspect(text: &str) -> std::result::Result<AspectRatio, String> {
    AspectRatio::from_str(text).map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "pixeltile")]
#[command(
    author,
    version,
    about = "Turn images into shape mosaics over grid, hexagonal or triangular tilings"
)]
/// Command-line arguments for the pixelation tool
// Independent on/off switches for output, logging and skipping
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input image or directory of images to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Cell size in pixels
    #[arg(short, long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Tessellation layout
    #[arg(short, long, value_enum, default_value_t = TessellationKind::Grid)]
    pub tessellation: TessellationKind,

    /// Shape drawn in each cell
    #[arg(short = 'S', long, value_enum, default_value_t = ShapeKind::Square)]
    pub shape: ShapeKind,

    /// Shape size multiplier relative to the cell size
    #[arg(long, default_value_t = DEFAULT_SHAPE_SIZE)]
    pub shape_size: f64,

    /// Additional shape rotation in degrees
    #[arg(short, long, default_value_t = DEFAULT_ROTATION_DEGREES, allow_hyphen_values = true)]
    pub rotation: f64,

    /// Horizontal offset magnitude for grid cells
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub offset_x: f64,

    /// Vertical offset magnitude for grid cells
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub offset_y: f64,

    /// Axes receiving the grid offset
    #[arg(long, value_enum, default_value_t = OffsetDirection::None)]
    pub offset_direction: OffsetDirection,

    /// Distribution of the grid offset
    #[arg(long, value_enum, default_value_t = OffsetPattern::None)]
    pub offset_pattern: OffsetPattern,

    /// Background color as #rrggbb
    #[arg(short, long, default_value = DEFAULT_BACKGROUND, value_parser = parse_color)]
    pub background: Color,

    /// Quantize cell colors through a uniform palette
    #[arg(short, long)]
    pub limit_colors: bool,

    /// Palette size used with --limit-colors
    #[arg(long, default_value_t = DEFAULT_COLOR_COUNT)]
    pub colors: usize,

    /// Dithering applied when colors are limited
    #[arg(short, long, value_enum, default_value_t = DitherKind::None)]
    pub dither: DitherKind,

    /// Stroke an outline around every shape
    #[arg(short, long)]
    pub outline: bool,

    /// Outline stroke width in pixels
    #[arg(long, default_value_t = DEFAULT_OUTLINE_WIDTH)]
    pub outline_width: f64,

    /// Outline color as #rrggbb
    #[arg(long, default_value = DEFAULT_OUTLINE_COLOR, value_parser = parse_color)]
    pub outline_color: Color,

    /// Seed for random offsets; omit for a fresh layout every run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Crop the source to original, 1:1, 16:9, 4:3, w:h or a ratio
    #[arg(short, long, default_value = "original", value_parser = parse_aspect)]
    pub aspect: AspectRatio,

    /// Transparent border in pixels added around the cropped source
    #[arg(short, long, default_value_t = DEFAULT_MARGIN)]
    pub margin: u32,

    /// Output formats to write
    #[arg(short, long, value_enum, value_delimiter = ',', default_values_t = [ExportFormat::Png])]
    pub format: Vec<ExportFormat>,

    /// Log render statistics for every file
    #[arg(long)]
    pub stats: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if outputs exist
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Render settings described by the flags
    ///
    /// # Errors
    ///
    /// Returns an error if any value fails validation
    pub fn render_settings(&self) -> Result<RenderSettings> {
        let settings = RenderSettings {
            cell_size: self.cell_size,
            tessellation: self.tessellation,
            shape: self.shape,
            shape_size: self.shape_size,
            rotation_degrees: self.rotation,
            offset: GridOffset {
                x: self.offset_x,
                y: self.offset_y,
                direction: self.offset_direction,
                pattern: self.offset_pattern,
            },
            background: self.background,
            color_limit: self.limit_colors.then_some(self.colors),
            dithering: self.dither,
            outline: self.outline.then_some(Outline {
                width: self.outline_width,
                color: self.outline_color,
            }),
            seed: self.seed,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Requested formats, sorted and without duplicates
    pub fn formats(&self) -> Vec<ExportFormat> {
        let mut formats = self.format.clone();
        formats.sort_unstable();
        formats.dedup();
        formats
    }
}

/// Orchestrates batch rendering of image files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    settings: RenderSettings,
    formats: Vec<ExportFormat>,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a file processor from parsed arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments describe invalid render settings
    pub fn new(cli: Cli) -> Result<Self> {
        let settings = cli.render_settings()?;
        let formats = cli.formats();
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Ok(Self {
            cli,
            settings,
            formats,
            progress_manager,
        })
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<usize> {
        let files = self.collect_files()?;

        if files.is_empty() {
            tracing::info!(target = %self.cli.target.display(), "nothing to process");
            return Ok(0);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(files.len())
    }

    fn is_input_image(path: &Path) -> bool {
        path.extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| {
                INPUT_EXTENSIONS
                    .iter()
                    .any(|accepted| accepted.eq_ignore_ascii_case(ext))
            })
    }

    fn is_own_output(path: &Path) -> bool {
        path.file_stem()
            .is_some_and(|stem| stem.to_string_lossy().ends_with(OUTPUT_SUFFIX))
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !Self::is_input_image(target) {
                return Err(io_error("Target file must be a supported image"));
            }
            Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            })
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target)? {
                let path = entry?.path();
                if Self::is_input_image(&path)
                    && !Self::is_own_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(io_error("Target must be an image file or directory"))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let all_exist = self
            .formats
            .iter()
            .all(|&format| Self::get_output_path(input_path, format).exists());
        if all_exist {
            tracing::warn!(file = %input_path.display(), "skipping, outputs exist");
        }
        !all_exist
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();
        // Load, render, then one step per export
        let steps = 2 + self.formats.len() as u64;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, steps);
        }

        let image = load_image(input_path)?;
        let source = prepare_source(&image, self.cli.aspect, self.cli.margin)?;
        tracing::debug!(
            file = %input_path.display(),
            width = source.width(),
            height = source.height(),
            "source prepared"
        );
        self.advance(index, "rendering");

        // Raster and SVG of one file share a seed so random offsets match
        let settings = RenderSettings {
            seed: Some(self.settings.seed.unwrap_or_else(rand::random)),
            ..self.settings
        };
        let raster = if self.formats.iter().any(|format| format.needs_raster()) {
            Some(render_raster(&source, &settings)?)
        } else {
            None
        };
        let svg = if self.formats.contains(&ExportFormat::Svg) {
            Some(render_svg(&source, &settings)?)
        } else {
            None
        };
        self.advance(index, "exporting");

        if self.cli.stats {
            for report in raster.iter().map(|(_, r)| r).chain(svg.iter().map(|(_, r)| r)) {
                tracing::info!(file = %input_path.display(), "{report}");
            }
        }

        for format in self.formats.clone() {
            let output_path = Self::get_output_path(input_path, format);
            match (format, &raster, &svg) {
                (ExportFormat::Png, Some((buffer, _)), _) => export_png(buffer, &output_path)?,
                (ExportFormat::Ico, Some((buffer, _)), _) => export_icon(buffer, &output_path)?,
                (ExportFormat::Svg, _, Some((markup, _))) => export_svg(markup, &output_path)?,
                _ => return Err(io_error("Render output missing for requested format")),
            }
            self.advance(index, format.extension());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }
        tracing::info!(
            file = %input_path.display(),
            elapsed_ms = start_time.elapsed().as_millis(),
            "pixelated"
        );

        Ok(())
    }

    fn advance(&mut self, index: usize, next: &str) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.advance(index, next);
        }
    }

    /// Output path for `input_path` in `format`: `<stem>_pixelated.<ext>` beside the input
    pub fn get_output_path(input_path: &Path, format: ExportFormat) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            format.extension()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
