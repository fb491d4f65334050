/// Render pipeline and diagnostics
pub mod orchestrator;
/// Render configuration snapshot
pub mod settings;

pub use orchestrator::{RenderReport, render_into, render_raster, render_svg};
pub use settings::RenderSettings;
