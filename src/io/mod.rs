/// Command-line parsing and batch file processing
pub mod cli;
/// Default settings and naming constants
pub mod configuration;
/// Error type shared by the whole crate
pub mod error;
/// Image loading, source preparation and export
pub mod image;
/// Terminal progress bars for batch runs
pub mod progress;
