/// Command-line interface and batch runner
pub mod cli;
/// Compile-time defaults and limits
pub mod configuration;
/// Error types and result alias
pub mod error;
/// PNG rendering of grids
pub mod image;
/// Progress bar for solve attempts
pub mod progress;
/// Plain-text rendering of grids
pub mod text;
/// Frame capture and GIF export of a solve
pub mod visualization;
