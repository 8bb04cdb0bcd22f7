//! Solver limits and runtime configuration defaults

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Number of solver steps between captured animation frames
pub const DEFAULT_STEPS_PER_FRAME: usize = 100;

/// Fresh solvers to try before giving up on contradictions
pub const DEFAULT_ATTEMPTS: usize = 10;

/// Edge length in pixels of one rendered cell
pub const DEFAULT_CELL_SIZE: u32 = 16;

/// Largest accepted cell size in pixels
pub const MAX_CELL_SIZE: u32 = 256;

/// Largest rendered image, in pixels, accepted for PNG and GIF frames
pub const MAX_IMAGE_PIXELS: u64 = 64 * 1024 * 1024;

// Output settings
/// Default path of the rendered result
pub const DEFAULT_OUTPUT: &str = "wfc_result.png";
/// Suffix replacing the output extension for the animation
pub const VISUALIZATION_SUFFIX: &str = "_solve.gif";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 40;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;
/// How many frame delays the final frame is held for
pub const FINAL_FRAME_HOLD: u32 = 25;

// Rendering colours
/// Fill for cells whose domain became empty
pub const CONTRADICTION_COLOR: [u8; 4] = [200, 50, 50, 255];
/// Fill for undecided cells with the largest domain
pub const UNDECIDED_COLOR: [u8; 4] = [220, 220, 220, 255];

/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
