//! Frame capture and GIF generation for solve visualization

use std::path::Path;

use image::codecs::gif::GifEncoder;
use image::{Delay, Frame, RgbaImage};

use crate::io::configuration::{FINAL_FRAME_HOLD, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{Result, WfcError, invalid_argument, invalid_state};
use crate::io::image::{TileStyle, create_parent_dir, render_grid};
use crate::spatial::grid::Grid;

/// Captures rendered grid snapshots while a solver runs
///
/// Frames are taken every `steps_per_frame` solver steps, mirroring how an
/// interactive driver caps the work done between two redraws.
#[derive(Debug, Clone)]
pub struct FrameCapture {
    frames: Vec<RgbaImage>,
    styles: Vec<TileStyle>,
    cell_size: u32,
    steps_per_frame: usize,
}

impl FrameCapture {
    /// Create an empty capture
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `steps_per_frame` is zero
    pub fn new(styles: Vec<TileStyle>, cell_size: u32, steps_per_frame: usize) -> Result<Self> {
        if steps_per_frame == 0 {
            return Err(invalid_argument(
                "steps_per_frame",
                &steps_per_frame,
                &"must be positive",
            ));
        }

        Ok(Self {
            frames: Vec::new(),
            styles,
            cell_size,
            steps_per_frame,
        })
    }

    /// Render and store the current state of `grid`
    ///
    /// # Errors
    ///
    /// Returns an error if the grid cannot be rendered with these styles
    pub fn capture(&mut self, grid: &Grid) -> Result<()> {
        let frame = render_grid(grid, &self.styles, self.cell_size)?;
        self.frames.push(frame);
        Ok(())
    }

    /// Capture `grid` if `steps` falls on a frame boundary
    ///
    /// Returns whether a frame was taken.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid cannot be rendered with these styles
    pub fn observe(&mut self, grid: &Grid, steps: usize) -> Result<bool> {
        if steps % self.steps_per_frame != 0 {
            return Ok(false);
        }
        self.capture(grid)?;
        Ok(true)
    }

    /// Drop every captured frame, e.g. before a restart
    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Number of frames captured so far
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Captured frames in order
    pub fn frames(&self) -> &[RgbaImage] {
        &self.frames
    }

    /// Export the captured frames as a GIF with automatic frame skipping
    ///
    /// If the requested delay is shorter than viewers reliably support, only
    /// every n-th frame is kept so the apparent speed is preserved. The last
    /// frame is always kept and held for `FINAL_FRAME_HOLD` delays.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - `frame_delay_ms` is zero
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(invalid_state(
                "export_gif",
                &"no frames captured for visualization",
            ));
        }
        if frame_delay_ms == 0 {
            return Err(invalid_argument(
                "frame_delay_ms",
                &frame_delay_ms,
                &"must be positive",
            ));
        }

        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
        } else {
            1
        };

        let frames = self.build_frames(effective_delay_ms, skip_factor);

        create_parent_dir(output_path)?;

        let file = std::fs::File::create(output_path).map_err(|e| WfcError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| WfcError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        log::debug!(
            "wrote {} with {} captured frames",
            output_path.display(),
            self.frames.len()
        );
        Ok(())
    }

    fn build_frames(&self, delay_ms: u32, skip_factor: usize) -> Vec<Frame> {
        let delay = Delay::from_numer_denom_ms(delay_ms, 1);
        let last_index = self.frames.len().saturating_sub(1);

        let mut frames: Vec<Frame> = self
            .frames
            .iter()
            .enumerate()
            .filter(|(index, _)| index % skip_factor == 0 || *index == last_index)
            .map(|(_, image)| Frame::from_parts(image.clone(), 0, 0, delay))
            .collect();

        // Final frame displays longer for better visibility
        if let Some(last) = self.frames.last() {
            frames.push(Frame::from_parts(
                last.clone(),
                0,
                0,
                Delay::from_numer_denom_ms(delay_ms * FINAL_FRAME_HOLD, 1),
            ));
        }

        frames
    }
}
