//! Command-line interface running the solver on a built-in tile catalog

use crate::algorithm::solver::{Solver, Status};
use crate::catalog::Catalog;
use crate::io::configuration::{
    DEFAULT_ATTEMPTS, DEFAULT_CELL_SIZE, DEFAULT_OUTPUT, DEFAULT_STEPS_PER_FRAME,
    GIF_FRAME_DELAY_MS, VISUALIZATION_SUFFIX,
};
use crate::io::error::{Result, WfcError, invalid_argument};
use crate::io::image::{check_image_size, export_grid_as_png};
use crate::io::progress::SolveProgress;
use crate::io::text::render_ascii;
use crate::io::visualization::FrameCapture;
use crate::rules::ruleset::Ruleset;
use crate::rules::table::AdjacencyTable;
use crate::spatial::grid::Grid;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "gridcollapse")]
#[command(
    author,
    version,
    about = "Fill a grid with tiles using wave function collapse"
)]
/// Command-line arguments for the solver
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Tile catalog to solve with
    #[arg(short, long, value_enum, default_value_t = Catalog::Roads)]
    pub catalog: Catalog,

    /// Grid width in cells (implies square if height not specified)
    #[arg(short = 'w', long)]
    pub width: Option<usize>,

    /// Grid height in cells
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Random seed for reproducible generation
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Fresh solves to try before giving up on contradictions
    #[arg(short, long, default_value_t = DEFAULT_ATTEMPTS)]
    pub attempts: usize,

    /// Solver steps between captured animation frames
    #[arg(long, default_value_t = DEFAULT_STEPS_PER_FRAME)]
    pub steps_per_frame: usize,

    /// Edge length of one rendered cell in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Path of the rendered PNG
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Enable visualization output as animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Print the solved grid as text
    #[arg(long)]
    pub ascii: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Grid size from the flags, falling back to the catalog default
    pub const fn dimensions(&self) -> (usize, usize) {
        match (self.width, self.height) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => (w, w),
            (None, Some(h)) => (h, h),
            (None, None) => self.catalog.default_size(),
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Path of the GIF written next to the PNG output
    pub fn visualization_path(&self) -> PathBuf {
        let stem = self.output.file_stem().unwrap_or_default();
        let name = format!("{}{VISUALIZATION_SUFFIX}", stem.to_string_lossy());

        match self.output.parent() {
            Some(parent) => parent.join(name),
            None => PathBuf::from(name),
        }
    }
}

/// Result of a successful run
#[derive(Debug)]
pub struct RunReport {
    /// Solved grid
    pub grid: Grid,
    /// Attempt that succeeded, 1-based
    pub attempt: usize,
    /// Collapse steps taken by the successful attempt
    pub steps: usize,
    /// Seed of the successful attempt
    pub seed: u64,
}

/// Runs solve attempts until one succeeds, then writes the outputs
pub struct Runner {
    cli: Cli,
    progress: SolveProgress,
}

impl Runner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let (width, height) = cli.dimensions();
        let cell_count = width.saturating_mul(height);
        let progress = if cli.should_show_progress() {
            SolveProgress::new(cell_count, cli.attempts)
        } else {
            SolveProgress::hidden(cell_count, cli.attempts)
        };

        Self { cli, progress }
    }

    /// Solve, restarting on contradiction, and write the requested outputs
    ///
    /// Attempt `n` is seeded with `seed + n - 1`. When no seed is given a
    /// random base seed is drawn and logged so the run can be repeated.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An argument is invalid (zero attempts, bad size or cell size)
    /// - Every attempt ends in a contradiction
    /// - Writing an output file fails
    pub fn run(&self) -> Result<RunReport> {
        if self.cli.attempts == 0 {
            return Err(invalid_argument(
                "attempts",
                &self.cli.attempts,
                &"must be positive",
            ));
        }

        let (width, height) = self.cli.dimensions();
        check_image_size(width, height, self.cli.cell_size)?;

        let catalog = self.cli.catalog;
        let ruleset = catalog.ruleset()?;
        if !ruleset.is_symmetric() {
            log::warn!("{catalog} ruleset is not symmetric; propagation follows each mask as given");
        }

        let base_seed = self.cli.seed.unwrap_or_else(rand::random);
        log::info!("solving {catalog} with base seed {base_seed}");

        let mut capture = if self.cli.visualize {
            Some(FrameCapture::new(
                catalog.styles(),
                self.cli.cell_size,
                self.cli.steps_per_frame,
            )?)
        } else {
            None
        };

        let start_time = Instant::now();
        let mut last_grid = None;

        for attempt in 1..=self.cli.attempts {
            let seed = base_seed.wrapping_add(attempt as u64 - 1);
            let (status, steps, grid) = self.attempt(&ruleset, attempt, seed, capture.as_mut())?;

            if status == Status::Solved {
                self.progress.finish();
                log::info!(
                    "solved on attempt {attempt} after {steps} steps in {:.2?}",
                    start_time.elapsed()
                );
                self.write_outputs(&grid, capture.as_ref())?;
                return Ok(RunReport {
                    grid,
                    attempt,
                    steps,
                    seed,
                });
            }

            log::info!("attempt {attempt} (seed {seed}) ended in {status} after {steps} steps");
            last_grid = Some(grid);
        }

        self.progress.finish();
        if let Some(grid) = last_grid {
            // Keep the failed grid so the contradiction can be inspected
            self.write_outputs(&grid, None)?;
        }

        Err(WfcError::Unsolved {
            attempts: self.cli.attempts,
        })
    }

    fn attempt(
        &self,
        ruleset: &AdjacencyTable,
        attempt: usize,
        seed: u64,
        mut capture: Option<&mut FrameCapture>,
    ) -> Result<(Status, usize, Grid)> {
        let (width, height) = self.cli.dimensions();
        let grid = Grid::new(width, height, ruleset.tile_count())?;
        let mut solver = Solver::with_seed(grid, ruleset, seed)?;

        self.progress.start_attempt(attempt);
        if let Some(frames) = capture.as_deref_mut() {
            frames.clear();
            frames.capture(solver.grid())?;
        }

        let mut last_frame_step = 0;
        while solver.step()? {
            self.progress.update(solver.grid().collapsed_count());

            let steps = solver.steps();
            if let Some(frames) = capture.as_deref_mut()
                && steps != last_frame_step
                && frames.observe(solver.grid(), steps)?
            {
                last_frame_step = steps;
            }
        }

        if let Some(frames) = capture.as_deref_mut()
            && solver.steps() != last_frame_step
        {
            frames.capture(solver.grid())?;
        }

        let status = solver.status();
        self.progress.end_attempt(status);
        Ok((status, solver.steps(), solver.into_grid()))
    }

    // Allow print for the text rendering and output summary
    #[allow(clippy::print_stdout, clippy::print_stderr)]
    fn write_outputs(&self, grid: &Grid, capture: Option<&FrameCapture>) -> Result<()> {
        let catalog = self.cli.catalog;

        export_grid_as_png(grid, &catalog.styles(), self.cli.cell_size, &self.cli.output)?;
        if !self.cli.quiet {
            eprintln!("Wrote {}", self.cli.output.display());
        }

        if let Some(frames) = capture {
            let gif_path = self.cli.visualization_path();
            frames.export_gif(&gif_path, GIF_FRAME_DELAY_MS)?;
            if !self.cli.quiet {
                eprintln!("Wrote {}", gif_path.display());
            }
        }

        if self.cli.ascii {
            print!("{}", render_ascii(grid, &catalog.glyphs()));
        }

        Ok(())
    }
}
