//! Progress display for solve attempts

use crate::algorithm::solver::Status;
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template =
        format!("{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}");
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar counting collapsed cells across attempts
///
/// The bar restarts from the current collapsed count on every attempt and
/// its prefix shows which attempt is running.
pub struct SolveProgress {
    bar: ProgressBar,
    attempts: usize,
}

impl SolveProgress {
    /// Visible bar for a grid of `cell_count` cells
    pub fn new(cell_count: usize, attempts: usize) -> Self {
        let bar = ProgressBar::new(cell_count as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        Self { bar, attempts }
    }

    /// Bar that draws nothing, for quiet runs
    pub fn hidden(cell_count: usize, attempts: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(cell_count as u64);
        Self { bar, attempts }
    }

    /// Reset the bar for attempt number `attempt` (1-based)
    pub fn start_attempt(&self, attempt: usize) {
        self.bar.set_prefix(format!("attempt {attempt}/{}", self.attempts));
        self.bar.set_message(String::new());
        self.bar.set_position(0);
    }

    /// Report how many cells are collapsed
    pub fn update(&self, collapsed: usize) {
        self.bar.set_position(collapsed as u64);
    }

    /// Record how an attempt ended
    pub fn end_attempt(&self, status: Status) {
        self.bar.set_message(status.to_string());
    }

    /// Current position of the bar
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clean up the display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
