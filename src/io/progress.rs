//! Batch progress display: one bar per recent file, plus a total bar for large batches

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Progress of one file through its render and export steps
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct FileStatus {
    name: String,
    step: String,
    done: u64,
    total: u64,
}

/// Coordinates progress bars for a batch of renders
///
/// Shows the most recent files in a rolling window of bars. Batches larger
/// than the window also get an overall files bar.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    statuses: Vec<FileStatus>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static FILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:<24} [{bar:20.cyan/blue}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Images: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create an empty progress display
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            statuses: Vec::new(),
        }
    }

    /// Allocate bars for `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(FILE_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Number of bars currently allocated, batch bar included
    pub fn bar_count(&self) -> usize {
        self.file_bars.len() + usize::from(self.batch_bar.is_some())
    }

    /// Register file `index` with `steps` units of work
    pub fn start_file(&mut self, index: usize, path: &Path, steps: u64) {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.statuses.len() {
            self.statuses.resize(index + 1, FileStatus::default());
        }
        if let Some(status) = self.statuses.get_mut(index) {
            *status = FileStatus {
                name,
                step: "loading".to_string(),
                done: 0,
                total: steps,
            };
        }
        self.refresh();
    }

    /// Mark one more step of file `index` finished; `next` names the upcoming step
    pub fn advance(&mut self, index: usize, next: &str) {
        if let Some(status) = self.statuses.get_mut(index) {
            status.done = (status.done + 1).min(status.total);
            next.clone_into(&mut status.step);
        }
        self.refresh();
    }

    /// Mark file `index` finished
    pub fn complete_file(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(status) = self.statuses.get_mut(index) {
            status.done = status.total;
            status.step = "done".to_string();
            status.name = format!("✓ {}", status.name);
        }
        self.refresh();
    }

    /// Remove every bar from the terminal
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All images processed");
        }
        let _ = self.multi_progress.clear();
    }

    // Shows the last files that have started, oldest first
    fn refresh(&self) {
        let started: Vec<&FileStatus> = self
            .statuses
            .iter()
            .filter(|status| !status.name.is_empty())
            .collect();
        let first_visible = started.len().saturating_sub(self.file_bars.len());
        let visible = started.get(first_visible..).unwrap_or(&[]);

        for (bar, status) in self.file_bars.iter().zip(visible) {
            bar.set_length(status.total);
            bar.set_position(status.done);
            bar.set_prefix(status.name.clone());
            bar.set_message(status.step.clone());
        }

        for bar in self.file_bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_prefix(String::new());
            bar.set_message(String::new());
        }
    }
}
