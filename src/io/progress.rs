//! Per-panel progress bars for map rendering

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Coordinates progress display while rendering a set of panels
///
/// One bar per panel, advanced once per rendered image row.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    panel_bars: Vec<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "{{prefix:>20}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} rows"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            panel_bars: Vec::new(),
        }
    }

    /// Replace any existing bars with one bar per panel title
    pub fn initialize<'a>(&mut self, titles: impl IntoIterator<Item = &'a str>, rows: u32) {
        for bar in self.panel_bars.drain(..) {
            self.multi_progress.remove(&bar);
        }

        for title in titles {
            let pb = ProgressBar::new(u64::from(rows));
            pb.set_style(PROGRESS_STYLE.clone());
            pb.set_prefix(title.to_string());
            self.panel_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Number of panels being tracked
    pub fn panel_count(&self) -> usize {
        self.panel_bars.len()
    }

    /// Report the number of rows rendered so far for a panel
    pub fn update_row(&self, panel: usize, rows_done: u32) {
        if let Some(bar) = self.panel_bars.get(panel) {
            bar.set_position(u64::from(rows_done));
        }
    }

    /// Mark a panel as fully rendered
    pub fn complete_panel(&self, panel: usize) {
        if let Some(bar) = self.panel_bars.get(panel) {
            bar.finish();
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        let _ = self.multi_progress.clear();
    }
}
