//! Construction progress reporting; a no-op when the `progress` feature is disabled

#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};

/// Inputs shorter than this build too fast to be worth a bar
const MIN_REPORTED_LEN: usize = 1 << 20;

/// Symbols consumed between bar updates
pub const REPORT_INTERVAL: usize = 1 << 16;

/// Progress bar over the symbols of one construction pass
pub struct BuildProgress {
    #[cfg(feature = "progress")]
    bar: Option<ProgressBar>,
}

impl BuildProgress {
    /// Show a bar for `total` symbols if `enabled` and the input is large
    #[cfg(feature = "progress")]
    pub fn new(total: usize, enabled: bool) -> Self {
        let bar = (enabled && total >= MIN_REPORTED_LEN).then(|| {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} symbols ({eta})")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("=> "),
            );
            bar
        });
        Self { bar }
    }

    #[cfg(not(feature = "progress"))]
    pub fn new(total: usize, enabled: bool) -> Self {
        let _ = (total, enabled, MIN_REPORTED_LEN);
        Self {}
    }

    /// Report the number of symbols consumed
    pub fn set_position(&self, position: usize) {
        #[cfg(feature = "progress")]
        if let Some(bar) = &self.bar {
            bar.set_position(position as u64);
        }
        #[cfg(not(feature = "progress"))]
        let _ = position;
    }

    pub fn finish(&self) {
        #[cfg(feature = "progress")]
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }

    /// Whether a bar is actually drawn
    pub fn is_visible(&self) -> bool {
        #[cfg(feature = "progress")]
        return self.bar.is_some();
        #[cfg(not(feature = "progress"))]
        return false;
    }
}
