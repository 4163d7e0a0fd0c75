//! Spinner shown while suggestions are fetched.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// A spinner on stderr, or nothing in quiet mode.
pub struct FetchSpinner {
    bar: Option<ProgressBar>,
}

impl FetchSpinner {
    /// Start spinning with `message` unless `quiet`.
    #[must_use]
    pub fn start(message: &str, quiet: bool) -> Self {
        if quiet {
            return Self { bar: None };
        }
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar: Some(bar) }
    }

    /// A spinner that draws nothing.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            bar: Some(ProgressBar::hidden()),
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.bar.is_some()
    }

    /// Stop and clear the spinner.
    pub fn finish(self, count: usize) {
        if let Some(bar) = self.bar {
            tracing::debug!(count, "fetch spinner finished");
            bar.finish_and_clear();
        }
    }
}
