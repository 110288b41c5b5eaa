//! Spinner shown while a pattern is generated on a worker thread

use crate::io::configuration::SPINNER_TICK_MS;
use crate::io::error::Result;
use crate::pattern::{Pattern, PendingGeneration};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg} [{elapsed_precise}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
});

/// Terminal feedback for one generation
pub struct GenerationProgress {
    bar: ProgressBar,
}

impl GenerationProgress {
    /// Visible spinner with an initial message
    pub fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.set_message(message.to_string());
        Self { bar }
    }

    /// Spinner that draws nothing, for quiet runs
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Replace the spinner message
    pub fn set_stage(&self, message: &str) {
        self.bar.set_message(message.to_string());
    }

    /// Whether the spinner has been finished or abandoned
    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }

    /// Animate the spinner until a background generation completes
    ///
    /// # Errors
    ///
    /// Propagates the generation error
    pub fn track(&self, pending: PendingGeneration) -> Result<Pattern> {
        self.bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        let result = pending.wait();
        match &result {
            Ok(pattern) => self.bar.finish_with_message(format!(
                "Generated {}x{} pattern",
                pattern.width(),
                pattern.height()
            )),
            Err(_) => self.bar.abandon_with_message("Generation failed"),
        }
        result
    }
}
