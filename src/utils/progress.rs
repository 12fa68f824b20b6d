use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Receives batch-level progress from the measurement writer.
pub trait ProgressObserver {
    /// Called whenever the integer percentage of completed batches changes.
    fn on_progress(&mut self, percent: u64);

    fn on_finish(&mut self) {}
}

/// Observer that ignores all progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&mut self, _percent: u64) {}
}

pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Percentage bar in the `[=====     ] 42%` shape.
    pub fn new_percent(message: &str, silent: bool) -> Self {
        if silent {
            return Self { progress_bar: None };
        }

        // Same stream as the other status lines
        let pb = ProgressBar::with_draw_target(Some(100), ProgressDrawTarget::stdout());
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg}\n[{bar:50}] {pos}%")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );
        pb.set_message(message.to_string());

        Self {
            progress_bar: Some(pb),
        }
    }

    pub fn update(&self, current: u64) {
        if let Some(ref pb) = self.progress_bar {
            pb.set_position(current);
        }
    }

    pub fn finish(&self) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish();
        }
    }
}

impl ProgressObserver for ProgressReporter {
    fn on_progress(&mut self, percent: u64) {
        self.update(percent);
    }

    fn on_finish(&mut self) {
        self.finish();
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish();
        }
    }
}
