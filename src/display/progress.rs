use crate::progress::{ProgressEvent, ProgressSink};
use indicatif::{ProgressBar, ProgressStyle};

const STEPS: u64 = 1000;

/// Renders pipeline progress as a terminal progress bar.
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub fn new() -> Self {
        let bar = ProgressBar::new(STEPS);
        if let Ok(style) = ProgressStyle::with_template("{bar:40.cyan/blue} {percent:>3}% {msg}") {
            bar.set_style(style);
        }
        BarProgress { bar }
    }

    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }

    /// Stops the bar where it is, leaving it on screen.
    pub fn abandon(&self, message: &str) {
        self.bar.abandon_with_message(message.to_string());
    }
}

impl Default for BarProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for BarProgress {
    fn report(&mut self, event: ProgressEvent) {
        match event {
            ProgressEvent::Status(text) => self.bar.set_message(text),
            ProgressEvent::Progress(fraction) => {
                self.bar.set_position((fraction * STEPS as f64).round() as u64)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abandon_stops_the_bar_at_its_position() {
        let mut progress = BarProgress {
            bar: ProgressBar::hidden(),
        };
        progress.bar.set_length(STEPS);

        progress.set_progress(0.5);
        progress.abandon("failed");

        assert!(progress.bar.is_finished());
        assert_eq!(progress.bar.position(), 500);
    }
}
