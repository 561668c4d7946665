/// Progress reported by the collection pipeline while it runs.
/// Frontends implement [`ProgressSink`] to surface it to users.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    /// Free-form status line for human eyes.
    Status(String),
    /// Completed fraction of the current phase, in `0.0..=1.0`.
    Progress(f64),
}

pub trait ProgressSink {
    fn report(&mut self, event: ProgressEvent);

    fn set_status(&mut self, text: &str) {
        self.report(ProgressEvent::Status(text.to_string()));
    }

    fn set_progress(&mut self, fraction: f64) {
        self.report(ProgressEvent::Progress(fraction.clamp(0.0, 1.0)));
    }
}

/// A no-op progress sink.
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn report(&mut self, _event: ProgressEvent) {}
}

impl ProgressSink for Vec<ProgressEvent> {
    fn report(&mut self, event: ProgressEvent) {
        self.push(event);
    }
}
