use crate::domain::CancelToken;
use crate::ports::ProgressPort;

/// Digests accumulate here until the buffer grows past this many characters,
/// then the whole batch goes to the progress sink in one call.
pub const REPORT_FLUSH_THRESHOLD: usize = 5000;

/// Batches digest lines so the progress sink sees a few large updates
/// instead of one per block. A flush that races a cancellation request is
/// skipped outright; the terminal report owns the screen at that point.
#[derive(Default)]
pub struct BatchReporter {
    buffer: String,
}

impl BatchReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, digest: &str) {
        self.buffer.push_str(digest);
        self.buffer.push('\n');
    }

    /// True once the buffer has grown strictly past the threshold.
    pub fn should_flush(&self) -> bool {
        self.buffer.len() > REPORT_FLUSH_THRESHOLD
    }

    /// Hands the batch to the sink and empties the buffer. Does nothing when
    /// the buffer is empty or cancellation has been requested.
    pub fn flush<P: ProgressPort + ?Sized>(&mut self, progress: &P, cancel: &CancelToken) {
        if self.buffer.is_empty() || cancel.is_cancelled() {
            return;
        }
        progress.report(self.buffer.trim_end_matches(['\r', '\n']));
        self.buffer.clear();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}
