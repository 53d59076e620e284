use crate::domain::JobStatus;
use crate::ports::ProgressPort;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;

pub struct ProgressBarAdapter {
    bar: Arc<ProgressBar>,
    quiet: bool,
}

impl ProgressBarAdapter {
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {percent:>3}% {msg} (ETA: {eta})")
                .unwrap()
                .progress_chars("█▉▊▋▌▍▎▏ "),
        );
        Self {
            bar: Arc::new(bar),
            quiet: false,
        }
    }

    pub fn new_quiet() -> Self {
        let bar = ProgressBar::hidden();
        Self {
            bar: Arc::new(bar),
            quiet: true,
        }
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        if quiet {
            self.bar = Arc::new(ProgressBar::hidden());
        }
        self
    }
}

impl ProgressPort for ProgressBarAdapter {
    fn start(&self, total_blocks: u64) {
        if self.quiet {
            return;
        }

        self.bar.set_length(total_blocks);
        self.bar.set_message("Hashing blocks...");
        self.bar.enable_steady_tick(std::time::Duration::from_millis(100));
    }

    fn update(&self, digests: u64) {
        if self.quiet {
            return;
        }

        self.bar.set_position(digests);
    }

    fn report(&self, text: &str) {
        if self.quiet {
            return;
        }

        // Printed above the bar so the digest log and the bar never fight
        // for the same line.
        self.bar.println(text);
    }

    fn finish(&self, status: &JobStatus) {
        if self.quiet {
            return;
        }

        self.bar.disable_steady_tick();
        match status {
            JobStatus::Completed => self.bar.finish_with_message("✓ Hashing complete!"),
            JobStatus::Cancelled => self.bar.abandon_with_message("✗ Hashing cancelled"),
            JobStatus::Failed(_) => self.bar.abandon_with_message("✗ Hashing failed"),
        }
    }
}
