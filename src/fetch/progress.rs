//! Transfer progress reporting.

use std::io::{self, Write};
use std::time::{Duration, Instant};

/// A snapshot of an in-flight transfer.
///
/// The ETA is advisory: it is `None` until the completion fraction is
/// positive, and callers must treat a missing estimate as "not yet
/// available", never as a failure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferProgress {
    /// Bytes written to local storage so far.
    pub bytes_written: u64,
    /// Total bytes announced by the remote end, when known.
    pub bytes_expected: Option<u64>,
    /// Completion fraction in `[0, 1]`, when the total is known.
    pub fraction: Option<f64>,
    /// Estimated time remaining, `elapsed * (1 - fraction) / fraction`.
    pub eta: Option<Duration>,
}

/// Wall-clock reference for one transfer, started when the transfer starts.
#[derive(Debug, Clone, Copy)]
pub struct TransferClock {
    started: Instant,
}

impl TransferClock {
    /// Start the clock.
    #[must_use]
    pub fn start() -> Self {
        Self { started: Instant::now() }
    }

    /// Turn a raw `(written, expected)` report into a progress snapshot.
    #[must_use]
    pub fn sample(&self, bytes_written: u64, bytes_expected: Option<u64>) -> TransferProgress {
        let fraction = bytes_expected
            .filter(|&total| total > 0)
            .map(|total| (bytes_written as f64 / total as f64).min(1.0));

        let eta = fraction.and_then(|f| {
            if f <= 0.0 {
                return None;
            }
            let elapsed = self.started.elapsed().as_secs_f64();
            let remaining = elapsed * (1.0 - f) / f;
            remaining.is_finite().then(|| Duration::from_secs_f64(remaining.max(0.0)))
        });

        TransferProgress { bytes_written, bytes_expected, fraction, eta }
    }
}

/// Format a duration in seconds as a human-readable string.
#[must_use]
pub fn format_duration(secs: f64) -> String {
    if secs < 60.0 {
        format!("{secs:.0}s")
    } else if secs < 3600.0 {
        let mins = (secs / 60.0).floor();
        let s = (secs % 60.0).floor();
        format!("{mins}m {s:02.0}s")
    } else {
        let hours = (secs / 3600.0).floor();
        let mins = ((secs % 3600.0) / 60.0).floor();
        format!("{hours}h {mins:02.0}m")
    }
}

/// Console progress bar for transfers. Purely cosmetic.
#[derive(Debug, Clone)]
pub struct ProgressBar {
    width: usize,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self { width: 40 }
    }
}

impl ProgressBar {
    /// Create a bar with the default width.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bar width in characters.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    /// Render one progress snapshot as a single line.
    #[must_use]
    pub fn render(&self, progress: &TransferProgress) -> String {
        match progress.fraction {
            Some(fraction) => {
                let filled = (fraction * self.width as f64).round() as usize;
                let filled = filled.min(self.width);
                let bar: String = "-".repeat(filled) + &" ".repeat(self.width - filled);
                let percent = (fraction * 100.0).round() as u32;
                let eta = match progress.eta {
                    Some(eta) => format_duration(eta.as_secs_f64()),
                    None => "--".to_string(),
                };
                format!("[{bar}] {percent}% ETA: {eta}")
            }
            None => {
                let bar = " ".repeat(self.width);
                format!("[{bar}] {} bytes", progress.bytes_written)
            }
        }
    }

    /// Draw the snapshot in place, overwriting the previous line.
    pub fn draw(&self, progress: &TransferProgress) {
        // Trailing spaces clear leftovers of a longer previous line.
        print!("\r{}          ", self.render(progress));
        let _ = io::stdout().flush();
    }

    /// Terminate the in-place line.
    pub fn finish(&self) {
        println!();
    }
}
