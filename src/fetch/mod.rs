//! Cache-backed acquisition of remote resources.
//!
//! [`Fetcher`] turns a remote URI plus a cache key into a local path,
//! performing network I/O at most once per key. The transfer itself runs
//! behind the [`Transport`] seam; progress reaches the caller through
//! [`TransferProgress`] snapshots and, optionally, the console
//! [`ProgressBar`].

mod fetcher;
mod progress;
mod transport;

#[cfg(test)]
mod tests;

pub use fetcher::Fetcher;
pub use progress::{format_duration, ProgressBar, TransferClock, TransferProgress};
pub use transport::{HttpTransport, ProgressSink, Transport};
