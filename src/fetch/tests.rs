//! Tests for the fetch module.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::*;
use crate::cache::CacheStore;
use crate::error::{DatasetError, Result};

/// Transport double that serves a fixed payload and counts invocations.
struct MockTransport {
    payload: Vec<u8>,
    fail: bool,
    calls: Arc<AtomicUsize>,
}

impl MockTransport {
    fn serving(payload: &[u8], calls: Arc<AtomicUsize>) -> Self {
        Self { payload: payload.to_vec(), fail: false, calls }
    }

    fn failing(calls: Arc<AtomicUsize>) -> Self {
        Self { payload: Vec::new(), fail: true, calls }
    }
}

impl Transport for MockTransport {
    fn download(&self, uri: &str, dest: &Path, on_progress: ProgressSink<'_>) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DatasetError::network(uri, format!("injected failure for {uri}")));
        }

        let total = self.payload.len() as u64;
        let half = self.payload.len() / 2;
        std::fs::write(dest, &self.payload[..half]).map_err(|e| DatasetError::storage(dest, e))?;
        on_progress(half as u64, Some(total));
        std::fs::write(dest, &self.payload).map_err(|e| DatasetError::storage(dest, e))?;
        on_progress(total, Some(total));
        Ok(())
    }
}

fn fetcher_with(tmp: &tempfile::TempDir, transport: MockTransport) -> Fetcher {
    let store = CacheStore::new(tmp.path()).unwrap();
    Fetcher::with_transport(store, Box::new(transport))
}

// =========================================================================
// Fetcher Tests
// =========================================================================

#[test]
fn test_fetch_downloads_into_cache() {
    let tmp = tempfile::tempdir().unwrap();
    let calls = Arc::new(AtomicUsize::new(0));
    let mut fetcher = fetcher_with(&tmp, MockTransport::serving(b"payload", Arc::clone(&calls)));

    let path = fetcher.fetch("https://example.com/a", "demo", "a.bin").unwrap();

    assert_eq!(path, tmp.path().join("demo").join("a.bin"));
    assert_eq!(std::fs::read(&path).unwrap(), b"payload");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_second_fetch_is_a_cache_hit() {
    let tmp = tempfile::tempdir().unwrap();
    let calls = Arc::new(AtomicUsize::new(0));
    let mut fetcher = fetcher_with(&tmp, MockTransport::serving(b"payload", Arc::clone(&calls)));

    let first = fetcher.fetch("https://example.com/a", "demo", "a.bin").unwrap();
    let second = fetcher.fetch("https://example.com/a", "demo", "a.bin").unwrap();

    assert_eq!(first, second);
    assert_eq!(calls.load(Ordering::SeqCst), 1, "cache hit must not touch the network");
}

#[test]
fn test_preexisting_file_short_circuits() {
    let tmp = tempfile::tempdir().unwrap();
    let calls = Arc::new(AtomicUsize::new(0));
    let mut fetcher = fetcher_with(&tmp, MockTransport::serving(b"new", Arc::clone(&calls)));

    let dir = fetcher.store().ensure("demo").unwrap();
    std::fs::write(dir.join("a.bin"), b"already here").unwrap();

    let path = fetcher.fetch("https://example.com/a", "demo", "a.bin").unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"already here");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_failed_fetch_leaves_no_artifact() {
    let tmp = tempfile::tempdir().unwrap();
    let calls = Arc::new(AtomicUsize::new(0));
    let mut fetcher = fetcher_with(&tmp, MockTransport::failing(Arc::clone(&calls)));

    let result = fetcher.fetch("https://example.com/a", "demo", "a.bin");
    assert!(matches!(result, Err(DatasetError::Network { .. })));

    let path = fetcher.store().resolve("demo", "a.bin");
    assert!(!fetcher.store().exists(&path));
    assert!(!path.with_file_name("a.bin.part").exists());
}

#[test]
fn test_fetch_after_failure_retries_download() {
    let tmp = tempfile::tempdir().unwrap();
    let store = CacheStore::new(tmp.path()).unwrap();
    let calls = Arc::new(AtomicUsize::new(0));

    let mut failing =
        Fetcher::with_transport(store.clone(), Box::new(MockTransport::failing(Arc::clone(&calls))));
    assert!(failing.fetch("https://example.com/a", "demo", "a.bin").is_err());

    // A fresh fetch over a working transport starts from a clean slate.
    let mut working = Fetcher::with_transport(
        store,
        Box::new(MockTransport::serving(b"ok", Arc::clone(&calls))),
    );
    let path = working.fetch("https://example.com/a", "demo", "a.bin").unwrap();
    assert_eq!(std::fs::read(path).unwrap(), b"ok");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_progress_callback_receives_samples() {
    let tmp = tempfile::tempdir().unwrap();
    let calls = Arc::new(AtomicUsize::new(0));
    let samples: Arc<Mutex<Vec<TransferProgress>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&samples);

    let mut fetcher = fetcher_with(&tmp, MockTransport::serving(b"12345678", Arc::clone(&calls)))
        .on_progress(move |p| sink.lock().unwrap().push(p));

    fetcher.fetch("https://example.com/a", "demo", "a.bin").unwrap();

    let samples = samples.lock().unwrap();
    assert_eq!(samples.len(), 2);
    assert_eq!(samples[0].bytes_written, 4);
    assert_eq!(samples[0].bytes_expected, Some(8));
    assert_eq!(samples[0].fraction, Some(0.5));
    assert_eq!(samples[1].fraction, Some(1.0));
}

#[test]
fn test_fetch_distinct_keys_download_separately() {
    let tmp = tempfile::tempdir().unwrap();
    let calls = Arc::new(AtomicUsize::new(0));
    let mut fetcher = fetcher_with(&tmp, MockTransport::serving(b"x", Arc::clone(&calls)));

    fetcher.fetch("https://example.com/a", "demo", "a.bin").unwrap();
    fetcher.fetch("https://example.com/b", "demo", "b.bin").unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

// =========================================================================
// Progress Tests
// =========================================================================

#[test]
fn test_sample_without_expected_size_has_no_fraction() {
    let clock = TransferClock::start();
    let progress = clock.sample(1024, None);
    assert_eq!(progress.fraction, None);
    assert_eq!(progress.eta, None);
}

#[test]
fn test_sample_at_zero_fraction_has_no_eta() {
    let clock = TransferClock::start();
    let progress = clock.sample(0, Some(100));
    assert_eq!(progress.fraction, Some(0.0));
    assert_eq!(progress.eta, None, "ETA is undefined at fraction 0");
}

#[test]
fn test_sample_fraction_is_clamped() {
    let clock = TransferClock::start();
    // More bytes than announced (e.g. a lying server) must not exceed 1.
    let progress = clock.sample(150, Some(100));
    assert_eq!(progress.fraction, Some(1.0));
}

#[test]
fn test_sample_midway_has_finite_eta() {
    let clock = TransferClock::start();
    std::thread::sleep(Duration::from_millis(10));
    let progress = clock.sample(50, Some(100));
    let eta = progress.eta.expect("ETA available at fraction 0.5");
    // elapsed * (1 - 0.5) / 0.5 == elapsed
    assert!(eta >= Duration::from_millis(5));
    assert!(eta < Duration::from_secs(1));
}

#[test]
fn test_format_duration_ranges() {
    assert_eq!(format_duration(45.0), "45s");
    assert_eq!(format_duration(125.0), "2m 05s");
    assert_eq!(format_duration(3700.0), "1h 01m");
}

#[test]
fn test_progress_bar_render_known_total() {
    let bar = ProgressBar::new().with_width(10);
    let progress = TransferProgress {
        bytes_written: 50,
        bytes_expected: Some(100),
        fraction: Some(0.5),
        eta: Some(Duration::from_secs(12)),
    };
    let line = bar.render(&progress);
    assert_eq!(line, "[-----     ] 50% ETA: 12s");
}

#[test]
fn test_progress_bar_render_missing_eta() {
    let bar = ProgressBar::new().with_width(4);
    let progress = TransferProgress {
        bytes_written: 0,
        bytes_expected: Some(100),
        fraction: Some(0.0),
        eta: None,
    };
    assert_eq!(bar.render(&progress), "[    ] 0% ETA: --");
}

#[test]
fn test_progress_bar_render_unknown_total() {
    let bar = ProgressBar::new().with_width(4);
    let progress = TransferProgress {
        bytes_written: 1234,
        bytes_expected: None,
        fraction: None,
        eta: None,
    };
    assert_eq!(bar.render(&progress), "[    ] 1234 bytes");
}
