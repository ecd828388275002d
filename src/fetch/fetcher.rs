//! Cache-backed fetcher: remote URI in, local path out.

use std::fs;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use crate::cache::CacheStore;
use crate::error::{DatasetError, Result};

use super::progress::{TransferClock, TransferProgress};
use super::transport::{HttpTransport, Transport};

/// Downloads remote resources into a [`CacheStore`], at most once per key.
///
/// The call contract is synchronous: the transfer runs on a worker thread
/// and `fetch` blocks on a one-shot completion signal until it finishes or
/// fails. A `Fetcher` has at most one transfer in flight; `fetch` takes
/// `&mut self`, so starting a second transfer on the same value while one
/// is running is a compile error rather than undefined behavior.
pub struct Fetcher {
    store: CacheStore,
    transport: Box<dyn Transport>,
    progress: Option<Box<dyn FnMut(TransferProgress) + Send>>,
}

impl Fetcher {
    /// Create a fetcher over HTTP(S) with the given cache store.
    ///
    /// # Errors
    ///
    /// Returns a network error when the HTTP client cannot be initialized.
    pub fn new(store: CacheStore) -> Result<Self> {
        Ok(Self::with_transport(store, Box::new(HttpTransport::new()?)))
    }

    /// Create a fetcher with an explicit transport.
    #[must_use]
    pub fn with_transport(store: CacheStore, transport: Box<dyn Transport>) -> Self {
        Self { store, transport, progress: None }
    }

    /// Replace the cache location, validating the new base directory.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the directory cannot be created.
    pub fn cache_dir(mut self, dir: impl Into<PathBuf>) -> Result<Self> {
        self.store = CacheStore::new(dir)?;
        Ok(self)
    }

    /// Install a progress callback, invoked from the transfer thread.
    #[must_use]
    pub fn on_progress(mut self, callback: impl FnMut(TransferProgress) + Send + 'static) -> Self {
        self.progress = Some(Box::new(callback));
        self
    }

    /// The cache store backing this fetcher.
    #[must_use]
    pub fn store(&self) -> &CacheStore {
        &self.store
    }

    /// Return the local path for `(cache_name, file_name)`, downloading
    /// `uri` first unless the file is already cached.
    ///
    /// A cache hit performs no network activity. On a miss, the payload is
    /// written to a `.part` file and only renamed to its final path after a
    /// complete transfer, so a later `exists` check never sees a partial
    /// artifact.
    ///
    /// # Errors
    ///
    /// Returns a network error when the transfer fails (no retry is
    /// attempted), or a storage error when the cache directory or the final
    /// file cannot be created.
    pub fn fetch(&mut self, uri: &str, cache_name: &str, file_name: &str) -> Result<PathBuf> {
        let path = self.store.resolve(cache_name, file_name);
        if self.store.exists(&path) {
            return Ok(path);
        }

        let dir = self.store.ensure(cache_name)?;
        let part = dir.join(format!("{file_name}.part"));

        let transport = self.transport.as_ref();
        let progress = &mut self.progress;
        let outcome = {
            let part = &part;
            let (tx, rx) = mpsc::sync_channel::<Result<()>>(1);
            thread::scope(|s| {
                s.spawn(move || {
                    let clock = TransferClock::start();
                    let result = transport.download(uri, part, &mut |written, expected| {
                        if let Some(callback) = progress.as_mut() {
                            callback(clock.sample(written, expected));
                        }
                    });
                    let _ = tx.send(result);
                });

                // The single suspension point: wait for the one-shot
                // completion signal from the transfer thread.
                rx.recv().unwrap_or_else(|_| {
                    Err(DatasetError::network(
                        uri,
                        format!("transfer of {uri} ended without signalling completion"),
                    ))
                })
            })
        };

        match outcome {
            Ok(()) => {
                if let Err(e) = fs::rename(&part, &path) {
                    let _ = fs::remove_file(&part);
                    return Err(DatasetError::storage(&path, e));
                }
                Ok(path)
            }
            Err(e) => {
                let _ = fs::remove_file(&part);
                Err(e)
            }
        }
    }
}
