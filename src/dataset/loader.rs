//! Dataset loader: the undefined-split state, and the split datasets it
//! produces.

use std::path::PathBuf;

use crate::cache::CacheStore;
use crate::error::{DatasetError, Result};
use crate::fetch::{Fetcher, TransferProgress};

use super::collection::IndexedCollection;
use super::decode::{Decoder, RawFile};
use super::info::DatasetInfo;
use super::iter::BatchIter;
use super::source::{DatasetSource, RemoteFile};
use super::split::Split;

/// A dataset whose split has not been fixed yet.
///
/// The loader holds no records — only the source description, a fetcher and
/// a decoder. Deriving a split materializes the files that split requires
/// and returns a [`SplitDataset`]; since `SplitDataset` exposes no
/// derivation of its own, "re-deriving from an already-defined split" is
/// unrepresentable rather than a runtime error. The same loader can derive
/// further splits afterwards, sequentially.
pub struct DatasetLoader<D> {
    source: DatasetSource,
    decoder: D,
    fetcher: Fetcher,
}

impl<D: Decoder> DatasetLoader<D> {
    /// Create a loader fetching over HTTP(S) into the default cache.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the cache directory cannot be created,
    /// or a network error when the HTTP client cannot be initialized.
    pub fn new(source: DatasetSource, decoder: D) -> Result<Self> {
        let store = CacheStore::new(CacheStore::default_dir())?;
        Ok(Self { source, decoder, fetcher: Fetcher::new(store)? })
    }

    /// Create a loader over an explicit fetcher.
    #[must_use]
    pub fn with_fetcher(source: DatasetSource, decoder: D, fetcher: Fetcher) -> Self {
        Self { source, decoder, fetcher }
    }

    /// Relocate the cache, validating the new base directory.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the directory cannot be created.
    pub fn cache_dir(mut self, dir: impl Into<PathBuf>) -> Result<Self> {
        self.fetcher = self.fetcher.cache_dir(dir)?;
        Ok(self)
    }

    /// Install a download progress callback.
    #[must_use]
    pub fn on_progress(mut self, callback: impl FnMut(TransferProgress) + Send + 'static) -> Self {
        self.fetcher = self.fetcher.on_progress(callback);
        self
    }

    /// The source description this loader materializes from.
    #[must_use]
    pub fn source(&self) -> &DatasetSource {
        &self.source
    }

    /// Materialize the training split.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn train(&mut self) -> Result<SplitDataset<D::Feature, D::Label>> {
        self.load(Split::Train)
    }

    /// Materialize the validation split.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn validation(&mut self) -> Result<SplitDataset<D::Feature, D::Label>> {
        self.load(Split::Validation)
    }

    /// Materialize the test split.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn test(&mut self) -> Result<SplitDataset<D::Feature, D::Label>> {
        self.load(Split::Test)
    }

    /// Materialize every record the dataset defines.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn all(&mut self) -> Result<SplitDataset<D::Feature, D::Label>> {
        self.load(Split::All)
    }

    /// Fetch, read and decode the files `split` requires.
    ///
    /// Fetches are strictly sequential; any fetch or decode failure is fatal
    /// to the whole call, so a returned dataset is never partially
    /// populated.
    ///
    /// # Errors
    ///
    /// Unsupported-split when the dataset does not define `split`; network
    /// or storage errors from fetching; decode errors from the decoder.
    pub fn load(&mut self, split: Split) -> Result<SplitDataset<D::Feature, D::Label>> {
        let files: Vec<RemoteFile> =
            self.source.files(split)?.into_iter().cloned().collect();
        let cache_name = self.source.cache_name().to_string();

        let mut raw = Vec::with_capacity(files.len());
        for file in &files {
            let path = self.fetcher.fetch(&file.uri, &cache_name, &file.file_name)?;
            let bytes = std::fs::read(&path).map_err(|e| DatasetError::storage(&path, e))?;
            raw.push(RawFile::new(file.file_name.clone(), bytes));
        }

        let collection = self.decoder.decode(&raw)?;
        Ok(SplitDataset { split, info: self.source.info().clone(), collection })
    }
}

/// A materialized dataset tagged with a concrete split.
///
/// Owns its records exclusively. Batch iterators borrow them read-only, so
/// several can run over the same dataset independently.
#[derive(Debug, Clone)]
pub struct SplitDataset<X, Y> {
    split: Split,
    info: DatasetInfo,
    collection: IndexedCollection<X, Y>,
}

impl<X, Y> SplitDataset<X, Y> {
    /// The split this dataset was derived as.
    #[must_use]
    pub fn split(&self) -> Split {
        self.split
    }

    /// Descriptive metadata.
    #[must_use]
    pub fn info(&self) -> &DatasetInfo {
        &self.info
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.collection.len()
    }

    /// Whether the split holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    /// The record at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<(&X, &Y)> {
        self.collection.get(index)
    }

    /// The underlying collection.
    #[must_use]
    pub fn collection(&self) -> &IndexedCollection<X, Y> {
        &self.collection
    }

    /// Reorder records with a seeded permutation.
    pub fn shuffle(&mut self, seed: u64) {
        self.collection.shuffle(seed);
    }

    /// Iterate the records in batches of `batch_size`.
    ///
    /// The final batch holds the remainder when `batch_size` does not divide
    /// the record count.
    ///
    /// # Errors
    ///
    /// Returns a usage error when `batch_size` is zero.
    pub fn batched(&self, batch_size: usize) -> Result<BatchIter<'_, X, Y>> {
        BatchIter::new(&self.collection, batch_size)
    }
}
