//! Batch iterator over an indexed collection.

use std::iter::FusedIterator;

use crate::error::{DatasetError, Result};

use super::batch::Batch;
use super::collection::IndexedCollection;

/// Lazy, finite, non-restartable sequence of batches.
///
/// The iterator owns only its cursor; the collection is borrowed read-only.
/// To iterate again, construct a fresh iterator from the same collection —
/// that is cheap by design.
pub struct BatchIter<'a, X, Y> {
    records: &'a [(X, Y)],
    cursor: usize,
    batch_size: usize,
}

impl<'a, X, Y> BatchIter<'a, X, Y> {
    /// Create an iterator producing batches of `batch_size` records.
    ///
    /// # Errors
    ///
    /// Returns a usage error when `batch_size` is zero.
    pub fn new(collection: &'a IndexedCollection<X, Y>, batch_size: usize) -> Result<Self> {
        if batch_size == 0 {
            return Err(DatasetError::ZeroBatchSize);
        }
        Ok(Self { records: collection.records(), cursor: 0, batch_size })
    }

    /// The configured batch size.
    #[must_use]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Total number of batches the full sequence yields.
    #[must_use]
    pub fn num_batches(&self) -> usize {
        self.records.len().div_ceil(self.batch_size)
    }
}

impl<X: Clone, Y: Clone> Iterator for BatchIter<'_, X, Y> {
    type Item = Batch<X, Y>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.records.len() {
            return None;
        }

        let k = self.batch_size.min(self.records.len() - self.cursor);
        let (features, labels) =
            self.records[self.cursor..self.cursor + k].iter().cloned().unzip();
        self.cursor += k;

        Some(Batch { features, labels })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.records.len().saturating_sub(self.cursor).div_ceil(self.batch_size);
        (remaining, Some(remaining))
    }
}

impl<X: Clone, Y: Clone> ExactSizeIterator for BatchIter<'_, X, Y> {}

impl<X: Clone, Y: Clone> FusedIterator for BatchIter<'_, X, Y> {}
