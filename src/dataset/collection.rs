//! In-memory paired feature/label collection.

use crate::error::{DatasetError, Result};

/// An ordered, fixed-length sequence of `(feature, label)` records.
///
/// Once constructed the collection is immutable in length and pairing;
/// [`shuffle`](Self::shuffle) permutes record order but never separates a
/// feature from its label. Batch iterators borrow the collection read-only,
/// so any number of them can walk it independently.
#[derive(Debug, Clone)]
pub struct IndexedCollection<X, Y> {
    records: Vec<(X, Y)>,
}

impl<X, Y> IndexedCollection<X, Y> {
    /// Build a collection from already-paired records.
    #[must_use]
    pub fn from_pairs(records: Vec<(X, Y)>) -> Self {
        Self { records }
    }

    /// Build a collection by pairing features with labels positionally.
    ///
    /// # Errors
    ///
    /// Returns a length-mismatch error when the sequences differ in length.
    pub fn new(features: Vec<X>, labels: Vec<Y>) -> Result<Self> {
        if features.len() != labels.len() {
            return Err(DatasetError::LengthMismatch {
                features: features.len(),
                labels: labels.len(),
            });
        }
        Ok(Self { records: features.into_iter().zip(labels).collect() })
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<(&X, &Y)> {
        self.records.get(index).map(|(x, y)| (x, y))
    }

    /// All records, in order.
    #[must_use]
    pub fn records(&self) -> &[(X, Y)] {
        &self.records
    }

    /// Reorder records with a seeded permutation. Deterministic per seed.
    pub fn shuffle(&mut self, seed: u64) {
        use rand::prelude::*;
        let mut rng = StdRng::seed_from_u64(seed);
        self.records.shuffle(&mut rng);
    }
}
