//! Batch struct produced by iteration.

/// One grouped slice of features and labels.
///
/// Both sequences have the same length: the configured batch size for every
/// batch except possibly the last, which holds the remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch<X, Y> {
    /// Feature records for this batch.
    pub features: Vec<X>,
    /// Labels paired with `features` by position.
    pub labels: Vec<Y>,
}

impl<X, Y> Batch<X, Y> {
    /// Number of records in this batch.
    #[must_use]
    pub fn batch_size(&self) -> usize {
        self.features.len()
    }
}
