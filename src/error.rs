//! Error types for dataset acquisition and batching.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::dataset::Split;

/// Result type for acquisition and batching operations.
pub type Result<T> = std::result::Result<T, DatasetError>;

/// Errors that can occur while acquiring, caching, or batching a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Transfer failed or was interrupted. The message carries the full
    /// context; `uri` is kept separately for callers that match on it.
    #[error("{message}")]
    Network {
        /// Remote URI of the failed transfer, empty when no transfer started.
        uri: String,
        /// Human-readable cause.
        message: String,
    },

    /// Cannot create a cache directory or place a completed file at its
    /// cache path.
    #[error("storage error at {path}: {source}")]
    Storage {
        /// Path the operation was targeting.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The split concept does not exist for this dataset. Distinct from a
    /// defined split that decodes to zero records.
    #[error("dataset {dataset} does not define a {split} split")]
    UnsupportedSplit {
        /// Dataset name.
        dataset: String,
        /// The split that was requested.
        split: Split,
    },

    /// Batch size must be positive.
    #[error("batch size must be positive, got 0")]
    ZeroBatchSize,

    /// The decoder collaborator rejected the downloaded bytes.
    #[error("failed to decode {name}: {message}")]
    Decode {
        /// Dataset or file name being decoded.
        name: String,
        /// Decoder-reported cause.
        message: String,
    },

    /// Feature and label sequences of a paired collection differ in length.
    #[error("feature/label count mismatch: {features} features vs {labels} labels")]
    LengthMismatch {
        /// Number of feature records.
        features: usize,
        /// Number of labels.
        labels: usize,
    },
}

impl DatasetError {
    /// Build a network error for a failed transfer of `uri`.
    #[must_use]
    pub fn network(uri: &str, message: impl Into<String>) -> Self {
        Self::Network { uri: uri.to_string(), message: message.into() }
    }

    /// Build a storage error for an I/O failure at `path`.
    #[must_use]
    pub fn storage(path: &Path, source: io::Error) -> Self {
        Self::Storage { path: path.to_path_buf(), source }
    }

    /// Whether this error is a contract misuse by the caller rather than an
    /// environmental failure.
    #[must_use]
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::ZeroBatchSize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_batch_size_is_usage() {
        assert!(DatasetError::ZeroBatchSize.is_usage());
    }

    #[test]
    fn test_network_is_not_usage() {
        let err = DatasetError::network("https://example.com/a", "connection reset");
        assert!(!err.is_usage());
    }

    #[test]
    fn test_unsupported_split_display() {
        let err = DatasetError::UnsupportedSplit {
            dataset: "iris".into(),
            split: Split::Validation,
        };
        let msg = err.to_string();
        assert!(msg.contains("iris"));
        assert!(msg.contains("validation"));
    }

    #[test]
    fn test_storage_display_includes_path() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = DatasetError::storage(Path::new("/tmp/cache/mnist"), io_err);
        assert!(err.to_string().contains("/tmp/cache/mnist"));
    }

    #[test]
    fn test_all_error_variants_display() {
        let errors: Vec<DatasetError> = vec![
            DatasetError::network("https://example.com", "timed out"),
            DatasetError::storage(Path::new("p"), io::Error::other("disk full")),
            DatasetError::UnsupportedSplit { dataset: "d".into(), split: Split::Test },
            DatasetError::ZeroBatchSize,
            DatasetError::Decode { name: "n".into(), message: "bad magic".into() },
            DatasetError::LengthMismatch { features: 3, labels: 2 },
        ];

        for err in errors {
            assert!(!err.to_string().is_empty(), "empty display for {err:?}");
        }
    }
}
