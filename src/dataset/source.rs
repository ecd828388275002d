//! Declarative dataset source: which remote files each split needs.

use crate::error::{DatasetError, Result};

use super::info::DatasetInfo;
use super::split::Split;

/// One remote file of a dataset: where it lives and what it is cached as.
#[derive(Debug, Clone)]
pub struct RemoteFile {
    /// Remote URI to fetch.
    pub uri: String,
    /// File name under the dataset's cache directory.
    pub file_name: String,
}

impl RemoteFile {
    /// Describe a remote file.
    pub fn new(uri: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self { uri: uri.into(), file_name: file_name.into() }
    }
}

/// Catalog entry for a dataset: metadata plus per-split file lists.
///
/// A split with no files is a split the dataset does not define — requesting
/// it is an [`UnsupportedSplit`](DatasetError::UnsupportedSplit) error,
/// distinct from a defined split that decodes to zero records.
#[derive(Debug, Clone)]
pub struct DatasetSource {
    name: String,
    cache_name: String,
    info: DatasetInfo,
    train: Vec<RemoteFile>,
    validation: Vec<RemoteFile>,
    test: Vec<RemoteFile>,
}

impl DatasetSource {
    /// Create a source with no splits defined yet.
    pub fn new(name: impl Into<String>, cache_name: impl Into<String>, info: DatasetInfo) -> Self {
        Self {
            name: name.into(),
            cache_name: cache_name.into(),
            info,
            train: Vec::new(),
            validation: Vec::new(),
            test: Vec::new(),
        }
    }

    /// Define the training split's files.
    #[must_use]
    pub fn with_train(mut self, files: Vec<RemoteFile>) -> Self {
        self.train = files;
        self
    }

    /// Define the validation split's files.
    #[must_use]
    pub fn with_validation(mut self, files: Vec<RemoteFile>) -> Self {
        self.validation = files;
        self
    }

    /// Define the test split's files.
    #[must_use]
    pub fn with_test(mut self, files: Vec<RemoteFile>) -> Self {
        self.test = files;
        self
    }

    /// Dataset name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory name under the cache base directory.
    #[must_use]
    pub fn cache_name(&self) -> &str {
        &self.cache_name
    }

    /// Descriptive metadata.
    #[must_use]
    pub fn info(&self) -> &DatasetInfo {
        &self.info
    }

    /// Whether the dataset defines `split`.
    ///
    /// `All` is supported as soon as any concrete split is defined.
    #[must_use]
    pub fn supports(&self, split: Split) -> bool {
        match split {
            Split::Train => !self.train.is_empty(),
            Split::Validation => !self.validation.is_empty(),
            Split::Test => !self.test.is_empty(),
            Split::All => {
                !(self.train.is_empty() && self.validation.is_empty() && self.test.is_empty())
            }
        }
    }

    /// The files `split` requires, in declaration order.
    ///
    /// `All` yields every defined split's files, train first.
    ///
    /// # Errors
    ///
    /// Returns an unsupported-split error when the dataset does not define
    /// `split`.
    pub fn files(&self, split: Split) -> Result<Vec<&RemoteFile>> {
        if !self.supports(split) {
            return Err(DatasetError::UnsupportedSplit { dataset: self.name.clone(), split });
        }

        Ok(match split {
            Split::Train => self.train.iter().collect(),
            Split::Validation => self.validation.iter().collect(),
            Split::Test => self.test.iter().collect(),
            Split::All => {
                self.train.iter().chain(&self.validation).chain(&self.test).collect()
            }
        })
    }
}
