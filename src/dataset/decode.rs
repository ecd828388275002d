//! Decoder collaborator interface.
//!
//! Turning downloaded bytes into records is format-specific and lives
//! outside this crate; the loader only requires the seam defined here.

use crate::error::Result;

use super::collection::IndexedCollection;

/// Raw bytes of one fetched file, tagged with its cache file name.
#[derive(Debug, Clone)]
pub struct RawFile {
    /// File name within the dataset's cache directory.
    pub name: String,
    /// Complete file contents.
    pub bytes: Vec<u8>,
}

impl RawFile {
    /// Wrap fetched bytes.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { name: name.into(), bytes }
    }
}

/// Decodes the files of one split into an indexed collection.
///
/// `files` arrive in the order the dataset source declares them, one entry
/// per remote file the split requires. The produced collection must have a
/// stable length and paired feature/label access by index; the loader treats
/// any decode failure as fatal to the dataset-construction call.
pub trait Decoder {
    /// Feature record type.
    type Feature;
    /// Label type.
    type Label;

    /// Decode raw file contents into records.
    ///
    /// # Errors
    ///
    /// Returns a decode error when the bytes do not match the expected
    /// format.
    fn decode(&self, files: &[RawFile]) -> Result<IndexedCollection<Self::Feature, Self::Label>>;
}
