//! # acopiar
//!
//! Cached dataset acquisition and batching for training pipelines.
//!
//! - Download remote dataset files at most once per cache key
//! - Synchronous fetch contract over a background transfer, with progress
//!   reporting and an advisory ETA
//! - Split-aware dataset loading (train / validation / test / all) with
//!   type-level protection against re-deriving an already-fixed split
//! - Fixed-size batch iteration with a partial final batch
//!
//! Format-specific decoding is a collaborator concern: implement [`Decoder`]
//! for your dataset's on-disk format and hand it to a [`DatasetLoader`].
//!
//! # Example
//!
//! ```ignore
//! use acopiar::{sources, DatasetLoader};
//!
//! let mut loader = DatasetLoader::new(sources::mnist(), MnistDecoder)?;
//! let train = loader.train()?;
//! for batch in train.batched(32)? {
//!     // feed batch.features / batch.labels to the training loop
//! }
//! ```

pub mod cache;
pub mod dataset;
pub mod error;
pub mod fetch;

pub use cache::CacheStore;
pub use dataset::{
    sources, Batch, BatchIter, DatasetInfo, DatasetLoader, DatasetSource, Decoder,
    IndexedCollection, RawFile, RemoteFile, Split, SplitDataset,
};
pub use error::{DatasetError, Result};
pub use fetch::{Fetcher, HttpTransport, ProgressBar, Transport, TransferProgress};
