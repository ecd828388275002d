//! Split-aware datasets: paired collections, batch iteration and the
//! acquisition loader.
//!
//! # Lifecycle
//!
//! A [`DatasetSource`] describes which remote files each split needs. A
//! [`DatasetLoader`] — the undefined-split state — fetches a split's files
//! through the cache, hands the bytes to a [`Decoder`], and returns a
//! [`SplitDataset`] that owns the resulting [`IndexedCollection`].
//! [`SplitDataset::batched`] then yields fixed-size [`Batch`]es with a
//! partial final batch.

mod batch;
mod collection;
mod decode;
mod info;
mod iter;
mod loader;
mod source;
mod split;
pub mod sources;


pub use batch::Batch;
pub use collection::IndexedCollection;
pub use decode::{Decoder, RawFile};
pub use info::DatasetInfo;
pub use iter::BatchIter;
pub use loader::{DatasetLoader, SplitDataset};
pub use source::{DatasetSource, RemoteFile};
pub use split::Split;
