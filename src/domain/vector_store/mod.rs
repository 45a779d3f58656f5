//! Vector store domain traits
//!
//! A collection is an indexed, read-only set of passages. Building one is
//! the indexer's job; querying it is the store's.

mod provider;

pub use provider::{VectorStore, VectorStoreIndexer};

#[cfg(test)]
pub use provider::mock::{MockIndexer, MockVectorStore};
