//! Vector store implementations and the collection registry

mod in_memory;
mod registry;

pub use in_memory::{InMemoryIndexer, InMemoryVectorStore};
pub use registry::{ActiveCollection, CollectionRegistry};
