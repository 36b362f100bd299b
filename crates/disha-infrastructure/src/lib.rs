//! Infrastructure layer for the DISHA learning-path engine.
//!
//! Provides the in-process reference implementation of the store boundary
//! defined in `disha-core`. A production deployment would back the same
//! traits with the shared reactive store.

mod memory_store;

pub use memory_store::InMemoryStore;
