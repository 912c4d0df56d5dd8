//! Repository contract and the in-memory reference implementation
//!
//! [`CrudRepository`] is the storage-agnostic contract: collection reads
//! driven by the specification, order, and paging engines plus
//! identifier-addressed point operations. [`AsyncCrudRepository`] mirrors it
//! for suspension-capable callers and is available behind the `async`
//! feature.
//!
//! [`MemoryRepository`] implements the contract over a plain `Vec`, with a
//! [`MemoryAdapter`] supplying everything type-specific. It doubles as the
//! behavioral reference for storage-backed implementations.

mod memory;
mod traits;

#[cfg(feature = "async")]
pub use memory::AsyncMemoryRepository;
pub use memory::{MemoryAdapter, MemoryRepository};
#[cfg(feature = "async")]
pub use traits::AsyncCrudRepository;
pub use traits::CrudRepository;
