//! Record storage.
//!
//! The store is an opaque keyed collaborator: it holds encoded (encrypted)
//! record strings scoped by owner and never sees plaintext. The
//! [`RecordStore`] trait is the capability interface; callers inject a
//! concrete implementation.

pub mod json_file;
pub mod memory;
pub mod traits;
pub mod types;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::RecordStore;
pub use types::StoredRecord;
