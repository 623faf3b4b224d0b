//! Record store trait definition.
//!
//! The `RecordStore` trait defines the interface that all storage backends
//! must implement. This abstraction keeps the cipher and codec core
//! independent of any concrete persistence mechanism.

use uuid::Uuid;

use super::types::StoredRecord;
use crate::error::Result;

/// Storage interface for encrypted vault records.
///
/// All implementations must ensure:
/// - Only encoded (encrypted) strings are stored; never plaintext
/// - Every operation is scoped by owner: a record id that exists but
///   belongs to another owner behaves exactly like a missing one
/// - Identifiers are UUIDs allocated by the store
/// - Operations are safe to call from multiple threads
pub trait RecordStore: Send + Sync {
    /// Store a new encoded record for an owner.
    ///
    /// # Returns
    ///
    /// Returns the UUID allocated for the record.
    fn create(&self, owner_id: Uuid, encoded: &str) -> Result<Uuid>;

    /// List an owner's records, most recently updated first.
    fn list(&self, owner_id: Uuid) -> Result<Vec<StoredRecord>>;

    /// Get a record by id, scoped to an owner.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(record))` if found and owned, `Ok(None)` otherwise.
    fn get(&self, id: Uuid, owner_id: Uuid) -> Result<Option<StoredRecord>>;

    /// Replace a record's encoded data and bump its update timestamp.
    ///
    /// The caller provides a freshly encrypted string; the store never
    /// mutates ciphertext in place.
    ///
    /// # Returns
    ///
    /// Returns `true` if the record existed and was owned, `false`
    /// otherwise.
    fn update(&self, id: Uuid, owner_id: Uuid, encoded: &str) -> Result<bool>;

    /// Delete a record, scoped to an owner.
    ///
    /// # Returns
    ///
    /// Returns `true` if the record existed and was owned, `false`
    /// otherwise.
    fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_is_object_safe() {
        // The store is injected as a trait object; keep it object safe.
        fn _accepts_store(_store: &dyn RecordStore) {}
    }
}
