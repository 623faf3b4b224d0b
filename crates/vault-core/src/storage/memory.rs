//! In-memory record store.
//!
//! Useful for tests and embedding. State lives behind an `RwLock`, so a
//! single instance can be shared across threads; identifiers are UUIDv4,
//! allocated per record.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use uuid::Uuid;

use super::traits::RecordStore;
use super::types::StoredRecord;
use crate::error::{Result, VaultError};

/// In-memory implementation of [`RecordStore`].
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<Uuid, StoredRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_poisoned() -> VaultError {
        VaultError::Storage("Store lock poisoned".to_string())
    }
}

impl RecordStore for MemoryStore {
    fn create(&self, owner_id: Uuid, encoded: &str) -> Result<Uuid> {
        let mut records = self.records.write().map_err(|_| Self::lock_poisoned())?;
        let now = Utc::now();
        let id = Uuid::new_v4();
        records.insert(
            id,
            StoredRecord {
                id,
                owner_id,
                encoded_data: encoded.to_string(),
                created_at: now,
                updated_at: now,
            },
        );
        Ok(id)
    }

    fn list(&self, owner_id: Uuid) -> Result<Vec<StoredRecord>> {
        let records = self.records.read().map_err(|_| Self::lock_poisoned())?;
        let mut owned: Vec<StoredRecord> = records
            .values()
            .filter(|record| record.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(owned)
    }

    fn get(&self, id: Uuid, owner_id: Uuid) -> Result<Option<StoredRecord>> {
        let records = self.records.read().map_err(|_| Self::lock_poisoned())?;
        Ok(records
            .get(&id)
            .filter(|record| record.owner_id == owner_id)
            .cloned())
    }

    fn update(&self, id: Uuid, owner_id: Uuid, encoded: &str) -> Result<bool> {
        let mut records = self.records.write().map_err(|_| Self::lock_poisoned())?;
        match records.get_mut(&id) {
            Some(record) if record.owner_id == owner_id => {
                record.encoded_data = encoded.to_string();
                record.updated_at = Utc::now();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<bool> {
        let mut records = self.records.write().map_err(|_| Self::lock_poisoned())?;
        match records.get(&id) {
            Some(record) if record.owner_id == owner_id => {
                records.remove(&id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_get() {
        let store = MemoryStore::new();
        let owner = Uuid::new_v4();

        let id = store.create(owner, "aa:bb:cc").unwrap();
        let record = store.get(id, owner).unwrap().expect("record should exist");

        assert_eq!(record.id, id);
        assert_eq!(record.owner_id, owner);
        assert_eq!(record.encoded_data, "aa:bb:cc");
        assert_eq!(record.created_at, record.updated_at);
    }

    #[test]
    fn test_owner_scoping() {
        let store = MemoryStore::new();
        let alice = Uuid::new_v4();
        let mallory = Uuid::new_v4();

        let id = store.create(alice, "data").unwrap();

        assert!(store.get(id, mallory).unwrap().is_none());
        assert!(!store.update(id, mallory, "overwritten").unwrap());
        assert!(!store.delete(id, mallory).unwrap());

        // Alice still sees her record, untouched.
        let record = store.get(id, alice).unwrap().unwrap();
        assert_eq!(record.encoded_data, "data");
    }

    #[test]
    fn test_list_is_scoped_and_newest_first() {
        let store = MemoryStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let first = store.create(alice, "first").unwrap();
        let second = store.create(alice, "second").unwrap();
        store.create(bob, "other").unwrap();

        // Updating the older record moves it to the front.
        assert!(store.update(first, alice, "first-v2").unwrap());

        let listed = store.list(alice).unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, first);
        assert_eq!(listed[1].id, second);
    }

    #[test]
    fn test_update_bumps_timestamp() {
        let store = MemoryStore::new();
        let owner = Uuid::new_v4();

        let id = store.create(owner, "v1").unwrap();
        let created = store.get(id, owner).unwrap().unwrap();

        assert!(store.update(id, owner, "v2").unwrap());
        let updated = store.get(id, owner).unwrap().unwrap();

        assert_eq!(updated.encoded_data, "v2");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
    }

    #[test]
    fn test_delete_removes_record() {
        let store = MemoryStore::new();
        let owner = Uuid::new_v4();

        let id = store.create(owner, "data").unwrap();
        assert!(store.delete(id, owner).unwrap());
        assert!(store.get(id, owner).unwrap().is_none());
        assert!(!store.delete(id, owner).unwrap());
    }
}
