//! JSON-file-backed record store.
//!
//! Persists a single container file holding the owner identity and the
//! encoded records:
//!
//! ```json
//! { "version": "1", "owner_id": "...", "created_at": "...", "records": [...] }
//! ```
//!
//! The container itself is plaintext JSON; its records are individually
//! encrypted strings, which is all the confidentiality this layer is meant
//! to provide. Every mutation rewrites the file atomically.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::traits::RecordStore;
use super::types::StoredRecord;
use crate::error::{Result, VaultError};
use crate::fs::write_atomic;

/// Container file format version.
const FORMAT_VERSION: &str = "1";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct VaultFile {
    version: String,
    owner_id: Uuid,
    created_at: DateTime<Utc>,
    records: Vec<StoredRecord>,
}

/// JSON-file implementation of [`RecordStore`].
pub struct JsonFileStore {
    path: PathBuf,
    state: RwLock<VaultFile>,
}

impl JsonFileStore {
    /// Create a new vault file with a fresh owner identity.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::Storage` if the file already exists or cannot
    /// be written.
    pub fn create(path: &Path) -> Result<Self> {
        if path.exists() {
            return Err(VaultError::Storage(format!(
                "Vault file already exists: {}",
                path.display()
            )));
        }

        let state = VaultFile {
            version: FORMAT_VERSION.to_string(),
            owner_id: Uuid::new_v4(),
            created_at: Utc::now(),
            records: Vec::new(),
        };

        let store = Self {
            path: path.to_path_buf(),
            state: RwLock::new(state),
        };
        store.persist()?;
        Ok(store)
    }

    /// Open an existing vault file.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::NotFound` if the file is missing, or
    /// `VaultError::Format` if it cannot be parsed.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(VaultError::NotFound(format!(
                "Vault file not found: {}",
                path.display()
            )));
        }

        let bytes = std::fs::read(path)?;
        let state: VaultFile = serde_json::from_slice(&bytes)
            .map_err(|e| VaultError::Format(format!("Invalid vault file: {}", e)))?;

        if state.version != FORMAT_VERSION {
            return Err(VaultError::Format(format!(
                "Unsupported vault file version: {}",
                state.version
            )));
        }

        Ok(Self {
            path: path.to_path_buf(),
            state: RwLock::new(state),
        })
    }

    /// The owner identity this vault file is scoped to.
    pub fn owner_id(&self) -> Uuid {
        self.state
            .read()
            .map(|state| state.owner_id)
            .unwrap_or_else(|poisoned| poisoned.into_inner().owner_id)
    }

    fn persist(&self) -> Result<()> {
        let state = self.state.read().map_err(|_| Self::lock_poisoned())?;
        let bytes = serde_json::to_vec_pretty(&*state)
            .map_err(|e| VaultError::Storage(format!("Failed to serialize vault file: {}", e)))?;
        write_atomic(&self.path, &bytes)?;
        Ok(())
    }

    fn lock_poisoned() -> VaultError {
        VaultError::Storage("Store lock poisoned".to_string())
    }
}

impl RecordStore for JsonFileStore {
    fn create(&self, owner_id: Uuid, encoded: &str) -> Result<Uuid> {
        let id = {
            let mut state = self.state.write().map_err(|_| Self::lock_poisoned())?;
            let now = Utc::now();
            let id = Uuid::new_v4();
            state.records.push(StoredRecord {
                id,
                owner_id,
                encoded_data: encoded.to_string(),
                created_at: now,
                updated_at: now,
            });
            id
        };
        self.persist()?;
        Ok(id)
    }

    fn list(&self, owner_id: Uuid) -> Result<Vec<StoredRecord>> {
        let state = self.state.read().map_err(|_| Self::lock_poisoned())?;
        let mut owned: Vec<StoredRecord> = state
            .records
            .iter()
            .filter(|record| record.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(owned)
    }

    fn get(&self, id: Uuid, owner_id: Uuid) -> Result<Option<StoredRecord>> {
        let state = self.state.read().map_err(|_| Self::lock_poisoned())?;
        Ok(state
            .records
            .iter()
            .find(|record| record.id == id && record.owner_id == owner_id)
            .cloned())
    }

    fn update(&self, id: Uuid, owner_id: Uuid, encoded: &str) -> Result<bool> {
        let found = {
            let mut state = self.state.write().map_err(|_| Self::lock_poisoned())?;
            match state
                .records
                .iter_mut()
                .find(|record| record.id == id && record.owner_id == owner_id)
            {
                Some(record) => {
                    record.encoded_data = encoded.to_string();
                    record.updated_at = Utc::now();
                    true
                }
                None => false,
            }
        };
        if found {
            self.persist()?;
        }
        Ok(found)
    }

    fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<bool> {
        let found = {
            let mut state = self.state.write().map_err(|_| Self::lock_poisoned())?;
            let before = state.records.len();
            state
                .records
                .retain(|record| !(record.id == id && record.owner_id == owner_id));
            state.records.len() != before
        };
        if found {
            self.persist()?;
        }
        Ok(found)
    }
}
