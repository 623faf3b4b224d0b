//! Core data types for the storage layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored vault record.
///
/// `encoded_data` is the encrypted wire string; the store treats it as
/// opaque text and never inspects or decrypts it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    /// Unique identifier for this record
    pub id: Uuid,

    /// Owner this record is scoped to
    pub owner_id: Uuid,

    /// The encrypted record in wire form
    pub encoded_data: String,

    /// When this record was created
    pub created_at: DateTime<Utc>,

    /// Last re-encryption timestamp
    pub updated_at: DateTime<Utc>,
}
