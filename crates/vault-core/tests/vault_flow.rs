use uuid::Uuid;

use vault_core::storage::{MemoryStore, RecordStore};
use vault_core::{EncodedRecord, RecordCipher, VaultRecord};

fn gmail_record() -> VaultRecord {
    VaultRecord {
        title: "Gmail".to_string(),
        username: "a@b.com".to_string(),
        password: "Xk9!mP2q".to_string(),
        url: "gmail.com".to_string(),
        notes: String::new(),
    }
}

#[test]
fn test_encrypt_store_fetch_decrypt_round_trip() {
    let cipher = RecordCipher::default();
    let store = MemoryStore::new();
    let owner = Uuid::new_v4();
    let record = gmail_record();

    let encoded = cipher.encrypt(&record, "correcthorse").expect("encrypt");
    let id = store.create(owner, &encoded.to_string()).expect("create");

    let fetched = store.get(id, owner).expect("get").expect("record exists");
    let parsed: EncodedRecord = fetched.encoded_data.parse().expect("stored data parses");

    let decrypted = cipher.decrypt(&parsed, "correcthorse").expect("decrypt");
    assert_eq!(decrypted, record);

    // The wrong passphrase cannot unlock the stored record.
    assert!(cipher.decrypt(&parsed, "wrong").is_err());
}

#[test]
fn test_update_produces_brand_new_encoding() {
    let cipher = RecordCipher::default();
    let store = MemoryStore::new();
    let owner = Uuid::new_v4();
    let mut record = gmail_record();

    let encoded = cipher.encrypt(&record, "correcthorse").expect("encrypt");
    let id = store.create(owner, &encoded.to_string()).expect("create");
    let original = store.get(id, owner).expect("get").expect("exists");

    // Edit and re-encrypt: a fresh salt and IV make the stored string
    // incomparable to the previous one even for identical plaintext.
    record.password = "NewP@ss42".to_string();
    let re_encoded = cipher.encrypt(&record, "correcthorse").expect("re-encrypt");
    assert!(store
        .update(id, owner, &re_encoded.to_string())
        .expect("update"));

    let updated = store.get(id, owner).expect("get").expect("exists");
    assert_ne!(updated.encoded_data, original.encoded_data);

    let parsed: EncodedRecord = updated.encoded_data.parse().expect("parses");
    assert_eq!(
        cipher.decrypt(&parsed, "correcthorse").expect("decrypt"),
        record
    );
}

#[test]
fn test_store_never_holds_plaintext() {
    let cipher = RecordCipher::default();
    let store = MemoryStore::new();
    let owner = Uuid::new_v4();

    let mut record = gmail_record();
    record.notes = "PLAINTEXT_MARKER_123".to_string();

    let encoded = cipher.encrypt(&record, "correcthorse").expect("encrypt");
    let id = store.create(owner, &encoded.to_string()).expect("create");

    let stored = store.get(id, owner).expect("get").expect("exists");
    assert!(!stored.encoded_data.contains("PLAINTEXT_MARKER_123"));
    assert!(!stored.encoded_data.contains("Xk9!mP2q"));
}
