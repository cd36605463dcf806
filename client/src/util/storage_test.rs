use super::*;
use crate::state::chat::Sender;

#[test]
fn encoded_transcript_uses_stored_field_names() {
    let raw = encode_transcript(&[Message::user("hi")]).unwrap();
    assert!(raw.starts_with(r#"[{"content":"hi","sender":"user""#));
    assert!(raw.contains(r#""isError":false"#));
}

#[test]
fn decode_reads_array_in_order() {
    let raw = r#"[{"content":"q","sender":"user"},{"content":"a","sender":"assistant","sources":["doc1"]}]"#;
    let messages = decode_transcript(raw).unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].sender, Sender::User);
    assert_eq!(messages[1].sources, vec!["doc1"]);
}

#[test]
fn decode_rejects_malformed_json() {
    assert!(matches!(decode_transcript("{not json"), Err(StorageError::Serde(_))));
}

#[cfg(not(feature = "csr"))]
#[test]
fn local_storage_is_unavailable_outside_browser() {
    let store = LocalStorageStore::new("k");
    assert_eq!(store.key(), "k");
    assert!(matches!(store.load(), Err(StorageError::Unavailable)));
    assert!(matches!(store.save(&[]), Err(StorageError::Unavailable)));
    assert!(matches!(store.clear(), Err(StorageError::Unavailable)));
}
