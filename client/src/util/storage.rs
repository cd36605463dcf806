//! Durable transcript storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The chat session mirrors its transcript after every append so a page
//! reload can restore recent history. `LocalStorageStore` keeps the whole
//! transcript as one JSON array under a single namespaced key. Outside the
//! browser it reports `StorageError::Unavailable`.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::state::chat::Message;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("transcript serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("localStorage rejected the operation: {0}")]
    Backend(String),
}

/// Persistence seam of the chat session.
pub trait TranscriptStore {
    /// Load the stored transcript; an absent key is an empty transcript.
    ///
    /// # Errors
    ///
    /// Returns an error if storage is unreachable or holds malformed data.
    fn load(&self) -> Result<Vec<Message>, StorageError>;

    /// Replace the stored transcript with `messages`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    fn save(&self, messages: &[Message]) -> Result<(), StorageError>;

    /// Remove the stored transcript.
    ///
    /// # Errors
    ///
    /// Returns an error if storage is unreachable.
    fn clear(&self) -> Result<(), StorageError>;
}

/// Transcript store backed by the browser's `localStorage`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl TranscriptStore for LocalStorageStore {
    fn load(&self) -> Result<Vec<Message>, StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage()?;
            match storage.get_item(&self.key).map_err(|_| backend("getItem"))? {
                Some(raw) => decode_transcript(&raw),
                None => Ok(Vec::new()),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(StorageError::Unavailable)
        }
    }

    fn save(&self, messages: &[Message]) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let raw = encode_transcript(messages)?;
            local_storage()?
                .set_item(&self.key, &raw)
                .map_err(|_| backend("setItem"))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = messages;
            Err(StorageError::Unavailable)
        }
    }

    fn clear(&self) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .remove_item(&self.key)
                .map_err(|_| backend("removeItem"))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(StorageError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "csr")]
fn backend(op: &str) -> StorageError {
    StorageError::Backend(format!("{op} failed"))
}

#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub(crate) fn encode_transcript(messages: &[Message]) -> Result<String, StorageError> {
    Ok(serde_json::to_string(messages)?)
}

#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub(crate) fn decode_transcript(raw: &str) -> Result<Vec<Message>, StorageError> {
    Ok(serde_json::from_str(raw)?)
}
