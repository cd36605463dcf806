//! Wire DTOs for the chat endpoint.
//!
//! DESIGN
//! ======
//! `ChatReply` mirrors the server's JSON body field for field. Decoding is
//! lenient where the server (or an older stored transcript) may send `null`
//! or a differently typed value: `sources` drops non-string entries and
//! `timestamp` falls back to `0.0` instead of failing the whole payload.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Header carrying the anti-forgery token alongside the form field.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Body of `POST /chat`, sent URL-encoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatRequest {
    pub question: String,
    pub csrf_token: String,
}

impl ChatRequest {
    pub fn new(question: impl Into<String>, csrf_token: impl Into<String>) -> Self {
        Self { question: question.into(), csrf_token: csrf_token.into() }
    }

    /// Form fields in submission order.
    pub fn form_fields(&self) -> [(&'static str, &str); 2] {
        [("question", self.question.as_str()), ("csrf_token", self.csrf_token.as_str())]
    }
}

/// Response body of `POST /chat`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub success: bool,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_sources")]
    pub sources: Vec<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response body of `GET /api/predefined-question`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredefinedQuestion {
    pub question: String,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_sources")]
    pub sources: Vec<String>,
}

/// Transport-level failure of one exchange.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    #[error("network error: {0}")]
    Network(String),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("request timed out after {ms}ms")]
    Timeout { ms: u32 },
    #[error("chat transport is only available in the browser")]
    Unavailable,
}

pub(crate) fn deserialize_sources<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

pub(crate) fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64().filter(|ms| ms.is_finite()).unwrap_or(0.0))
}
