//! Chat widget configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_ENDPOINT: &str = "/chat";
pub const DEFAULT_EXAMPLE_ENDPOINT: &str = "/api/predefined-question";
pub const DEFAULT_STORAGE_KEY: &str = "vaultlogic_chat_history";
pub const DEFAULT_HISTORY_LIMIT: usize = 10;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 30_000;

/// Static greeting rendered at the top of every transcript view.
pub const GREETING: &str = "Welcome to the VaultLogic compliance assistant! Ask me about SOC 2, GDPR, HIPAA, \
ISO 27001, encryption, access control, audit logging, or disaster recovery.";
pub const WELCOME_SENTINEL: &str = "Welcome to the VaultLogic";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatConfig {
    /// `POST` target for questions.
    pub endpoint: String,
    /// `GET` target returning a random curated question.
    pub example_endpoint: String,
    /// `localStorage` key holding the serialized transcript.
    pub storage_key: String,
    /// Number of most recent messages restored on session start.
    pub history_limit: usize,
    /// Upper bound on one exchange before it counts as a transport failure.
    pub request_timeout_ms: u32,
    pub restore_history: bool,
    /// Assistant messages containing this text are skipped on restore.
    pub welcome_sentinel: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            example_endpoint: DEFAULT_EXAMPLE_ENDPOINT.to_owned(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            restore_history: true,
            welcome_sentinel: WELCOME_SENTINEL.to_owned(),
        }
    }
}
