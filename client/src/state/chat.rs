//! Transcript model for the chat widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Message` is both the in-memory transcript entry and the JSON shape
//! stored in `localStorage`, so field names follow the stored format
//! (`isError` in camelCase).

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::{Deserialize, Serialize};

use crate::net::types::{deserialize_sources, deserialize_timestamp};
use crate::util::clock;

/// Who authored a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    /// CSS modifier used by the transcript view.
    pub fn as_class(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content: String,
    pub sender: Sender,
    #[serde(default, deserialize_with = "deserialize_sources")]
    pub sources: Vec<String>,
    /// Epoch milliseconds, assigned when the entry is created.
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub timestamp: f64,
    #[serde(default)]
    pub is_error: bool,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(content.into(), Sender::User, Vec::new(), false)
    }

    pub fn assistant(content: impl Into<String>, sources: Vec<String>) -> Self {
        Self::new(content.into(), Sender::Assistant, sources, false)
    }

    /// Assistant entry synthesized locally after a failed exchange.
    pub fn error(content: impl Into<String>) -> Self {
        Self::new(content.into(), Sender::Assistant, Vec::new(), true)
    }

    fn new(content: String, sender: Sender, sources: Vec<String>, is_error: bool) -> Self {
        Self { content, sender, sources, timestamp: clock::now_ms(), is_error }
    }

    /// True for the page's static greeting, which restores must not duplicate.
    pub fn is_welcome(&self, sentinel: &str) -> bool {
        self.sender == Sender::Assistant && !sentinel.is_empty() && self.content.contains(sentinel)
    }
}

/// Lifecycle of the current question/answer exchange.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExchangePhase {
    #[default]
    Idle,
    Submitting,
    Answered,
    Errored,
}

/// Severity of a transient banner notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Danger,
}

impl NoticeLevel {
    pub fn as_class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// Transient banner shown above the transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub level: NoticeLevel,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self { message: message.into(), level }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Danger, message)
    }
}

/// The banner's current notice plus a counter bumped on every `show`.
///
/// Auto-dismiss timers carry the sequence number they were started for, so
/// a repeat of an identical notice is not cut short by the earlier timer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeSlot {
    notice: Option<Notice>,
    seq: u64,
}

impl NoticeSlot {
    /// Replace the current notice; returns its sequence number.
    pub fn show(&mut self, notice: Notice) -> u64 {
        self.seq += 1;
        self.notice = Some(notice);
        self.seq
    }

    pub fn dismiss(&mut self) {
        self.notice = None;
    }

    /// Dismiss only if `seq` still names the notice on screen.
    pub fn expire(&mut self, seq: u64) -> bool {
        if self.seq != seq || self.notice.is_none() {
            return false;
        }
        self.notice = None;
        true
    }

    pub fn current(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// State owned by the chat session controller.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    /// Ordered, append-only transcript of the current session.
    pub messages: Vec<Message>,
    /// True while exactly one exchange is outstanding.
    pub awaiting_response: bool,
    pub phase: ExchangePhase,
}
