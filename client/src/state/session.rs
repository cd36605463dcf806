//! Chat session controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ChatSession` owns the transcript and admits one question/answer exchange
//! at a time. It is generic over three seams so the whole lifecycle runs in
//! native tests: `ChatTransport` (network), `TranscriptStore` (durable
//! storage) and `ChatView` (DOM effects). Components hold it behind an `Rc`
//! in a local `StoredValue`; it never touches the DOM directly.
//!
//! CONCURRENCY
//! ===========
//! Everything runs on the browser's single thread. `ChatState` sits in a
//! `RefCell` whose borrows never span an `.await`. The busy flag is owned by
//! `ExchangeGuard`, so dropping an in-flight `submit_question` future still
//! releases the input.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;

use super::chat::{ChatState, ExchangePhase, Message, Notice};
use super::config::ChatConfig;
use crate::net::api::ChatTransport;
use crate::net::types::{ChatError, ChatReply, ChatRequest};
use crate::util::storage::TranscriptStore;

pub const EMPTY_QUESTION_NOTICE: &str = "Please enter a question.";
pub const BUSY_NOTICE: &str = "Please wait for the current response to complete.";
pub const FALLBACK_ERROR_MESSAGE: &str = "Sorry, I couldn't process your question. Please try again.";
pub const FAILED_RESPONSE_NOTICE: &str = "Failed to get response. Please try again.";
pub const TECHNICAL_DIFFICULTIES_MESSAGE: &str = "I'm experiencing technical difficulties. Please try again in a moment.";
pub const NETWORK_ERROR_NOTICE: &str = "Network error. Please check your connection and try again.";
pub const CLEAR_CONFIRM_PROMPT: &str = "Are you sure you want to clear the chat history?";
pub const HISTORY_CLEARED_NOTICE: &str = "Chat history cleared.";
pub const EXAMPLE_FAILED_NOTICE: &str = "Failed to load example question.";

/// Why a submission was refused before any request went out.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("question is empty")]
    EmptyQuestion,
    #[error("an exchange is already in flight")]
    Busy,
    #[error("example question unavailable: {0}")]
    ExampleUnavailable(ChatError),
}

/// DOM effects the controller asks for.
pub trait ChatView {
    /// Render `message` at the end of the transcript view.
    fn append_message(&self, message: &Message);
    /// Reset the transcript view to the static greeting only.
    fn reset_transcript(&self);
    fn set_input(&self, text: &str);
    fn clear_input(&self);
    /// Show or hide the typing indicator and toggle the input affordances.
    fn set_in_flight(&self, in_flight: bool);
    fn notify(&self, notice: Notice);
    fn confirm(&self, prompt: &str) -> bool;
    /// Anti-forgery token issued with the host page.
    fn csrf_token(&self) -> String;
}

pub struct ChatSession<T, S, V> {
    config: ChatConfig,
    transport: T,
    store: S,
    view: V,
    state: RefCell<ChatState>,
}

impl<T, S, V> ChatSession<T, S, V>
where
    T: ChatTransport,
    S: TranscriptStore,
    V: ChatView,
{
    pub fn new(config: ChatConfig, transport: T, store: S, view: V) -> Self {
        Self { config, transport, store, view, state: RefCell::new(ChatState::default()) }
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Snapshot of the current transcript.
    pub fn messages(&self) -> Vec<Message> {
        self.state.borrow().messages.clone()
    }

    pub fn is_awaiting_response(&self) -> bool {
        self.state.borrow().awaiting_response
    }

    pub fn phase(&self) -> ExchangePhase {
        self.state.borrow().phase
    }

    /// Submit one question and wait for its exchange to settle.
    ///
    /// Returns the phase the exchange settled in (`Answered` or `Errored`);
    /// by the time this returns the session is `Idle` again.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::EmptyQuestion` for blank input and
    /// `SubmitError::Busy` while another exchange is outstanding. Neither
    /// appends a message or sends a request.
    pub async fn submit_question(&self, text: &str) -> Result<ExchangePhase, SubmitError> {
        let question = self.admit(text)?;
        self.record_question(question);
        let guard = ExchangeGuard::acquire(self);
        Ok(self.exchange(question, guard).await)
    }

    /// Fill the input with a curated question and submit it.
    ///
    /// # Errors
    ///
    /// Same as [`Self::submit_question`]; a refused question leaves the
    /// input untouched.
    pub async fn submit_predefined(&self, question: &str) -> Result<ExchangePhase, SubmitError> {
        let question = self.admit(question)?;
        self.view.set_input(question);
        self.record_question(question);
        let guard = ExchangeGuard::acquire(self);
        Ok(self.exchange(question, guard).await)
    }

    /// Fetch a random curated question from the server and submit it.
    ///
    /// The session is busy from the fetch until the answer settles, so the
    /// fetch and the chat request never overlap another exchange.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Busy` while another exchange is outstanding and
    /// `SubmitError::ExampleUnavailable` when the fetch fails or yields a
    /// blank question.
    pub async fn submit_example(&self) -> Result<ExchangePhase, SubmitError> {
        if self.is_awaiting_response() {
            self.view.notify(Notice::info(BUSY_NOTICE));
            return Err(SubmitError::Busy);
        }

        let guard = ExchangeGuard::acquire(self);
        let example = match self.transport.predefined_question().await {
            Ok(example) if !example.question.trim().is_empty() => example,
            Ok(_) => return Err(self.example_failed(ChatError::Decode("example question is blank".to_owned()))),
            Err(err) => return Err(self.example_failed(err)),
        };

        let question = example.question.trim();
        self.view.set_input(question);
        self.record_question(question);
        Ok(self.exchange(question, guard).await)
    }

    /// Replay the most recent stored messages into the transcript.
    ///
    /// Returns the number of messages restored.
    pub fn restore_history(&self) -> usize {
        if !self.config.restore_history {
            return 0;
        }
        let stored = match self.store.load() {
            Ok(stored) => stored,
            Err(err) => {
                log::warn!("chat history restore failed: {err}");
                return 0;
            }
        };

        let start = stored.len().saturating_sub(self.config.history_limit);
        let mut restored = 0;
        for message in stored.into_iter().skip(start) {
            if message.is_welcome(&self.config.welcome_sentinel) {
                continue;
            }
            self.push_message(message);
            restored += 1;
        }
        restored
    }

    /// Empty the transcript and its stored copy after user confirmation.
    ///
    /// Returns `false` when the user declines.
    pub fn clear_history(&self) -> bool {
        if !self.view.confirm(CLEAR_CONFIRM_PROMPT) {
            return false;
        }
        self.state.borrow_mut().messages.clear();
        if let Err(err) = self.store.clear() {
            log::warn!("chat history clear failed: {err}");
        }
        self.view.reset_transcript();
        self.view.notify(Notice::success(HISTORY_CLEARED_NOTICE));
        true
    }

    /// Trimmed question, or the reason it is refused.
    fn admit<'q>(&self, text: &'q str) -> Result<&'q str, SubmitError> {
        let question = text.trim();
        if question.is_empty() {
            self.view.notify(Notice::warning(EMPTY_QUESTION_NOTICE));
            return Err(SubmitError::EmptyQuestion);
        }
        if self.is_awaiting_response() {
            self.view.notify(Notice::info(BUSY_NOTICE));
            return Err(SubmitError::Busy);
        }
        Ok(question)
    }

    fn record_question(&self, question: &str) {
        self.push_message(Message::user(question));
        self.view.clear_input();
    }

    /// Send `question` and settle the exchange. `_guard` is released on return.
    async fn exchange(&self, question: &str, _guard: ExchangeGuard<'_, T, S, V>) -> ExchangePhase {
        let request = ChatRequest::new(question, self.view.csrf_token());
        let result = self.transport.ask(&request).await;
        self.complete_exchange(result)
    }

    fn example_failed(&self, err: ChatError) -> SubmitError {
        log::warn!("example question fetch failed: {err}");
        self.view.notify(Notice::warning(EXAMPLE_FAILED_NOTICE));
        SubmitError::ExampleUnavailable(err)
    }

    fn complete_exchange(&self, result: Result<ChatReply, ChatError>) -> ExchangePhase {
        let phase = match result {
            Ok(ChatReply { success: true, answer: Some(answer), sources, .. }) => {
                self.push_message(Message::assistant(answer, sources));
                ExchangePhase::Answered
            }
            Ok(reply) => {
                let content = reply
                    .error
                    .filter(|e| !e.trim().is_empty())
                    .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_owned());
                self.push_message(Message::error(content));
                self.view.notify(Notice::danger(FAILED_RESPONSE_NOTICE));
                ExchangePhase::Errored
            }
            Err(err) => {
                log::error!("chat exchange failed: {err}");
                self.push_message(Message::error(TECHNICAL_DIFFICULTIES_MESSAGE));
                self.view.notify(Notice::danger(NETWORK_ERROR_NOTICE));
                ExchangePhase::Errored
            }
        };
        self.state.borrow_mut().phase = phase;
        phase
    }

    /// Append to the view, then the transcript, then persist best-effort.
    fn push_message(&self, message: Message) {
        self.view.append_message(&message);
        let mut state = self.state.borrow_mut();
        state.messages.push(message);
        if let Err(err) = self.store.save(&state.messages) {
            log::warn!("chat history save failed: {err}");
        }
    }
}

/// Holds the session busy for the lifetime of one exchange.
struct ExchangeGuard<'a, T, S, V>
where
    T: ChatTransport,
    S: TranscriptStore,
    V: ChatView,
{
    session: &'a ChatSession<T, S, V>,
}

impl<'a, T, S, V> ExchangeGuard<'a, T, S, V>
where
    T: ChatTransport,
    S: TranscriptStore,
    V: ChatView,
{
    fn acquire(session: &'a ChatSession<T, S, V>) -> Self {
        {
            let mut state = session.state.borrow_mut();
            state.awaiting_response = true;
            state.phase = ExchangePhase::Submitting;
        }
        session.view.set_in_flight(true);
        Self { session }
    }
}

impl<T, S, V> Drop for ExchangeGuard<'_, T, S, V>
where
    T: ChatTransport,
    S: TranscriptStore,
    V: ChatView,
{
    fn drop(&mut self) {
        {
            let mut state = self.session.state.borrow_mut();
            state.awaiting_response = false;
            state.phase = ExchangePhase::Idle;
        }
        self.session.view.set_in_flight(false);
    }
}
