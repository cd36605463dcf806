//! Chat widget components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the session's reactive view state and forward user
//! intents to the session controller.

pub mod chat_message;
pub mod chat_panel;
pub mod notice_banner;
