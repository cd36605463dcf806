//! Client-side state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chat` holds the transcript model, `config` the widget settings, and
//! `session` the controller that drives exchanges over both.

pub mod chat;
pub mod config;
pub mod session;
