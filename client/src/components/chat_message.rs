//! One transcript entry.
//!
//! SYSTEM CONTEXT
//! ==============
//! Assistant answers go through the markdown-subset formatter. Locally
//! synthesized error entries and user questions are escaped verbatim, so
//! only server answers can carry markup.

#[cfg(test)]
#[path = "chat_message_test.rs"]
mod chat_message_test;

use leptos::prelude::*;

use crate::state::chat::{Message, Sender};
use crate::util::clock;
use crate::util::format::{escape_html, format_message_html};

/// A single rendered message bubble.
#[component]
pub fn ChatMessage(message: Message) -> impl IntoView {
    let class = message_class(&message);
    let content_class = content_class(&message);
    let body = message_body_html(&message);
    let sources = sources_label(&message.sources);
    let time = message_time_label(&message);

    view! {
        <div class=class>
            <div class=content_class inner_html=body></div>
            {sources.map(|label| view! { <div class="sources">{label}</div> })}
            {time.map(|label| view! { <div class="timestamp">{label}</div> })}
        </div>
    }
}

fn message_class(message: &Message) -> String {
    format!("message {}", message.sender.as_class())
}

fn content_class(message: &Message) -> &'static str {
    if message.is_error { "message-content text-danger" } else { "message-content" }
}

/// HTML for the message body.
pub(crate) fn message_body_html(message: &Message) -> String {
    match message.sender {
        Sender::Assistant if !message.is_error => format_message_html(&message.content),
        _ => escape_html(&message.content),
    }
}

/// `Sources: a, b` line, absent when nothing was cited.
pub(crate) fn sources_label(sources: &[String]) -> Option<String> {
    if sources.is_empty() {
        return None;
    }
    Some(format!("Sources: {}", sources.join(", ")))
}

/// Time-of-day label, shown only under successful assistant answers.
pub(crate) fn message_time_label(message: &Message) -> Option<String> {
    (message.sender == Sender::Assistant && !message.is_error).then(|| clock::time_label(message.timestamp))
}
