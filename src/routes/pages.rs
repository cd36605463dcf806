//! Server-rendered pages.
//!
//! The demo page is a static template with two slots: the anti-forgery token
//! for the hidden `csrf_token` field, and the curated example questions
//! rendered as `predefined-question` buttons the chat widget binds to.

#[cfg(test)]
#[path = "pages_test.rs"]
mod pages_test;

use std::fmt::Write;

use axum::extract::State;
use axum::response::Html;

use crate::services::handbook::QaPair;
use crate::state::AppState;

const DEMO_TEMPLATE: &str = include_str!("../../site/demo.html");

const TOKEN_SLOT: &str = "{{csrf_token}}";
const QUESTIONS_SLOT: &str = "{{predefined_questions}}";

/// `GET /demo`: demo page with a fresh CSRF token.
pub async fn demo(State(state): State<AppState>) -> Html<String> {
    Html(render_demo_page(DEMO_TEMPLATE, &state.csrf.issue(), state.handbook.predefined()))
}

pub(crate) fn render_demo_page(template: &str, csrf_token: &str, questions: &[QaPair]) -> String {
    let mut buttons = String::new();
    for qa in questions {
        let question = escape_html(&qa.question);
        let _ = writeln!(
            buttons,
            r#"<button type="button" class="predefined-question" data-question="{question}">{question}</button>"#
        );
    }
    template
        .replace(TOKEN_SLOT, &escape_html(csrf_token))
        .replace(QUESTIONS_SLOT, &buttons)
}

pub(crate) fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
