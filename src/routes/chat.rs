//! Chat routes: question answering and example questions.
//!
//! ERROR HANDLING
//! ==============
//! Every outcome of `POST /chat` is a JSON body with a `success` flag, so the
//! widget can render failures inline. Only CSRF failures change the status
//! code (400); validation and search misses are reported with 200.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use axum::Form;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::services::csrf::{CsrfError, CsrfSigner};
use crate::services::handbook::Answer;
use crate::state::AppState;

pub const CSRF_HEADER: &str = "x-csrftoken";

pub(crate) const MIN_QUESTION_CHARS: usize = 5;
pub(crate) const MAX_QUESTION_CHARS: usize = 500;

pub(crate) const CSRF_INVALID: &str = "The CSRF token is invalid.";
pub(crate) const INVALID_QUESTION: &str = "Invalid question format.";
pub(crate) const NO_RESULTS: &str = "No relevant information found.";

/// URL-encoded body of `POST /chat`.
#[derive(Debug, Default, Deserialize)]
pub struct ChatForm {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub csrf_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatResponse {
    fn answered(question: &str, answer: Answer) -> Self {
        Self {
            success: true,
            question: Some(question.to_owned()),
            answer: Some(answer.answer),
            sources: Some(answer.sources),
            error: None,
        }
    }

    fn failed(message: &str) -> Self {
        Self { success: false, question: None, answer: None, sources: None, error: Some(message.to_owned()) }
    }
}

/// `POST /chat`: answer a question from the compliance handbook.
pub async fn ask(State(state): State<AppState>, headers: HeaderMap, Form(form): Form<ChatForm>) -> Response {
    if let Err(e) = verify_csrf(&state.csrf, &headers, &form.csrf_token) {
        tracing::warn!(error = %e, "chat request rejected");
        return (StatusCode::BAD_REQUEST, Json(ChatResponse::failed(CSRF_INVALID))).into_response();
    }

    let question = form.question.trim();
    if !question_length_ok(question) {
        tracing::debug!(chars = question.chars().count(), "chat question failed validation");
        return Json(ChatResponse::failed(INVALID_QUESTION)).into_response();
    }

    match state.handbook.search(question) {
        Some(answer) => {
            tracing::info!(chars = question.chars().count(), sources = answer.sources.len(), "chat question answered");
            Json(ChatResponse::answered(question, answer)).into_response()
        }
        None => Json(ChatResponse::failed(NO_RESULTS)).into_response(),
    }
}

/// `GET /api/predefined-question`: a random curated question with its answer.
pub async fn predefined_question(State(state): State<AppState>) -> Response {
    match state.handbook.random_predefined() {
        Some(qa) => Json(qa.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, "no predefined questions").into_response(),
    }
}

/// The form token must verify; a token sent in `X-CSRFToken` must verify too.
fn verify_csrf(signer: &CsrfSigner, headers: &HeaderMap, form_token: &str) -> Result<(), CsrfError> {
    signer.verify(form_token)?;
    if let Some(value) = headers.get(CSRF_HEADER) {
        let header_token = value.to_str().map_err(|_| CsrfError::Malformed)?;
        if header_token.trim() != form_token.trim() {
            signer.verify(header_token)?;
        }
    }
    Ok(())
}

pub(crate) fn question_length_ok(question: &str) -> bool {
    (MIN_QUESTION_CHARS..=MAX_QUESTION_CHARS).contains(&question.chars().count())
}
