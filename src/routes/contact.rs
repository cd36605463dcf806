//! Demo-request contact form.
//!
//! `GET /contact` renders the form with a fresh CSRF token. `POST /contact`
//! validates the submission, logs the request, and re-renders the page with
//! either a thank-you notice or the list of field errors. Requests are not
//! stored anywhere beyond the log line.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::fmt::Write;

use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use super::chat::CSRF_INVALID;
use super::pages::escape_html;
use crate::state::AppState;

const CONTACT_TEMPLATE: &str = include_str!("../../site/contact.html");

const TOKEN_SLOT: &str = "{{csrf_token}}";
const NOTICE_SLOT: &str = "{{notice}}";
const SIZES_SLOT: &str = "{{company_size_options}}";

pub(crate) const DEMO_REQUEST_THANKS: &str =
    "Thank you for your demo request! Our team will contact you within 24 hours.";

const NAME_CHARS: (usize, usize) = (2, 50);
const COMPANY_CHARS: (usize, usize) = (2, 100);
const MAX_MESSAGE_CHARS: usize = 500;

/// `(value, label)` pairs offered by the company-size select.
pub const COMPANY_SIZES: &[(&str, &str)] = &[
    ("1-10", "1-10 employees"),
    ("11-50", "11-50 employees"),
    ("51-200", "51-200 employees"),
    ("201-1000", "201-1000 employees"),
    ("1000+", "1000+ employees"),
];

/// URL-encoded body of `POST /contact`.
#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub company_size: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub csrf_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactFieldError {
    #[error("{field} must be between {min} and {max} characters.")]
    Length { field: &'static str, min: usize, max: usize },
    #[error("Enter a valid email address.")]
    Email,
    #[error("Select a company size.")]
    CompanySize,
    #[error("Message must be at most {max} characters.")]
    MessageTooLong { max: usize },
}

/// A validated demo request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub company_size: String,
    pub message: String,
}

impl DemoRequest {
    /// Validate every field, collecting all errors rather than the first.
    ///
    /// # Errors
    ///
    /// Returns one `ContactFieldError` per invalid field, in form order.
    pub fn from_form(form: &ContactForm) -> Result<Self, Vec<ContactFieldError>> {
        let mut errors = Vec::new();

        let first_name = form.first_name.trim();
        check_length(&mut errors, "First name", first_name, NAME_CHARS);
        let last_name = form.last_name.trim();
        check_length(&mut errors, "Last name", last_name, NAME_CHARS);

        let email = normalize_email(&form.email);
        if email.is_none() {
            errors.push(ContactFieldError::Email);
        }

        let company = form.company.trim();
        check_length(&mut errors, "Company", company, COMPANY_CHARS);

        let company_size = form.company_size.trim();
        if !COMPANY_SIZES.iter().any(|(value, _)| *value == company_size) {
            errors.push(ContactFieldError::CompanySize);
        }

        let message = form.message.trim();
        if message.chars().count() > MAX_MESSAGE_CHARS {
            errors.push(ContactFieldError::MessageTooLong { max: MAX_MESSAGE_CHARS });
        }

        match email {
            Some(email) if errors.is_empty() => Ok(Self {
                first_name: first_name.to_owned(),
                last_name: last_name.to_owned(),
                email,
                company: company.to_owned(),
                company_size: company_size.to_owned(),
                message: message.to_owned(),
            }),
            _ => Err(errors),
        }
    }
}

/// `GET /contact`: empty demo-request form.
pub async fn page(State(state): State<AppState>) -> Html<String> {
    Html(render_contact_page(CONTACT_TEMPLATE, &state.csrf.issue(), ""))
}

/// `POST /contact`: validate and log a demo request.
pub async fn submit(State(state): State<AppState>, Form(form): Form<ContactForm>) -> Response {
    let token = state.csrf.issue();

    if let Err(e) = state.csrf.verify(&form.csrf_token) {
        tracing::warn!(error = %e, "demo request rejected");
        let notice = notice_html("danger", &[CSRF_INVALID.to_owned()]);
        return (StatusCode::BAD_REQUEST, Html(render_contact_page(CONTACT_TEMPLATE, &token, &notice))).into_response();
    }

    match DemoRequest::from_form(&form) {
        Ok(request) => {
            tracing::info!(
                first_name = %request.first_name,
                last_name = %request.last_name,
                company = %request.company,
                company_size = %request.company_size,
                "demo request received"
            );
            let notice = notice_html("success", &[DEMO_REQUEST_THANKS.to_owned()]);
            Html(render_contact_page(CONTACT_TEMPLATE, &token, &notice)).into_response()
        }
        Err(errors) => {
            tracing::debug!(errors = errors.len(), "demo request failed validation");
            let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
            let notice = notice_html("danger", &messages);
            (StatusCode::UNPROCESSABLE_ENTITY, Html(render_contact_page(CONTACT_TEMPLATE, &token, &notice)))
                .into_response()
        }
    }
}

pub(crate) fn render_contact_page(template: &str, csrf_token: &str, notice: &str) -> String {
    let mut options = String::new();
    for (value, label) in COMPANY_SIZES {
        let _ = writeln!(options, r#"<option value="{}">{}</option>"#, escape_html(value), escape_html(label));
    }
    template
        .replace(TOKEN_SLOT, &escape_html(csrf_token))
        .replace(SIZES_SLOT, &options)
        .replace(NOTICE_SLOT, notice)
}

fn notice_html(level: &str, messages: &[String]) -> String {
    let mut out = format!(r#"<div class="contact__notice contact__notice--{level}" role="alert"><ul>"#);
    for message in messages {
        let _ = write!(out, "<li>{}</li>", escape_html(message));
    }
    out.push_str("</ul></div>");
    out
}

fn check_length(errors: &mut Vec<ContactFieldError>, field: &'static str, value: &str, (min, max): (usize, usize)) {
    if !(min..=max).contains(&value.chars().count()) {
        errors.push(ContactFieldError::Length { field, min, max });
    }
}

/// Lowercased address with exactly one `@`, a non-empty local part, and a
/// dotted domain.
pub(crate) fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.chars().any(char::is_whitespace) {
        return None;
    }
    let (local, domain) = normalized.split_once('@')?;
    if local.is_empty() || domain.contains('@') {
        return None;
    }
    let dotted = domain.split('.').count() >= 2 && domain.split('.').all(|label| !label.is_empty());
    dotted.then_some(normalized)
}
