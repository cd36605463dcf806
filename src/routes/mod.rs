//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the chat API, the demo page and the demo-request form. Everything
//! else (the marketing pages, stylesheets, and the `/pkg` WASM bundle of the
//! chat widget) is served as static files from the site directory.

pub mod chat;
pub mod contact;
pub mod pages;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState, site_dir: &Path) -> Router {
    let static_site = ServeDir::new(site_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/demo", get(pages::demo))
        .route("/chat", post(chat::ask))
        .route("/contact", get(contact::page).post(contact::submit))
        .route("/api/predefined-question", get(chat::predefined_question))
        .route("/healthz", get(healthz))
        .fallback_service(static_site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
