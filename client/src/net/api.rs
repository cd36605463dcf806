//! HTTP transport for chat exchanges.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, raced against a
//! `gloo-timers` timeout so a hung request cannot wedge the session.
//! Native builds (tests, tooling): stubs returning `ChatError::Unavailable`.
//!
//! ERROR HANDLING
//! ==============
//! Every failure surfaces as a `ChatError`; the session controller turns it
//! into an inline error message instead of propagating it further.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ChatError, ChatReply, ChatRequest, PredefinedQuestion};
use crate::state::config::ChatConfig;

/// Network seam of the chat session: one question in, one reply out.
#[allow(async_fn_in_trait)]
pub trait ChatTransport {
    /// Send one question and decode the server's reply.
    async fn ask(&self, request: &ChatRequest) -> Result<ChatReply, ChatError>;

    /// Fetch a random curated example question.
    async fn predefined_question(&self) -> Result<PredefinedQuestion, ChatError>;
}

/// Browser transport talking to the widget's own origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpTransport {
    endpoint: String,
    example_endpoint: String,
    timeout_ms: u32,
}

impl HttpTransport {
    pub fn new(config: &ChatConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            example_endpoint: config.example_endpoint.clone(),
            timeout_ms: config.request_timeout_ms,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }
}

impl ChatTransport for HttpTransport {
    async fn ask(&self, request: &ChatRequest) -> Result<ChatReply, ChatError> {
        #[cfg(feature = "csr")]
        {
            with_timeout(self.timeout_ms, post_question(&self.endpoint, request)).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ChatError::Unavailable)
        }
    }

    async fn predefined_question(&self) -> Result<PredefinedQuestion, ChatError> {
        #[cfg(feature = "csr")]
        {
            with_timeout(self.timeout_ms, fetch_json::<PredefinedQuestion>(&self.example_endpoint)).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &self.example_endpoint;
            Err(ChatError::Unavailable)
        }
    }
}

pub(crate) fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

#[cfg(feature = "csr")]
async fn post_question(endpoint: &str, request: &ChatRequest) -> Result<ChatReply, ChatError> {
    let params = web_sys::UrlSearchParams::new().map_err(|_| ChatError::Network("cannot build form body".to_owned()))?;
    for (name, value) in request.form_fields() {
        params.append(name, value);
    }

    let resp = gloo_net::http::Request::post(endpoint)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header(super::types::CSRF_HEADER, &request.csrf_token)
        .body(params)
        .map_err(|e| ChatError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ChatError::Network(e.to_string()))?;

    // Error statuses still carry a `{success: false, error}` body.
    match resp.json::<ChatReply>().await {
        Ok(reply) => Ok(reply),
        Err(_) if !resp.ok() => Err(ChatError::Network(request_failed_message(resp.status()))),
        Err(e) => Err(ChatError::Decode(e.to_string())),
    }
}

#[cfg(feature = "csr")]
async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ChatError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ChatError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ChatError::Network(request_failed_message(resp.status())));
    }
    resp.json::<T>().await.map_err(|e| ChatError::Decode(e.to_string()))
}

#[cfg(feature = "csr")]
async fn with_timeout<T>(
    timeout_ms: u32,
    request: impl std::future::Future<Output = Result<T, ChatError>>,
) -> Result<T, ChatError> {
    use futures::future::{Either, select};

    let timeout = gloo_timers::future::TimeoutFuture::new(timeout_ms);
    futures::pin_mut!(request, timeout);
    match select(request, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ChatError::Timeout { ms: timeout_ms }),
    }
}
