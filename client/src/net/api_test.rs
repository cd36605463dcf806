#![cfg(not(feature = "csr"))]

use futures::executor::block_on;

use super::*;

#[test]
fn transport_takes_endpoint_and_timeout_from_config() {
    let config = ChatConfig { endpoint: "/ask".to_owned(), request_timeout_ms: 5_000, ..ChatConfig::default() };
    let transport = HttpTransport::new(&config);
    assert_eq!(transport.endpoint(), "/ask");
    assert_eq!(transport.timeout_ms(), 5_000);
}

#[test]
fn ask_is_unavailable_outside_browser() {
    let transport = HttpTransport::new(&ChatConfig::default());
    let result = block_on(transport.ask(&ChatRequest::new("What about GDPR?", "tok")));
    assert_eq!(result, Err(ChatError::Unavailable));
}

#[test]
fn predefined_question_is_unavailable_outside_browser() {
    let transport = HttpTransport::new(&ChatConfig::default());
    assert_eq!(block_on(transport.predefined_question()), Err(ChatError::Unavailable));
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message(502), "request failed: 502");
}
