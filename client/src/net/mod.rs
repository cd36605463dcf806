//! Networking modules for the chat endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the `ChatTransport` seam and its HTTP implementation, and
//! `types` defines the wire schema shared with the server.

pub mod api;
pub mod types;
