//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! handbook is immutable after startup, so it is shared behind an `Arc`
//! without a lock.

use std::sync::Arc;

use crate::services::csrf::CsrfSigner;
use crate::services::handbook::Handbook;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub handbook: Arc<Handbook>,
    pub csrf: CsrfSigner,
}

impl AppState {
    #[must_use]
    pub fn new(handbook: Handbook, csrf: CsrfSigner) -> Self {
        Self { handbook: Arc::new(handbook), csrf }
    }
}
