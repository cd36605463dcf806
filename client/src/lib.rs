//! Chat widget client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Compiled to WASM with the `csr` feature and loaded by the demo page.
//! Native builds keep the same modules with browser calls stubbed out, which
//! is how the test suite runs.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    app::mount();
}
