//! Widget root: wires the session controller to the panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Builds one `ChatSession` per mount, restores recent history, binds the
//! host page's example-question buttons, and renders `ChatPanel`.

use std::rc::Rc;

use leptos::prelude::*;

use crate::components::chat_panel::{ChatPanel, PanelSignals};
use crate::net::api::HttpTransport;
use crate::state::config::ChatConfig;
use crate::state::session::ChatSession;
use crate::util::dom;
use crate::util::storage::LocalStorageStore;

/// Session type the browser widget runs.
pub type WidgetSession = ChatSession<HttpTransport, LocalStorageStore, PanelSignals>;

#[component]
pub fn ChatWidget() -> impl IntoView {
    let config = ChatConfig::default();
    let signals = PanelSignals::new();
    let transport = HttpTransport::new(&config);
    let store = LocalStorageStore::new(config.storage_key.clone());
    let session: Rc<WidgetSession> = Rc::new(ChatSession::new(config, transport, store, signals));

    let restored = session.restore_history();
    log::info!("chat widget ready, {restored} messages restored");

    let session = StoredValue::new_local(session);

    let bound = dom::bind_predefined_buttons(move |question| {
        let Some(session) = session.try_get_value() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let _ = session.submit_predefined(&question).await;
        });
    });
    log::debug!("bound {bound} example question buttons");

    view! { <ChatPanel session=session signals=signals /> }
}

/// Mount the widget into `#chat-widget`, or the body when the page has none.
#[cfg(feature = "csr")]
pub fn mount() {
    match dom::mount_element() {
        Some(el) => leptos::mount::mount_to(el, ChatWidget).forget(),
        None => {
            log::warn!("#{} not found, mounting chat widget on body", dom::MOUNT_ID);
            leptos::mount::mount_to_body(ChatWidget);
        }
    }
}
