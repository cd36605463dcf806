//! Chat panel: transcript, typing indicator, and question form.
//!
//! SYSTEM CONTEXT
//! ==============
//! `PanelSignals` is the `ChatView` the session controller drives. The
//! panel only renders those signals and forwards user intents (submit,
//! example, clear) to the session held in a local `StoredValue`.

#[cfg(test)]
#[path = "chat_panel_test.rs"]
mod chat_panel_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::app::WidgetSession;
use crate::components::chat_message::ChatMessage;
use crate::components::notice_banner::NoticeBanner;
use crate::state::chat::{Message, Notice, NoticeSlot};
use crate::state::config::GREETING;
use crate::state::session::ChatView;
use crate::util::dom;

/// Reactive view state written by the session controller.
///
/// The `try_*` setters tolerate a disposed panel, since an exchange guard
/// can outlive the component that started it.
#[derive(Clone, Copy, Debug)]
pub struct PanelSignals {
    pub messages: RwSignal<Vec<Message>>,
    pub input: RwSignal<String>,
    pub in_flight: RwSignal<bool>,
    pub notice: RwSignal<NoticeSlot>,
}

impl PanelSignals {
    pub fn new() -> Self {
        Self {
            messages: RwSignal::new(Vec::new()),
            input: RwSignal::new(String::new()),
            in_flight: RwSignal::new(false),
            notice: RwSignal::new(NoticeSlot::default()),
        }
    }
}

impl Default for PanelSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatView for PanelSignals {
    fn append_message(&self, message: &Message) {
        let message = message.clone();
        let _ = self.messages.try_update(|messages| messages.push(message));
    }

    fn reset_transcript(&self) {
        let _ = self.messages.try_set(Vec::new());
    }

    fn set_input(&self, text: &str) {
        let _ = self.input.try_set(text.to_owned());
    }

    fn clear_input(&self) {
        let _ = self.input.try_set(String::new());
    }

    fn set_in_flight(&self, in_flight: bool) {
        let _ = self.in_flight.try_set(in_flight);
    }

    fn notify(&self, notice: Notice) {
        let _ = self.notice.try_update(|slot| slot.show(notice));
    }

    fn confirm(&self, prompt: &str) -> bool {
        dom::confirm(prompt)
    }

    fn csrf_token(&self) -> String {
        dom::csrf_token()
    }
}

/// What a key press in the question input asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum InputKey {
    Submit,
    Clear,
    Other,
}

pub(crate) fn classify_key(key: &str, shift: bool) -> InputKey {
    match key {
        "Enter" if !shift => InputKey::Submit,
        "Escape" => InputKey::Clear,
        _ => InputKey::Other,
    }
}

#[component]
pub fn ChatPanel(session: StoredValue<Rc<WidgetSession>, LocalStorage>, signals: PanelSignals) -> impl IntoView {
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = signals.messages.with(Vec::len);
        let _ = signals.in_flight.get();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let submit = move |text: String| {
        let Some(session) = session.try_get_value() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let _ = session.submit_question(&text).await;
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit(signals.input.get_untracked());
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match classify_key(&ev.key(), ev.shift_key()) {
        InputKey::Submit => {
            ev.prevent_default();
            submit(signals.input.get_untracked());
        }
        InputKey::Clear => signals.input.set(String::new()),
        InputKey::Other => {}
    };

    let on_example = move |_| {
        let Some(session) = session.try_get_value() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let _ = session.submit_example().await;
        });
    };

    let on_clear = move |_| {
        session.with_value(|s| {
            s.clear_history();
        });
    };

    let busy = move || signals.in_flight.get();

    view! {
        <div class="chat-panel">
            <NoticeBanner notice=signals.notice />

            <div class="chat-panel__messages" node_ref=messages_ref>
                <div class="message assistant">
                    <div class="message-content">{GREETING}</div>
                </div>
                {move || {
                    signals
                        .messages
                        .get()
                        .into_iter()
                        .map(|message| view! { <ChatMessage message=message /> })
                        .collect::<Vec<_>>()
                }}
                {move || busy().then(|| view! { <div class="typing-indicator">"Assistant is typing..."</div> })}
            </div>

            <form class="chat-panel__form" class:loading=busy on:submit=on_submit>
                <input
                    class="chat-panel__input"
                    type="text"
                    name="question"
                    autocomplete="off"
                    placeholder="Ask about SOC 2, GDPR, HIPAA..."
                    disabled=busy
                    prop:value=move || signals.input.get()
                    on:input=move |ev| signals.input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button type="submit" class="btn btn--primary" disabled=busy>
                    "Send"
                </button>
                <button type="button" class="btn" disabled=busy on:click=on_example>
                    "Try an example"
                </button>
                <button type="button" class="btn" on:click=on_clear>
                    "Clear history"
                </button>
            </form>
        </div>
    }
}
