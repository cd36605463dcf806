//! Host-page DOM glue.
//!
//! SYSTEM CONTEXT
//! ==============
//! The widget renders its own form and transcript, but a few things live in
//! the server-rendered page around it: the hidden `csrf_token` field, the
//! mount point, and example-question buttons. These helpers centralize the
//! web-sys calls so components stay free of raw DOM access. Every helper is
//! a no-op (or returns a neutral value) when the element is absent or when
//! compiled without the `csr` feature.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

pub const MOUNT_ID: &str = "chat-widget";
pub const CSRF_SELECTOR: &str = r#"input[name="csrf_token"]"#;
pub const PREDEFINED_SELECTOR: &str = ".predefined-question";
pub const QUESTION_ATTR: &str = "data-question";

/// Read the anti-forgery token from the page's hidden field.
pub fn csrf_token() -> String {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.query_selector(CSRF_SELECTOR).ok().flatten())
            .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Ask the user to confirm a destructive action.
pub fn confirm(prompt: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = prompt;
        false
    }
}

/// Element the widget mounts into, if the page provides one.
#[cfg(feature = "csr")]
pub fn mount_element() -> Option<web_sys::HtmlElement> {
    use wasm_bindgen::JsCast;

    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(MOUNT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
}

/// Attach `on_question` to every example-question button on the page.
///
/// Returns the number of buttons bound. Buttons without a non-blank
/// `data-question` attribute are skipped.
pub fn bind_predefined_buttons<F>(on_question: F) -> usize
where
    F: Fn(String) + 'static,
{
    #[cfg(feature = "csr")]
    {
        use std::rc::Rc;

        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return 0;
        };
        let Ok(buttons) = doc.query_selector_all(PREDEFINED_SELECTOR) else {
            return 0;
        };

        let on_question = Rc::new(on_question);
        let mut bound = 0;
        for i in 0..buttons.length() {
            let Some(el) = buttons.item(i).and_then(|node| node.dyn_into::<web_sys::Element>().ok()) else {
                continue;
            };
            let Some(question) = question_payload(el.get_attribute(QUESTION_ATTR).as_deref()) else {
                continue;
            };
            let handler = Rc::clone(&on_question);
            let closure = Closure::<dyn FnMut()>::new(move || handler(question.clone()));
            if el
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
                .is_ok()
            {
                bound += 1;
            }
            // Listeners live as long as the page.
            closure.forget();
        }
        bound
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = on_question;
        0
    }
}

/// Trimmed question text from a `data-question` attribute value.
pub(crate) fn question_payload(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim).filter(|q| !q.is_empty()).map(str::to_owned)
}
