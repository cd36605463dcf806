//! Transient notice banner above the transcript.

#[cfg(test)]
#[path = "notice_banner_test.rs"]
mod notice_banner_test;

use leptos::prelude::*;

use crate::state::chat::{Notice, NoticeSlot};

/// How long a notice stays up before dismissing itself.
pub const NOTICE_DISMISS_MS: u32 = 5_000;

#[component]
pub fn NoticeBanner(notice: RwSignal<NoticeSlot>) -> impl IntoView {
    Effect::new(move || {
        let Some(seq) = notice.with(|slot| slot.current().map(|_| slot.seq())) else {
            return;
        };
        #[cfg(feature = "csr")]
        {
            gloo_timers::callback::Timeout::new(NOTICE_DISMISS_MS, move || {
                let _ = notice.try_update(|slot| slot.expire(seq));
            })
            .forget();
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = seq;
        }
    });

    move || {
        notice.with(|slot| slot.current().cloned()).map(|n| {
            let class = notice_class(&n);
            view! {
                <div class=class role="alert">
                    <span>{n.message}</span>
                    <button
                        type="button"
                        class="btn-close"
                        aria-label="Close"
                        on:click=move |_| notice.update(NoticeSlot::dismiss)
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}

pub(crate) fn notice_class(notice: &Notice) -> String {
    format!("chat-panel__notice chat-panel__notice--{}", notice.level.as_class())
}
