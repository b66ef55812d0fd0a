//! Notice stack and the helpers pages use to raise notices.

use leptos::prelude::*;

use crate::state::notice::{NOTICE_TTL_MS, NoticeKind, NoticeState};

/// Queue a notice and schedule its dismissal.
pub fn notify(notices: RwSignal<NoticeState>, kind: NoticeKind, text: impl Into<String>) {
    let Some(id) = notices.try_update(|n| n.push(kind, text)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(NOTICE_TTL_MS))).await;
        notices.try_update(|n| n.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (id, NOTICE_TTL_MS);
}

pub fn notify_success(notices: RwSignal<NoticeState>, text: impl Into<String>) {
    notify(notices, NoticeKind::Success, text);
}

pub fn notify_info(notices: RwSignal<NoticeState>, text: impl Into<String>) {
    notify(notices, NoticeKind::Info, text);
}

pub fn notify_error(notices: RwSignal<NoticeState>, text: impl Into<String>) {
    notify(notices, NoticeKind::Error, text);
}

#[component]
pub fn Toaster() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || notices.get().items
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class={notice.kind.css_class()}>
                            <span class="notice__text">{notice.text}</span>
                            <button
                                class="notice__close"
                                title="Dismiss"
                                on:click=move |_| notices.update(|n| n.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
