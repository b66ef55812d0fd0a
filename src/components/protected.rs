//! Route guard wrapper for authenticated pages.
//!
//! DESIGN
//! ======
//! The guard decision is a memo over the auth signal and the current path,
//! so a logout or a KYC demand made anywhere re-routes the open page without
//! the page itself watching for it.
//!
//! Until the persisted session has been read the wrapper renders a
//! placeholder. The server cannot see browser storage, so deciding earlier
//! would bounce every reload to the login page.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;
use crate::util::auth::{GuardDecision, guard};

/// Render `children` only when the session may see the current route.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let decision = Memo::new(move |_| {
        let (restored, access) = auth.with(|a| (a.is_restored(), a.access()));
        restored.then(|| location.pathname.with(|path| guard(path, access)))
    });

    move || match decision.get() {
        None => view! { <p class="loading">"Loading..."</p> }.into_any(),
        Some(GuardDecision::Render(_)) => children().into_any(),
        Some(GuardDecision::Redirect(path)) => view! { <Redirect path=path /> }.into_any(),
    }
}
