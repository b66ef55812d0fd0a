//! Top navigation bar: brand, section links, session actions, theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Section links only appear with a session token. Logout is the one place
//! besides login that clears the session; it bumps the login sequence so a
//! sign-in still in flight cannot resurrect the session afterwards.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::toaster::notify_info;
use crate::state::auth::AuthState;
use crate::state::notice::NoticeState;
use crate::state::theme::ThemeStore;
use crate::state::ui::UiState;
use crate::util::auth::LOGIN_PATH;
use crate::util::redirect::install_redirect;

pub const LOGGED_OUT: &str = "You have been logged out";

/// Authenticated sections, in display order.
pub const NAV_ITEMS: [(&str, &str); 6] = [
    ("/dashboard", "Dashboard"),
    ("/wallet", "Wallet"),
    ("/transactions", "Transactions"),
    ("/mining", "Mining"),
    ("/staking", "Staking"),
    ("/escrow-claim", "Escrow"),
];

/// CSS class for a nav link, highlighting the active route.
pub fn link_class(current: &str, href: &str) -> &'static str {
    if current == href {
        "navbar__link navbar__link--active"
    } else {
        "navbar__link"
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let pathname = use_location().pathname;
    let redirect = RwSignal::new(None::<String>);
    install_redirect(redirect, use_navigate());

    let logged_in = move || auth.with(|a| a.is_authenticated());
    let current = move || pathname.get();

    let on_logout = move |_| {
        auth.update(|a| a.logout());
        ui.update(UiState::close_mobile_menu);
        leptos::logging::log!("session cleared by logout");
        notify_info(notices, LOGGED_OUT);
        redirect.set(Some(LOGIN_PATH.to_owned()));
    };

    let on_toggle_theme = move |_| {
        let next = ThemeStore::default().switch(ui.get_untracked().theme);
        ui.update(|u| u.theme = next);
    };

    let menu_class = move || {
        if ui.get().mobile_menu_open {
            "navbar__links navbar__links--open"
        } else {
            "navbar__links"
        }
    };

    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">"Nilotic"</A>
            <button class="navbar__menu-toggle" title="Menu" on:click=move |_| ui.update(UiState::toggle_mobile_menu)>
                {move || if ui.get().mobile_menu_open { "✕" } else { "☰" }}
            </button>
            <div class=menu_class>
                <A href="/" attr:class=move || link_class(&current(), "/")>"Home"</A>
                <Show
                    when=logged_in
                    fallback=move || {
                        view! {
                            <A href="/register" attr:class=move || link_class(&current(), "/register")>"Register"</A>
                            <A href=LOGIN_PATH attr:class=move || link_class(&current(), LOGIN_PATH)>"Login"</A>
                        }
                    }
                >
                    {NAV_ITEMS
                        .iter()
                        .map(|(href, label)| {
                            let href = *href;
                            view! {
                                <A href=href attr:class=move || link_class(&current(), href)>{*label}</A>
                            }
                        })
                        .collect_view()}
                    <button class="navbar__logout" on:click=on_logout>"Logout"</button>
                </Show>
                <button class="navbar__theme" title="Toggle theme" on:click=on_toggle_theme>
                    {move || ui.with(|u| u.theme.toggle_icon())}
                </button>
            </div>
        </nav>
    }
}
