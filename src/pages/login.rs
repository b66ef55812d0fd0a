//! Login page: email + password sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drives the auth state machine: `begin_login` before the request and
//! `apply_login` with the decoded response. A response that arrives after a
//! newer attempt (or a logout) started is dropped by the ticket check.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::toaster::{notify_error, notify_success};
use crate::net::api;
use crate::net::client::ApiClient;
use crate::state::auth::{AuthState, LoginTransition};
use crate::state::notice::NoticeState;
use crate::util::auth::{GuardDecision, login_page_decision};
use crate::util::redirect::install_redirect;

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";
pub const LOGIN_SUCCESS: &str = "Logged in successfully!";
pub const KYC_PROMPT: &str = "Please complete KYC verification to proceed.";

/// Trim the email and require both fields.
pub fn validate_login(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(FILL_ALL_FIELDS);
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Notice to raise for a login transition.
pub fn transition_notice(transition: &LoginTransition) -> Result<&str, &str> {
    match transition {
        LoginTransition::Authenticated => Ok(LOGIN_SUCCESS),
        LoginTransition::KycPending { .. } => Ok(KYC_PROMPT),
        LoginTransition::Failed { message } => Err(message),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let client = expect_context::<ApiClient>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let redirect = RwSignal::new(None::<String>);
    install_redirect(redirect, use_navigate());

    Effect::new(move || {
        if let GuardDecision::Redirect(path) = login_page_decision(auth.with(|a| a.access())) {
            redirect.set(Some(path));
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) = match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(values) => values,
            Err(msg) => {
                notify_error(notices, msg);
                return;
            }
        };
        let Some(ticket) = auth.try_update(|a| a.begin_login()) else {
            return;
        };
        busy.set(true);

        let client = client.clone();
        leptos::task::spawn_local(async move {
            let outcome = api::login(&client, &email_value, &password_value).await;
            let transition = auth
                .try_update(|a| a.apply_login(ticket, outcome, &email_value))
                .flatten();
            busy.set(false);
            let Some(transition) = transition else {
                leptos::logging::log!("discarding superseded login response");
                return;
            };
            match transition_notice(&transition) {
                Ok(text) => notify_success(notices, text),
                Err(text) => notify_error(notices, text),
            }
            if let Some(path) = transition.redirect() {
                redirect.set(Some(path));
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Sign In to Nilotic Wallet"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        placeholder="Enter your password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="button button--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-card__links">
                    <A href="/forgot-password">"Forgot password?"</A>
                    " · "
                    <A href="/register">"Create an account"</A>
                    " · "
                    <A href="/resend-verification">"Resend verification email"</A>
                </p>
            </div>
        </div>
    }
}
