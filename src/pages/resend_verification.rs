//! Resend the account verification email.

#[cfg(test)]
#[path = "resend_verification_test.rs"]
mod resend_verification_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::toaster::{notify_error, notify_success};
use crate::net::api;
use crate::net::client::ApiClient;
use crate::state::notice::NoticeState;
use crate::util::auth::LOGIN_PATH;
use crate::util::redirect::install_redirect;

pub const ENTER_EMAIL: &str = "Please enter your email";
pub const RESEND_SUCCESS: &str = "Verification link resent! Check your email.";
pub const RESEND_FAILED: &str = "Failed to resend verification link";

/// Trimmed, non-empty email.
pub fn validate_email(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim();
    if email.is_empty() {
        Err(ENTER_EMAIL)
    } else {
        Ok(email.to_owned())
    }
}

#[component]
pub fn ResendVerificationPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let client = expect_context::<ApiClient>();

    let email = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let redirect = RwSignal::new(None::<String>);
    install_redirect(redirect, use_navigate());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = match validate_email(&email.get_untracked()) {
            Ok(value) => value,
            Err(msg) => {
                notify_error(notices, msg);
                return;
            }
        };
        busy.set(true);
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match api::resend_verification(&client, &email_value).await {
                Ok(resp) => {
                    notify_success(notices, resp.message.unwrap_or_else(|| RESEND_SUCCESS.to_owned()));
                    redirect.set(Some(LOGIN_PATH.to_owned()));
                }
                Err(err) => notify_error(notices, err.user_message(RESEND_FAILED)),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Resend Verification Email"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="button button--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Sending..." } else { "Resend Link" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
