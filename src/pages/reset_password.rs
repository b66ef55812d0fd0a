//! Choose a new password using the emailed reset token.

#[cfg(test)]
#[path = "reset_password_test.rs"]
mod reset_password_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::toaster::{notify_error, notify_success};
use crate::net::api;
use crate::net::client::ApiClient;
use crate::state::notice::NoticeState;
use crate::util::auth::LOGIN_PATH;
use crate::util::redirect::{install_redirect, redirect_after};

pub const INVALID_RESET_LINK: &str = "Invalid reset link";
pub const PASSWORDS_DIFFER: &str = "Passwords do not match";
pub const RESET_SUCCESS: &str = "Password reset successfully. You can now sign in.";
pub const RESET_FAILED: &str = "Reset failed";
pub const RESET_REDIRECT_MS: u64 = 3_000;

/// Require a token and a non-empty password typed identically twice.
pub fn validate_reset(token: Option<&str>, password: &str, confirm: &str) -> Result<(String, String), &'static str> {
    let token = token.map(str::trim).filter(|t| !t.is_empty()).ok_or(INVALID_RESET_LINK)?;
    if password != confirm {
        return Err(PASSWORDS_DIFFER);
    }
    if password.is_empty() {
        return Err(crate::pages::login::FILL_ALL_FIELDS);
    }
    Ok((token.to_owned(), password.to_owned()))
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let client = expect_context::<ApiClient>();
    let query = use_query_map();

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let message = RwSignal::new(None::<String>);
    let redirect = RwSignal::new(None::<String>);
    install_redirect(redirect, use_navigate());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let token = query.with_untracked(|q| q.get("token"));
        let (token, password_value) =
            match validate_reset(token.as_deref(), &password.get_untracked(), &confirm.get_untracked()) {
                Ok(values) => values,
                Err(msg) => {
                    notify_error(notices, msg);
                    return;
                }
            };
        busy.set(true);
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match api::reset_password(&client, &token, &password_value).await {
                Ok(resp) => {
                    let text = resp.message.unwrap_or_else(|| RESET_SUCCESS.to_owned());
                    notify_success(notices, text.clone());
                    message.set(Some(text));
                    redirect_after(redirect, LOGIN_PATH, RESET_REDIRECT_MS);
                }
                Err(err) => notify_error(notices, err.user_message(RESET_FAILED)),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Reset Password"</h2>
                <Show when=move || message.get().is_some()>
                    <p class="auth-card__message">{move || message.get().unwrap_or_default()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label for="password">"New Password"</label>
                    <input
                        id="password"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <label for="confirm">"Confirm Password"</label>
                    <input
                        id="confirm"
                        type="password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="button button--primary" type="submit" disabled=move || busy.get()>
                        "Reset Password"
                    </button>
                </form>
            </div>
        </div>
    }
}
