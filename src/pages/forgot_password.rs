//! Request a password reset link.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::toaster::{notify_error, notify_success};
use crate::net::api;
use crate::net::client::ApiClient;
use crate::pages::resend_verification::validate_email;
use crate::state::notice::NoticeState;
use crate::util::auth::LOGIN_PATH;
use crate::util::redirect::{install_redirect, redirect_after};

pub const FORGOT_SUCCESS: &str = "If that email is registered, a reset link is on its way.";
pub const FORGOT_FAILED: &str = "Request failed";
pub const FORGOT_REDIRECT_MS: u64 = 3_000;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let client = expect_context::<ApiClient>();

    let email = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let message = RwSignal::new(None::<String>);
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
            match api::forgot_password(&client, &email_value).await {
                Ok(resp) => {
                    let text = resp.message.unwrap_or_else(|| FORGOT_SUCCESS.to_owned());
                    notify_success(notices, text.clone());
                    message.set(Some(text));
                    redirect_after(redirect, LOGIN_PATH, FORGOT_REDIRECT_MS);
                }
                Err(err) => notify_error(notices, err.user_message(FORGOT_FAILED)),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Forgot Password"</h2>
                <Show when=move || message.get().is_some()>
                    <p class="auth-card__message">{move || message.get().unwrap_or_default()}</p>
                </Show>
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
                        "Send Reset Link"
                    </button>
                </form>
                <p class="auth-card__links">
                    <A href=LOGIN_PATH>"Back to sign in"</A>
                </p>
            </div>
        </div>
    }
}
