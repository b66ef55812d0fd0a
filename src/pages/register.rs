//! Registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::toaster::{notify_error, notify_success};
use crate::net::api;
use crate::net::client::ApiClient;
use crate::pages::login::{FILL_ALL_FIELDS, validate_login};
use crate::state::notice::NoticeState;
use crate::util::auth::LOGIN_PATH;
use crate::util::redirect::{install_redirect, redirect_after};

pub const REGISTER_SUCCESS: &str = "Account created! Please check your email to verify your account.";
pub const REGISTER_FAILED: &str = "Registration failed";
/// Time the success notice stays readable before returning to login.
pub const REGISTER_REDIRECT_MS: u64 = 10_000;

/// Same rules as login: trimmed email, non-empty password.
pub fn validate_registration(email: &str, password: &str) -> Result<(String, String), &'static str> {
    validate_login(email, password).map_err(|_| FILL_ALL_FIELDS)
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let client = expect_context::<ApiClient>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let done = RwSignal::new(false);
    let redirect = RwSignal::new(None::<String>);
    install_redirect(redirect, use_navigate());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() || done.get_untracked() {
            return;
        }
        let (email_value, password_value) = match validate_registration(&email.get_untracked(), &password.get_untracked()) {
            Ok(values) => values,
            Err(msg) => {
                notify_error(notices, msg);
                return;
            }
        };
        busy.set(true);
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match api::register(&client, &email_value, &password_value).await {
                Ok(_) => {
                    done.set(true);
                    notify_success(notices, REGISTER_SUCCESS);
                    redirect_after(redirect, LOGIN_PATH, REGISTER_REDIRECT_MS);
                }
                Err(err) => notify_error(notices, err.user_message(REGISTER_FAILED)),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Create Your Nilotic Wallet"</h2>
                <Show
                    when=move || done.get()
                    fallback=move || {
                        view! {
                            <form class="auth-form" on:submit={on_submit.clone()}>
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
                                    placeholder="Choose a password"
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                />
                                <button class="button button--primary" type="submit" disabled=move || busy.get()>
                                    {move || if busy.get() { "Registering..." } else { "Register" }}
                                </button>
                            </form>
                        }
                    }
                >
                    <p class="auth-card__message">{REGISTER_SUCCESS}</p>
                </Show>
                <p class="auth-card__links">
                    "Already have an account? "
                    <A href=LOGIN_PATH>"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
