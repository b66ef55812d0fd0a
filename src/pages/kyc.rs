//! KYC upload page (`/auth/kyc/:id`).
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached from login or email verification with a pending KYC in auth
//! state. The page needs both the route user id and the KYC token issued
//! for that user; without them it bounces to login.
//!
//! ERROR HANDLING
//! ==============
//! Backend rejections are shown as `"<error> - <details>"` with fixed
//! fallbacks for either half.

#[cfg(test)]
#[path = "kyc_test.rs"]
mod kyc_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::toaster::notify_error;
use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::state::auth::{AuthState, PendingKyc};
use crate::state::notice::NoticeState;
use crate::util::auth::LOGIN_PATH;
use crate::util::redirect::install_redirect;

pub const INVALID_KYC_DETAILS: &str = "Invalid or missing KYC details";
pub const KYC_INPUT_REQUIRED: &str = "Please upload a photo and provide additional information";
pub const KYC_SUCCESS: &str = "KYC submitted successfully!";
pub const KYC_FAILED: &str = "KYC submission failed";
pub const KYC_NO_DETAILS: &str = "No additional details";
pub const KYC_REDIRECT_MS: u64 = 2_000;

/// Resolve the user id and KYC token for the route.
///
/// The pending KYC must belong to the user named in the URL.
pub fn kyc_context(route_id: Option<&str>, pending: &PendingKyc) -> Result<(u64, String), &'static str> {
    let user_id = route_id
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .filter(|id| *id > 0)
        .ok_or(INVALID_KYC_DETAILS)?;
    if !pending.is_active() || pending.user_id != Some(user_id) {
        return Err(INVALID_KYC_DETAILS);
    }
    let token = pending
        .kyc_token
        .as_deref()
        .filter(|t| !t.is_empty())
        .ok_or(INVALID_KYC_DETAILS)?;
    Ok((user_id, token.to_owned()))
}

/// Require a chosen photo and non-blank additional information.
pub fn validate_kyc_submission(has_photo: bool, additional_info: &str) -> Result<String, &'static str> {
    let info = additional_info.trim();
    if !has_photo || info.is_empty() {
        return Err(KYC_INPUT_REQUIRED);
    }
    Ok(info.to_owned())
}

/// Notice text for a failed submission.
pub fn kyc_error_message(err: &ApiError) -> String {
    let (message, details) = match err {
        ApiError::Status { message, details, .. } => (message.as_deref(), details.as_deref()),
        ApiError::Validation(message) => (Some(message.as_str()), None),
        _ => (None, None),
    };
    format!("{} - {}", message.unwrap_or(KYC_FAILED), details.unwrap_or(KYC_NO_DETAILS))
}

#[component]
pub fn KycPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let client = expect_context::<ApiClient>();
    let params = use_params_map();

    let photo_input = NodeRef::<leptos::html::Input>::new();
    let photo_name = RwSignal::new(None::<String>);
    let additional_info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let message = RwSignal::new(None::<String>);
    let redirect = RwSignal::new(None::<String>);
    install_redirect(redirect, use_navigate());

    let context = move || {
        let route_id = params.with(|p| p.get("id"));
        auth.with(|a| kyc_context(route_id.as_deref(), a.pending_kyc()))
    };

    Effect::new(move || {
        // Skip once submitted: `complete_kyc` clears the pending state.
        if message.get().is_some() {
            return;
        }
        if let Err(msg) = context() {
            notify_error(notices, msg);
            redirect.set(Some(LOGIN_PATH.to_owned()));
        }
    });

    let on_photo_change = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let name = photo_input
                .get_untracked()
                .and_then(|el| el.files())
                .and_then(|files| files.get(0))
                .map(|file| file.name());
            photo_name.set(name);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (user_id, kyc_token) = match context() {
            Ok(ctx) => ctx,
            Err(msg) => {
                notify_error(notices, msg);
                return;
            }
        };
        let has_photo = photo_name.get_untracked().is_some();
        let info = match validate_kyc_submission(has_photo, &additional_info.get_untracked()) {
            Ok(info) => info,
            Err(msg) => {
                notify_error(notices, msg);
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            use crate::components::toaster::notify_success;
            use crate::util::redirect::redirect_after;

            let Some(photo) = photo_input
                .get_untracked()
                .and_then(|el| el.files())
                .and_then(|files| files.get(0))
            else {
                notify_error(notices, KYC_INPUT_REQUIRED);
                return;
            };
            busy.set(true);
            let client = client.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::submit_kyc(&client, user_id, &kyc_token, &photo, &info).await {
                    Ok(resp) => {
                        let text = resp.message.unwrap_or_else(|| KYC_SUCCESS.to_owned());
                        notify_success(notices, text.clone());
                        message.set(Some(text));
                        auth.update(|a| a.complete_kyc());
                        redirect_after(redirect, LOGIN_PATH, KYC_REDIRECT_MS);
                    }
                    Err(err) => {
                        leptos::logging::warn!("KYC submission for user {user_id} failed: {err}");
                        notify_error(notices, kyc_error_message(&err));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, kyc_token, info, &client);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Complete KYC Verification"</h2>
                <Show
                    when=move || message.get().is_none()
                    fallback=move || view! { <p class="auth-card__message">{move || message.get().unwrap_or_default()}</p> }
                >
                    <form class="auth-form" on:submit={on_submit.clone()}>
                        <label for="photo">"Upload Photo"</label>
                        <input id="photo" type="file" accept="image/*" node_ref=photo_input on:change=on_photo_change />
                        <p class="auth-form__hint">
                            {move || photo_name.get().unwrap_or_else(|| "Choose a photo to upload".to_owned())}
                        </p>
                        <label for="form-data">"Additional Information"</label>
                        <textarea
                            id="form-data"
                            rows="4"
                            placeholder="e.g., full name, address"
                            prop:value=move || additional_info.get()
                            on:input=move |ev| additional_info.set(event_target_value(&ev))
                        ></textarea>
                        <button class="button button--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Submitting..." } else { "Submit KYC" }}
                        </button>
                    </form>
                </Show>
            </div>
        </div>
    }
}
