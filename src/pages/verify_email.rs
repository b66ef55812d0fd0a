//! Email verification landing (`/verify?token=`).
//!
//! Runs once on mount. A verification that still requires KYC records the
//! pending KYC in auth state and continues to the KYC page; otherwise the
//! user is sent to sign in.

#[cfg(test)]
#[path = "verify_email_test.rs"]
mod verify_email_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::toaster::{notify_error, notify_success};
use crate::net::api;
use crate::net::client::ApiClient;
use crate::net::types::VerifyEmailResponse;
use crate::state::auth::{AuthState, PendingKyc};
use crate::state::notice::NoticeState;
use crate::util::auth::{LOGIN_PATH, kyc_path};
use crate::util::redirect::install_redirect;

pub const MISSING_TOKEN: &str = "Invalid or missing verification token";
pub const VERIFY_SUCCESS: &str = "Email verified successfully!";
pub const VERIFY_FAILED: &str = "Verification failed";

/// Where to go after a successful verification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerifyNext {
    Kyc { user_id: u64, kyc_token: String },
    Login,
}

pub fn verification_next(resp: &VerifyEmailResponse) -> VerifyNext {
    match (resp.user_id.filter(|id| *id > 0), resp.kyc_token.as_deref()) {
        (Some(user_id), Some(token)) if !token.is_empty() => VerifyNext::Kyc {
            user_id,
            kyc_token: token.to_owned(),
        },
        _ => VerifyNext::Login,
    }
}

/// Non-blank `token` query value.
pub fn token_from_query(raw: Option<String>) -> Option<String> {
    raw.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty())
}

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let client = expect_context::<ApiClient>();
    let query = use_query_map();

    let redirect = RwSignal::new(None::<String>);
    install_redirect(redirect, use_navigate());

    let started = RwSignal::new(false);
    Effect::new(move || {
        if started.get_untracked() {
            return;
        }
        started.set(true);

        let Some(token) = token_from_query(query.with_untracked(|q| q.get("token"))) else {
            notify_error(notices, MISSING_TOKEN);
            redirect.set(Some(LOGIN_PATH.to_owned()));
            return;
        };
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match api::verify_email(&client, &token).await {
                Ok(resp) => {
                    notify_success(notices, resp.message.clone().unwrap_or_else(|| VERIFY_SUCCESS.to_owned()));
                    match verification_next(&resp) {
                        VerifyNext::Kyc { user_id, kyc_token } => {
                            auth.update(|a| a.set_pending_kyc(PendingKyc::new(user_id, Some(kyc_token))));
                            redirect.set(Some(kyc_path(user_id)));
                        }
                        VerifyNext::Login => redirect.set(Some(LOGIN_PATH.to_owned())),
                    }
                }
                Err(err) => {
                    notify_error(notices, err.user_message(VERIFY_FAILED));
                    redirect.set(Some(LOGIN_PATH.to_owned()));
                }
            }
        });
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Verifying Your Email"</h2>
                <p>"Please wait while we verify your email address..."</p>
                <div class="spinner"></div>
            </div>
        </div>
    }
}
