//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: local form signals, input
//! validation, backend calls, and notices. Shared rendering lives in
//! `components`. Validators are plain functions returning the exact notice
//! text so they can be tested without a browser.

pub mod dashboard;
pub mod escrow;
pub mod forgot_password;
pub mod home;
pub mod kyc;
pub mod login;
pub mod mining;
pub mod register;
pub mod resend_verification;
pub mod reset_password;
pub mod staking;
pub mod transactions;
pub mod verify_email;
pub mod wallet;

use leptos::prelude::*;

use crate::components::toaster::notify_error;
use crate::net::api;
use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::state::notice::NoticeState;
use crate::state::wallets::WalletsState;

/// Raise an error notice unless the failure only means "no browser".
pub(crate) fn report_error(notices: RwSignal<NoticeState>, err: &ApiError, fallback: &str) {
    if matches!(err, ApiError::Unavailable) {
        return;
    }
    if err.is_unauthorized() {
        leptos::logging::warn!("backend rejected the session: {err}");
    }
    notify_error(notices, err.user_message(fallback));
}

/// Fetch the wallet list into `wallets`.
pub(crate) fn load_wallets(
    client: &ApiClient,
    wallets: RwSignal<WalletsState>,
    notices: RwSignal<NoticeState>,
    failure: &'static str,
) {
    wallets.update(|w| w.loading = true);
    let client = client.clone();
    leptos::task::spawn_local(async move {
        match api::list_wallets(&client).await {
            Ok(list) => {
                wallets.try_update(|w| w.replace(list.wallets));
            }
            Err(err) => {
                wallets.try_update(|w| w.loading = false);
                report_error(notices, &err, failure);
            }
        }
    });
}

