//! Wallet management page: list, create named wallets, refresh balances.

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

use leptos::prelude::*;

use crate::components::toaster::{notify_error, notify_success};
use crate::components::wallet_card::WalletCard;
use crate::net::api;
use crate::net::client::ApiClient;
use crate::pages::{load_wallets, report_error};
use crate::state::auth::AuthState;
use crate::state::notice::NoticeState;
use crate::state::wallets::WalletsState;

pub const WALLET_NAME_REQUIRED: &str = "Wallet name is required";
pub const SIGN_IN_AGAIN: &str = "Please sign in again to create a wallet";
pub const LOAD_FAILED: &str = "Failed to load wallets";
pub const CREATE_FAILED: &str = "Failed to create wallet";
pub const CREATED: &str = "Wallet created successfully!";
pub const BALANCE_FAILED: &str = "Failed to refresh balance";

/// Trimmed, non-empty wallet name.
pub fn validate_wallet_name(raw: &str) -> Result<String, &'static str> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(WALLET_NAME_REQUIRED);
    }
    Ok(name.to_owned())
}

#[component]
pub fn WalletPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let client = expect_context::<ApiClient>();

    let wallets = RwSignal::new(WalletsState::default());
    let new_name = RwSignal::new(String::new());
    let creating = RwSignal::new(false);

    let load_client = client.clone();
    let loaded = RwSignal::new(false);
    Effect::new(move || {
        if loaded.get_untracked() {
            return;
        }
        loaded.set(true);
        load_wallets(&load_client, wallets, notices, LOAD_FAILED);
    });

    let create_client = client.clone();
    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if creating.get_untracked() {
            return;
        }
        let name = match validate_wallet_name(&new_name.get_untracked()) {
            Ok(name) => name,
            Err(msg) => {
                notify_error(notices, msg);
                return;
            }
        };
        let Some(email) = auth.with_untracked(|a| a.user().map(|u| u.email.clone())) else {
            notify_error(notices, SIGN_IN_AGAIN);
            return;
        };
        creating.set(true);
        let client = create_client.clone();
        leptos::task::spawn_local(async move {
            match api::create_wallet(&client, &email, Some(&name)).await {
                Ok(created) => {
                    wallets.update(|w| w.upsert(created.into_wallet(&name)));
                    new_name.set(String::new());
                    notify_success(notices, CREATED);
                }
                Err(err) => report_error(notices, &err, CREATE_FAILED),
            }
            creating.set(false);
        });
    };

    let refresh = move |address: String| {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match api::wallet_balance(&client, &address).await {
                Ok(balance) => wallets.update(|w| w.set_balance(&address, balance.balance, balance.stake)),
                Err(err) => report_error(notices, &err, BALANCE_FAILED),
            }
        });
    };

    view! {
        <div class="wallet-page">
            <header class="page-header">
                <h1>"My Wallets"</h1>
            </header>
            <form class="inline-form" on:submit=on_create>
                <input
                    type="text"
                    placeholder="New wallet name"
                    prop:value=move || new_name.get()
                    on:input=move |ev| new_name.set(event_target_value(&ev))
                />
                <button class="button button--primary" type="submit" disabled=move || creating.get()>
                    {move || if creating.get() { "Creating..." } else { "Create Wallet" }}
                </button>
            </form>
            <Show
                when=move || !wallets.with(|w| w.items.is_empty())
                fallback=move || {
                    view! {
                        <p class="empty-state">
                            {move || if wallets.with(|w| w.loading) { "Loading wallets..." } else { "No wallets yet." }}
                        </p>
                    }
                }
            >
                <div class="wallet-grid">
                    <For
                        each=move || wallets.get().items
                        key=|wallet| (wallet.address.clone(), wallet.balance.to_bits())
                        children={
                            let refresh = refresh.clone();
                            move |wallet| {
                                let address = wallet.address.clone();
                                let refresh = refresh.clone();
                                view! {
                                    <div class="wallet-grid__item">
                                        <WalletCard wallet=wallet />
                                        <button class="button button--small" on:click=move |_| refresh(address.clone())>
                                            "Refresh Balance"
                                        </button>
                                    </div>
                                }
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
