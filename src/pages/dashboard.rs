//! Dashboard page: wallet summary, wallet cards, recent activity.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route. Loads wallets and the latest
//! transactions once on mount; creating a wallet appends it locally.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::toaster::notify_success;
use crate::components::wallet_card::WalletCard;
use crate::net::api::{self, DEFAULT_WALLET_NAME};
use crate::net::client::ApiClient;
use crate::net::types::{Transaction, TransactionKind};
use crate::pages::{load_wallets, report_error};
use crate::state::auth::AuthState;
use crate::state::notice::NoticeState;
use crate::state::wallets::WalletsState;
use crate::util::format::{format_slw, short_address};

pub const LOAD_WALLETS_FAILED: &str = "Failed to load wallets";
pub const LOAD_ACTIVITY_FAILED: &str = "Failed to load data";
pub const WALLET_CREATED: &str = "Wallet created successfully!";
pub const CREATE_WALLET_FAILED: &str = "Failed to create wallet";
/// Rows shown under "Recent Activity".
pub const RECENT_LIMIT: usize = 5;

/// Summary line for the header cards.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub wallet_count: usize,
    pub total_balance: String,
    pub total_stake: String,
}

pub fn summarize(wallets: &WalletsState) -> Summary {
    Summary {
        wallet_count: wallets.items.len(),
        total_balance: format_slw(wallets.total_balance()),
        total_stake: format_slw(wallets.total_stake()),
    }
}

/// Signed amount for an activity row: outgoing transfers are negative.
pub fn signed_amount(tx: &Transaction) -> String {
    match tx.kind {
        TransactionKind::Sent => format!("-{}", format_slw(tx.amount)),
        _ => format!("+{}", format_slw(tx.amount)),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let client = expect_context::<ApiClient>();

    let wallets = RwSignal::new(WalletsState::default());
    let recent = RwSignal::new(Vec::<Transaction>::new());
    let creating = RwSignal::new(false);

    let load_client = client.clone();
    let loaded = RwSignal::new(false);
    Effect::new(move || {
        if loaded.get_untracked() {
            return;
        }
        loaded.set(true);
        load_wallets(&load_client, wallets, notices, LOAD_WALLETS_FAILED);
        let client = load_client.clone();
        leptos::task::spawn_local(async move {
            match api::recent_transactions(&client, RECENT_LIMIT).await {
                Ok(list) => {
                    recent.try_set(list.transactions);
                }
                Err(err) => report_error(notices, &err, LOAD_ACTIVITY_FAILED),
            }
        });
    });

    let user_email = move || auth.with(|a| a.user().map(|u| u.email.clone()));

    let on_create = move |_| {
        if creating.get_untracked() {
            return;
        }
        let Some(email) = user_email() else {
            return;
        };
        creating.set(true);
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match api::create_wallet(&client, &email, None).await {
                Ok(created) => {
                    wallets.update(|w| w.upsert(created.into_wallet(DEFAULT_WALLET_NAME)));
                    notify_success(notices, WALLET_CREATED);
                }
                Err(err) => report_error(notices, &err, CREATE_WALLET_FAILED),
            }
            creating.set(false);
        });
    };

    let summary = move || wallets.with(summarize);

    view! {
        <div class="dashboard-page">
            <header class="page-header">
                <h1>"Dashboard"</h1>
                <button
                    class="button button--primary"
                    disabled=move || creating.get() || user_email().is_none()
                    title=move || if user_email().is_none() { crate::pages::wallet::SIGN_IN_AGAIN } else { "" }
                    on:click=on_create
                >
                    "Create Wallet"
                </button>
            </header>
            <section class="dashboard-summary">
                <div class="summary-card">
                    <span class="summary-card__label">"Wallets"</span>
                    <span class="summary-card__value">{move || summary().wallet_count}</span>
                </div>
                <div class="summary-card">
                    <span class="summary-card__label">"Total Balance"</span>
                    <span class="summary-card__value">{move || summary().total_balance}</span>
                </div>
                <div class="summary-card">
                    <span class="summary-card__label">"Total Staked"</span>
                    <span class="summary-card__value">{move || summary().total_stake}</span>
                </div>
            </section>
            <section class="dashboard-wallets">
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
                    <For
                        each=move || wallets.get().items
                        key=|wallet| (wallet.address.clone(), wallet.balance.to_bits())
                        children=|wallet| view! { <WalletCard wallet=wallet /> }
                    />
                </Show>
            </section>
            <section class="dashboard-activity">
                <h2>"Recent Activity"</h2>
                <ul class="activity-list">
                    <For
                        each=move || recent.get()
                        key=|tx| tx.id.clone()
                        children=|tx| {
                            view! {
                                <li class="activity-list__item">
                                    <span>{tx.kind.label()}</span>
                                    <span>{short_address(&tx.address)}</span>
                                    <span>{signed_amount(&tx)}</span>
                                    <span>{tx.date.clone()}</span>
                                </li>
                            }
                        }
                    />
                </ul>
            </section>
        </div>
    }
}
