//! Staking page: lock SLW into a wallet's stake or release it.

#[cfg(test)]
#[path = "staking_test.rs"]
mod staking_test;

use leptos::prelude::*;

use crate::components::toaster::{notify_error, notify_success};
use crate::components::wallet_select::WalletSelect;
use crate::net::api;
use crate::net::client::ApiClient;
use crate::pages::mining::{SELECT_WALLET_AND_STAKE, validate_mine};
use crate::pages::{load_wallets, report_error};
use crate::state::notice::NoticeState;
use crate::state::wallets::WalletsState;
use crate::util::format::format_slw;

pub const STAKING_FAILED: &str = "Staking failed";
pub const UNSTAKED: &str = "Unstaked successfully!";
pub const UNSTAKING_FAILED: &str = "Unstaking failed";
pub const LOAD_FAILED: &str = "Failed to load wallets";

/// Same input rules as mining: a selected wallet and a positive amount.
pub fn validate_stake(selected: Option<&str>, amount: &str) -> Result<(String, f64), &'static str> {
    validate_mine(selected, amount).map_err(|_| SELECT_WALLET_AND_STAKE)
}

pub fn staked_notice(amount: f64) -> String {
    format!("Staked {} successfully!", format_slw(amount))
}

#[component]
pub fn StakingPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let client = expect_context::<ApiClient>();

    let wallets = RwSignal::new(WalletsState::default());
    let amount = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let load_client = client.clone();
    let loaded = RwSignal::new(false);
    Effect::new(move || {
        if loaded.get_untracked() {
            return;
        }
        loaded.set(true);
        load_wallets(&load_client, wallets, notices, LOAD_FAILED);
    });

    let stake_client = client.clone();
    let on_stake = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let selected = wallets.with_untracked(|w| w.selected.clone());
        let (address, stake_amount) = match validate_stake(selected.as_deref(), &amount.get_untracked()) {
            Ok(values) => values,
            Err(msg) => {
                notify_error(notices, msg);
                return;
            }
        };
        busy.set(true);
        let client = stake_client.clone();
        leptos::task::spawn_local(async move {
            match api::stake(&client, &address, stake_amount).await {
                Ok(_) => {
                    notify_success(notices, staked_notice(stake_amount));
                    wallets.update(|w| w.apply_stake(&address, stake_amount));
                    amount.set(String::new());
                }
                Err(err) => report_error(notices, &err, STAKING_FAILED),
            }
            busy.set(false);
        });
    };

    let unstake = move |address: String| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match api::unstake(&client, &address).await {
                Ok(_) => {
                    notify_success(notices, UNSTAKED);
                    wallets.update(|w| w.apply_unstake(&address));
                }
                Err(err) => report_error(notices, &err, UNSTAKING_FAILED),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="staking-page">
            <header class="page-header">
                <h1>"Staking"</h1>
            </header>
            <form class="card-form" on:submit=on_stake>
                <label for="stake-wallet">"Wallet"</label>
                <WalletSelect wallets=wallets id="stake-wallet" />
                <label for="stake-amount">"Amount (SLW)"</label>
                <input
                    id="stake-amount"
                    type="number"
                    min="0"
                    step="any"
                    prop:value=move || amount.get()
                    on:input=move |ev| amount.set(event_target_value(&ev))
                />
                <button class="button button--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Working..." } else { "Stake" }}
                </button>
            </form>
            <section class="stake-list">
                <h2>"Current Stakes"</h2>
                <ul>
                    <For
                        each=move || wallets.get().items
                        key=|wallet| (wallet.address.clone(), wallet.stake.map(f64::to_bits))
                        children=move |wallet| {
                            let address = wallet.address.clone();
                            let stake = wallet.stake.unwrap_or(0.0);
                            let unstake = unstake.clone();
                            view! {
                                <li class="stake-list__item">
                                    <span>{wallet.name}</span>
                                    <span>{format_slw(stake)}</span>
                                    <button
                                        class="button button--danger button--small"
                                        disabled=move || busy.get() || stake <= 0.0
                                        on:click=move |_| unstake(address.clone())
                                    >
                                        "Unstake"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </section>
        </div>
    }
}
