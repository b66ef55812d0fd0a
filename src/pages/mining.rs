//! Mining page: stake SLW from a wallet to mine a block.

#[cfg(test)]
#[path = "mining_test.rs"]
mod mining_test;

use leptos::prelude::*;

use crate::components::toaster::{notify_error, notify_success};
use crate::components::wallet_select::WalletSelect;
use crate::net::api;
use crate::net::client::ApiClient;
use crate::net::types::MineResponse;
use crate::pages::{load_wallets, report_error};
use crate::state::notice::NoticeState;
use crate::state::wallets::WalletsState;
use crate::util::format::{format_slw, parse_positive_amount, short_address};

pub const SELECT_WALLET_AND_STAKE: &str = "Please select a wallet and enter a valid stake amount";
pub const MINING_FAILED: &str = "Mining failed";
pub const LOAD_FAILED: &str = "Failed to load wallets";

/// A block mined during this visit.
#[derive(Clone, Debug, PartialEq)]
pub struct MinedBlock {
    pub block_hash: String,
    pub address: String,
    pub stake: f64,
    pub new_balance: Option<f64>,
}

/// Selected wallet plus a positive stake.
pub fn validate_mine(selected: Option<&str>, stake: &str) -> Result<(String, f64), &'static str> {
    let address = selected.map(str::trim).filter(|a| !a.is_empty());
    match (address, parse_positive_amount(stake)) {
        (Some(address), Some(stake)) => Ok((address.to_owned(), stake)),
        _ => Err(SELECT_WALLET_AND_STAKE),
    }
}

/// Success text: the reward when reported, else the backend message.
pub fn mine_notice(resp: &MineResponse) -> String {
    match (resp.reward, resp.message.as_deref()) {
        (Some(reward), _) => format!("Mined block! Reward: {}", format_slw(reward)),
        (None, Some(message)) if !message.trim().is_empty() => message.to_owned(),
        _ => "Mined block!".to_owned(),
    }
}

pub fn mined_block(address: &str, stake: f64, resp: &MineResponse) -> MinedBlock {
    MinedBlock {
        block_hash: resp.block_hash.clone().unwrap_or_else(|| "unknown".to_owned()),
        address: resp.wallet_address.clone().unwrap_or_else(|| address.to_owned()),
        stake,
        new_balance: resp.new_balance,
    }
}

#[component]
pub fn MiningPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let client = expect_context::<ApiClient>();

    let wallets = RwSignal::new(WalletsState::default());
    let stake = RwSignal::new(String::new());
    let mining = RwSignal::new(false);
    let history = RwSignal::new(Vec::<MinedBlock>::new());

    let load_client = client.clone();
    let loaded = RwSignal::new(false);
    Effect::new(move || {
        if loaded.get_untracked() {
            return;
        }
        loaded.set(true);
        load_wallets(&load_client, wallets, notices, LOAD_FAILED);
    });

    let on_mine = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if mining.get_untracked() {
            return;
        }
        let selected = wallets.with_untracked(|w| w.selected.clone());
        let (address, stake_amount) = match validate_mine(selected.as_deref(), &stake.get_untracked()) {
            Ok(values) => values,
            Err(msg) => {
                notify_error(notices, msg);
                return;
            }
        };
        mining.set(true);
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match api::mine(&client, &address, stake_amount).await {
                Ok(resp) => {
                    notify_success(notices, mine_notice(&resp));
                    let block = mined_block(&address, stake_amount, &resp);
                    if let Some(balance) = block.new_balance {
                        wallets.update(|w| w.set_balance(&block.address, balance, resp.stake));
                    }
                    history.update(|h| h.insert(0, block));
                    stake.set(String::new());
                }
                Err(err) => report_error(notices, &err, MINING_FAILED),
            }
            mining.set(false);
        });
    };

    view! {
        <div class="mining-page">
            <header class="page-header">
                <h1>"Mining"</h1>
            </header>
            <form class="card-form" on:submit=on_mine>
                <label for="mine-wallet">"Wallet"</label>
                <WalletSelect wallets=wallets id="mine-wallet" />
                <label for="stake">"Stake Amount (SLW)"</label>
                <input
                    id="stake"
                    type="number"
                    min="0"
                    step="any"
                    prop:value=move || stake.get()
                    on:input=move |ev| stake.set(event_target_value(&ev))
                />
                <button class="button button--primary" type="submit" disabled=move || mining.get()>
                    {move || if mining.get() { "Mining..." } else { "Mine Block" }}
                </button>
            </form>
            <section class="mining-history">
                <h2>"Mined This Session"</h2>
                <ul>
                    <For
                        each=move || history.get()
                        key=|block| (block.block_hash.clone(), block.stake.to_bits())
                        children=|block| {
                            view! {
                                <li>
                                    <code>{short_address(&block.block_hash)}</code>
                                    " · " {short_address(&block.address)}
                                    " · staked " {format_slw(block.stake)}
                                </li>
                            }
                        }
                    />
                </ul>
            </section>
        </div>
    }
}
