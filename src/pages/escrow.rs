//! Escrow page: list held funds, claim one into a wallet, process expiries.

#[cfg(test)]
#[path = "escrow_test.rs"]
mod escrow_test;

use leptos::prelude::*;

use crate::components::toaster::{notify_error, notify_success};
use crate::components::wallet_select::WalletSelect;
use crate::net::api;
use crate::net::client::ApiClient;
use crate::net::types::{Escrow, EscrowStatus};
use crate::pages::report_error;
use crate::state::notice::NoticeState;
use crate::state::wallets::WalletsState;
use crate::util::format::format_slw;

pub const SELECT_WALLET_AND_ESCROW: &str = "Please select a wallet and enter an escrow ID";
pub const CLAIMED: &str = "Escrow claimed successfully!";
pub const CLAIM_FAILED: &str = "Failed to claim escrow";
pub const LOAD_FAILED: &str = "Failed to load escrows or wallets";
pub const EXPIRED_PROCESSED: &str = "Expired escrows processed";
pub const EXPIRE_FAILED: &str = "Failed to process expired escrows";

/// Selected wallet plus a non-blank escrow id.
pub fn validate_claim(selected: Option<&str>, escrow_id: &str) -> Result<(String, String), &'static str> {
    let address = selected.map(str::trim).filter(|a| !a.is_empty());
    let escrow_id = escrow_id.trim();
    match address {
        Some(address) if !escrow_id.is_empty() => Ok((escrow_id.to_owned(), address.to_owned())),
        _ => Err(SELECT_WALLET_AND_ESCROW),
    }
}

/// Mark a claimed escrow locally; unknown ids are ignored.
pub fn mark_claimed(escrows: &mut [Escrow], escrow_id: &str) {
    if let Some(escrow) = escrows.iter_mut().find(|e| e.id == escrow_id) {
        escrow.status = EscrowStatus::Claimed;
    }
}

pub fn pending_escrows(escrows: &[Escrow]) -> Vec<Escrow> {
    escrows
        .iter()
        .filter(|e| e.status == EscrowStatus::Pending)
        .cloned()
        .collect()
}

fn load(client: &ApiClient, wallets: RwSignal<WalletsState>, escrows: RwSignal<Vec<Escrow>>, notices: RwSignal<NoticeState>) {
    wallets.update(|w| w.loading = true);
    let client = client.clone();
    leptos::task::spawn_local(async move {
        let result = futures::try_join!(api::list_wallets(&client), api::list_escrows(&client));
        match result {
            Ok((list, escrow_list)) => {
                wallets.try_update(|w| w.replace(list.wallets));
                escrows.try_set(escrow_list.escrows);
            }
            Err(err) => {
                wallets.try_update(|w| w.loading = false);
                report_error(notices, &err, LOAD_FAILED);
            }
        }
    });
}

#[component]
pub fn EscrowPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let client = expect_context::<ApiClient>();

    let wallets = RwSignal::new(WalletsState::default());
    let escrows = RwSignal::new(Vec::<Escrow>::new());
    let claim_id = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let load_client = client.clone();
    let loaded = RwSignal::new(false);
    Effect::new(move || {
        if loaded.get_untracked() {
            return;
        }
        loaded.set(true);
        load(&load_client, wallets, escrows, notices);
    });

    let claim_client = client.clone();
    let on_claim = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let selected = wallets.with_untracked(|w| w.selected.clone());
        let (escrow_id, address) = match validate_claim(selected.as_deref(), &claim_id.get_untracked()) {
            Ok(values) => values,
            Err(msg) => {
                notify_error(notices, msg);
                return;
            }
        };
        busy.set(true);
        let client = claim_client.clone();
        leptos::task::spawn_local(async move {
            match api::claim_escrow(&client, &escrow_id, &address).await {
                Ok(_) => {
                    notify_success(notices, CLAIMED);
                    escrows.update(|list| mark_claimed(list, &escrow_id));
                    claim_id.set(String::new());
                }
                Err(err) => report_error(notices, &err, CLAIM_FAILED),
            }
            busy.set(false);
        });
    };

    let on_expire = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match api::check_expired_escrows(&client).await {
                Ok(resp) => {
                    notify_success(notices, resp.message.unwrap_or_else(|| EXPIRED_PROCESSED.to_owned()));
                    load(&client, wallets, escrows, notices);
                }
                Err(err) => report_error(notices, &err, EXPIRE_FAILED),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="escrow-page">
            <header class="page-header">
                <h1>"Escrow Claims"</h1>
                <button class="button" disabled=move || busy.get() on:click=on_expire>"Process Expired"</button>
            </header>
            <form class="card-form" on:submit=on_claim>
                <label for="escrow-wallet">"Receive Into"</label>
                <WalletSelect wallets=wallets id="escrow-wallet" />
                <label for="escrow-id">"Escrow ID"</label>
                <input
                    id="escrow-id"
                    type="text"
                    placeholder="Enter escrow ID"
                    prop:value=move || claim_id.get()
                    on:input=move |ev| claim_id.set(event_target_value(&ev))
                />
                <button class="button button--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Claiming..." } else { "Claim Escrow" }}
                </button>
            </form>
            <section class="escrow-list">
                <h2>"Pending Escrows"</h2>
                <Show
                    when=move || escrows.with(|list| !pending_escrows(list).is_empty())
                    fallback=|| view! { <p class="empty-state">"No pending escrows found."</p> }
                >
                    <ul>
                        <For
                            each=move || escrows.get()
                            key=|escrow| (escrow.id.clone(), escrow.status)
                            children=move |escrow| {
                                let id = escrow.id.clone();
                                view! {
                                    <li class="escrow-list__item">
                                        <span>"ID: " {escrow.id.clone()}</span>
                                        <span>{format_slw(escrow.amount)}</span>
                                        <span>{escrow.status.label()}</span>
                                        <button
                                            class="button button--small"
                                            disabled={escrow.status != EscrowStatus::Pending}
                                            on:click=move |_| claim_id.set(id.clone())
                                        >
                                            "Use ID"
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </section>
        </div>
    }
}
