//! Wallet picker bound to a page's `WalletsState`.

#[cfg(test)]
#[path = "wallet_select_test.rs"]
mod wallet_select_test;

use leptos::prelude::*;

use crate::net::types::Wallet;
use crate::state::wallets::WalletsState;
use crate::util::format::{format_slw, short_address};

/// `<option>` text: name, shortened address, balance.
pub fn wallet_option_label(wallet: &Wallet) -> String {
    format!(
        "{} ({}) - {}",
        wallet.name,
        short_address(&wallet.address),
        format_slw(wallet.balance)
    )
}

#[component]
pub fn WalletSelect(wallets: RwSignal<WalletsState>, #[prop(optional)] id: &'static str) -> impl IntoView {
    view! {
        <select
            id=id
            class="form-select"
            prop:value=move || wallets.with(|w| w.selected.clone().unwrap_or_default())
            on:change=move |ev| {
                let address = event_target_value(&ev);
                wallets.update(|w| w.select(&address));
            }
        >
            <For
                each=move || wallets.get().items
                key=|wallet| wallet.address.clone()
                children=move |wallet| {
                    let label = wallet_option_label(&wallet);
                    view! { <option value={wallet.address}>{label}</option> }
                }
            />
        </select>
    }
}
