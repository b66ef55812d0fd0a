//! Summary card for a single wallet.

use leptos::prelude::*;

use crate::net::types::Wallet;
use crate::util::format::format_slw;

#[component]
pub fn WalletCard(wallet: Wallet) -> impl IntoView {
    let stake = wallet.stake.unwrap_or(0.0);
    view! {
        <div class="wallet-card">
            <h3 class="wallet-card__name">{wallet.name}</h3>
            <p class="wallet-card__address" title={wallet.address.clone()}>{wallet.address.clone()}</p>
            <p class="wallet-card__balance">"Balance: " {format_slw(wallet.balance)}</p>
            <p class="wallet-card__stake">"Stake: " {format_slw(stake)}</p>
        </div>
    }
}
