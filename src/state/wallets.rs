//! Wallet-list state shared by the dashboard and the money-moving pages.
//!
//! DESIGN
//! ======
//! Pages apply the effect of a successful send or stake locally instead of
//! refetching, so the balance shown matches what the user just did. The
//! backend stays authoritative; the next load replaces everything.

#[cfg(test)]
#[path = "wallets_test.rs"]
mod wallets_test;

use crate::net::types::Wallet;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WalletsState {
    pub items: Vec<Wallet>,
    /// Address of the wallet selected in the page's form.
    pub selected: Option<String>,
    pub loading: bool,
}

impl WalletsState {
    /// Replace the list; keep the selection if it still exists, else pick
    /// the first wallet.
    pub fn replace(&mut self, wallets: Vec<Wallet>) {
        self.items = wallets;
        self.loading = false;
        let keep = self
            .selected
            .as_deref()
            .is_some_and(|addr| self.items.iter().any(|w| w.address == addr));
        if !keep {
            self.selected = self.items.first().map(|w| w.address.clone());
        }
    }

    pub fn select(&mut self, address: &str) {
        self.selected = self
            .items
            .iter()
            .find(|w| w.address == address)
            .map(|w| w.address.clone());
    }

    pub fn find(&self, address: &str) -> Option<&Wallet> {
        self.items.iter().find(|w| w.address == address)
    }

    pub fn selected_wallet(&self) -> Option<&Wallet> {
        self.selected.as_deref().and_then(|addr| self.find(addr))
    }

    /// Add a new wallet, or refresh it if the address is already listed.
    pub fn upsert(&mut self, wallet: Wallet) {
        match self.items.iter_mut().find(|w| w.address == wallet.address) {
            Some(existing) => *existing = wallet,
            None => self.items.push(wallet),
        }
        if self.selected.is_none() {
            self.selected = self.items.first().map(|w| w.address.clone());
        }
    }

    pub fn set_balance(&mut self, address: &str, balance: f64, stake: Option<f64>) {
        if let Some(wallet) = self.items.iter_mut().find(|w| w.address == address) {
            wallet.balance = balance;
            if stake.is_some() {
                wallet.stake = stake;
            }
        }
    }

    /// Deduct a sent amount.
    pub fn apply_send(&mut self, address: &str, amount: f64) {
        if let Some(wallet) = self.items.iter_mut().find(|w| w.address == address) {
            wallet.balance -= amount;
        }
    }

    /// Move `amount` from balance into stake.
    pub fn apply_stake(&mut self, address: &str, amount: f64) {
        if let Some(wallet) = self.items.iter_mut().find(|w| w.address == address) {
            wallet.balance -= amount;
            wallet.stake = Some(wallet.stake.unwrap_or(0.0) + amount);
        }
    }

    /// Return the whole stake to the balance.
    pub fn apply_unstake(&mut self, address: &str) {
        if let Some(wallet) = self.items.iter_mut().find(|w| w.address == address) {
            wallet.balance += wallet.stake.unwrap_or(0.0);
            wallet.stake = Some(0.0);
        }
    }

    pub fn total_balance(&self) -> f64 {
        self.items.iter().map(|w| w.balance).sum()
    }

    pub fn total_stake(&self) -> f64 {
        self.items.iter().filter_map(|w| w.stake).sum()
    }
}
