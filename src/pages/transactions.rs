//! Transaction hub: send SLW and browse/export history.
//!
//! DESIGN
//! ======
//! A send is checked against the locally known balance before any request.
//! On success the new transfer is prepended to the history and deducted
//! from the wallet without refetching.

#[cfg(test)]
#[path = "transactions_test.rs"]
mod transactions_test;

use leptos::prelude::*;

use crate::components::toaster::{notify_error, notify_success};
use crate::components::wallet_select::WalletSelect;
use crate::net::api;
use crate::net::client::ApiClient;
use crate::net::types::{Transaction, TransactionKind, Wallet};
use crate::pages::report_error;
use crate::state::notice::NoticeState;
use crate::state::wallets::WalletsState;
use crate::util::format::{format_amount, format_slw, parse_positive_amount};

pub const INVALID_SEND: &str = "Please fill in all fields with valid data";
pub const INSUFFICIENT_BALANCE: &str = "Insufficient balance";
pub const SEND_FAILED: &str = "Transaction failed";
pub const LOAD_FAILED: &str = "Failed to load data";
pub const CSV_HEADER: &str = "ID,Type,Amount,Address,Date";
pub const CSV_FILE_NAME: &str = "transactions.csv";
/// Filter value meaning "every wallet".
pub const FILTER_ALL: &str = "all";

/// A send that passed local checks.
#[derive(Clone, Debug, PartialEq)]
pub struct SendRequest {
    pub sender: String,
    pub recipient: String,
    pub amount: f64,
}

/// Check the send form against the selected wallet's known balance.
pub fn validate_send(sender: Option<&Wallet>, recipient: &str, amount: &str) -> Result<SendRequest, &'static str> {
    let recipient = recipient.trim();
    let (Some(sender), Some(amount)) = (sender, parse_positive_amount(amount)) else {
        return Err(INVALID_SEND);
    };
    if recipient.is_empty() {
        return Err(INVALID_SEND);
    }
    if sender.balance < amount {
        return Err(INSUFFICIENT_BALANCE);
    }
    Ok(SendRequest {
        sender: sender.address.clone(),
        recipient: recipient.to_owned(),
        amount,
    })
}

pub fn sent_notice(amount: f64) -> String {
    format!("Sent {}!", format_slw(amount))
}

/// History rows for the chosen wallet filter.
pub fn filter_transactions(transactions: &[Transaction], filter: &str) -> Vec<Transaction> {
    if filter == FILTER_ALL || filter.is_empty() {
        return transactions.to_vec();
    }
    transactions.iter().filter(|tx| tx.address == filter).cloned().collect()
}

fn csv_field(raw: &str) -> String {
    if raw.contains([',', '"', '\n']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_owned()
    }
}

/// CSV export of `transactions`, header first.
pub fn transactions_csv(transactions: &[Transaction]) -> String {
    let mut lines = Vec::with_capacity(transactions.len() + 1);
    lines.push(CSV_HEADER.to_owned());
    for tx in transactions {
        lines.push(format!(
            "{},{},{},{},{}",
            csv_field(&tx.id),
            tx.kind.label(),
            tx.amount,
            csv_field(&tx.address),
            csv_field(&tx.date)
        ));
    }
    lines.join("\n")
}

/// Local record of a just-completed send.
pub fn sent_transaction(request: &SendRequest, tx_id: Option<String>, now: (String, String)) -> Transaction {
    let (fallback_id, date) = now;
    Transaction {
        id: tx_id.unwrap_or(fallback_id),
        date,
        kind: TransactionKind::Sent,
        amount: request.amount,
        address: request.sender.clone(),
    }
}

/// `(millis-since-epoch, ISO-8601)` from the browser clock.
fn now_stamp() -> (String, String) {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new_0();
        (format!("{}", date.get_time()), String::from(date.to_iso_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        (String::new(), String::new())
    }
}

fn download_csv(csv: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let encoded = String::from(js_sys::encode_uri_component(csv));
        let href = format!("data:text/csv;charset=utf-8,{encoded}");
        let anchor = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.create_element("a").ok())
            .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().ok());
        match anchor {
            Some(anchor) => {
                anchor.set_href(&href);
                anchor.set_download(CSV_FILE_NAME);
                anchor.click();
            }
            None => leptos::logging::warn!("csv export: no document available"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = csv;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Send,
    History,
}

#[component]
pub fn TransactionsPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let client = expect_context::<ApiClient>();

    let wallets = RwSignal::new(WalletsState::default());
    let transactions = RwSignal::new(Vec::<Transaction>::new());
    let filter = RwSignal::new(FILTER_ALL.to_owned());
    let recipient = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let sending = RwSignal::new(false);
    let tab = RwSignal::new(Tab::Send);

    let load_client = client.clone();
    let loaded = RwSignal::new(false);
    Effect::new(move || {
        if loaded.get_untracked() {
            return;
        }
        loaded.set(true);
        wallets.update(|w| w.loading = true);
        let client = load_client.clone();
        leptos::task::spawn_local(async move {
            let result = futures::try_join!(api::list_wallets(&client), api::transaction_history(&client));
            match result {
                Ok((list, history)) => {
                    wallets.try_update(|w| w.replace(list.wallets));
                    transactions.try_set(history.transactions);
                }
                Err(err) => {
                    wallets.try_update(|w| w.loading = false);
                    report_error(notices, &err, LOAD_FAILED);
                }
            }
        });
    });

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let request = wallets.with_untracked(|w| {
            validate_send(w.selected_wallet(), &recipient.get_untracked(), &amount.get_untracked())
        });
        let request = match request {
            Ok(request) => request,
            Err(msg) => {
                notify_error(notices, msg);
                return;
            }
        };
        sending.set(true);
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match api::send_transaction(&client, &request.sender, &request.recipient, request.amount).await {
                Ok(resp) => {
                    notify_success(notices, sent_notice(request.amount));
                    let record = sent_transaction(&request, resp.tx_id, now_stamp());
                    transactions.update(|txs| txs.insert(0, record));
                    wallets.update(|w| w.apply_send(&request.sender, request.amount));
                    recipient.set(String::new());
                    amount.set(String::new());
                }
                Err(err) => report_error(notices, &err, SEND_FAILED),
            }
            sending.set(false);
        });
    };

    let visible = move || transactions.with(|txs| filter.with(|f| filter_transactions(txs, f)));

    let on_export = move |_| {
        let csv = transactions.with_untracked(|txs| filter.with_untracked(|f| transactions_csv(&filter_transactions(txs, f))));
        download_csv(&csv);
    };

    let tab_class = move |which: Tab| {
        if tab.get() == which { "tab tab--active" } else { "tab" }
    };

    view! {
        <div class="transactions-page">
            <header class="page-header">
                <h1>"Transaction Hub"</h1>
            </header>
            <div class="tabs">
                <button class=move || tab_class(Tab::Send) on:click=move |_| tab.set(Tab::Send)>"Send Tokens"</button>
                <button class=move || tab_class(Tab::History) on:click=move |_| tab.set(Tab::History)>"History"</button>
            </div>
            <Show when=move || tab.get() == Tab::Send>
                <form class="card-form" on:submit={on_send.clone()}>
                    <label for="from-wallet">"From Wallet"</label>
                    <WalletSelect wallets=wallets id="from-wallet" />
                    <label for="recipient">"Recipient Address"</label>
                    <input
                        id="recipient"
                        type="text"
                        placeholder="Enter recipient address"
                        prop:value=move || recipient.get()
                        on:input=move |ev| recipient.set(event_target_value(&ev))
                    />
                    <label for="amount">"Amount (SLW)"</label>
                    <input
                        id="amount"
                        type="number"
                        min="0"
                        step="any"
                        prop:value=move || amount.get()
                        on:input=move |ev| amount.set(event_target_value(&ev))
                    />
                    <button class="button button--primary" type="submit" disabled=move || sending.get()>
                        {move || if sending.get() { "Sending..." } else { "Send" }}
                    </button>
                </form>
            </Show>
            <Show when=move || tab.get() == Tab::History>
                <div class="history-toolbar">
                    <select
                        class="form-select"
                        prop:value=move || filter.get()
                        on:change=move |ev| filter.set(event_target_value(&ev))
                    >
                        <option value=FILTER_ALL>"All Wallets"</option>
                        <For
                            each=move || wallets.get().items
                            key=|wallet| wallet.address.clone()
                            children=|wallet| view! { <option value={wallet.address}>{wallet.name}</option> }
                        />
                    </select>
                    <button class="button" on:click=on_export>"Export CSV"</button>
                </div>
                <table class="history-table">
                    <thead>
                        <tr>
                            <th>"Type"</th>
                            <th>"Amount"</th>
                            <th>"Address"</th>
                            <th>"Date"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=visible
                            key=|tx| tx.id.clone()
                            children=|tx| {
                                view! {
                                    <tr>
                                        <td>{tx.kind.label()}</td>
                                        <td>{format_amount(tx.amount)}</td>
                                        <td>{tx.address.clone()}</td>
                                        <td>{tx.date.clone()}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
