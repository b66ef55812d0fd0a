use super::*;
use crate::net::types::Wallet;

fn wallet(address: &str, balance: f64, stake: Option<f64>) -> Wallet {
    Wallet {
        id: None,
        name: "Genesis Wallet".to_owned(),
        address: address.to_owned(),
        balance,
        stake,
    }
}

fn tx(kind: TransactionKind, amount: f64) -> Transaction {
    Transaction {
        id: "1".to_owned(),
        date: "2025-01-01T00:00:00Z".to_owned(),
        kind,
        amount,
        address: "NLT1".to_owned(),
    }
}

#[test]
fn summarize_empty() {
    assert_eq!(
        summarize(&WalletsState::default()),
        Summary {
            wallet_count: 0,
            total_balance: "0 SLW".to_owned(),
            total_stake: "0 SLW".to_owned(),
        }
    );
}

#[test]
fn summarize_totals_across_wallets() {
    let mut state = WalletsState::default();
    state.replace(vec![wallet("a", 10.0, Some(2.5)), wallet("b", 0.5, None)]);
    let summary = summarize(&state);
    assert_eq!(summary.wallet_count, 2);
    assert_eq!(summary.total_balance, "10.5 SLW");
    assert_eq!(summary.total_stake, "2.5 SLW");
}

#[test]
fn signed_amount_negates_sent_only() {
    assert_eq!(signed_amount(&tx(TransactionKind::Sent, 3.0)), "-3 SLW");
    assert_eq!(signed_amount(&tx(TransactionKind::Received, 3.0)), "+3 SLW");
    assert_eq!(signed_amount(&tx(TransactionKind::Mined, 5.0)), "+5 SLW");
}
