use super::*;

fn wallet(address: &str, balance: f64) -> Wallet {
    Wallet {
        id: None,
        name: "Main".to_owned(),
        address: address.to_owned(),
        balance,
        stake: None,
    }
}

fn tx(id: &str, kind: TransactionKind, amount: f64, address: &str) -> Transaction {
    Transaction {
        id: id.to_owned(),
        date: "2025-03-01T10:00:00Z".to_owned(),
        kind,
        amount,
        address: address.to_owned(),
    }
}

// =============================================================
// Send validation
// =============================================================

#[test]
fn validate_send_accepts_covered_amount() {
    let w = wallet("NLT1", 10.0);
    assert_eq!(
        validate_send(Some(&w), " NLT2 ", "2.5"),
        Ok(SendRequest {
            sender: "NLT1".to_owned(),
            recipient: "NLT2".to_owned(),
            amount: 2.5,
        })
    );
}

#[test]
fn validate_send_allows_exact_balance() {
    let w = wallet("NLT1", 10.0);
    assert!(validate_send(Some(&w), "NLT2", "10").is_ok());
}

#[test]
fn validate_send_requires_all_fields() {
    let w = wallet("NLT1", 10.0);
    assert_eq!(validate_send(None, "NLT2", "1"), Err(INVALID_SEND));
    assert_eq!(validate_send(Some(&w), "  ", "1"), Err(INVALID_SEND));
    assert_eq!(validate_send(Some(&w), "NLT2", ""), Err(INVALID_SEND));
    assert_eq!(validate_send(Some(&w), "NLT2", "0"), Err(INVALID_SEND));
    assert_eq!(validate_send(Some(&w), "NLT2", "-3"), Err(INVALID_SEND));
}

#[test]
fn validate_send_rejects_overdraft() {
    let w = wallet("NLT1", 1.0);
    assert_eq!(validate_send(Some(&w), "NLT2", "1.5"), Err(INSUFFICIENT_BALANCE));
}

#[test]
fn sent_notice_text() {
    assert_eq!(sent_notice(2.5), "Sent 2.5 SLW!");
}

// =============================================================
// History
// =============================================================

#[test]
fn filter_all_returns_everything() {
    let txs = vec![tx("1", TransactionKind::Sent, 1.0, "a"), tx("2", TransactionKind::Mined, 5.0, "b")];
    assert_eq!(filter_transactions(&txs, FILTER_ALL), txs);
    assert_eq!(filter_transactions(&txs, ""), txs);
}

#[test]
fn filter_by_wallet_address() {
    let txs = vec![tx("1", TransactionKind::Sent, 1.0, "a"), tx("2", TransactionKind::Mined, 5.0, "b")];
    let only_b = filter_transactions(&txs, "b");
    assert_eq!(only_b.len(), 1);
    assert_eq!(only_b[0].id, "2");
}

#[test]
fn csv_has_header_and_rows() {
    let txs = vec![tx("7", TransactionKind::Received, 3.0, "NLT1"), tx("8", TransactionKind::Sent, 0.25, "NLT2")];
    assert_eq!(
        transactions_csv(&txs),
        "ID,Type,Amount,Address,Date\n\
         7,Received,3,NLT1,2025-03-01T10:00:00Z\n\
         8,Sent,0.25,NLT2,2025-03-01T10:00:00Z"
    );
}

#[test]
fn csv_of_empty_history_is_header_only() {
    assert_eq!(transactions_csv(&[]), CSV_HEADER);
}

#[test]
fn csv_quotes_fields_with_commas() {
    let txs = vec![tx("1", TransactionKind::Sent, 1.0, "addr,with\"quote")];
    assert!(transactions_csv(&txs).ends_with(",\"addr,with\"\"quote\",2025-03-01T10:00:00Z"));
}

#[test]
fn sent_transaction_prefers_backend_id() {
    let request = SendRequest {
        sender: "NLT1".to_owned(),
        recipient: "NLT2".to_owned(),
        amount: 4.0,
    };
    let now = ("1700000000000".to_owned(), "2025-03-01T10:00:00.000Z".to_owned());
    let with_id = sent_transaction(&request, Some("tx-9".to_owned()), now.clone());
    assert_eq!(with_id.id, "tx-9");
    assert_eq!(with_id.kind, TransactionKind::Sent);
    assert_eq!(with_id.address, "NLT1");

    let without_id = sent_transaction(&request, None, now);
    assert_eq!(without_id.id, "1700000000000");
    assert_eq!(without_id.date, "2025-03-01T10:00:00.000Z");
}
