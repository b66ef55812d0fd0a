use serde_json::json;

use super::*;
use crate::config::ClientConfig;

struct NoToken;

impl TokenSource for NoToken {
    fn current_token(&self) -> Option<String> {
        None
    }
}

fn client() -> ApiClient<NoToken> {
    ApiClient::new(&ClientConfig::with_base_url("http://localhost:5500"), NoToken)
}

// =============================================================
// Paths
// =============================================================

#[test]
fn kyc_endpoint_includes_user_id() {
    assert_eq!(kyc_endpoint(42), "/auth/kyc/42");
}

#[test]
fn wallet_balance_endpoint_trims_address() {
    assert_eq!(wallet_balance_endpoint(" NLT123 "), "/wallet/balance/NLT123");
}

#[test]
fn recent_query_carries_limit() {
    assert_eq!(recent_query(5), vec![("limit", "5".to_owned())]);
}

// =============================================================
// Payloads
// =============================================================

#[test]
fn credentials_payload_trims_email_only() {
    assert_eq!(
        credentials_payload(" a@b.com ", " pw "),
        json!({ "email": "a@b.com", "password": " pw " })
    );
}

#[test]
fn reset_password_payload_shape() {
    assert_eq!(
        reset_password_payload("tok", "secret"),
        json!({ "token": "tok", "password": "secret" })
    );
}

#[test]
fn create_wallet_payload_with_name() {
    assert_eq!(
        create_wallet_payload("a@b.com", Some(" Savings ")),
        json!({ "email": "a@b.com", "name": "Savings" })
    );
}

#[test]
fn create_wallet_payload_blank_name_is_omitted() {
    assert_eq!(create_wallet_payload("a@b.com", Some("  ")), json!({ "email": "a@b.com" }));
    assert_eq!(create_wallet_payload("a@b.com", None), json!({ "email": "a@b.com" }));
}

#[test]
fn send_payload_shape() {
    assert_eq!(
        send_payload("from", " to ", 2.5),
        json!({ "sender_address": "from", "receiver_address": "to", "amount": 2.5 })
    );
}

#[test]
fn mining_and_staking_payloads() {
    assert_eq!(mine_payload("w1", 10.0), json!({ "wallet_address": "w1", "stake": 10.0 }));
    assert_eq!(stake_payload("w1", 3.0), json!({ "address": "w1", "amount": 3.0 }));
    assert_eq!(unstake_payload("w1"), json!({ "address": "w1" }));
}

#[test]
fn claim_escrow_payload_numeric_id_is_a_number() {
    assert_eq!(
        claim_escrow_payload(" 17 ", "w1"),
        json!({ "escrow_id": 17, "wallet_address": "w1" })
    );
}

#[test]
fn claim_escrow_payload_keeps_non_numeric_id() {
    assert_eq!(
        claim_escrow_payload("esc-9", "w1"),
        json!({ "escrow_id": "esc-9", "wallet_address": "w1" })
    );
}

// =============================================================
// Outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn login_without_browser_reports_server_error() {
    let outcome = futures::executor::block_on(login(&client(), "a@b.com", "pw"));
    assert_eq!(
        outcome,
        LoginOutcome::Failed {
            message: LOGIN_SERVER_ERROR_MESSAGE.to_owned()
        }
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn endpoint_calls_without_browser_are_unavailable() {
    let api = client();
    assert_eq!(futures::executor::block_on(list_wallets(&api)), Err(ApiError::Unavailable));
    assert_eq!(futures::executor::block_on(mine(&api, "w1", 1.0)), Err(ApiError::Unavailable));
    assert_eq!(futures::executor::block_on(check_expired_escrows(&api)), Err(ApiError::Unavailable));
}
