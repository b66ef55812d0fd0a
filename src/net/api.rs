//! Endpoint functions for the wallet backend.
//!
//! Each function maps one backend route onto `ApiClient`. Request bodies are
//! built by small pure helpers so their exact shape is testable natively.
//!
//! ERROR HANDLING
//! ==============
//! Everything except `login` returns `Result<_, ApiError>`; pages turn the
//! error into notice text with `ApiError::user_message`. `login` folds every
//! failure into `LoginOutcome::Failed` because the auth state machine only
//! distinguishes the three login outcomes.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::{Value, json};

use super::client::{ApiClient, Method, RequestBody, TokenSource};
use super::error::ApiError;
use super::types::{
    EscrowList, LOGIN_SERVER_ERROR_MESSAGE, LoginOutcome, MessageResponse, MineResponse, SendResponse,
    TransactionList, VerifyEmailResponse, WalletBalance, WalletCreated, WalletList,
};

/// Name given to a wallet when the user does not choose one.
pub const DEFAULT_WALLET_NAME: &str = "Genesis Wallet";

// =============================================================================
// PATHS & PAYLOADS
// =============================================================================

pub fn kyc_endpoint(user_id: u64) -> String {
    format!("/auth/kyc/{user_id}")
}

pub fn wallet_balance_endpoint(address: &str) -> String {
    format!("/wallet/balance/{}", address.trim())
}

pub fn credentials_payload(email: &str, password: &str) -> Value {
    json!({ "email": email.trim(), "password": password })
}

pub fn email_payload(email: &str) -> Value {
    json!({ "email": email.trim() })
}

pub fn reset_password_payload(token: &str, password: &str) -> Value {
    json!({ "token": token, "password": password })
}

/// Body for `POST /wallet/create`; a blank name falls back to the backend
/// default by omission.
pub fn create_wallet_payload(email: &str, name: Option<&str>) -> Value {
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => json!({ "email": email, "name": name }),
        None => json!({ "email": email }),
    }
}

pub fn send_payload(sender_address: &str, receiver_address: &str, amount: f64) -> Value {
    json!({
        "sender_address": sender_address.trim(),
        "receiver_address": receiver_address.trim(),
        "amount": amount,
    })
}

pub fn mine_payload(wallet_address: &str, stake: f64) -> Value {
    json!({ "wallet_address": wallet_address, "stake": stake })
}

pub fn stake_payload(address: &str, amount: f64) -> Value {
    json!({ "address": address, "amount": amount })
}

pub fn unstake_payload(address: &str) -> Value {
    json!({ "address": address })
}

/// Escrow ids are typed by hand; numeric ids go out as JSON numbers.
pub fn claim_escrow_payload(escrow_id: &str, wallet_address: &str) -> Value {
    let escrow_id = escrow_id.trim();
    let id = escrow_id
        .parse::<u64>()
        .map_or_else(|_| Value::String(escrow_id.to_owned()), Value::from);
    json!({ "escrow_id": id, "wallet_address": wallet_address })
}

pub fn recent_query(limit: usize) -> Vec<(&'static str, String)> {
    vec![("limit", limit.to_string())]
}

// =============================================================================
// AUTH
// =============================================================================

/// `POST /auth/register`.
///
/// # Errors
///
/// Returns the backend's rejection (for example a duplicate email).
pub async fn register<T: TokenSource>(client: &ApiClient<T>, email: &str, password: &str) -> Result<MessageResponse, ApiError> {
    client.post_json("/auth/register", credentials_payload(email, password)).await
}

/// `POST /auth/login`, decoded into one of the three login outcomes.
pub async fn login<T: TokenSource>(client: &ApiClient<T>, email: &str, password: &str) -> LoginOutcome {
    let prepared = client.prepare(Method::Post, "/auth/login", &[]);
    match client
        .send(prepared, RequestBody::Json(credentials_payload(email, password)))
        .await
    {
        Ok(raw) => LoginOutcome::decode(raw.status, &raw.body),
        Err(err) => {
            leptos::logging::warn!("login request failed: {err}");
            LoginOutcome::Failed {
                message: LOGIN_SERVER_ERROR_MESSAGE.to_owned(),
            }
        }
    }
}

/// `GET /auth/verify?token=`.
///
/// # Errors
///
/// Returns the backend's rejection of an expired or unknown token.
pub async fn verify_email<T: TokenSource>(client: &ApiClient<T>, token: &str) -> Result<VerifyEmailResponse, ApiError> {
    client.get_json("/auth/verify", &[("token", token.to_owned())]).await
}

/// `POST /auth/kyc/{user_id}` as multipart: `kyc_token`, `photo_path`
/// (the uploaded file) and `form_data`.
///
/// # Errors
///
/// Returns `ApiError::Transport` if the form cannot be assembled, otherwise
/// the backend's rejection.
#[cfg(feature = "hydrate")]
pub async fn submit_kyc<T: TokenSource>(
    client: &ApiClient<T>,
    user_id: u64,
    kyc_token: &str,
    photo: &web_sys::File,
    form_data: &str,
) -> Result<MessageResponse, ApiError> {
    let form = web_sys::FormData::new().map_err(|_| ApiError::Transport("FormData unavailable".to_owned()))?;
    form.append_with_str("kyc_token", kyc_token)
        .and_then(|()| form.append_with_blob_and_filename("photo_path", photo, &photo.name()))
        .and_then(|()| form.append_with_str("form_data", form_data))
        .map_err(|_| ApiError::Transport("failed to build KYC form".to_owned()))?;
    client.post_multipart(&kyc_endpoint(user_id), form).await
}

/// `POST /auth/forgot-password`.
///
/// # Errors
///
/// Returns the backend's rejection.
pub async fn forgot_password<T: TokenSource>(client: &ApiClient<T>, email: &str) -> Result<MessageResponse, ApiError> {
    client.post_json("/auth/forgot-password", email_payload(email)).await
}

/// `POST /auth/reset-password`.
///
/// # Errors
///
/// Returns the backend's rejection of the reset token or password.
pub async fn reset_password<T: TokenSource>(client: &ApiClient<T>, token: &str, password: &str) -> Result<MessageResponse, ApiError> {
    client.post_json("/auth/reset-password", reset_password_payload(token, password)).await
}

/// `POST /auth/resend-verification`.
///
/// # Errors
///
/// Returns the backend's rejection.
pub async fn resend_verification<T: TokenSource>(client: &ApiClient<T>, email: &str) -> Result<MessageResponse, ApiError> {
    client.post_json("/auth/resend-verification", email_payload(email)).await
}

// =============================================================================
// WALLETS
// =============================================================================

/// `GET /wallet/list`.
///
/// # Errors
///
/// Propagates request failures.
pub async fn list_wallets<T: TokenSource>(client: &ApiClient<T>) -> Result<WalletList, ApiError> {
    client.get_json("/wallet/list", &[]).await
}

/// `POST /wallet/create`.
///
/// # Errors
///
/// Propagates request failures.
pub async fn create_wallet<T: TokenSource>(client: &ApiClient<T>, email: &str, name: Option<&str>) -> Result<WalletCreated, ApiError> {
    client.post_json("/wallet/create", create_wallet_payload(email, name)).await
}

/// `GET /wallet/balance/{address}`.
///
/// # Errors
///
/// Propagates request failures.
pub async fn wallet_balance<T: TokenSource>(client: &ApiClient<T>, address: &str) -> Result<WalletBalance, ApiError> {
    client.get_json(&wallet_balance_endpoint(address), &[]).await
}

// =============================================================================
// TRANSACTIONS
// =============================================================================

/// `POST /transaction/send`.
///
/// # Errors
///
/// Propagates request failures, including backend balance checks.
pub async fn send_transaction<T: TokenSource>(
    client: &ApiClient<T>,
    sender_address: &str,
    receiver_address: &str,
    amount: f64,
) -> Result<SendResponse, ApiError> {
    client
        .post_json("/transaction/send", send_payload(sender_address, receiver_address, amount))
        .await
}

/// `GET /transaction/history`.
///
/// # Errors
///
/// Propagates request failures.
pub async fn transaction_history<T: TokenSource>(client: &ApiClient<T>) -> Result<TransactionList, ApiError> {
    client.get_json("/transaction/history", &[]).await
}

/// `GET /transaction/recent?limit=`.
///
/// # Errors
///
/// Propagates request failures.
pub async fn recent_transactions<T: TokenSource>(client: &ApiClient<T>, limit: usize) -> Result<TransactionList, ApiError> {
    client.get_json("/transaction/recent", &recent_query(limit)).await
}

// =============================================================================
// MINING & STAKING
// =============================================================================

/// `POST /mining/mine`.
///
/// # Errors
///
/// Propagates request failures.
pub async fn mine<T: TokenSource>(client: &ApiClient<T>, wallet_address: &str, stake: f64) -> Result<MineResponse, ApiError> {
    client.post_json("/mining/mine", mine_payload(wallet_address, stake)).await
}

/// `POST /stake`.
///
/// # Errors
///
/// Propagates request failures.
pub async fn stake<T: TokenSource>(client: &ApiClient<T>, address: &str, amount: f64) -> Result<MessageResponse, ApiError> {
    client.post_json("/stake", stake_payload(address, amount)).await
}

/// `POST /unstake`.
///
/// # Errors
///
/// Propagates request failures.
pub async fn unstake<T: TokenSource>(client: &ApiClient<T>, address: &str) -> Result<MessageResponse, ApiError> {
    client.post_json("/unstake", unstake_payload(address)).await
}

// =============================================================================
// ESCROW
// =============================================================================

/// `GET /escrow/list`.
///
/// # Errors
///
/// Propagates request failures.
pub async fn list_escrows<T: TokenSource>(client: &ApiClient<T>) -> Result<EscrowList, ApiError> {
    client.get_json("/escrow/list", &[]).await
}

/// `POST /escrow/claim`.
///
/// # Errors
///
/// Propagates request failures.
pub async fn claim_escrow<T: TokenSource>(client: &ApiClient<T>, escrow_id: &str, wallet_address: &str) -> Result<MessageResponse, ApiError> {
    client
        .post_json("/escrow/claim", claim_escrow_payload(escrow_id, wallet_address))
        .await
}

/// `GET /escrow/check-expired`: ask the backend to refund lapsed escrows.
///
/// # Errors
///
/// Propagates request failures.
pub async fn check_expired_escrows<T: TokenSource>(client: &ApiClient<T>) -> Result<MessageResponse, ApiError> {
    client.get_json("/escrow/check-expired", &[]).await
}
