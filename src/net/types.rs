//! Wire DTOs for the wallet backend.
//!
//! DESIGN
//! ======
//! The backend is loosely typed: ids arrive as numbers or strings, optional
//! fields are omitted or `null`, and `/auth/login` returns one of several
//! unrelated shapes. Everything is normalized here, at the boundary, so pages
//! and state only see the typed forms below.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::error::body_error_message;

/// Generic `{ "message": ... }` acknowledgement.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of `GET /auth/verify`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VerifyEmailResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub kyc_token: Option<String>,
}

/// A wallet owned by the signed-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub stake: Option<f64>,
}

/// Response of `GET /wallet/list`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WalletList {
    #[serde(default)]
    pub wallets: Vec<Wallet>,
}

/// Response of `POST /wallet/create`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WalletCreated {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    pub address: String,
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub stake: Option<f64>,
}

impl WalletCreated {
    /// Convert into a list entry, using `requested_name` when the backend
    /// does not echo one.
    pub fn into_wallet(self, requested_name: &str) -> Wallet {
        Wallet {
            id: None,
            name: self.name.unwrap_or_else(|| requested_name.to_owned()),
            address: self.address,
            balance: self.balance,
            stake: self.stake,
        }
    }
}

/// Response of `GET /wallet/balance/{address}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WalletBalance {
    pub address: String,
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub stake: Option<f64>,
}

/// Direction of a transaction relative to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Sent,
    Received,
    Mined,
    #[serde(other)]
    Other,
}

impl TransactionKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Sent => "Sent",
            Self::Received => "Received",
            Self::Mined => "Mined",
            Self::Other => "Other",
        }
    }
}

/// One entry of the transaction history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub id: String,
    #[serde(default)]
    pub date: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    #[serde(default)]
    pub address: String,
}

/// Response of `GET /transaction/history` and `/transaction/recent`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionList {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// Response of `POST /transaction/send`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SendResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, alias = "transaction_id", deserialize_with = "deserialize_optional_string_from_scalar")]
    pub tx_id: Option<String>,
}

/// Response of `POST /mining/mine`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MineResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub reward: Option<f64>,
    #[serde(default)]
    pub wallet_address: Option<String>,
    #[serde(default)]
    pub new_balance: Option<f64>,
    #[serde(default)]
    pub stake: Option<f64>,
    #[serde(default)]
    pub block_hash: Option<String>,
}

/// Escrow lifecycle as reported by the backend, which capitalizes the
/// stored status while the client writes it lowercase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EscrowStatus {
    #[serde(alias = "Pending")]
    Pending,
    #[serde(alias = "Claimed")]
    Claimed,
    #[serde(alias = "Expired")]
    Expired,
    #[serde(other)]
    Other,
}

impl EscrowStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Claimed => "Claimed",
            Self::Expired => "Expired",
            Self::Other => "Unknown",
        }
    }
}

/// Funds held by the backend for the user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Escrow {
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub id: String,
    pub amount: f64,
    pub status: EscrowStatus,
}

/// Response of `GET /escrow/list`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EscrowList {
    #[serde(default)]
    pub escrows: Vec<Escrow>,
}

// =============================================================================
// LOGIN
// =============================================================================

/// Shown when a login fails without a backend explanation.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please check your credentials.";
/// Shown when a login fails on the server side or the network.
pub const LOGIN_SERVER_ERROR_MESSAGE: &str = "Login failed due to a server error. Please try again later.";
/// Shown when the backend demands KYC but omits the user id.
pub const MISSING_KYC_USER_MESSAGE: &str = "Server error: Missing user ID for KYC";

/// Decoded result of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials accepted; a session token was issued.
    Authenticated { token: String, user_id: Option<u64> },
    /// Credentials accepted but identity verification must finish first.
    KycRequired { user_id: u64, kyc_token: Option<String> },
    /// Rejected or malformed; `message` is ready for display.
    Failed { message: String },
}

impl LoginOutcome {
    /// Decode a raw response. The KYC shape is accepted with any status
    /// because the backend sends it as a 401.
    pub fn decode(status: u16, body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => Self::from_value(status, &value),
            Err(_) => Self::Failed { message: LOGIN_SERVER_ERROR_MESSAGE.to_owned() },
        }
    }

    pub fn from_value(status: u16, body: &Value) -> Self {
        if let Some(token) = body
            .get("access_token")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
        {
            return Self::Authenticated {
                token: token.to_owned(),
                user_id: body.get("user_id").and_then(id_from_value),
            };
        }

        let kyc_flag = body.get("kyc_required").and_then(Value::as_bool).unwrap_or(false);
        let kyc_token = body
            .get("kyc_token")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .map(str::to_owned);
        if kyc_flag || kyc_token.is_some() {
            return match body.get("user_id").and_then(id_from_value).filter(|id| *id > 0) {
                Some(user_id) => Self::KycRequired { user_id, kyc_token },
                None => Self::Failed { message: MISSING_KYC_USER_MESSAGE.to_owned() },
            };
        }

        let fallback = if status >= 500 {
            LOGIN_SERVER_ERROR_MESSAGE
        } else {
            LOGIN_FAILED_MESSAGE
        };
        Self::Failed {
            message: body_error_message(body).unwrap_or_else(|| fallback.to_owned()),
        }
    }
}

// =============================================================================
// LENIENT SCALARS
// =============================================================================

/// Accept a positive integer or an integer-valued string.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn id_from_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return Some(int);
            }
            number
                .as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        }
        Value::String(raw) => raw.trim().parse().ok(),
        _ => None,
    }
}

fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    id_from_value(&value)
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("expected integer id, got {value}")))
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn deserialize_string_from_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    scalar_to_string(value).ok_or_else(|| D::Error::custom("expected string or number"))
}

fn deserialize_optional_string_from_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    scalar_to_string(value)
        .map(Some)
        .ok_or_else(|| D::Error::custom("expected string or number"))
}
