use std::sync::{Arc, Mutex};

use super::*;
use crate::net::types::MessageResponse;

#[derive(Clone, Default)]
struct SharedToken(Arc<Mutex<Option<String>>>);

impl SharedToken {
    fn set(&self, token: Option<&str>) {
        *self.0.lock().expect("token lock") = token.map(str::to_owned);
    }
}

impl TokenSource for SharedToken {
    fn current_token(&self) -> Option<String> {
        self.0.lock().expect("token lock").clone()
    }
}

fn client(tokens: SharedToken) -> ApiClient<SharedToken> {
    ApiClient::new(&ClientConfig::with_base_url("http://localhost:5500/"), tokens)
}

// =============================================================
// Request preparation
// =============================================================

#[test]
fn prepare_joins_base_url_and_path() {
    let api = client(SharedToken::default());
    let req = api.prepare(Method::Get, "/wallet/list", &[]);
    assert_eq!(req.url, "http://localhost:5500/wallet/list");
    assert_eq!(req.method, Method::Get);
    assert!(req.query.is_empty());
}

#[test]
fn prepare_without_token_sends_no_authorization() {
    let api = client(SharedToken::default());
    assert_eq!(api.prepare(Method::Post, "/auth/login", &[]).authorization, None);
}

#[test]
fn prepare_attaches_bearer_token() {
    let tokens = SharedToken::default();
    tokens.set(Some("abc"));
    let api = client(tokens);
    assert_eq!(
        api.prepare(Method::Get, "/wallet/list", &[]).authorization.as_deref(),
        Some("Bearer abc")
    );
}

#[test]
fn token_rotation_applies_to_next_request_without_rebuilding_client() {
    let tokens = SharedToken::default();
    tokens.set(Some("first"));
    let api = client(tokens.clone());
    assert_eq!(api.authorization().as_deref(), Some("Bearer first"));

    tokens.set(Some("second"));
    assert_eq!(
        api.prepare(Method::Get, "/transaction/history", &[]).authorization.as_deref(),
        Some("Bearer second")
    );

    tokens.set(None);
    assert_eq!(api.prepare(Method::Get, "/transaction/history", &[]).authorization, None);
}

#[test]
fn prepare_keeps_query_pairs() {
    let api = client(SharedToken::default());
    let req = api.prepare(Method::Get, "/transaction/recent", &[("limit", "5".to_owned())]);
    assert_eq!(req.query, vec![("limit".to_owned(), "5".to_owned())]);
}

// =============================================================
// Response decoding
// =============================================================

#[test]
fn success_body_passes_through() {
    let raw = RawResponse { status: 201, body: r#"{"message":"User registered."}"#.to_owned() };
    let decoded: MessageResponse = decode_response(&raw).expect("2xx should decode");
    assert_eq!(decoded.message.as_deref(), Some("User registered."));
}

#[test]
fn success_raw_value_is_unmodified() {
    let raw = RawResponse { status: 200, body: r#"{"reward":5.0,"extra":[1,2]}"#.to_owned() };
    let decoded: serde_json::Value = decode_response(&raw).expect("2xx should decode");
    assert_eq!(decoded, serde_json::json!({ "reward": 5.0, "extra": [1, 2] }));
}

#[test]
fn empty_success_body_decodes_as_empty_object() {
    let raw = RawResponse { status: 204, body: String::new() };
    let decoded: MessageResponse = decode_response(&raw).expect("empty body should decode");
    assert_eq!(decoded, MessageResponse::default());
}

#[test]
fn failure_status_surfaces_backend_error() {
    let raw = RawResponse { status: 400, body: r#"{"error":"Insufficient balance for stake"}"#.to_owned() };
    let err = decode_response::<MessageResponse>(&raw).expect_err("4xx should fail");
    assert_eq!(err.user_message("Mining failed"), "Insufficient balance for stake");
}

#[test]
fn failure_without_body_uses_fallback() {
    let raw = RawResponse { status: 503, body: String::new() };
    let err = decode_response::<MessageResponse>(&raw).expect_err("5xx should fail");
    assert_eq!(err.user_message("Mining failed"), "Mining failed");
}

#[test]
fn mismatched_success_body_is_a_decode_error() {
    let raw = RawResponse { status: 200, body: "[1,2,3]".to_owned() };
    let err = decode_response::<MessageResponse>(&raw).expect_err("array is not a message");
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn bearer_header_format() {
    assert_eq!(bearer_header("tok"), "Bearer tok");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn send_is_unavailable_outside_browser() {
    let api = client(SharedToken::default());
    let prepared = api.prepare(Method::Get, "/wallet/list", &[]);
    let result = futures::executor::block_on(api.send(prepared, RequestBody::Empty));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn get_json_is_unavailable_outside_browser() {
    let api = client(SharedToken::default());
    let result = futures::executor::block_on(api.get_json::<MessageResponse>("/wallet/list", &[]));
    assert_eq!(result, Err(ApiError::Unavailable));
}
