use super::*;

#[test]
fn with_base_url_strips_trailing_slashes() {
    let config = ClientConfig::with_base_url("https://api.nilotic.example///");
    assert_eq!(config.api_base_url, "https://api.nilotic.example");
}

#[test]
fn blank_base_url_falls_back_to_default() {
    assert_eq!(normalize_base_url("   "), DEFAULT_API_BASE_URL);
    assert_eq!(normalize_base_url("/"), DEFAULT_API_BASE_URL);
}

#[test]
fn join_url_inserts_single_separator() {
    assert_eq!(join_url("http://localhost:5500", "/auth/login"), "http://localhost:5500/auth/login");
    assert_eq!(join_url("http://localhost:5500", "wallet/list"), "http://localhost:5500/wallet/list");
}

#[test]
fn token_storage_key_is_stable() {
    assert_eq!(TOKEN_STORAGE_KEY, "token");
}
