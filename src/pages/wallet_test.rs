use super::*;

#[test]
fn wallet_name_is_trimmed() {
    assert_eq!(validate_wallet_name("  Savings  "), Ok("Savings".to_owned()));
}

#[test]
fn blank_wallet_name_rejected() {
    assert_eq!(validate_wallet_name(""), Err(WALLET_NAME_REQUIRED));
    assert_eq!(validate_wallet_name(" \t "), Err(WALLET_NAME_REQUIRED));
}
