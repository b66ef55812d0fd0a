use super::*;

#[test]
fn validate_email_trims() {
    assert_eq!(validate_email("  a@b.com\n"), Ok("a@b.com".to_owned()));
}

#[test]
fn validate_email_rejects_blank() {
    assert_eq!(validate_email(""), Err(ENTER_EMAIL));
    assert_eq!(validate_email("   "), Err(ENTER_EMAIL));
}
