use super::*;

#[test]
fn validate_registration_requires_both_fields() {
    assert_eq!(validate_registration("", "secret"), Err("Please fill in all fields"));
    assert_eq!(validate_registration("a@b.com", ""), Err("Please fill in all fields"));
}

#[test]
fn validate_registration_trims_email() {
    assert_eq!(
        validate_registration(" new@user.io ", "secret"),
        Ok(("new@user.io".to_owned(), "secret".to_owned()))
    );
}

