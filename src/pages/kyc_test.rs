use super::*;

fn pending(user_id: u64, token: Option<&str>) -> PendingKyc {
    PendingKyc::new(user_id, token.map(str::to_owned))
}

#[test]
fn context_resolves_matching_user_and_token() {
    assert_eq!(
        kyc_context(Some("42"), &pending(42, Some("kt"))),
        Ok((42, "kt".to_owned()))
    );
}

#[test]
fn context_requires_pending_kyc() {
    assert_eq!(kyc_context(Some("42"), &PendingKyc::default()), Err(INVALID_KYC_DETAILS));
}

#[test]
fn context_requires_kyc_token() {
    assert_eq!(kyc_context(Some("42"), &pending(42, None)), Err(INVALID_KYC_DETAILS));
    assert_eq!(kyc_context(Some("42"), &pending(42, Some(""))), Err(INVALID_KYC_DETAILS));
}

#[test]
fn context_rejects_bad_or_foreign_route_id() {
    let p = pending(42, Some("kt"));
    assert_eq!(kyc_context(None, &p), Err(INVALID_KYC_DETAILS));
    assert_eq!(kyc_context(Some("abc"), &p), Err(INVALID_KYC_DETAILS));
    assert_eq!(kyc_context(Some("0"), &p), Err(INVALID_KYC_DETAILS));
    assert_eq!(kyc_context(Some("7"), &p), Err(INVALID_KYC_DETAILS));
}

#[test]
fn submission_needs_photo_and_info() {
    assert_eq!(validate_kyc_submission(false, "Jane Doe"), Err(KYC_INPUT_REQUIRED));
    assert_eq!(validate_kyc_submission(true, "   "), Err(KYC_INPUT_REQUIRED));
    assert_eq!(validate_kyc_submission(true, " Jane Doe "), Ok("Jane Doe".to_owned()));
}

#[test]
fn error_message_joins_error_and_details() {
    let err = ApiError::Status {
        status: 400,
        message: Some("Invalid KYC token".to_owned()),
        details: Some("token expired".to_owned()),
    };
    assert_eq!(kyc_error_message(&err), "Invalid KYC token - token expired");
}

#[test]
fn error_message_fallbacks() {
    let bare = ApiError::Status { status: 500, message: None, details: None };
    assert_eq!(kyc_error_message(&bare), "KYC submission failed - No additional details");
    assert_eq!(
        kyc_error_message(&ApiError::Transport("offline".to_owned())),
        "KYC submission failed - No additional details"
    );
}
