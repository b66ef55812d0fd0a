use super::*;

#[test]
fn from_status_prefers_error_field() {
    let err = ApiError::from_status(400, r#"{"error":"Amount must be positive","message":"ignored"}"#);
    assert_eq!(err.backend_message().as_deref(), Some("Amount must be positive"));
}

#[test]
fn from_status_falls_back_to_message_field() {
    let err = ApiError::from_status(404, r#"{"message":"Wallet not found"}"#);
    assert_eq!(err.user_message("fallback"), "Wallet not found");
}

#[test]
fn from_status_appends_details() {
    let err = ApiError::from_status(500, r#"{"error":"KYC submission failed","details":"disk full"}"#);
    assert_eq!(err.user_message("fallback"), "KYC submission failed - disk full");
}

#[test]
fn non_json_body_uses_fallback() {
    let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
    assert_eq!(
        err,
        ApiError::Status { status: 502, message: None, details: None }
    );
    assert_eq!(err.user_message("Mining failed"), "Mining failed");
}

#[test]
fn blank_error_field_is_ignored() {
    let err = ApiError::from_status(400, r#"{"error":"  ","message":"Use this"}"#);
    assert_eq!(err.user_message("fallback"), "Use this");
}

#[test]
fn transport_and_decode_errors_use_fallback() {
    assert_eq!(ApiError::Transport("offline".to_owned()).user_message("Try again"), "Try again");
    assert_eq!(ApiError::Decode("bad json".to_owned()).user_message("Try again"), "Try again");
    assert_eq!(ApiError::Unavailable.user_message("Try again"), "Try again");
}

#[test]
fn validation_error_surfaces_its_message() {
    let err = ApiError::Validation("Please fill in all fields".to_owned());
    assert_eq!(err.user_message("fallback"), "Please fill in all fields");
    assert_eq!(err.to_string(), "Please fill in all fields");
}

#[test]
fn unauthorized_statuses_are_flagged() {
    assert!(ApiError::from_status(401, "{}").is_unauthorized());
    assert!(ApiError::from_status(403, "{}").is_unauthorized());
    assert!(!ApiError::from_status(400, "{}").is_unauthorized());
    assert!(!ApiError::Transport("x".to_owned()).is_unauthorized());
}
