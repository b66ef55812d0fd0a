use super::*;

fn response(user_id: Option<u64>, kyc_token: Option<&str>) -> VerifyEmailResponse {
    VerifyEmailResponse {
        message: Some("Email verified".to_owned()),
        user_id,
        kyc_token: kyc_token.map(str::to_owned),
    }
}

#[test]
fn kyc_token_and_user_lead_to_kyc() {
    assert_eq!(
        verification_next(&response(Some(42), Some("kt"))),
        VerifyNext::Kyc {
            user_id: 42,
            kyc_token: "kt".to_owned()
        }
    );
}

#[test]
fn missing_kyc_token_leads_to_login() {
    assert_eq!(verification_next(&response(Some(42), None)), VerifyNext::Login);
    assert_eq!(verification_next(&response(Some(42), Some(""))), VerifyNext::Login);
}

#[test]
fn missing_or_zero_user_leads_to_login() {
    assert_eq!(verification_next(&response(None, Some("kt"))), VerifyNext::Login);
    assert_eq!(verification_next(&response(Some(0), Some("kt"))), VerifyNext::Login);
}

#[test]
fn token_from_query_rejects_blank() {
    assert_eq!(token_from_query(None), None);
    assert_eq!(token_from_query(Some("  ".to_owned())), None);
    assert_eq!(token_from_query(Some(" abc ".to_owned())), Some("abc".to_owned()));
}
