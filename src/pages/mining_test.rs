use super::*;

#[test]
fn validate_mine_requires_wallet_and_positive_stake() {
    assert_eq!(validate_mine(None, "5"), Err(SELECT_WALLET_AND_STAKE));
    assert_eq!(validate_mine(Some(""), "5"), Err(SELECT_WALLET_AND_STAKE));
    assert_eq!(validate_mine(Some("NLT1"), "0"), Err(SELECT_WALLET_AND_STAKE));
    assert_eq!(validate_mine(Some("NLT1"), "abc"), Err(SELECT_WALLET_AND_STAKE));
    assert_eq!(validate_mine(Some("NLT1"), " 5 "), Ok(("NLT1".to_owned(), 5.0)));
}

#[test]
fn mine_notice_prefers_reward() {
    let resp = MineResponse {
        reward: Some(5.0),
        message: Some("Successfully mined 5.0 SLW".to_owned()),
        ..MineResponse::default()
    };
    assert_eq!(mine_notice(&resp), "Mined block! Reward: 5 SLW");
}

#[test]
fn mine_notice_falls_back_to_message() {
    let resp = MineResponse {
        message: Some("Successfully mined 5.0 SLW".to_owned()),
        ..MineResponse::default()
    };
    assert_eq!(mine_notice(&resp), "Successfully mined 5.0 SLW");
    assert_eq!(mine_notice(&MineResponse::default()), "Mined block!");
}

#[test]
fn mined_block_uses_response_fields() {
    let resp = MineResponse {
        wallet_address: Some("NLT9".to_owned()),
        new_balance: Some(14.0),
        block_hash: Some("0xabc".to_owned()),
        ..MineResponse::default()
    };
    assert_eq!(
        mined_block("NLT1", 1.0, &resp),
        MinedBlock {
            block_hash: "0xabc".to_owned(),
            address: "NLT9".to_owned(),
            stake: 1.0,
            new_balance: Some(14.0),
        }
    );
}

#[test]
fn mined_block_defaults_when_fields_missing() {
    let block = mined_block("NLT1", 2.0, &MineResponse::default());
    assert_eq!(block.block_hash, "unknown");
    assert_eq!(block.address, "NLT1");
    assert_eq!(block.new_balance, None);
}
