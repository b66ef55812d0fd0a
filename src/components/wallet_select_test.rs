use super::*;

#[test]
fn option_label_shows_name_short_address_and_balance() {
    let wallet = Wallet {
        id: Some(1),
        name: "Genesis Wallet".to_owned(),
        address: "NLT9f3a2b7c1d0e4f5a".to_owned(),
        balance: 12.5,
        stake: None,
    };
    assert_eq!(wallet_option_label(&wallet), "Genesis Wallet (NLT9f3a2…4f5a) - 12.5 SLW");
}
