use super::*;

fn wallet(address: &str, balance: f64, stake: Option<f64>) -> Wallet {
    Wallet {
        id: None,
        name: format!("W {address}"),
        address: address.to_owned(),
        balance,
        stake,
    }
}

#[test]
fn replace_selects_first_wallet() {
    let mut state = WalletsState { loading: true, ..WalletsState::default() };
    state.replace(vec![wallet("a", 1.0, None), wallet("b", 2.0, None)]);
    assert_eq!(state.selected.as_deref(), Some("a"));
    assert!(!state.loading);
}

#[test]
fn replace_keeps_existing_selection() {
    let mut state = WalletsState::default();
    state.replace(vec![wallet("a", 1.0, None), wallet("b", 2.0, None)]);
    state.select("b");
    state.replace(vec![wallet("a", 1.0, None), wallet("b", 3.0, None)]);
    assert_eq!(state.selected.as_deref(), Some("b"));
    assert_eq!(state.selected_wallet().map(|w| w.balance), Some(3.0));
}

#[test]
fn replace_with_empty_list_clears_selection() {
    let mut state = WalletsState::default();
    state.replace(vec![wallet("a", 1.0, None)]);
    state.replace(Vec::new());
    assert_eq!(state.selected, None);
}

#[test]
fn select_unknown_address_clears_selection() {
    let mut state = WalletsState::default();
    state.replace(vec![wallet("a", 1.0, None)]);
    state.select("zzz");
    assert_eq!(state.selected, None);
}

#[test]
fn upsert_appends_or_replaces() {
    let mut state = WalletsState::default();
    state.upsert(wallet("a", 1.0, None));
    state.upsert(wallet("b", 0.0, None));
    state.upsert(wallet("a", 9.0, None));
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.find("a").map(|w| w.balance), Some(9.0));
    assert_eq!(state.selected.as_deref(), Some("a"));
}

#[test]
fn send_stake_unstake_adjust_locally() {
    let mut state = WalletsState::default();
    state.replace(vec![wallet("a", 10.0, None)]);
    state.apply_send("a", 2.5);
    assert_eq!(state.find("a").map(|w| w.balance), Some(7.5));

    state.apply_stake("a", 5.0);
    let w = state.find("a").cloned().expect("wallet a");
    assert_eq!((w.balance, w.stake), (2.5, Some(5.0)));

    state.apply_unstake("a");
    let w = state.find("a").cloned().expect("wallet a");
    assert_eq!((w.balance, w.stake), (7.5, Some(0.0)));
}

#[test]
fn set_balance_keeps_stake_when_absent() {
    let mut state = WalletsState::default();
    state.replace(vec![wallet("a", 1.0, Some(4.0))]);
    state.set_balance("a", 6.0, None);
    let w = state.find("a").cloned().expect("wallet a");
    assert_eq!((w.balance, w.stake), (6.0, Some(4.0)));
}

#[test]
fn totals_sum_all_wallets() {
    let mut state = WalletsState::default();
    state.replace(vec![wallet("a", 1.5, Some(2.0)), wallet("b", 3.0, None)]);
    assert!((state.total_balance() - 4.5).abs() < f64::EPSILON);
    assert!((state.total_stake() - 2.0).abs() < f64::EPSILON);
}
