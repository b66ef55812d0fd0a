use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeKind::Success, "Wallet created successfully!");
    let b = state.push(NoticeKind::Error, "Failed to load wallets");
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].kind, NoticeKind::Error);
}

#[test]
fn queue_is_bounded_and_drops_oldest() {
    let mut state = NoticeState::default();
    for i in 0..8 {
        state.push(NoticeKind::Info, format!("n{i}"));
    }
    assert_eq!(state.items.len(), NOTICE_CAP);
    assert_eq!(state.items[0].text, "n3");
    assert_eq!(state.items[NOTICE_CAP - 1].text, "n7");
}

#[test]
fn dismiss_removes_only_matching_id() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeKind::Success, "a");
    let b = state.push(NoticeKind::Success, "b");
    state.dismiss(a);
    assert_eq!(state.items.iter().map(|n| n.id).collect::<Vec<_>>(), vec![b]);
}

#[test]
fn dismiss_of_expired_id_is_noop() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeKind::Success, "a");
    state.dismiss(a);
    let b = state.push(NoticeKind::Success, "b");
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
}

#[test]
fn ids_are_not_reused_after_dismissal() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeKind::Error, "x");
    state.dismiss(a);
    assert!(state.items.is_empty());
    assert!(state.push(NoticeKind::Error, "y") > a);
}

#[test]
fn css_class_per_kind() {
    assert_eq!(NoticeKind::Success.css_class(), "notice notice--success");
    assert_eq!(NoticeKind::Info.css_class(), "notice notice--info");
    assert_eq!(NoticeKind::Error.css_class(), "notice notice--error");
}
