use super::*;

#[test]
fn defaults_are_light_and_closed() {
    let ui = UiState::default();
    assert_eq!(ui.theme, crate::state::theme::Theme::Light);
    assert!(!ui.mobile_menu_open);
}

#[test]
fn mobile_menu_toggles_and_closes() {
    let mut ui = UiState::default();
    ui.toggle_mobile_menu();
    assert!(ui.mobile_menu_open);
    ui.toggle_mobile_menu();
    assert!(!ui.mobile_menu_open);
    ui.toggle_mobile_menu();
    ui.close_mobile_menu();
    assert!(!ui.mobile_menu_open);
}
