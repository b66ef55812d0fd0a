use super::*;
use crate::state::session::MemoryStorage;

fn store() -> (MemoryStorage, ThemeStore<MemoryStorage>) {
    let storage = MemoryStorage::default();
    (storage.clone(), ThemeStore::new(storage))
}

#[test]
fn parse_accepts_known_names_only() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse(" Light "), Some(Theme::Light));
    assert_eq!(Theme::parse("sepia"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn toggled_flips_and_icon_points_at_next_theme() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggle_icon(), "☾");
    assert_eq!(Theme::Dark.toggle_icon(), "☀");
}

#[test]
fn saved_choice_beats_system_preference() {
    assert_eq!(resolve(Some(Theme::Light), true), Theme::Light);
    assert_eq!(resolve(Some(Theme::Dark), false), Theme::Dark);
    assert_eq!(resolve(None, true), Theme::Dark);
    assert_eq!(resolve(None, false), Theme::Light);
}

#[test]
fn initial_reads_storage_then_falls_back() {
    let (storage, themes) = store();
    assert_eq!(themes.initial(true), Theme::Dark);

    storage.store(THEME_STORAGE_KEY, Some("light"));
    assert_eq!(themes.initial(true), Theme::Light);

    storage.store(THEME_STORAGE_KEY, Some("garbage"));
    assert_eq!(themes.load(), None);
    assert_eq!(themes.initial(false), Theme::Light);
}

#[test]
fn switch_persists_the_new_theme() {
    let (storage, themes) = store();
    assert_eq!(themes.switch(Theme::Light), Theme::Dark);
    assert_eq!(storage.load(THEME_STORAGE_KEY).as_deref(), Some("dark"));
    assert_eq!(themes.switch(Theme::Dark), Theme::Light);
    assert_eq!(themes.load(), Some(Theme::Light));
}

#[test]
fn theme_does_not_touch_the_session_token() {
    let (storage, themes) = store();
    themes.save(Theme::Dark);
    assert_eq!(storage.load(crate::config::TOKEN_STORAGE_KEY), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn system_preference_is_light_outside_browser() {
    assert!(!system_prefers_dark());
}
