use super::*;

#[test]
fn nav_items_cover_every_protected_section() {
    let hrefs: Vec<&str> = NAV_ITEMS.iter().map(|(href, _)| *href).collect();
    assert_eq!(
        hrefs,
        vec!["/dashboard", "/wallet", "/transactions", "/mining", "/staking", "/escrow-claim"]
    );
}

#[test]
fn link_class_marks_active_route() {
    assert_eq!(link_class("/wallet", "/wallet"), "navbar__link navbar__link--active");
    assert_eq!(link_class("/wallet", "/mining"), "navbar__link");
}
