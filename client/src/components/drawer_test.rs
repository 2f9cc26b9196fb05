use super::*;

#[test]
fn default_width_is_md() {
    assert_eq!(DrawerWidth::default(), DrawerWidth::Md);
    assert_eq!(DrawerWidth::default().class(), "max-w-md");
}

#[test]
fn width_tokens_map_to_max_width_classes() {
    assert_eq!(DrawerWidth::Lg.class(), "max-w-lg");
    assert_eq!(DrawerWidth::Xl.class(), "max-w-xl");
    assert_eq!(DrawerWidth::TwoXl.class(), "max-w-2xl");
}

#[test]
fn backdrop_and_close_button_dismiss() {
    let mut closes = 0;
    assert!(dismiss(DismissSource::Backdrop, || closes += 1));
    assert!(dismiss(DismissSource::CloseButton, || closes += 1));
    assert_eq!(closes, 2);
}

#[test]
fn clicks_inside_the_panel_never_close() {
    let mut closes = 0;
    for _ in 0..3 {
        assert!(!dismiss(DismissSource::Panel, || closes += 1));
    }
    assert_eq!(closes, 0);
    assert!(!DismissSource::Panel.closes());
}
