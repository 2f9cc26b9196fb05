use super::*;

#[test]
fn alert_cards_switch_to_red_palette() {
    for variant in [StatVariant::Default, StatVariant::Primary, StatVariant::Dark] {
        assert!(card_class(variant, true).contains("border-red-500"), "{variant:?}");
        assert!(value_class(variant, true).contains("text-red"), "{variant:?}");
        assert!(title_class(variant, true).contains("text-red-500"), "{variant:?}");
        assert!(!card_class(variant, false).contains("red"), "{variant:?}");
    }
}

#[test]
fn primary_and_dark_variants_render_on_dark_background() {
    assert!(card_class(StatVariant::Primary, false).contains("bg-slate-900"));
    assert!(card_class(StatVariant::Dark, false).contains("bg-slate-900"));
    assert!(card_class(StatVariant::Default, false).contains("bg-white"));
    assert!(value_class(StatVariant::Primary, false).contains("text-white"));
}

#[test]
fn trend_chip_hidden_while_alerting_or_empty() {
    assert!(shows_trend(Some("+4%"), false));
    assert!(!shows_trend(Some("+4%"), true));
    assert!(!shows_trend(Some(""), false));
    assert!(!shows_trend(None, false));
}

#[test]
fn trend_glyphs_and_colors() {
    assert_eq!(Trend::Up.glyph(), "▲");
    assert_eq!(Trend::Down.glyph(), "▼");
    assert_eq!(Trend::Neutral.glyph(), "");
    assert!(Trend::Up.chip_class().contains("emerald"));
    assert!(Trend::Down.chip_class().contains("red"));
}
