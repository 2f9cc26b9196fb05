use super::*;

#[test]
fn usage_percent_rounds_to_nearest() {
    assert_eq!(usage_percent(184, 256), 72);
    assert_eq!(usage_percent(1, 3), 33);
    assert_eq!(usage_percent(2, 3), 67);
}

#[test]
fn usage_percent_is_zero_for_empty_total() {
    assert_eq!(usage_percent(0, 0), 0);
    assert_eq!(usage_percent(12, 0), 0);
}

#[test]
fn usage_percent_caps_overcommit_at_hundred() {
    assert_eq!(usage_percent(300, 200), 100);
}

#[test]
fn level_thresholds_are_exclusive() {
    assert_eq!(UsageLevel::from_percent(75), UsageLevel::Normal);
    assert_eq!(UsageLevel::from_percent(76), UsageLevel::Warning);
    assert_eq!(UsageLevel::from_percent(90), UsageLevel::Warning);
    assert_eq!(UsageLevel::from_percent(91), UsageLevel::Critical);
}

#[test]
fn level_classes_track_severity() {
    assert_eq!(UsageLevel::Normal.bar_class(), "bg-primary-500");
    assert_eq!(UsageLevel::Warning.bar_class(), "bg-amber-500");
    assert_eq!(UsageLevel::Critical.bar_class(), "bg-red-500");
    assert_eq!(UsageLevel::Critical.text_class(), "text-red-600");
}
