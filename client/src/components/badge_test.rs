use std::collections::HashSet;

use super::*;

#[test]
fn every_status_has_distinct_badge_and_dot() {
    let badges = StatusValue::ALL.iter().map(|s| s.badge_class()).collect::<HashSet<_>>();
    let dots = StatusValue::ALL.iter().map(|s| s.dot_class()).collect::<HashSet<_>>();
    assert_eq!(badges.len(), StatusValue::ALL.len());
    assert_eq!(dots.len(), StatusValue::ALL.len());
}

#[test]
fn success_pairs_with_emerald_only() {
    let status = StatusValue::Success;
    assert_eq!(status.badge_class(), "bg-emerald-50 text-emerald-700 border-emerald-200/60");
    assert_eq!(status.dot_class(), "bg-emerald-500");
    for other in StatusValue::ALL.into_iter().filter(|s| *s != status) {
        assert!(!other.badge_class().contains("emerald"), "{other:?}");
        assert!(!other.dot_class().contains("emerald"), "{other:?}");
    }
}

#[test]
fn badge_and_dot_share_one_palette() {
    for status in StatusValue::ALL {
        let hue = status.dot_class().trim_start_matches("bg-").split('-').next().unwrap();
        assert!(status.badge_class().contains(&format!("bg-{hue}-50")), "{status:?}");
    }
}

#[test]
fn neutral_dot_is_lighter_than_other_dots() {
    assert_eq!(StatusValue::Neutral.dot_class(), "bg-slate-400");
    assert_eq!(StatusValue::Primary.badge_class(), "bg-primary-50 text-primary-700 border-primary-200/60");
}

#[test]
fn badge_classes_append_status_palette() {
    let classes = badge_classes(StatusValue::Error);
    assert!(classes.starts_with("inline-flex"));
    assert!(classes.ends_with("bg-red-50 text-red-700 border-red-200/60"));
}

#[test]
fn domain_statuses_map_to_badges() {
    assert_eq!(StatusValue::from(PoolStatus::Active), StatusValue::Success);
    assert_eq!(StatusValue::from(PoolStatus::Disabled), StatusValue::Neutral);
    assert_eq!(StatusValue::from(HealthStatus::Critical), StatusValue::Error);
    assert_eq!(StatusValue::from(ConnectionStatus::Maintenance), StatusValue::Warning);
    assert_eq!(StatusValue::from(ConnectionStatus::Offline), StatusValue::Neutral);
    assert_eq!(StatusValue::from(TaskStatus::Running), StatusValue::Primary);
    assert_eq!(StatusValue::from(TaskStatus::Paused), StatusValue::Neutral);
    assert_eq!(StatusValue::from(NodeStatus::NotReady), StatusValue::Error);
}
