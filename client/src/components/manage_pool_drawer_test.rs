use super::*;

#[test]
fn title_and_description_follow_mode() {
    assert_eq!(drawer_title(false), "Create Resource Pool");
    assert_eq!(drawer_title(true), "Edit Resource Pool");
    assert_eq!(drawer_description(&WizardMode::Edit { pool_id: "pool-gpu".to_owned() }), "Instance ID: pool-gpu");
    assert!(!drawer_description(&WizardMode::Create).contains("Instance ID"));
}

#[test]
fn step_markers_track_progress() {
    let current = WizardStep::ClusterAndNodes;
    assert!(step_marker_class(WizardStep::BasicInfo, current).contains("bg-emerald-500"));
    assert!(step_marker_class(WizardStep::ClusterAndNodes, current).contains("bg-primary-600"));
    assert!(step_marker_class(WizardStep::Quota, current).contains("bg-slate-100"));
}

#[test]
fn status_options_highlight_only_the_current_status() {
    assert!(status_option_class(PoolStatus::Active, PoolStatus::Active).contains("text-emerald-600"));
    assert!(status_option_class(PoolStatus::Disabled, PoolStatus::Disabled).contains("text-red-500"));
    assert!(status_option_class(PoolStatus::Disabled, PoolStatus::Active).contains("text-slate-400"));
    assert!(status_option_class(PoolStatus::Active, PoolStatus::Disabled).contains("text-slate-400"));
}

#[test]
fn node_rows_mark_only_selected_nodes() {
    assert!(node_check_class(true).contains("bg-primary-600"));
    assert!(node_check_class(false).contains("border-slate-300"));
    assert_eq!(node_check_mark(true), Some("✓"));
    assert_eq!(node_check_mark(false), None);
}

#[test]
fn advance_or_warn_reports_rejected_steps() {
    let mut wizard = PoolWizard::open(None);
    assert_eq!(advance_or_warn(&mut wizard), None);
    assert_eq!(wizard.step(), WizardStep::BasicInfo);

    wizard.set_name("pool-a");
    assert_eq!(advance_or_warn(&mut wizard), Some(WizardStep::ClusterAndNodes));
    assert_eq!(advance_or_warn(&mut wizard), None);
    assert_eq!(wizard.step(), WizardStep::ClusterAndNodes);
}
