use super::*;

fn options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("all", "All Clusters"),
        SelectOption::new("cluster-prod", "Production (Beijing)"),
    ]
}

#[test]
fn selected_label_matches_value() {
    assert_eq!(selected_label(&options(), "cluster-prod", "Pick"), "Production (Beijing)");
}

#[test]
fn selected_label_falls_back_to_placeholder() {
    assert_eq!(selected_label(&options(), "cluster-gone", "Pick"), "Pick");
    assert_eq!(selected_label(&[], "", ""), "");
}
