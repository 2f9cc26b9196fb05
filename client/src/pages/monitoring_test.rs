use inventory::InMemoryInventory;

use crate::state::monitoring::MonitoringSnapshot;

use super::*;

#[test]
fn cluster_options_lead_with_all_clusters() {
    let mut state = MonitoringState::default();
    state.finish_load(Ok(MonitoringSnapshot::read(&InMemoryInventory::with_fixtures())));
    let options = cluster_options(&state);
    assert_eq!(options[0].value, ALL_CLUSTERS);
    assert_eq!(options.len(), state.data.clusters.len() + 1);
    assert!(options.iter().any(|o| o.value == "cluster-prod" && o.label == "Production (Beijing)"));
}

#[test]
fn percent_text_handles_missing_samples() {
    assert_eq!(percent_text(Some(95)), "95%");
    assert_eq!(percent_text(None), "--");
}
