use inventory::fixtures;

use super::*;

fn loaded() -> PoolsState {
    let mut state = PoolsState::pending();
    state.finish_load(Ok(fixtures::pools()));
    state
}

#[test]
fn pending_starts_loading() {
    let state = PoolsState::pending();
    assert!(state.loading);
    assert!(state.items.is_empty());
}

#[test]
fn finish_load_fills_items_and_clears_loading() {
    let state = loaded();
    assert!(!state.loading);
    assert_eq!(state.items.len(), fixtures::pools().len());
    assert!(state.find("pool-gpu").is_some());
    assert!(state.find("pool-missing").is_none());
}

#[test]
fn failed_load_keeps_rows_and_reports() {
    let mut state = loaded();
    state.finish_load(Err(InventoryError::UnknownCluster("cluster-x".to_owned())));
    assert!(!state.loading);
    assert_eq!(state.items.len(), fixtures::pools().len());
    assert_eq!(state.error.as_deref(), Some("unknown cluster: cluster-x"));
}

#[test]
fn save_replaces_existing_row() {
    let mut state = loaded();
    let mut pool = state.find("pool-gpu").cloned().unwrap();
    pool.display_name = "Renamed".to_owned();
    state.apply_save(Ok(pool));
    assert_eq!(state.items.len(), fixtures::pools().len());
    assert_eq!(state.find("pool-gpu").unwrap().display_name, "Renamed");
}

#[test]
fn save_appends_new_row() {
    let mut state = loaded();
    let pool = ResourcePool { id: "pool-new".to_owned(), ..ResourcePool::default() };
    state.apply_save(Ok(pool));
    assert_eq!(state.items.last().map(|p| p.id.as_str()), Some("pool-new"));
}

#[test]
fn rejected_save_leaves_rows_untouched() {
    let mut state = loaded();
    let before = state.items.clone();
    state.apply_save(Err(InventoryError::DuplicatePool("gpu-resource-pool".to_owned())));
    assert_eq!(state.items, before);
    assert!(state.error.is_some());
}
