#![cfg(not(feature = "hydrate"))]

use futures::executor::block_on;

use super::*;

#[test]
fn load_passes_through_success() {
    let value = block_on(load(|| Ok::<_, InventoryError>(42)));
    assert_eq!(value, Ok(42));
}

#[test]
fn load_passes_through_error() {
    let result = block_on(load(|| Err::<(), _>(InventoryError::PoolNotFound("pool-x".to_owned()))));
    assert_eq!(result, Err(InventoryError::PoolNotFound("pool-x".to_owned())));
}

#[test]
fn today_stamp_is_date_shaped_outside_browser() {
    let stamp = today_stamp();
    assert_eq!(stamp.len(), 10);
    assert_eq!(stamp.matches('-').count(), 2);
}
