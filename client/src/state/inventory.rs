//! Repository handle shared through Leptos context.
//!
//! Components resolve inventory with [`use_inventory`]; the app root provides
//! the fixture-backed store, tests and alternative hosts may provide their own.

use std::sync::Arc;

use inventory::{InMemoryInventory, InventoryRepository};
use leptos::prelude::*;

#[cfg(test)]
#[path = "inventory_test.rs"]
mod inventory_test;

#[derive(Clone)]
pub struct InventoryHandle(Arc<dyn InventoryRepository>);

impl InventoryHandle {
    pub fn new(repo: impl InventoryRepository + 'static) -> Self {
        Self(Arc::new(repo))
    }

    /// Handle over the built-in fixture data.
    #[must_use]
    pub fn fixtures() -> Self {
        Self::new(InMemoryInventory::with_fixtures())
    }

    #[must_use]
    pub fn repo(&self) -> &dyn InventoryRepository {
        self.0.as_ref()
    }
}

impl Default for InventoryHandle {
    fn default() -> Self {
        Self::fixtures()
    }
}

/// The provided handle, or a fresh fixture store when none is in scope.
pub fn use_inventory() -> InventoryHandle {
    use_context::<InventoryHandle>().unwrap_or_default()
}
