//! Resource-pool list state for the pools page.
//!
//! DESIGN
//! ======
//! The list is a cache of repository rows. Saves go to the repository first
//! and only the returned record is merged back, so the list never shows a
//! draft the store rejected.

use inventory::{InventoryError, ResourcePool};

#[cfg(test)]
#[path = "pools_test.rs"]
mod pools_test;

#[derive(Clone, Debug, Default)]
pub struct PoolsState {
    pub items: Vec<ResourcePool>,
    pub loading: bool,
    pub error: Option<String>,
}

impl PoolsState {
    /// Loading state shown before the first fetch resolves.
    #[must_use]
    pub fn pending() -> Self {
        Self { loading: true, ..Self::default() }
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&ResourcePool> {
        self.items.iter().find(|p| p.id == id)
    }

    pub fn finish_load(&mut self, result: Result<Vec<ResourcePool>, InventoryError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Merge a repository save result: replace the row with the same id or
    /// append a new one.
    pub fn apply_save(&mut self, result: Result<ResourcePool, InventoryError>) {
        match result {
            Ok(pool) => {
                self.error = None;
                match self.items.iter_mut().find(|p| p.id == pool.id) {
                    Some(slot) => *slot = pool,
                    None => self.items.push(pool),
                }
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }
}
