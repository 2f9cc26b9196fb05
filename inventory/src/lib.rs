//! Compute inventory: typed records, the repository seam, fixture data and the
//! resource-pool wizard.
//!
//! This crate is UI-framework agnostic so the client can drive the wizard and
//! query the repository from components while native tests exercise the same
//! logic without a browser.

pub mod fixtures;
pub mod model;
pub mod repo;
pub mod wizard;

pub use model::*;
pub use repo::{InMemoryInventory, InventoryRepository};
pub use wizard::{
    PoolQuota, PoolSubmission, PoolWizard, QuotaField, ResourcePoolDraft, WizardError, WizardMode, WizardSession,
    WizardStep,
};

/// Errors raised by [`InventoryRepository`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("resource pool not found: {0}")]
    PoolNotFound(String),
    #[error("resource pool already exists: {0}")]
    DuplicatePool(String),
    #[error("unknown cluster: {0}")]
    UnknownCluster(String),
}
