//! Inventory repository seam.
//!
//! DESIGN
//! ======
//! Pages read inventory through [`InventoryRepository`] instead of global mock
//! arrays, so a real backend can replace [`InMemoryInventory`] without
//! touching components. The in-memory store guards its tables with a single
//! `RwLock`; Leptos context values must be `Send + Sync`.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use crate::InventoryError;
use crate::fixtures;
use crate::model::{Cluster, HeterogeneousResource, MetricKind, MetricPoint, Node, ResourcePool, ResourceQuota, Task};
use crate::wizard::{PoolSubmission, ResourcePoolDraft, WizardMode};

#[cfg(test)]
#[path = "repo_test.rs"]
mod repo_test;

/// Read and write access to the compute inventory.
pub trait InventoryRepository: Send + Sync {
    fn clusters(&self) -> Vec<Cluster>;

    fn cluster(&self, id: &str) -> Option<Cluster> {
        self.clusters().into_iter().find(|c| c.id == id)
    }

    /// Nodes of one cluster; empty for an unknown cluster.
    fn nodes(&self, cluster_id: &str) -> Vec<Node>;

    fn pools(&self) -> Vec<ResourcePool>;

    fn pool(&self, id: &str) -> Option<ResourcePool> {
        self.pools().into_iter().find(|p| p.id == id)
    }

    /// Store a new pool built from `draft`. `stamp` becomes both creation and
    /// update date.
    ///
    /// # Errors
    ///
    /// [`InventoryError::UnknownCluster`] when the draft's cluster does not
    /// exist, [`InventoryError::DuplicatePool`] when the name is taken.
    fn create_pool(&self, draft: &ResourcePoolDraft, stamp: &str) -> Result<ResourcePool, InventoryError>;

    /// Overwrite the editable fields of pool `id` with `draft`.
    ///
    /// # Errors
    ///
    /// [`InventoryError::PoolNotFound`], [`InventoryError::UnknownCluster`] or
    /// [`InventoryError::DuplicatePool`] when renaming onto another pool.
    fn update_pool(&self, id: &str, draft: &ResourcePoolDraft, stamp: &str) -> Result<ResourcePool, InventoryError>;

    /// Persist a finished wizard draft according to its mode.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::create_pool`] / [`Self::update_pool`] failures.
    fn save_submission(&self, submission: &PoolSubmission, stamp: &str) -> Result<ResourcePool, InventoryError> {
        match &submission.mode {
            WizardMode::Create => self.create_pool(&submission.draft, stamp),
            WizardMode::Edit { pool_id } => self.update_pool(pool_id, &submission.draft, stamp),
        }
    }

    fn tasks(&self) -> Vec<Task>;

    fn accelerators(&self) -> Vec<HeterogeneousResource>;

    /// Utilization history for one resource, oldest first.
    fn metrics(&self, kind: MetricKind) -> Vec<MetricPoint>;
}

#[derive(Default)]
struct Tables {
    clusters: Vec<Cluster>,
    nodes: BTreeMap<String, Vec<Node>>,
    pools: Vec<ResourcePool>,
    tasks: Vec<Task>,
    accelerators: Vec<HeterogeneousResource>,
    metrics: BTreeMap<MetricKind, Vec<MetricPoint>>,
}

/// Process-local inventory, seeded from [`fixtures`].
#[derive(Default)]
pub struct InMemoryInventory {
    tables: RwLock<Tables>,
}

impl InMemoryInventory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_fixtures() -> Self {
        Self {
            tables: RwLock::new(Tables {
                clusters: fixtures::clusters(),
                nodes: fixtures::nodes(),
                pools: fixtures::pools(),
                tasks: fixtures::tasks(),
                accelerators: fixtures::accelerators(),
                metrics: fixtures::monitoring_history(),
            }),
        }
    }

    /// Register a cluster and its nodes, replacing any previous entry.
    pub fn insert_cluster(&self, cluster: Cluster, nodes: Vec<Node>) {
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        tables.clusters.retain(|c| c.id != cluster.id);
        tables.nodes.insert(cluster.id.clone(), nodes);
        tables.clusters.push(cluster);
    }

    fn read<R>(&self, f: impl FnOnce(&Tables) -> R) -> R {
        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        f(&tables)
    }
}

fn resolve_cluster<'a>(tables: &'a Tables, draft: &ResourcePoolDraft) -> Result<&'a Cluster, InventoryError> {
    let id = draft.cluster_id.as_deref().unwrap_or_default();
    tables
        .clusters
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| InventoryError::UnknownCluster(id.to_owned()))
}

fn apply_draft(pool: &mut ResourcePool, draft: &ResourcePoolDraft, cluster: &Cluster) {
    pool.name.clone_from(&draft.name);
    pool.display_name.clone_from(&draft.display_name);
    pool.description.clone_from(&draft.description);
    pool.status = draft.status;
    pool.cluster_id.clone_from(&cluster.id);
    pool.cluster_name.clone_from(&cluster.display_name);
    pool.node_selector.clone_from(&draft.node_selector);
    pool.quota = ResourceQuota {
        cpu: draft.quota.cpu,
        memory: draft.quota.memory,
        gpu: draft.quota.gpu,
        storage: draft.quota.storage,
        pods: pool.quota.pods,
    };
}

/// Pool ids are independent of the name, so renames never block a later create.
fn new_pool_id() -> String {
    format!("pool-{}", uuid::Uuid::new_v4().simple())
}

impl InventoryRepository for InMemoryInventory {
    fn clusters(&self) -> Vec<Cluster> {
        self.read(|t| t.clusters.clone())
    }

    fn nodes(&self, cluster_id: &str) -> Vec<Node> {
        self.read(|t| t.nodes.get(cluster_id).cloned().unwrap_or_default())
    }

    fn pools(&self) -> Vec<ResourcePool> {
        self.read(|t| t.pools.clone())
    }

    fn create_pool(&self, draft: &ResourcePoolDraft, stamp: &str) -> Result<ResourcePool, InventoryError> {
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        let cluster = resolve_cluster(&tables, draft)?;

        if tables.pools.iter().any(|p| p.name == draft.name) {
            return Err(InventoryError::DuplicatePool(draft.name.clone()));
        }

        let mut pool = ResourcePool {
            id: new_pool_id(),
            created_at: stamp.to_owned(),
            updated_at: stamp.to_owned(),
            ..ResourcePool::default()
        };
        apply_draft(&mut pool, draft, cluster);
        tables.pools.push(pool.clone());
        Ok(pool)
    }

    fn update_pool(&self, id: &str, draft: &ResourcePoolDraft, stamp: &str) -> Result<ResourcePool, InventoryError> {
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        if !tables.pools.iter().any(|p| p.id == id) {
            return Err(InventoryError::PoolNotFound(id.to_owned()));
        }
        let cluster = resolve_cluster(&tables, draft)?.clone();
        if tables.pools.iter().any(|p| p.id != id && p.name == draft.name) {
            return Err(InventoryError::DuplicatePool(draft.name.clone()));
        }

        let Some(pool) = tables.pools.iter_mut().find(|p| p.id == id) else {
            return Err(InventoryError::PoolNotFound(id.to_owned()));
        };
        apply_draft(pool, draft, &cluster);
        stamp.clone_into(&mut pool.updated_at);
        Ok(pool.clone())
    }

    fn tasks(&self) -> Vec<Task> {
        self.read(|t| t.tasks.clone())
    }

    fn accelerators(&self) -> Vec<HeterogeneousResource> {
        self.read(|t| t.accelerators.clone())
    }

    fn metrics(&self, kind: MetricKind) -> Vec<MetricPoint> {
        self.read(|t| t.metrics.get(&kind).cloned().unwrap_or_default())
    }
}
