//! Resource-pool create/edit wizard state machine.
//!
//! DESIGN
//! ======
//! The wizard is a linear three-step sequence over one mutable draft. Forward
//! moves are gated by per-step preconditions; backward moves are always
//! allowed and never clear fields. The wizard never persists anything:
//! `submit` hands the finished draft back to the caller, which owns storage.
//!
//! `WizardSession` tracks the open/closed edge so a host component can call
//! `sync` on every render without resetting an in-progress draft.

use serde::{Deserialize, Serialize};

use crate::model::{PoolStatus, ResourcePool, ResourceQuota};

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

/// Quota limits edited by the wizard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolQuota {
    /// Cores.
    pub cpu: u32,
    /// GB.
    pub memory: u32,
    /// Cards.
    pub gpu: u32,
    /// GB.
    pub storage: u32,
}

impl Default for PoolQuota {
    fn default() -> Self {
        Self { cpu: 100, memory: 256, gpu: 0, storage: 1000 }
    }
}

impl From<&ResourceQuota> for PoolQuota {
    fn from(q: &ResourceQuota) -> Self {
        Self { cpu: q.cpu, memory: q.memory, gpu: q.gpu, storage: q.storage }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuotaField {
    Cpu,
    Memory,
    Gpu,
    Storage,
}

impl QuotaField {
    pub const ALL: [Self; 4] = [Self::Cpu, Self::Memory, Self::Storage, Self::Gpu];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Cpu => "CPU quota (Cores)",
            Self::Memory => "Memory quota (GB)",
            Self::Gpu => "GPU quota (Units)",
            Self::Storage => "Storage quota (GB)",
        }
    }

    #[must_use]
    pub fn get(self, quota: &PoolQuota) -> u32 {
        match self {
            Self::Cpu => quota.cpu,
            Self::Memory => quota.memory,
            Self::Gpu => quota.gpu,
            Self::Storage => quota.storage,
        }
    }

    fn slot(self, quota: &mut PoolQuota) -> &mut u32 {
        match self {
            Self::Cpu => &mut quota.cpu,
            Self::Memory => &mut quota.memory,
            Self::Gpu => &mut quota.gpu,
            Self::Storage => &mut quota.storage,
        }
    }
}

/// In-progress working copy of a resource-pool record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePoolDraft {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub status: PoolStatus,
    /// `None` until a cluster is picked in step 2.
    pub cluster_id: Option<String>,
    /// Node names, unique, in selection order.
    pub node_selector: Vec<String>,
    pub quota: PoolQuota,
}

impl ResourcePoolDraft {
    /// Clone every editable field of an existing pool.
    #[must_use]
    pub fn from_pool(pool: &ResourcePool) -> Self {
        let mut node_selector = Vec::with_capacity(pool.node_selector.len());
        for name in &pool.node_selector {
            if !node_selector.contains(name) {
                node_selector.push(name.clone());
            }
        }
        Self {
            name: pool.name.clone(),
            display_name: pool.display_name.clone(),
            description: pool.description.clone(),
            status: pool.status,
            cluster_id: Some(pool.cluster_id.clone()).filter(|id| !id.is_empty()),
            node_selector,
            quota: PoolQuota::from(&pool.quota),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    #[default]
    BasicInfo,
    ClusterAndNodes,
    Quota,
}

impl WizardStep {
    pub const ALL: [Self; 3] = [Self::BasicInfo, Self::ClusterAndNodes, Self::Quota];

    /// 1-based position shown in the step indicator.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::BasicInfo => 1,
            Self::ClusterAndNodes => 2,
            Self::Quota => 3,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::BasicInfo => "Basic info",
            Self::ClusterAndNodes => "Cluster & nodes",
            Self::Quota => "Quota",
        }
    }

    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::BasicInfo => Some(Self::ClusterAndNodes),
            Self::ClusterAndNodes => Some(Self::Quota),
            Self::Quota => None,
        }
    }

    #[must_use]
    pub fn prev(self) -> Option<Self> {
        match self {
            Self::BasicInfo => None,
            Self::ClusterAndNodes => Some(Self::BasicInfo),
            Self::Quota => Some(Self::ClusterAndNodes),
        }
    }

    /// Width of the indicator's active progress track, in percent.
    #[must_use]
    pub fn progress_percent(self) -> f64 {
        f64::from(self.number() - 1) / 2.0 * 80.0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum WizardMode {
    #[default]
    Create,
    Edit {
        pool_id: String,
    },
}

impl WizardMode {
    #[must_use]
    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Edit { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("pool name is required")]
    NameRequired,
    #[error("select a cluster and at least one node")]
    NodesRequired,
    #[error("already on the last step")]
    NoNextStep,
    #[error("submit is only available on the quota step")]
    NotAtFinalStep,
}

/// Finished draft handed to the caller on submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolSubmission {
    pub mode: WizardMode,
    pub draft: ResourcePoolDraft,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PoolWizard {
    mode: WizardMode,
    step: WizardStep,
    draft: ResourcePoolDraft,
}

impl PoolWizard {
    /// Fresh wizard: edit mode when `initial` is supplied, create otherwise.
    /// Always starts on the first step.
    #[must_use]
    pub fn open(initial: Option<&ResourcePool>) -> Self {
        match initial {
            Some(pool) => Self {
                mode: WizardMode::Edit { pool_id: pool.id.clone() },
                step: WizardStep::BasicInfo,
                draft: ResourcePoolDraft::from_pool(pool),
            },
            None => Self::default(),
        }
    }

    #[must_use]
    pub fn mode(&self) -> &WizardMode {
        &self.mode
    }

    #[must_use]
    pub fn step(&self) -> WizardStep {
        self.step
    }

    #[must_use]
    pub fn draft(&self) -> &ResourcePoolDraft {
        &self.draft
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_display_name(&mut self, display_name: impl Into<String>) {
        self.draft.display_name = display_name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    pub fn set_status(&mut self, status: PoolStatus) {
        self.draft.status = status;
    }

    /// Pick the target cluster. Moving to a different cluster clears the node
    /// selection; re-picking the current cluster keeps it.
    pub fn select_cluster(&mut self, cluster_id: &str) {
        if self.draft.cluster_id.as_deref() == Some(cluster_id) {
            return;
        }
        self.draft.cluster_id = Some(cluster_id.to_owned());
        self.draft.node_selector.clear();
    }

    /// Add or remove a node of the selected cluster. Ignored until a cluster
    /// is selected.
    pub fn toggle_node(&mut self, node_name: &str) {
        if self.draft.cluster_id.is_none() {
            return;
        }
        if let Some(pos) = self.draft.node_selector.iter().position(|n| n == node_name) {
            self.draft.node_selector.remove(pos);
        } else {
            self.draft.node_selector.push(node_name.to_owned());
        }
    }

    #[must_use]
    pub fn is_node_selected(&self, node_name: &str) -> bool {
        self.draft.node_selector.iter().any(|n| n == node_name)
    }

    /// Set a quota field from raw input. Input that is not a non-negative
    /// integer leaves the field unchanged; returns whether it was applied.
    pub fn set_quota(&mut self, field: QuotaField, raw: &str) -> bool {
        match raw.trim().parse::<u32>() {
            Ok(value) => {
                *field.slot(&mut self.draft.quota) = value;
                true
            }
            Err(_) => false,
        }
    }

    fn check_leave(&self, step: WizardStep) -> Result<(), WizardError> {
        match step {
            WizardStep::BasicInfo if self.draft.name.is_empty() => Err(WizardError::NameRequired),
            WizardStep::ClusterAndNodes
                if self.draft.cluster_id.is_none() || self.draft.node_selector.is_empty() =>
            {
                Err(WizardError::NodesRequired)
            }
            WizardStep::Quota => Err(WizardError::NoNextStep),
            _ => Ok(()),
        }
    }

    /// Whether the "next" control is live on the current step.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.step.next().is_some() && self.check_leave(self.step).is_ok()
    }

    /// Move forward one step if the current step's precondition holds.
    ///
    /// # Errors
    ///
    /// Returns the unmet precondition; the step is unchanged.
    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        self.check_leave(self.step)?;
        let next = self.step.next().ok_or(WizardError::NoNextStep)?;
        self.step = next;
        Ok(next)
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.step.prev().is_some()
    }

    /// Move back one step. Returns `false` on the first step.
    pub fn back(&mut self) -> bool {
        match self.step.prev() {
            Some(prev) => {
                self.step = prev;
                true
            }
            None => false,
        }
    }

    /// Hand over the finished draft.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::NotAtFinalStep`] before the quota step.
    pub fn submit(&self) -> Result<PoolSubmission, WizardError> {
        if self.step != WizardStep::Quota {
            return Err(WizardError::NotAtFinalStep);
        }
        Ok(PoolSubmission { mode: self.mode.clone(), draft: self.draft.clone() })
    }
}

/// Open/closed lifecycle of the wizard inside its host overlay.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WizardSession {
    wizard: Option<PoolWizard>,
}

impl WizardSession {
    /// Follow the host's open flag. A closed→open edge starts a fresh wizard
    /// from `initial`; open→closed discards the draft; anything else is a
    /// no-op. Returns `true` when a new wizard was started.
    pub fn sync(&mut self, is_open: bool, initial: Option<&ResourcePool>) -> bool {
        match (is_open, self.wizard.is_some()) {
            (true, false) => {
                self.wizard = Some(PoolWizard::open(initial));
                true
            }
            (false, true) => {
                self.wizard = None;
                false
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.wizard.is_some()
    }

    #[must_use]
    pub fn wizard(&self) -> Option<&PoolWizard> {
        self.wizard.as_ref()
    }

    /// Apply `f` to the open wizard, if any.
    pub fn with_wizard<R>(&mut self, f: impl FnOnce(&mut PoolWizard) -> R) -> Option<R> {
        self.wizard.as_mut().map(f)
    }
}
