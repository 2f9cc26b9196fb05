//! Typed records for the compute inventory shown by the console.
//!
//! DESIGN
//! ======
//! Records arrive from an external source that may omit fields, so every
//! displayed field is declared and defaulted (`#[serde(default)]`) rather than
//! carried as an open JSON bag.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

/// Total/used pair with a display unit (`Cores`, `GB`, `TB`, `Cards`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capacity {
    pub total: u64,
    pub used: u64,
    pub unit: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterResources {
    pub cpu: Capacity,
    pub memory: Capacity,
    pub gpu: Capacity,
    pub storage: Capacity,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Production,
    Testing,
    Development,
    Edge,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterHealth {
    #[default]
    Healthy,
    Degraded,
    Unhealthy,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Cluster {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub environment: Environment,
    pub status: ClusterHealth,
    pub k8s_version: String,
    pub node_count: u32,
    pub ready_nodes: u32,
    pub region: String,
    pub running_pods: u32,
    pub pending_pods: u32,
    pub resources: ClusterResources,
    pub tags: Vec<String>,
    pub registered_at: String,
    pub last_sync: String,
}

/// Used/total pair in the node's native unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Usage {
    pub used: u32,
    pub total: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GpuInfo {
    pub count: u32,
    pub model: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeStatus {
    #[default]
    Ready,
    Warning,
    NotReady,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Node {
    pub id: String,
    pub name: String,
    pub status: NodeStatus,
    pub role: String,
    pub ip: String,
    pub cpu: Usage,
    pub mem: Usage,
    pub gpu: Option<GpuInfo>,
    pub storage: Usage,
    pub tags: Vec<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolStatus {
    #[default]
    Active,
    Disabled,
}

impl PoolStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Disabled => "DISABLED",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceQuota {
    /// Cores.
    pub cpu: u32,
    /// GB.
    pub memory: u32,
    /// Cards.
    pub gpu: u32,
    /// GB.
    pub storage: u32,
    pub pods: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResourcePool {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub status: PoolStatus,
    pub cluster_id: String,
    pub cluster_name: String,
    /// Names of the nodes bound to the pool.
    pub node_selector: Vec<String>,
    pub quota: ResourceQuota,
    pub used: ResourceQuota,
    pub created_at: String,
    pub updated_at: String,
    pub tenant_id: String,
    pub tenant_name: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Training,
    Inference,
    Preprocessing,
    #[default]
    Other,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Running,
    #[default]
    Pending,
    Completed,
    Failed,
    Cancelled,
    Paused,
}

impl TaskStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Pending => "Pending",
            Self::Completed => "Completed",
            Self::Failed => "Failed",
            Self::Cancelled => "Cancelled",
            Self::Paused => "Paused",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    High,
    #[default]
    Normal,
    Low,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskResources {
    pub gpu: String,
    pub cpu: String,
    pub memory: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TaskKind,
    pub status: TaskStatus,
    pub submitter: String,
    pub tenant_name: String,
    pub project_name: String,
    pub resource_pool_name: String,
    pub priority: TaskPriority,
    pub resources: TaskResources,
    pub duration: String,
    /// Percent complete, `0..=100`.
    pub progress: u8,
    pub submitted_at: String,
    pub image: String,
    pub node_name: Option<String>,
    pub error_message: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vendor {
    #[default]
    #[serde(rename = "NVIDIA")]
    Nvidia,
    Huawei,
    #[serde(rename = "AMD")]
    Amd,
    Cambricon,
    Hygon,
    Xilinx,
    Intel,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AcceleratorKind {
    #[default]
    Gpu,
    Npu,
    Dcu,
    Mlu,
    Fpga,
}

impl AcceleratorKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Gpu => "GPU",
            Self::Npu => "NPU",
            Self::Dcu => "DCU",
            Self::Mlu => "MLU",
            Self::Fpga => "FPGA",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    #[default]
    Online,
    Offline,
    Maintenance,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    #[default]
    Healthy,
    Warning,
    Critical,
}

impl HealthStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::Warning => "Warning",
            Self::Critical => "Critical",
        }
    }
}

/// An accelerator card (GPU, NPU, ...) attached to a node.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeterogeneousResource {
    pub id: String,
    pub name: String,
    pub model: String,
    pub vendor: Vendor,
    #[serde(rename = "type")]
    pub kind: AcceleratorKind,
    pub node_id: String,
    pub node_ip: String,
    pub cluster_name: String,
    pub status: ConnectionStatus,
    #[serde(rename = "healthStatus")]
    pub health: HealthStatus,
    pub driver_version: String,
    pub firmware_version: Option<String>,
    /// GB.
    pub memory_total: u32,
    /// GB.
    pub memory_used: u32,
    /// Percent.
    pub utilization: u8,
    /// Celsius.
    pub temperature: u16,
    /// Watts.
    pub power: u16,
    pub tags: Vec<String>,
    pub last_check: String,
}

/// One monitoring sample; `value` is a percentage.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    pub time: String,
    pub value: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Cpu,
    Memory,
    Gpu,
    Storage,
}

impl MetricKind {
    pub const ALL: [Self; 4] = [Self::Cpu, Self::Memory, Self::Gpu, Self::Storage];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Memory => "memory",
            Self::Gpu => "gpu",
            Self::Storage => "storage",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Cpu => "CPU",
            Self::Memory => "Memory",
            Self::Gpu => "GPU",
            Self::Storage => "Storage",
        }
    }
}
