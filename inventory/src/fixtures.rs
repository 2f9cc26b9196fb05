//! Mock inventory shown by the console.
//!
//! Every generator here is deterministic: the server renders the first paint
//! and the browser hydrates it, so both sides must produce identical data.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{
    AcceleratorKind, Capacity, Cluster, ClusterHealth, ClusterResources, ConnectionStatus, Environment, GpuInfo,
    HealthStatus, HeterogeneousResource, MetricKind, MetricPoint, Node, NodeStatus, PoolStatus, ResourcePool,
    ResourceQuota, Task, TaskKind, TaskPriority, TaskResources, TaskStatus, Usage, Vendor,
};

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures_test;

/// Minutes between consecutive metric samples.
pub const METRIC_STEP_MINUTES: u32 = 5;

/// Label of the newest sample, as minutes after midnight (12:00).
pub const METRIC_END_MINUTE: u32 = 12 * 60;

/// Samples per monitoring series, excluding the anchor sample.
pub const HISTORY_POINTS: u32 = 24;

const MINUTES_PER_DAY: u32 = 24 * 60;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

fn capacity(total: u64, used: u64, unit: &str) -> Capacity {
    Capacity { total, used, unit: unit.to_owned() }
}

#[must_use]
pub fn clusters() -> Vec<Cluster> {
    vec![
        Cluster {
            id: "cluster-prod".to_owned(),
            name: "prod-core-v3".to_owned(),
            display_name: "Production (Beijing)".to_owned(),
            environment: Environment::Production,
            status: ClusterHealth::Healthy,
            k8s_version: "v1.29.1".to_owned(),
            node_count: 32,
            ready_nodes: 31,
            region: "cn-north-beijing".to_owned(),
            running_pods: 2450,
            pending_pods: 8,
            resources: ClusterResources {
                cpu: capacity(4096, 2840, "Cores"),
                memory: capacity(16_384, 11_200, "GB"),
                gpu: capacity(256, 210, "Cards"),
                storage: capacity(500, 312, "TB"),
            },
            tags: strings(&["Mission-Critical", "HA"]),
            registered_at: "2023-11-12".to_owned(),
            last_sync: "2024-05-24 10:00:00".to_owned(),
        },
        Cluster {
            id: "cluster-test".to_owned(),
            name: "test-edge-v1".to_owned(),
            display_name: "Testing (Shanghai)".to_owned(),
            environment: Environment::Testing,
            status: ClusterHealth::Degraded,
            k8s_version: "v1.28.4".to_owned(),
            node_count: 6,
            ready_nodes: 5,
            region: "cn-east-shanghai".to_owned(),
            running_pods: 184,
            pending_pods: 3,
            resources: ClusterResources {
                cpu: capacity(384, 122, "Cores"),
                memory: capacity(1536, 604, "GB"),
                gpu: capacity(8, 2, "Cards"),
                storage: capacity(40, 11, "TB"),
            },
            tags: strings(&["FPGA", "Staging"]),
            registered_at: "2024-02-03".to_owned(),
            last_sync: "2024-05-24 09:58:12".to_owned(),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn node(
    name: &str,
    status: NodeStatus,
    ip: &str,
    cpu: (u32, u32),
    mem: (u32, u32),
    gpu: Option<(u32, &str)>,
    storage: (u32, u32),
    tags: &[&str],
) -> Node {
    Node {
        id: name.to_owned(),
        name: name.to_owned(),
        status,
        role: "worker".to_owned(),
        ip: ip.to_owned(),
        cpu: Usage { used: cpu.0, total: cpu.1 },
        mem: Usage { used: mem.0, total: mem.1 },
        gpu: gpu.map(|(count, model)| GpuInfo { count, model: model.to_owned() }),
        storage: Usage { used: storage.0, total: storage.1 },
        tags: strings(tags),
    }
}

/// Node details keyed by cluster id.
#[must_use]
pub fn nodes() -> BTreeMap<String, Vec<Node>> {
    let mut by_cluster = BTreeMap::new();
    by_cluster.insert(
        "cluster-prod".to_owned(),
        vec![
            node(
                "worker-gpu-01",
                NodeStatus::Ready,
                "10.0.1.10",
                (54, 64),
                (210, 256),
                Some((8, "NVIDIA A100")),
                (420, 1024),
                &["Worker", "GPU-Optimized", "Zone-A"],
            ),
            node(
                "worker-gpu-02",
                NodeStatus::Warning,
                "10.0.1.11",
                (61, 64),
                (240, 256),
                Some((8, "NVIDIA A100")),
                (890, 1024),
                &["Worker", "AI-Infer", "Zone-A"],
            ),
            node(
                "worker-npu-01",
                NodeStatus::Ready,
                "10.0.1.20",
                (30, 128),
                (64, 512),
                None,
                (200, 1024),
                &["Worker", "NPU-Core"],
            ),
        ],
    );
    by_cluster.insert(
        "cluster-test".to_owned(),
        vec![
            node(
                "sh-worker-01",
                NodeStatus::Ready,
                "172.16.5.42",
                (22, 64),
                (96, 256),
                Some((2, "NVIDIA T4")),
                (310, 2048),
                &["Worker", "FPGA-Host"],
            ),
            node(
                "sh-worker-02",
                NodeStatus::NotReady,
                "172.16.5.43",
                (0, 64),
                (0, 256),
                None,
                (120, 2048),
                &["Worker"],
            ),
        ],
    );
    by_cluster
}

#[must_use]
pub fn pools() -> Vec<ResourcePool> {
    vec![
        ResourcePool {
            id: "pool-gpu".to_owned(),
            name: "gpu-resource-pool".to_owned(),
            display_name: "GPU Pool (A100)".to_owned(),
            description: "Dedicated to deep-learning training and large-model inference".to_owned(),
            status: PoolStatus::Active,
            cluster_id: "cluster-prod".to_owned(),
            cluster_name: "Production (Beijing)".to_owned(),
            node_selector: strings(&["worker-gpu-01", "worker-gpu-02"]),
            quota: ResourceQuota { cpu: 256, memory: 1024, gpu: 64, storage: 10_000, pods: 200 },
            used: ResourceQuota { cpu: 184, memory: 812, gpu: 58, storage: 7200, pods: 142 },
            created_at: "2023-11-15".to_owned(),
            updated_at: "2024-05-20".to_owned(),
            tenant_id: "tenant-001".to_owned(),
            tenant_name: "Research Institute / Compute".to_owned(),
        },
        ResourcePool {
            id: "pool-npu".to_owned(),
            name: "npu-batch-pool".to_owned(),
            display_name: "NPU Batch Pool".to_owned(),
            description: "Ascend capacity for offline batch preprocessing".to_owned(),
            status: PoolStatus::Disabled,
            cluster_id: "cluster-prod".to_owned(),
            cluster_name: "Production (Beijing)".to_owned(),
            node_selector: strings(&["worker-npu-01"]),
            quota: ResourceQuota { cpu: 96, memory: 384, gpu: 0, storage: 2000, pods: 60 },
            used: ResourceQuota::default(),
            created_at: "2024-03-02".to_owned(),
            updated_at: "2024-04-11".to_owned(),
            tenant_id: "tenant-002".to_owned(),
            tenant_name: "Data Platform".to_owned(),
        },
    ]
}

#[must_use]
pub fn tasks() -> Vec<Task> {
    vec![
        Task {
            id: "t-98442".to_owned(),
            name: "llama3-70b-finetune".to_owned(),
            kind: TaskKind::Training,
            status: TaskStatus::Running,
            submitter: "ai-ops".to_owned(),
            tenant_name: "Research Institute / Compute".to_owned(),
            project_name: "Foundation-Models".to_owned(),
            resource_pool_name: "GPU Pool (A100)".to_owned(),
            priority: TaskPriority::High,
            resources: TaskResources {
                gpu: "16x A100".to_owned(),
                cpu: "64 Cores".to_owned(),
                memory: "512 GB".to_owned(),
            },
            duration: "42h 15m".to_owned(),
            progress: 74,
            submitted_at: "2024-05-22 14:30:00".to_owned(),
            image: "registry.ai-nex.io/pytorch:2.2.0-cuda12.1".to_owned(),
            node_name: Some("worker-gpu-01".to_owned()),
            error_message: None,
        },
        Task {
            id: "t-98517".to_owned(),
            name: "embedding-batch-infer".to_owned(),
            kind: TaskKind::Inference,
            status: TaskStatus::Failed,
            submitter: "search-team".to_owned(),
            tenant_name: "Data Platform".to_owned(),
            project_name: "Semantic-Search".to_owned(),
            resource_pool_name: "GPU Pool (A100)".to_owned(),
            priority: TaskPriority::Normal,
            resources: TaskResources {
                gpu: "2x A100".to_owned(),
                cpu: "16 Cores".to_owned(),
                memory: "64 GB".to_owned(),
            },
            duration: "0h 12m".to_owned(),
            progress: 31,
            submitted_at: "2024-05-24 08:05:00".to_owned(),
            image: "registry.ai-nex.io/triton:24.03".to_owned(),
            node_name: Some("worker-gpu-02".to_owned()),
            error_message: Some("CUDA out of memory".to_owned()),
        },
        Task {
            id: "t-98530".to_owned(),
            name: "corpus-dedup".to_owned(),
            kind: TaskKind::Preprocessing,
            status: TaskStatus::Pending,
            submitter: "data-eng".to_owned(),
            tenant_name: "Data Platform".to_owned(),
            project_name: "Pretrain-Corpus".to_owned(),
            resource_pool_name: "NPU Batch Pool".to_owned(),
            priority: TaskPriority::Low,
            resources: TaskResources {
                gpu: "-".to_owned(),
                cpu: "32 Cores".to_owned(),
                memory: "128 GB".to_owned(),
            },
            duration: "-".to_owned(),
            progress: 0,
            submitted_at: "2024-05-24 09:40:00".to_owned(),
            image: "registry.ai-nex.io/spark:3.5".to_owned(),
            node_name: None,
            error_message: None,
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn accelerator(
    id: &str,
    name: &str,
    model: &str,
    vendor: Vendor,
    kind: AcceleratorKind,
    node: (&str, &str),
    cluster_name: &str,
    status: (ConnectionStatus, HealthStatus),
    driver: &str,
    memory: (u32, u32),
    load: (u8, u16, u16),
    tags: &[&str],
    last_check: &str,
) -> HeterogeneousResource {
    HeterogeneousResource {
        id: id.to_owned(),
        name: name.to_owned(),
        model: model.to_owned(),
        vendor,
        kind,
        node_id: node.0.to_owned(),
        node_ip: node.1.to_owned(),
        cluster_name: cluster_name.to_owned(),
        status: status.0,
        health: status.1,
        driver_version: driver.to_owned(),
        firmware_version: None,
        memory_total: memory.0,
        memory_used: memory.1,
        utilization: load.0,
        temperature: load.1,
        power: load.2,
        tags: strings(tags),
        last_check: last_check.to_owned(),
    }
}

#[must_use]
pub fn accelerators() -> Vec<HeterogeneousResource> {
    vec![
        accelerator(
            "ACC-GPU-NV-001",
            "bj-prod-gpu-01-card0",
            "NVIDIA A100-SXM4-80GB",
            Vendor::Nvidia,
            AcceleratorKind::Gpu,
            ("worker-gpu-01", "10.0.1.10"),
            "Production (Beijing)",
            (ConnectionStatus::Online, HealthStatus::Healthy),
            "535.104.05",
            (80, 64),
            (82, 68, 320),
            &["GPU", "Training"],
            "2024-05-24 10:15:30",
        ),
        accelerator(
            "ACC-GPU-NV-002",
            "bj-prod-gpu-01-card1",
            "NVIDIA A100-SXM4-80GB",
            Vendor::Nvidia,
            AcceleratorKind::Gpu,
            ("worker-gpu-01", "10.0.1.10"),
            "Production (Beijing)",
            (ConnectionStatus::Online, HealthStatus::Healthy),
            "535.104.05",
            (80, 32),
            (45, 62, 210),
            &["GPU", "Inference"],
            "2024-05-24 10:15:30",
        ),
        accelerator(
            "ACC-NPU-HW-001",
            "bj-prod-npu-01-card0",
            "Ascend 910B",
            Vendor::Huawei,
            AcceleratorKind::Npu,
            ("worker-npu-01", "10.0.1.20"),
            "Production (Beijing)",
            (ConnectionStatus::Online, HealthStatus::Healthy),
            "CANN 7.0.RC1",
            (64, 12),
            (15, 45, 180),
            &["NPU", "Native-AI"],
            "2024-05-24 10:14:00",
        ),
        accelerator(
            "ACC-FPGA-XL-001",
            "sh-test-fpga-01-dev0",
            "Xilinx Alveo U250",
            Vendor::Xilinx,
            AcceleratorKind::Fpga,
            ("sh-worker-01", "172.16.5.42"),
            "Testing (Shanghai)",
            (ConnectionStatus::Maintenance, HealthStatus::Warning),
            "XRT 2023.2",
            (64, 0),
            (5, 38, 75),
            &["FPGA", "Hardware-Accel"],
            "2024-05-24 10:12:00",
        ),
        accelerator(
            "ACC-DCU-HY-001",
            "sz-dev-dcu-01-card0",
            "Hygon Z100",
            Vendor::Hygon,
            AcceleratorKind::Dcu,
            ("sz-worker-01", "192.168.1.15"),
            "Development (Shenzhen)",
            (ConnectionStatus::Offline, HealthStatus::Critical),
            "DTK 23.04",
            (32, 0),
            (0, 0, 0),
            &["DCU", "Abnormal"],
            "2024-05-24 09:00:00",
        ),
    ]
}

/// `HH:MM` label for a minute-of-day, wrapping at midnight.
#[must_use]
pub fn minute_label(minute: u32) -> String {
    let minute = minute % MINUTES_PER_DAY;
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

/// `points + 1` samples ending at [`METRIC_END_MINUTE`], one every
/// [`METRIC_STEP_MINUTES`], scattered uniformly within `base ± variance / 2`
/// and clamped to `[0, 100]`. The same seed always yields the same series.
#[must_use]
pub fn generate_metrics(points: u32, base: f64, variance: f64, seed: u64) -> Vec<MetricPoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..=points)
        .map(|i| {
            let back = (points - i) * METRIC_STEP_MINUTES % MINUTES_PER_DAY;
            let minute = METRIC_END_MINUTE + MINUTES_PER_DAY - back;
            let jitter = rng.random::<f64>() - 0.5;
            MetricPoint { time: minute_label(minute), value: (base + jitter * variance).clamp(0.0, 100.0) }
        })
        .collect()
}

/// Base utilization, variance and seed per monitored resource.
#[must_use]
pub fn metric_profile(kind: MetricKind) -> (f64, f64, u64) {
    match kind {
        MetricKind::Cpu => (42.0, 12.0, 0xC0),
        MetricKind::Memory => (68.0, 8.0, 0x3E),
        MetricKind::Gpu => (85.0, 15.0, 0x69),
        MetricKind::Storage => (55.0, 2.0, 0x57),
    }
}

/// Two hours of history for every monitored resource.
#[must_use]
pub fn monitoring_history() -> BTreeMap<MetricKind, Vec<MetricPoint>> {
    MetricKind::ALL
        .into_iter()
        .map(|kind| {
            let (base, variance, seed) = metric_profile(kind);
            (kind, generate_metrics(HISTORY_POINTS, base, variance, seed))
        })
        .collect()
}
