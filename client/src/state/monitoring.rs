//! Monitoring page data and the aggregates derived from it.
//!
//! DESIGN
//! ======
//! One snapshot is read from the repository per page load. Everything the
//! page displays (KPIs, chart series, filtered lists) is derived from that
//! snapshot plus the cluster filter, so changing the filter never refetches.

use std::collections::BTreeMap;

use charts::{Series, SeriesPoint};
use inventory::{
    Cluster, HeterogeneousResource, InventoryError, InventoryRepository, MetricKind, MetricPoint, Node, NodeStatus,
    Task,
};

#[cfg(test)]
#[path = "monitoring_test.rs"]
mod monitoring_test;

/// Filter value that selects every cluster.
pub const ALL_CLUSTERS: &str = "all";

/// KPI alert thresholds, in percent.
pub const GPU_ALERT_PERCENT: u32 = 90;
pub const CPU_ALERT_PERCENT: u32 = 85;
pub const MEMORY_ALERT_PERCENT: u32 = 85;
pub const STORAGE_ALERT_PERCENT: u32 = 90;

/// Series color for a metric.
#[must_use]
pub fn metric_color(kind: MetricKind) -> &'static str {
    match kind {
        MetricKind::Cpu => "#1B58F4",
        MetricKind::Memory => "#6366f1",
        MetricKind::Gpu => "#EF4444",
        MetricKind::Storage => "#10B981",
    }
}

#[must_use]
pub fn to_series_points(points: &[MetricPoint]) -> Vec<SeriesPoint> {
    points.iter().map(|p| SeriesPoint::new(p.time.clone(), p.value)).collect()
}

/// Everything the monitoring page reads from the repository.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MonitoringSnapshot {
    pub clusters: Vec<Cluster>,
    /// Nodes keyed by cluster id.
    pub nodes: BTreeMap<String, Vec<Node>>,
    pub metrics: BTreeMap<MetricKind, Vec<MetricPoint>>,
    pub accelerators: Vec<HeterogeneousResource>,
    pub tasks: Vec<Task>,
}

impl MonitoringSnapshot {
    pub fn read(repo: &dyn InventoryRepository) -> Self {
        let clusters = repo.clusters();
        let nodes = clusters.iter().map(|c| (c.id.clone(), repo.nodes(&c.id))).collect();
        let metrics = MetricKind::ALL.into_iter().map(|kind| (kind, repo.metrics(kind))).collect();
        Self { clusters, nodes, metrics, accelerators: repo.accelerators(), tasks: repo.tasks() }
    }
}

/// Aggregate node utilization, each a rounded percentage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NodeStats {
    pub cpu_percent: u32,
    pub memory_percent: u32,
    pub storage_percent: u32,
    pub health_percent: u32,
    pub ready: usize,
    pub total: usize,
}

impl NodeStats {
    /// Mean of per-node ratios. An empty set reports zeros.
    #[must_use]
    pub fn from_nodes(nodes: &[Node]) -> Self {
        let total = nodes.len();
        if total == 0 {
            return Self::default();
        }
        let ready = nodes.iter().filter(|n| n.status == NodeStatus::Ready).count();
        let mean = |pick: fn(&Node) -> (u32, u32)| {
            let sum: f64 = nodes
                .iter()
                .map(|n| {
                    let (used, cap) = pick(n);
                    if cap == 0 { 0.0 } else { f64::from(used) / f64::from(cap) }
                })
                .sum();
            #[allow(clippy::cast_precision_loss)]
            let avg = sum / total as f64;
            round_percent(avg)
        };
        #[allow(clippy::cast_precision_loss)]
        let health = ready as f64 / total as f64;
        Self {
            cpu_percent: mean(|n| (n.cpu.used, n.cpu.total)),
            memory_percent: mean(|n| (n.mem.used, n.mem.total)),
            storage_percent: mean(|n| (n.storage.used, n.storage.total)),
            health_percent: round_percent(health),
            ready,
            total,
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_percent(ratio: f64) -> u32 {
    (ratio * 100.0).round().clamp(0.0, 100.0) as u32
}

#[derive(Clone, Debug, PartialEq)]
pub struct MonitoringState {
    pub data: MonitoringSnapshot,
    pub loading: bool,
    pub error: Option<String>,
    /// Cluster id, or [`ALL_CLUSTERS`].
    pub cluster_filter: String,
}

impl Default for MonitoringState {
    fn default() -> Self {
        Self {
            data: MonitoringSnapshot::default(),
            loading: true,
            error: None,
            cluster_filter: ALL_CLUSTERS.to_owned(),
        }
    }
}

impl MonitoringState {
    pub fn finish_load(&mut self, result: Result<MonitoringSnapshot, InventoryError>) {
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = data;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Switch the filter; unknown cluster ids fall back to all clusters.
    pub fn set_cluster_filter(&mut self, cluster_id: &str) {
        let known = self.data.clusters.iter().any(|c| c.id == cluster_id);
        self.cluster_filter = if known { cluster_id.to_owned() } else { ALL_CLUSTERS.to_owned() };
    }

    fn selected_cluster(&self) -> Option<&Cluster> {
        self.data.clusters.iter().find(|c| c.id == self.cluster_filter)
    }

    #[must_use]
    pub fn visible_nodes(&self) -> Vec<Node> {
        match self.selected_cluster() {
            Some(cluster) => self.data.nodes.get(&cluster.id).cloned().unwrap_or_default(),
            None => self.data.nodes.values().flatten().cloned().collect(),
        }
    }

    #[must_use]
    pub fn visible_accelerators(&self) -> Vec<HeterogeneousResource> {
        match self.selected_cluster() {
            Some(cluster) => self
                .data
                .accelerators
                .iter()
                .filter(|a| a.cluster_name == cluster.display_name)
                .cloned()
                .collect(),
            None => self.data.accelerators.clone(),
        }
    }

    #[must_use]
    pub fn node_stats(&self) -> NodeStats {
        NodeStats::from_nodes(&self.visible_nodes())
    }

    /// Newest sample of a metric, rounded to a whole percent.
    #[must_use]
    pub fn latest_percent(&self, kind: MetricKind) -> Option<u32> {
        let point = self.data.metrics.get(&kind)?.last()?;
        Some(round_percent(point.value / 100.0))
    }

    #[must_use]
    pub fn metric_points(&self, kind: MetricKind) -> Vec<SeriesPoint> {
        self.data.metrics.get(&kind).map(|p| to_series_points(p)).unwrap_or_default()
    }

    /// CPU, memory and GPU history as one multi-series chart input.
    #[must_use]
    pub fn trend_series(&self) -> Vec<Series> {
        [MetricKind::Cpu, MetricKind::Memory, MetricKind::Gpu]
            .into_iter()
            .map(|kind| Series::new(kind.key(), kind.label(), metric_color(kind), self.metric_points(kind)))
            .collect()
    }
}
