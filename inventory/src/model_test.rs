use serde_json::json;

use super::*;

#[test]
fn pool_deserializes_from_partial_record_with_defaults() {
    let pool: ResourcePool = serde_json::from_value(json!({
        "id": "pool-x",
        "name": "x",
        "clusterId": "cluster-prod",
        "nodeSelector": ["worker-gpu-01"],
        "quota": { "cpu": 8 }
    }))
    .unwrap();

    assert_eq!(pool.id, "pool-x");
    assert_eq!(pool.cluster_id, "cluster-prod");
    assert_eq!(pool.node_selector, vec!["worker-gpu-01".to_owned()]);
    assert_eq!(pool.quota.cpu, 8);
    assert_eq!(pool.quota.memory, 0);
    assert_eq!(pool.status, PoolStatus::Active);
    assert!(pool.description.is_empty());
}

#[test]
fn pool_status_uses_lowercase_wire_names() {
    let status: PoolStatus = serde_json::from_value(json!("disabled")).unwrap();
    assert_eq!(status, PoolStatus::Disabled);
    assert_eq!(status.label(), "DISABLED");
}

#[test]
fn task_reads_type_field_into_kind() {
    let task: Task = serde_json::from_value(json!({
        "id": "t-1",
        "type": "training",
        "status": "failed",
        "errorMessage": "CUDA OOM"
    }))
    .unwrap();

    assert_eq!(task.kind, TaskKind::Training);
    assert_eq!(task.status, TaskStatus::Failed);
    assert_eq!(task.error_message.as_deref(), Some("CUDA OOM"));
    assert_eq!(task.node_name, None);
}

#[test]
fn accelerator_reads_vendor_type_and_health() {
    let card: HeterogeneousResource = serde_json::from_value(json!({
        "id": "ACC-1",
        "vendor": "NVIDIA",
        "type": "NPU",
        "status": "maintenance",
        "healthStatus": "critical",
        "memoryTotal": 80
    }))
    .unwrap();

    assert_eq!(card.vendor, Vendor::Nvidia);
    assert_eq!(card.kind, AcceleratorKind::Npu);
    assert_eq!(card.status, ConnectionStatus::Maintenance);
    assert_eq!(card.health, HealthStatus::Critical);
    assert_eq!(card.memory_total, 80);
}

#[test]
fn node_without_gpu_deserializes_to_none() {
    let node: Node = serde_json::from_value(json!({
        "name": "worker-npu-01",
        "status": "Ready",
        "gpu": null,
        "cpu": { "used": 30, "total": 128 }
    }))
    .unwrap();

    assert_eq!(node.gpu, None);
    assert_eq!(node.cpu, Usage { used: 30, total: 128 });
}

#[test]
fn metric_kind_keys_are_distinct() {
    let keys = MetricKind::ALL.iter().map(|k| k.key()).collect::<Vec<_>>();
    assert_eq!(keys, vec!["cpu", "memory", "gpu", "storage"]);
}
