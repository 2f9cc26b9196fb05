use inventory::fixtures;

use super::*;

#[test]
fn assigned_nodes_follow_the_selector() {
    let pool = fixtures::pools().into_iter().find(|p| p.id == "pool-gpu").unwrap();
    let cluster_nodes = fixtures::nodes().remove(&pool.cluster_id).unwrap();
    let nodes = assigned_nodes(&pool, cluster_nodes);
    assert!(!nodes.is_empty());
    assert!(nodes.iter().all(|n| pool.node_selector.contains(&n.name)));
}

#[test]
fn selector_names_missing_from_cluster_are_skipped() {
    let pool = ResourcePool { node_selector: vec!["ghost".to_owned(), "b".to_owned()], ..ResourcePool::default() };
    let nodes = vec![
        Node { name: "a".to_owned(), ..Node::default() },
        Node { name: "b".to_owned(), ..Node::default() },
    ];
    let names: Vec<_> = assigned_nodes(&pool, nodes).into_iter().map(|n| n.name).collect();
    assert_eq!(names, ["b"]);
}

#[test]
fn empty_cluster_yields_no_nodes() {
    let pool = ResourcePool { node_selector: vec!["a".to_owned()], ..ResourcePool::default() };
    assert!(assigned_nodes(&pool, Vec::new()).is_empty());
}
