use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn reads_host_and_port() {
    let cfg = ServerConfig::from_lookup(lookup(&[("HOST", "127.0.0.1"), ("PORT", " 8080 ")])).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn empty_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("HOST", ""), ("PORT", "  ")])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
}

#[test]
fn rejects_malformed_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("eighty".to_owned()));
    assert!(ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}

#[test]
fn rejects_malformed_host() {
    let err = ServerConfig::from_lookup(lookup(&[("HOST", "not-an-ip")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid HOST: not-an-ip");
}
