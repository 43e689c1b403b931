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
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn reads_host_and_port() {
    let cfg = ServerConfig::from_lookup(lookup(&[("HOST", " 127.0.0.1 "), ("PORT", "8080")])).unwrap();
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
}

#[test]
fn rejects_bad_port() {
    for raw in ["abc", "70000", "0", ""] {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", raw)])).unwrap_err();
        assert_eq!(err, ConfigError::Invalid { var: "PORT", value: raw.to_owned() });
    }
}

#[test]
fn rejects_blank_host() {
    let err = ServerConfig::from_lookup(lookup(&[("HOST", "  ")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "HOST", .. }));
}
