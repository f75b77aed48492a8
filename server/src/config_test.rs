use super::*;

use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn empty_environment_uses_defaults() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn port_and_host_overrides_apply() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "8080"), ("HOST", "127.0.0.1")])).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn site_root_override_is_kept() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("SITE_ROOT", "/srv/lampstore")])).unwrap();
    assert_eq!(cfg.site_root, Some(PathBuf::from("/srv/lampstore")));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "  "), ("SITE_ROOT", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.site_root.is_none());
}

#[test]
fn non_numeric_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { value: "http".into() });
}

#[test]
fn out_of_range_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { .. }));
}

#[test]
fn bad_host_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("HOST", "localhost:80")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid HOST: \"localhost:80\"");
}
