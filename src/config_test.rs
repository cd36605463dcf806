use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", " On "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "False"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// from_lookup
// =============================================================================

#[test]
fn defaults_apply_when_only_secret_is_set() {
    let config = ServerConfig::from_lookup(lookup_from(&[("SESSION_SECRET", "s3cret")])).unwrap();
    assert_eq!(config.port, 3000);
    assert_eq!(config.session_secret, "s3cret");
    assert!(!config.dev_secret);
    assert_eq!(config.site_dir, PathBuf::from("site"));
    assert!(config.handbook_path.is_none());
}

#[test]
fn missing_secret_is_an_error() {
    let err = ServerConfig::from_lookup(lookup_from(&[])).unwrap_err();
    assert_eq!(err, ConfigError::MissingSecret);
}

#[test]
fn blank_secret_counts_as_missing() {
    let err = ServerConfig::from_lookup(lookup_from(&[("SESSION_SECRET", "   ")])).unwrap_err();
    assert_eq!(err, ConfigError::MissingSecret);
}

#[test]
fn dev_secret_allowed_when_opted_in() {
    let config = ServerConfig::from_lookup(lookup_from(&[("ALLOW_DEV_SECRET", "yes")])).unwrap();
    assert!(config.dev_secret);
    assert_eq!(config.session_secret, DEV_SESSION_SECRET);
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("SESSION_SECRET", "x"), ("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("eighty".to_owned()));
}

#[test]
fn overrides_are_applied() {
    let config = ServerConfig::from_lookup(lookup_from(&[
        ("SESSION_SECRET", "x"),
        ("PORT", " 8080 "),
        ("SITE_DIR", "/srv/site"),
        ("HANDBOOK_PATH", "/etc/vaultlogic/handbook.yaml"),
    ]))
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.site_dir, PathBuf::from("/srv/site"));
    assert_eq!(config.handbook_path, Some(PathBuf::from("/etc/vaultlogic/handbook.yaml")));
}
