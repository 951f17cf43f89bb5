use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_apply_when_only_database_url_is_set() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/plan")])).unwrap();
    assert_eq!(cfg.database_url, "postgres://localhost/plan");
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
    assert_eq!(cfg.room_flush_interval_ms, DEFAULT_ROOM_FLUSH_INTERVAL_MS);
    assert_eq!(cfg.static_dir, PathBuf::from("public"));
    assert!(cfg.export_load_system_fonts);
}

#[test]
fn missing_or_blank_database_url_is_an_error() {
    assert_eq!(ServerConfig::from_lookup(lookup_from(&[])), Err(ConfigError::Missing("DATABASE_URL")));
    assert_eq!(
        ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "  ")])),
        Err(ConfigError::Missing("DATABASE_URL"))
    );
}

#[test]
fn explicit_values_override_defaults() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("DATABASE_URL", "postgres://db/plan"),
        ("PORT", "8080"),
        ("DB_MAX_CONNECTIONS", "12"),
        ("ROOM_FLUSH_INTERVAL_MS", " 1000 "),
        ("STATIC_DIR", "/srv/www"),
        ("EXPORT_LOAD_SYSTEM_FONTS", "off"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.db_max_connections, 12);
    assert_eq!(cfg.room_flush_interval_ms, 1000);
    assert_eq!(cfg.static_dir, PathBuf::from("/srv/www"));
    assert!(!cfg.export_load_system_fonts);
}

#[test]
fn unparsable_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("DATABASE_URL", "postgres://db/plan"),
        ("PORT", "http"),
        ("DB_MAX_CONNECTIONS", "-3"),
        ("EXPORT_LOAD_SYSTEM_FONTS", "maybe"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
    assert!(cfg.export_load_system_fonts);
}

#[test]
fn zero_connections_is_raised_to_one() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db/plan"), ("DB_MAX_CONNECTIONS", "0")]))
        .unwrap();
    assert_eq!(cfg.db_max_connections, 1);
}

#[test]
fn zero_flush_interval_is_raised_to_one_ms() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("DATABASE_URL", "postgres://db/plan"),
        ("ROOM_FLUSH_INTERVAL_MS", "0"),
    ]))
    .unwrap();
    assert_eq!(cfg.room_flush_interval_ms, 1);
}

#[test]
fn parse_flag_accepts_common_spellings() {
    for raw in ["1", "true", "YES", " on "] {
        assert_eq!(parse_flag(raw), Some(true), "{raw}");
    }
    for raw in ["0", "False", "no", "off"] {
        assert_eq!(parse_flag(raw), Some(false), "{raw}");
    }
    assert_eq!(parse_flag(""), None);
}

// =============================================================================
// env_parse
// =============================================================================

#[test]
fn env_parse_missing_returns_default() {
    let val: usize = env_parse(None, 42);
    assert_eq!(val, 42);
}

#[test]
fn env_parse_present_valid() {
    let val: usize = env_parse(Some("99".into()), 0);
    assert_eq!(val, 99);
}

#[test]
fn env_parse_present_invalid_returns_default() {
    let val: usize = env_parse(Some("notanumber".into()), 7);
    assert_eq!(val, 7);
}
