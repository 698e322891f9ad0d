use super::*;

#[test]
fn defaults_point_at_public_service() {
    let cfg = LookupConfig::default();
    assert_eq!(cfg.base_url, DEFAULT_API_URL);
    assert_eq!(cfg.out_dir, PathBuf::from("results"));
    assert!(cfg.user_agent.starts_with("panelapp-lookup/"));
}

#[test]
fn env_overrides_apply() {
    let cfg = LookupConfig::from_lookup(|key| match key {
        API_URL_ENV => Some("http://localhost:8080/api/v1".to_string()),
        RESULTS_DIR_ENV => Some("out/tsv".to_string()),
        _ => None,
    });
    assert_eq!(cfg.base_url, "http://localhost:8080/api/v1/");
    assert_eq!(cfg.out_dir, PathBuf::from("out/tsv"));
}

#[test]
fn blank_env_values_are_ignored() {
    let cfg = LookupConfig::from_lookup(|_| Some("  ".to_string()));
    assert_eq!(cfg, LookupConfig::default());
}

#[test]
fn builders_override_fields() {
    let cfg = LookupConfig::default()
        .with_base_url("http://127.0.0.1:9000")
        .with_out_dir("/tmp/panel-results");
    assert_eq!(cfg.base_url, "http://127.0.0.1:9000/");
    assert_eq!(cfg.out_dir, PathBuf::from("/tmp/panel-results"));
}
