//! Settings layering: defaults -> global config file -> RSDEX_* env vars.

use std::fs;

use tempfile::TempDir;

use rsdex::config::{Settings, DEFAULT_BASE_URL};

#[test]
fn test_no_config_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let settings = Settings::load_from(Some(dir.path().join("missing.toml"))).unwrap();
    // Field-wise check; parallel tests may hold RSDEX_* env overrides for
    // fields they own
    assert_eq!(settings.api.base_url, DEFAULT_BASE_URL);
    assert_eq!(settings.list.page_limit, Settings::default().list.page_limit);
}

#[test]
fn test_file_overrides_defaults_and_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("rsdex.toml");
    fs::write(
        &config_path,
        r#"
[api]
base_url = "http://localhost:8080/api/v2"
timeout_secs = 3

[list]
page_limit = 50
"#,
    )
    .unwrap();

    let settings = Settings::load_from(Some(config_path.clone())).unwrap();
    assert_eq!(settings.api.base_url, "http://localhost:8080/api/v2");
    assert_eq!(settings.api.timeout_secs, 3);
    assert_eq!(settings.list.page_limit, 50);

    // Env layer wins over the file. Set and unset within the same test to
    // avoid cross-test interference.
    std::env::set_var("RSDEX_API__TIMEOUT_SECS", "1");
    let settings = Settings::load_from(Some(config_path)).unwrap();
    std::env::remove_var("RSDEX_API__TIMEOUT_SECS");

    assert_eq!(settings.api.timeout_secs, 1);
    assert_eq!(settings.list.page_limit, 50);
}

#[test]
fn test_partial_file_keeps_remaining_defaults() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("rsdex.toml");
    fs::write(&config_path, "[list]\npage_limit = 5\n").unwrap();

    let settings = Settings::load_from(Some(config_path)).unwrap();
    assert_eq!(settings.list.page_limit, 5);
    assert_eq!(settings.api.base_url, DEFAULT_BASE_URL);
}
