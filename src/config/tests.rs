use std::io::Write;

use super::*;

#[test]
fn test_default_config() {
    let config = TidewatchConfig::default();

    assert_eq!(config.monitor.refresh_interval_ms, 5000);
    assert!(config.monitor.connected);
    assert_eq!(config.tank.id, "tank-001");
    assert_eq!(config.tank.name, "Main Production Tank");
    assert_eq!(config.tank.shrimp_count, 15_000);
    assert_eq!(config.tank.shrimp_avg_weight, 12.5);
    assert_eq!(config.tank.shrimp_age, 45);
    assert_eq!(config.tank.seaweed_biomass, 125.0);
}

#[test]
fn test_config_deserialization() {
    let toml = r#"
        [monitor]
        refresh_interval_ms = 1000
        connected = false

        [tank]
        id = "tank-007"
        name = "Nursery Tank"
        shrimp_count = 4000
        shrimp_avg_weight = 2.1
        shrimp_age = 12
        seaweed_biomass = 40.0
    "#;

    let config: TidewatchConfig = toml::from_str(toml).unwrap();
    assert_eq!(config.monitor.refresh_interval_ms, 1000);
    assert!(!config.monitor.connected);
    assert_eq!(config.tank.id, "tank-007");
    assert_eq!(config.tank.name, "Nursery Tank");
    assert_eq!(config.tank.shrimp_count, 4000);
}

#[test]
fn test_partial_config() {
    // Missing sections and fields fall back to defaults
    let toml = r#"
        [monitor]
        refresh_interval_ms = 250
    "#;

    let config: TidewatchConfig = toml::from_str(toml).unwrap();
    assert_eq!(config.monitor.refresh_interval_ms, 250);
    assert!(config.monitor.connected); // Default
    assert_eq!(config.tank.id, "tank-001"); // Default
}

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[monitor]\nrefresh_interval_ms = 750\n\n[tank]\nname = \"Hatchery\"\n"
    )
    .unwrap();

    let config = load_config(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.monitor.refresh_interval_ms, 750);
    assert_eq!(config.tank.name, "Hatchery");
}

#[test]
fn test_load_config_missing_file() {
    assert!(load_config("/nonexistent/tidewatch.toml").is_err());
}

#[test]
fn test_env_overrides() {
    std::env::set_var("TIDEWATCH_REFRESH_INTERVAL_MS", "1234");

    let mut config = TidewatchConfig::default();
    config.apply_env();
    assert_eq!(config.monitor.refresh_interval_ms, 1234);

    std::env::remove_var("TIDEWATCH_REFRESH_INTERVAL_MS");
}
