//! Tests for the layered configuration system.

use std::sync::Mutex;

use fabric_core::config::{ConfigOverrides, FabricConfig};
use fabric_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all FABRIC_ env vars to prevent cross-test contamination.
fn clear_fabric_env_vars() {
    for key in [
        "FABRIC_SCORING_CRITICAL_WEIGHT",
        "FABRIC_SCORING_WARNING_WEIGHT",
        "FABRIC_SCORING_HEALTHY_THRESHOLD",
        "FABRIC_SCORING_WARNING_THRESHOLD",
        "FABRIC_INSIGHTS_TOP_N",
        "FABRIC_ANALYSIS_FLAG_INSUFFICIENT_DATA",
    ] {
        std::env::remove_var(key);
    }
}

/// Point `$HOME` at an empty directory so a real user config never leaks in.
fn isolated_home() -> tempfile::TempDir {
    let home = tempdir();
    std::env::set_var("HOME", home.path());
    home
}

/// Explicit overrides beat env, env beats the project file.
#[test]
fn test_layer_precedence() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_fabric_env_vars();
    let _home = isolated_home();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("fabric-health.toml"),
        r#"
[scoring]
critical_weight = 12.0
warning_weight = 4.0

[insights]
top_n = 5
"#,
    )
    .unwrap();

    std::env::set_var("FABRIC_SCORING_WARNING_WEIGHT", "5");
    std::env::set_var("FABRIC_INSIGHTS_TOP_N", "7");

    let overrides = ConfigOverrides {
        top_n: Some(3),
        ..Default::default()
    };
    let config = FabricConfig::load(dir.path(), Some(&overrides)).unwrap();

    assert_eq!(config.scoring.critical_weight, Some(12.0));
    assert_eq!(config.scoring.warning_weight, Some(5.0));
    assert_eq!(config.insights.top_n, Some(3));

    clear_fabric_env_vars();
}

/// The user file sits below the project file.
#[test]
fn test_user_config_is_lowest_file_layer() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_fabric_env_vars();
    let home = isolated_home();

    let user_dir = home.path().join(".fabric-health");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(
        user_dir.join("config.toml"),
        r#"
[scoring]
healthy_threshold = 90
warning_threshold = 70

[analysis]
disabled_checks = ["events"]
"#,
    )
    .unwrap();

    let project = tempdir();
    std::fs::write(
        project.path().join("fabric-health.toml"),
        "[scoring]\nhealthy_threshold = 85\n",
    )
    .unwrap();

    let config = FabricConfig::load(project.path(), None).unwrap();
    assert_eq!(config.scoring.effective_healthy_threshold(), 85);
    assert_eq!(config.scoring.effective_warning_threshold(), 70);
    assert_eq!(config.analysis.disabled_checks, vec!["events".to_string()]);
    assert!(!config.analysis.is_check_enabled("events"));
    assert!(config.analysis.is_check_enabled("cable"));
}

/// No files anywhere falls back to compiled defaults.
#[test]
fn test_missing_files_use_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_fabric_env_vars();
    let _home = isolated_home();

    let dir = tempdir();
    let config = FabricConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.scoring.effective_critical_weight(), 10.0);
    assert_eq!(config.scoring.effective_warning_weight(), 3.0);
    assert_eq!(config.scoring.effective_info_weight(), 0.0);
    assert_eq!(config.scoring.effective_healthy_threshold(), 80);
    assert_eq!(config.scoring.effective_warning_threshold(), 60);
    assert_eq!(config.insights.effective_top_n(), 10);
    assert!(config.analysis.effective_merge_port_records());
    assert!(!config.analysis.effective_flag_insufficient_data());
}

/// Unparsable env values are ignored rather than failing the load.
#[test]
fn test_invalid_env_value_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_fabric_env_vars();
    let _home = isolated_home();

    std::env::set_var("FABRIC_SCORING_CRITICAL_WEIGHT", "lots");
    std::env::set_var("FABRIC_ANALYSIS_FLAG_INSUFFICIENT_DATA", "true");

    let dir = tempdir();
    let config = FabricConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.scoring.critical_weight, None);
    assert_eq!(config.analysis.flag_insufficient_data, Some(true));

    clear_fabric_env_vars();
}

/// A broken project file is a parse error naming the file.
#[test]
fn test_project_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_fabric_env_vars();
    let _home = isolated_home();

    let dir = tempdir();
    std::fs::write(dir.path().join("fabric-health.toml"), "[scoring\ncritical_weight = ").unwrap();

    let err = FabricConfig::load(dir.path(), None).unwrap_err();
    match err {
        ConfigError::ParseError { path, .. } => assert!(path.ends_with("fabric-health.toml")),
        other => panic!("expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_from_toml_threshold_overrides() {
    let config = FabricConfig::from_toml(
        r#"
[analysis]
merge_port_records = false

[analysis.threshold_overrides]
"cable.temperature.critical" = 85.0
"congestion.ratio.warning" = 2.5
"#,
    )
    .unwrap();

    assert!(!config.analysis.effective_merge_port_records());
    assert_eq!(
        config.analysis.threshold_overrides.get("cable.temperature.critical"),
        Some(&85.0)
    );
    assert_eq!(config.analysis.threshold_overrides.len(), 2);
}

#[test]
fn test_validation_rejects_inverted_weights() {
    let err = FabricConfig::from_toml("[scoring]\ncritical_weight = 2.0\nwarning_weight = 3.0\n")
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ValidationFailed { ref field, .. } if field == "scoring.critical_weight"
    ));
}

#[test]
fn test_validation_rejects_negative_weight() {
    let err = FabricConfig::from_toml("[scoring]\ninfo_weight = -1.0\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn test_validation_rejects_crossed_thresholds() {
    let err = FabricConfig::from_toml(
        "[scoring]\nhealthy_threshold = 50\nwarning_threshold = 70\n",
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));

    let err = FabricConfig::from_toml("[scoring]\nhealthy_threshold = 101\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn test_validation_rejects_zero_top_n() {
    let err = FabricConfig::from_toml("[insights]\ntop_n = 0\n").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ValidationFailed { ref field, .. } if field == "insights.top_n"
    ));
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = FabricConfig::from_toml("[scoring]\nfuture_knob = true\ncritical_weight = 20.0\n")
        .unwrap();
    assert_eq!(config.scoring.effective_critical_weight(), 20.0);
}

/// A project config path that cannot be read as a file is a hard error.
#[test]
fn test_unreadable_project_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_fabric_env_vars();
    let _home = isolated_home();

    let dir = tempdir();
    std::fs::create_dir(dir.path().join("fabric-health.toml")).unwrap();

    let err = FabricConfig::load(dir.path(), None).unwrap_err();
    match err {
        ConfigError::Unreadable { path, .. } => assert!(path.ends_with("fabric-health.toml")),
        other => panic!("expected Unreadable, got {other:?}"),
    }
}

#[test]
fn test_to_toml_round_trips_set_values() {
    let config = FabricConfig::from_toml(
        "[scoring]\ncritical_weight = 15.0\n\n[insights]\ntop_n = 4\n",
    )
    .unwrap();
    let rendered = config.to_toml().unwrap();
    let reparsed = FabricConfig::from_toml(&rendered).unwrap();
    assert_eq!(reparsed.scoring.critical_weight, Some(15.0));
    assert_eq!(reparsed.insights.top_n, Some(4));
    assert_eq!(reparsed.scoring.warning_weight, None);
}
