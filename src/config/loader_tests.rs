//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

fn point(lat: f64, lon: f64) -> GeoPoint {
    GeoPoint::new(lat, lon).expect("finite coordinates")
}

/// RAII guard to ensure environment variable cleanup even under test parallelism.
/// Removes the var on drop, preventing test pollution in parallel execution.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

// ===== Paths =====

#[test]
fn default_config_path_contains_tucumap_config_toml() {
    let Some(path) = default_config_path() else {
        return;
    };
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("tucumap") && path_str.ends_with("config.toml"),
        "Path should contain 'tucumap' and end with 'config.toml', got: {}",
        path_str
    );
}

// ===== load_config_file =====

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = env::temp_dir().join("tucumap_test_config.toml");

    let toml_content = r#"
catalog_path = "/srv/lines.json"
map_style = "satellite"
device_location = { latitude = -26.83, longitude = -65.2 }
log_file_path = "/tmp/tucumap-test.log"
"#;
    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.catalog_path, Some(PathBuf::from("/srv/lines.json")));
    assert_eq!(config.map_style, Some(MapStyle::Satellite));
    assert_eq!(config.device_location, Some(point(-26.83, -65.2)));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/tucumap-test.log"))
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("tucumap_test_invalid.toml");
    fs::write(&config_path, "this is not valid TOML ][}{").expect("Failed to write config");

    let result = load_config_file(&config_path);
    match result {
        Err(ConfigError::ParseError { path, reason: _ }) => {
            assert_eq!(path, config_path);
        }
        _ => panic!("Expected ParseError, got {:?}", result),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_unknown_map_style() {
    let config_path = env::temp_dir().join("tucumap_test_bad_style.toml");
    fs::write(&config_path, r#"map_style = "hybrid""#).expect("Failed to write config");

    let result = load_config_file(&config_path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_non_finite_location() {
    let config_path = env::temp_dir().join("tucumap_test_nan_location.toml");
    fs::write(
        &config_path,
        "device_location = { latitude = nan, longitude = 1.0 }",
    )
    .expect("Failed to write config");

    let result = load_config_file(&config_path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_handles_partial_config() {
    let config_path = env::temp_dir().join("tucumap_test_partial.toml");
    fs::write(&config_path, "map_style = \"standard\"\n# Other fields omitted\n")
        .expect("Failed to write partial test config");

    let config = load_config_file(&config_path).unwrap().unwrap();
    assert_eq!(config.map_style, Some(MapStyle::Standard));
    assert_eq!(config.catalog_path, None);
    assert_eq!(config.device_location, None);

    fs::remove_file(config_path).ok();
}

#[test]
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str("theme = \"dark\"");
    assert!(result.is_err(), "Unknown field should be rejected");
}

// ===== merge_config =====

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let config_file = ConfigFile {
        catalog_path: Some(PathBuf::from("lines.json")),
        map_style: Some(MapStyle::Satellite),
        device_location: Some(point(1.0, 2.0)),
        log_file_path: None,
    };

    let resolved = merge_config(Some(config_file));
    assert_eq!(resolved.catalog_path, Some(PathBuf::from("lines.json")));
    assert_eq!(resolved.map_style, MapStyle::Satellite);
    assert_eq!(resolved.device_location, Some(point(1.0, 2.0)));
    assert_eq!(resolved.log_file_path, default_log_path());
}

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();
    assert_eq!(config.catalog_path, None);
    assert_eq!(config.map_style, MapStyle::Standard);
    assert_eq!(config.device_location, None);
}

// ===== apply_env_overrides =====

#[test]
#[serial(tucumap_env)]
fn apply_env_overrides_respects_catalog_variable() {
    let _catalog = EnvGuard::new(CATALOG_ENV);
    let _style = EnvGuard::new(MAP_STYLE_ENV);
    env::set_var(CATALOG_ENV, "/env/lines.json");

    let result = apply_env_overrides(ResolvedConfig::default()).unwrap();

    assert_eq!(result.catalog_path, Some(PathBuf::from("/env/lines.json")));
}

#[test]
#[serial(tucumap_env)]
fn apply_env_overrides_respects_map_style_variable() {
    let _catalog = EnvGuard::new(CATALOG_ENV);
    let _style = EnvGuard::new(MAP_STYLE_ENV);
    env::set_var(MAP_STYLE_ENV, "Satellite");

    let result = apply_env_overrides(ResolvedConfig::default()).unwrap();

    assert_eq!(result.map_style, MapStyle::Satellite);
}

#[test]
#[serial(tucumap_env)]
fn apply_env_overrides_rejects_unknown_map_style() {
    let _catalog = EnvGuard::new(CATALOG_ENV);
    let _style = EnvGuard::new(MAP_STYLE_ENV);
    env::set_var(MAP_STYLE_ENV, "terrain");

    let result = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(
        result,
        Err(ConfigError::InvalidEnvValue {
            variable: MAP_STYLE_ENV,
            value: "terrain".to_string(),
        })
    );
}

#[test]
#[serial(tucumap_env)]
fn apply_env_overrides_no_change_when_env_vars_not_set() {
    let _catalog = EnvGuard::new(CATALOG_ENV);
    let _style = EnvGuard::new(MAP_STYLE_ENV);

    let base = ResolvedConfig {
        device_location: Some(point(3.0, 4.0)),
        ..ResolvedConfig::default()
    };
    let result = apply_env_overrides(base.clone()).unwrap();

    assert_eq!(result, base);
}

// ===== load_config_with_precedence =====

#[test]
#[serial(tucumap_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV);
    let temp_dir = env::temp_dir();

    let explicit_path = temp_dir.join("tucumap_explicit.toml");
    fs::write(&explicit_path, r#"map_style = "satellite""#).expect("write explicit config");

    let env_path = temp_dir.join("tucumap_env.toml");
    fs::write(&env_path, r#"map_style = "standard""#).expect("write env config");
    env::set_var(CONFIG_ENV, env_path.to_str().unwrap());

    let config = load_config_with_precedence(Some(explicit_path.clone()))
        .unwrap()
        .unwrap();
    assert_eq!(
        config.map_style,
        Some(MapStyle::Satellite),
        "Should use explicit path, not TUCUMAP_CONFIG env var"
    );

    fs::remove_file(explicit_path).ok();
    fs::remove_file(env_path).ok();
}

#[test]
#[serial(tucumap_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV);

    let env_path = env::temp_dir().join("tucumap_env_only.toml");
    fs::write(&env_path, r#"catalog_path = "from-env.json""#).expect("write env config");
    env::set_var(CONFIG_ENV, env_path.to_str().unwrap());

    let config = load_config_with_precedence(None).unwrap().unwrap();
    assert_eq!(config.catalog_path, Some(PathBuf::from("from-env.json")));

    fs::remove_file(env_path).ok();
}

#[test]
#[serial(tucumap_config)]
fn load_config_with_precedence_rejects_empty_env_var() {
    let _guard = EnvGuard::new(CONFIG_ENV);
    env::set_var(CONFIG_ENV, "");

    let result = load_config_with_precedence(None);
    assert!(matches!(result, Err(ConfigError::InvalidPath(_))));
}

// ===== apply_cli_overrides =====

#[test]
fn apply_cli_overrides_no_overrides() {
    let base = ResolvedConfig::default();
    assert_eq!(apply_cli_overrides(base.clone(), CliOverrides::default()), base);
}

#[test]
fn apply_cli_overrides_catalog_and_satellite() {
    let cli = CliOverrides {
        catalog_path: Some(PathBuf::from("cli.json")),
        satellite: true,
        ..CliOverrides::default()
    };

    let result = apply_cli_overrides(ResolvedConfig::default(), cli);
    assert_eq!(result.catalog_path, Some(PathBuf::from("cli.json")));
    assert_eq!(result.map_style, MapStyle::Satellite);
}

#[test]
fn apply_cli_overrides_location_replaces_configured_one() {
    let base = ResolvedConfig {
        device_location: Some(point(1.0, 1.0)),
        ..ResolvedConfig::default()
    };
    let cli = CliOverrides {
        device_location: Some(point(2.0, 2.0)),
        ..CliOverrides::default()
    };

    let result = apply_cli_overrides(base, cli);
    assert_eq!(result.device_location, Some(point(2.0, 2.0)));
}

#[test]
fn apply_cli_overrides_no_location_wins() {
    let base = ResolvedConfig {
        device_location: Some(point(1.0, 1.0)),
        ..ResolvedConfig::default()
    };
    let cli = CliOverrides {
        device_location: Some(point(2.0, 2.0)),
        no_location: true,
        ..CliOverrides::default()
    };

    let result = apply_cli_overrides(base, cli);
    assert_eq!(result.device_location, None);
}

// ===== Full chain =====

#[test]
#[serial(tucumap_env)]
fn precedence_chain_full_defaults_to_cli() {
    let _catalog = EnvGuard::new(CATALOG_ENV);
    let _style = EnvGuard::new(MAP_STYLE_ENV);

    let config_file = ConfigFile {
        catalog_path: Some(PathBuf::from("file.json")),
        map_style: Some(MapStyle::Satellite),
        ..ConfigFile::default()
    };
    let merged = merge_config(Some(config_file));
    assert_eq!(merged.catalog_path, Some(PathBuf::from("file.json")));

    env::set_var(CATALOG_ENV, "env.json");
    env::set_var(MAP_STYLE_ENV, "standard");
    let with_env = apply_env_overrides(merged).unwrap();
    assert_eq!(with_env.catalog_path, Some(PathBuf::from("env.json")));
    assert_eq!(with_env.map_style, MapStyle::Standard);

    let cli = CliOverrides {
        catalog_path: Some(PathBuf::from("cli.json")),
        satellite: true,
        ..CliOverrides::default()
    };
    let final_config = apply_cli_overrides(with_env, cli);
    assert_eq!(final_config.catalog_path, Some(PathBuf::from("cli.json")));
    assert_eq!(final_config.map_style, MapStyle::Satellite);
}
