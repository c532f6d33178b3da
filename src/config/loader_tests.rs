//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

fn write_temp_config(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(name);
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

#[test]
fn default_config_path_ends_with_balcalc_config_toml() {
    if let Some(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(
            path_str.contains("balcalc") && path_str.ends_with("config.toml"),
            "Path should contain 'balcalc' and end with 'config.toml', got: {}",
            path_str
        );
    }
}

#[test]
fn default_log_path_ends_with_balcalc_log() {
    let path = default_log_path();
    assert!(
        path.ends_with("balcalc.log"),
        "Default log path should end with balcalc.log, got: {:?}",
        path
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/balcalc.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_rejects_directory() {
    let dir = env::temp_dir();
    let result = load_config_file(&dir);
    assert!(
        matches!(result, Err(ConfigError::InvalidPath(_))),
        "A directory is not a config file, got {:?}",
        result
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = write_temp_config(
        "balcalc_test_config.toml",
        r#"
mode = "triangle"
unit_label = "in"
log_file_path = "/tmp/balcalc-test.log"

[defaults]
rail_length = 96.0
baluster_width = 1.5
spacing = 3.5
triangle_base = 120.0
triangle_height = 60.0
triangle_angle_degrees = 30.0
"#,
    );

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.mode, Some(Mode::Triangle));
    assert_eq!(config.unit_label, Some("in".to_string()));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/balcalc-test.log"))
    );

    let defaults = config.defaults.expect("defaults table present");
    assert_eq!(defaults.rail_length, Some(96.0));
    assert_eq!(defaults.baluster_width, Some(1.5));
    assert_eq!(defaults.spacing, Some(3.5));
    assert_eq!(defaults.triangle_base, Some(120.0));
    assert_eq!(defaults.triangle_height, Some(60.0));
    assert_eq!(defaults.triangle_angle_degrees, Some(30.0));

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = write_temp_config("balcalc_test_invalid.toml", "this is not valid TOML ][}{");

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
fn load_config_file_rejects_unknown_mode() {
    let config_path = write_temp_config("balcalc_test_bad_mode.toml", "mode = \"spiral\"\n");

    let result = load_config_file(&config_path);
    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Unknown mode should be a parse error, got {:?}",
        result
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_unknown_keys() {
    let config_path = write_temp_config(
        "balcalc_test_unknown_key.toml",
        "[defaults]\nrail_lenght = 10.0\n",
    );

    let result = load_config_file(&config_path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_infinite_and_nan_defaults() {
    let config_path = write_temp_config(
        "balcalc_test_non_finite.toml",
        "[defaults]\nrail_length = inf\nspacing = nan\n",
    );

    let result = load_config_file(&config_path);
    assert_eq!(
        result,
        Err(ConfigError::NonFiniteValue {
            path: config_path.clone(),
            field: "rail_length",
        })
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_nan_in_any_default() {
    let config_path = write_temp_config(
        "balcalc_test_nan_angle.toml",
        "[defaults]\nspacing = 4.0\ntriangle_angle_degrees = -nan\n",
    );

    let result = load_config_file(&config_path);
    match result {
        Err(ConfigError::NonFiniteValue { field, .. }) => {
            assert_eq!(field, "triangle_angle_degrees");
        }
        _ => panic!("Expected NonFiniteValue, got {:?}", result),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn parameter_overrides_report_first_non_finite_field() {
    let overrides = ParameterOverrides {
        baluster_width: Some(f64::NEG_INFINITY),
        spacing: Some(f64::NAN),
        ..Default::default()
    };
    assert_eq!(overrides.first_non_finite(), Some("baluster_width"));
    assert_eq!(ParameterOverrides::default().first_non_finite(), None);
}

#[test]
fn load_config_file_handles_partial_config() {
    let config_path = write_temp_config(
        "balcalc_test_partial.toml",
        r#"
unit_label = "mm"
# Other fields omitted
"#,
    );

    let config = load_config_file(&config_path).unwrap().unwrap();
    assert_eq!(config.unit_label, Some("mm".to_string()));
    assert_eq!(config.mode, None);
    assert_eq!(config.defaults, None);

    fs::remove_file(config_path).ok();
}

#[test]
fn merge_config_uses_defaults_when_none() {
    let resolved = merge_config(None);
    assert_eq!(resolved, ResolvedConfig::default());
    assert_eq!(resolved.unit_label, DEFAULT_UNIT_LABEL);
    assert_eq!(resolved.defaults, ParameterSet::default());
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let config_file = ConfigFile {
        mode: Some(Mode::Triangle),
        unit_label: Some("in".to_string()),
        log_file_path: None,
        defaults: Some(ParameterOverrides {
            spacing: Some(4.0),
            ..ParameterOverrides::default()
        }),
    };

    let resolved = merge_config(Some(config_file));

    assert_eq!(resolved.mode(), Mode::Triangle);
    assert_eq!(resolved.unit_label, "in");
    assert_eq!(resolved.defaults.spacing, 4.0);
    assert_eq!(
        resolved.defaults.rail_length,
        ParameterSet::default().rail_length,
        "Fields absent from the file keep their defaults"
    );
    assert_eq!(resolved.log_file_path, default_log_path());
}

#[test]
fn merge_config_log_path_from_file_overrides_default() {
    let custom_path = PathBuf::from("/custom/path/to/app.log");
    let config_file = ConfigFile {
        log_file_path: Some(custom_path.clone()),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config_file));
    assert_eq!(
        resolved.log_file_path, custom_path,
        "Config file log_file_path should override default"
    );
}

#[test]
fn parameter_overrides_replace_only_present_fields() {
    let overrides = ParameterOverrides {
        rail_length: Some(200.0),
        triangle_angle_degrees: Some(35.0),
        ..ParameterOverrides::default()
    };

    let params = overrides.apply_to(ParameterSet::default());
    assert_eq!(params.rail_length, 200.0);
    assert_eq!(params.triangle_angle_degrees, 35.0);
    assert_eq!(params.baluster_width, 1.2);
    assert_eq!(params.mode, Mode::Flat, "mode is not a numeric override");
}

#[test]
#[serial(balcalc_env)]
fn apply_env_overrides_reads_mode_and_unit() {
    env::set_var(ENV_MODE, "triangle");
    env::set_var(ENV_UNIT, "ft");

    let result = apply_env_overrides(ResolvedConfig::default());

    env::remove_var(ENV_MODE);
    env::remove_var(ENV_UNIT);

    let config = result.expect("valid env overrides");
    assert_eq!(config.mode(), Mode::Triangle);
    assert_eq!(config.unit_label, "ft");
}

#[test]
#[serial(balcalc_env)]
fn apply_env_overrides_rejects_unknown_mode() {
    env::set_var(ENV_MODE, "helix");

    let result = apply_env_overrides(ResolvedConfig::default());

    env::remove_var(ENV_MODE);

    assert_eq!(
        result,
        Err(ConfigError::InvalidMode(InvalidMode("helix".to_string())))
    );
}

#[test]
#[serial(balcalc_env)]
fn apply_env_overrides_without_vars_is_identity() {
    env::remove_var(ENV_MODE);
    env::remove_var(ENV_UNIT);

    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), Ok(base));
}

#[test]
fn apply_cli_overrides_take_highest_precedence() {
    let file = ConfigFile {
        mode: Some(Mode::Triangle),
        defaults: Some(ParameterOverrides {
            rail_length: Some(90.0),
            ..ParameterOverrides::default()
        }),
        ..ConfigFile::default()
    };
    let merged = merge_config(Some(file));

    let cli = ParameterOverrides {
        rail_length: Some(300.0),
        ..ParameterOverrides::default()
    };
    let resolved = apply_cli_overrides(merged, Some(Mode::Flat), &cli);

    assert_eq!(resolved.mode(), Mode::Flat, "CLI mode should override file");
    assert_eq!(resolved.defaults.rail_length, 300.0);
}

#[test]
fn apply_cli_overrides_without_flags_keeps_config() {
    let base = merge_config(Some(ConfigFile {
        mode: Some(Mode::Triangle),
        ..ConfigFile::default()
    }));

    let resolved = apply_cli_overrides(base.clone(), None, &ParameterOverrides::default());
    assert_eq!(resolved, base);
}

#[test]
#[serial(balcalc_env)]
fn load_config_with_precedence_prefers_explicit_path() {
    let env_path = write_temp_config("balcalc_test_env_path.toml", "unit_label = \"env\"\n");
    let cli_path = write_temp_config("balcalc_test_cli_path.toml", "unit_label = \"cli\"\n");
    env::set_var(ENV_CONFIG, &env_path);

    let from_cli = load_config_with_precedence(Some(cli_path.clone()));
    let from_env = load_config_with_precedence(None);

    env::remove_var(ENV_CONFIG);
    fs::remove_file(env_path).ok();
    fs::remove_file(cli_path).ok();

    assert_eq!(
        from_cli.unwrap().unwrap().unit_label,
        Some("cli".to_string())
    );
    assert_eq!(
        from_env.unwrap().unwrap().unit_label,
        Some("env".to_string())
    );
}
