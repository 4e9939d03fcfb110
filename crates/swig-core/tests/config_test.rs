use std::sync::Mutex;

use swig_core::config::swig_config::ENV_VARS;
use swig_core::config::*;
use swig_core::errors::ConfigError;

/// Serializes tests that touch `SWIG_*` environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn clear_swig_env_vars() {
    for key in ENV_VARS {
        std::env::remove_var(key);
    }
}

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = SwigConfig::from_toml("").unwrap();

    assert_eq!(config.rules.default_rule_count, 5);
    assert_eq!(config.rules.subject_name, "the host");

    assert_eq!(config.games.expiry_days, 90);
    assert_eq!(config.games.reroll_count, 5);
    assert_eq!(config.games.custom_rule_weight, 1.0);

    assert_eq!(config.storage.db_path, "swig.db");
    assert_eq!(config.storage.read_pool_size, 4);

    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[rules]
subject_name = "Kyle"

[games]
expiry_days = 30
"#;
    let config = SwigConfig::from_toml(toml).unwrap();
    assert_eq!(config.rules.subject_name, "Kyle");
    assert_eq!(config.games.expiry_days, 30);
    // Non-overridden fields keep defaults
    assert_eq!(config.rules.default_rule_count, 5);
    assert_eq!(config.games.reroll_count, 5);
}

#[test]
fn config_serde_roundtrip() {
    let config = SwigConfig::default();
    let toml_str = config.to_toml().unwrap();
    let roundtripped = SwigConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.storage.db_path, config.storage.db_path);
    assert_eq!(roundtripped.games.expiry_days, config.games.expiry_days);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let result = SwigConfig::from_toml("this is not valid toml {{{{");
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn default_config_validates() {
    assert!(SwigConfig::validate(&SwigConfig::default()).is_ok());
}

#[test]
fn zero_reroll_count_fails_validation() {
    let config = SwigConfig::from_toml("[games]\nreroll_count = 0\n").unwrap();
    match SwigConfig::validate(&config) {
        Err(ConfigError::ValidationFailed { field, .. }) => {
            assert_eq!(field, "games.reroll_count");
        }
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
}

#[test]
fn non_positive_custom_weight_fails_validation() {
    let config = SwigConfig::from_toml("[games]\ncustom_rule_weight = 0.0\n").unwrap();
    assert!(SwigConfig::validate(&config).is_err());
}

#[test]
fn expiry_days_beyond_a_century_fails_validation() {
    let config = SwigConfig::from_toml("[games]\nexpiry_days = 100000000000000\n").unwrap();
    match SwigConfig::validate(&config) {
        Err(ConfigError::ValidationFailed { field, .. }) => {
            assert_eq!(field, "games.expiry_days");
        }
        other => panic!("expected ValidationFailed, got {other:?}"),
    }

    let at_limit = SwigConfig::from_toml(&format!(
        "[games]\nexpiry_days = {}\n",
        defaults::MAX_EXPIRY_DAYS
    ))
    .unwrap();
    assert!(SwigConfig::validate(&at_limit).is_ok());
}

#[test]
fn load_rejects_huge_expiry_from_env() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_swig_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::env::set_var("SWIG_GAMES_EXPIRY_DAYS", "9223372036854775807");

    let result = SwigConfig::load(dir.path());
    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));

    clear_swig_env_vars();
}

#[test]
fn load_without_project_file_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_swig_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let config = SwigConfig::load(dir.path()).unwrap();
    assert_eq!(config.games.expiry_days, 90);
    assert_eq!(config.storage.db_path, "swig.db");
}

#[test]
fn load_reads_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_swig_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("swig.toml"),
        "[storage]\ndb_path = \"games.db\"\n",
    )
    .unwrap();

    let config = SwigConfig::load(dir.path()).unwrap();
    assert_eq!(config.storage.db_path, "games.db");
}

#[test]
fn env_overrides_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_swig_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("swig.toml"), "[games]\nreroll_count = 3\n").unwrap();
    std::env::set_var("SWIG_GAMES_REROLL_COUNT", "7");
    std::env::set_var("SWIG_RULES_SUBJECT_NAME", "Nick");

    let config = SwigConfig::load(dir.path()).unwrap();
    assert_eq!(config.games.reroll_count, 7);
    assert_eq!(config.rules.subject_name, "Nick");

    clear_swig_env_vars();
}

#[test]
fn custom_rule_weight_env_override() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_swig_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("swig.toml"),
        "[games]\ncustom_rule_weight = 2.0\n",
    )
    .unwrap();
    std::env::set_var("SWIG_GAMES_CUSTOM_RULE_WEIGHT", "0.25");

    let config = SwigConfig::load(dir.path()).unwrap();
    assert_eq!(config.games.custom_rule_weight, 0.25);

    std::env::set_var("SWIG_GAMES_CUSTOM_RULE_WEIGHT", "-1");
    assert!(matches!(
        SwigConfig::load(dir.path()),
        Err(ConfigError::ValidationFailed { .. })
    ));

    clear_swig_env_vars();
}

#[test]
fn unparsable_env_value_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_swig_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::env::set_var("SWIG_GAMES_EXPIRY_DAYS", "soon");

    let config = SwigConfig::load(dir.path()).unwrap();
    assert_eq!(config.games.expiry_days, 90);

    clear_swig_env_vars();
}

#[test]
fn load_with_invalid_project_file_is_a_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_swig_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("swig.toml"), "[games\n").unwrap();

    let result = SwigConfig::load(dir.path());
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}
