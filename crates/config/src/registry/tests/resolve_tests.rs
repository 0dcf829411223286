//! Tests for the core precedence lookup.

use crate::registry::{Config, ConfigError};
use crate::value::ConfigValue;

fn str_value(s: &str) -> Option<ConfigValue> {
    Some(ConfigValue::Str(s.to_string()))
}

#[test]
fn test_environment_wins_over_override_and_default() {
    let mut config = Config::new();
    config.overrides.insert(
        "RESOLVE_TEST_WINNER".to_string(),
        "from-override".to_string(),
    );
    config.set_default("resolve_test_winner", "from-default");

    temp_env::with_vars([("RESOLVE_TEST_WINNER", Some("from-env"))], || {
        assert_eq!(config.get("resolve_test_winner"), str_value("from-env"));
        assert_eq!(config.get("RESOLVE_TEST_WINNER"), str_value("from-env"));
    });
}

#[test]
fn test_empty_environment_variable_counts_as_present() {
    let mut config = Config::new();
    config.overrides.insert(
        "RESOLVE_TEST_EMPTY".to_string(),
        "from-override".to_string(),
    );
    config.set_default("resolve_test_empty", "from-default");

    temp_env::with_vars([("RESOLVE_TEST_EMPTY", Some(""))], || {
        assert_eq!(config.get("resolve_test_empty"), str_value(""));
    });
}

#[test]
fn test_override_wins_over_default() {
    let mut config = Config::new();
    config.overrides.insert(
        "RESOLVE_TEST_SECOND".to_string(),
        "from-override".to_string(),
    );
    config.set_default("resolve_test_second", "from-default");

    temp_env::with_vars([("RESOLVE_TEST_SECOND", None::<&str>)], || {
        assert_eq!(config.get("resolve_test_second"), str_value("from-override"));
    });
}

#[test]
fn test_default_is_the_last_resort() {
    let mut config = Config::new();
    config.set_default("resolve_test_third", "from-default");

    temp_env::with_vars([("RESOLVE_TEST_THIRD", None::<&str>)], || {
        assert_eq!(config.get("resolve_test_third"), str_value("from-default"));
        // The upper-case and lower-case spellings are interchangeable.
        assert_eq!(config.get("RESOLVE_TEST_THIRD"), str_value("from-default"));
    });
}

#[test]
fn test_absent_everywhere_is_none() {
    let config = Config::new();
    temp_env::with_vars([("RESOLVE_TEST_ABSENT", None::<&str>)], || {
        assert_eq!(config.get("resolve_test_absent"), None);
    });
}

#[test]
fn test_non_string_defaults_pass_through_unstringified() {
    let mut config = Config::new();
    config.set_default("resolve_test_flag", true);
    config.set_default("resolve_test_count", 42i64);

    temp_env::with_vars(
        [
            ("RESOLVE_TEST_FLAG", None::<&str>),
            ("RESOLVE_TEST_COUNT", None::<&str>),
        ],
        || {
            assert_eq!(config.get("resolve_test_flag"), Some(ConfigValue::Bool(true)));
            assert_eq!(config.get("resolve_test_count"), Some(ConfigValue::Int(42)));
        },
    );
}

#[test]
fn test_require_returns_present_value() {
    let mut config = Config::new();
    config.set_default("resolve_test_required", "here");

    temp_env::with_vars([("RESOLVE_TEST_REQUIRED", None::<&str>)], || {
        assert_eq!(
            config.require("resolve_test_required").unwrap(),
            ConfigValue::Str("here".to_string())
        );
    });
}

#[test]
fn test_require_missing_carries_the_requested_key() {
    let config = Config::new();
    temp_env::with_vars([("UNKNOWN", None::<&str>)], || {
        let error = config.require("UNKNOWN").unwrap_err();
        match &error {
            ConfigError::MissingConfiguration(key) => assert_eq!(key, "UNKNOWN"),
            other => panic!("expected MissingConfiguration, got {other}"),
        }
        assert!(error.to_string().contains("UNKNOWN"));
    });
}

#[test]
fn test_reset_clears_overrides_and_defaults() {
    let mut config = Config::new();
    config
        .overrides
        .insert("RESOLVE_TEST_RESET".to_string(), "from-override".to_string());
    config.set_default("resolve_test_reset_default", "from-default");

    config.reset();

    temp_env::with_vars(
        [
            ("RESOLVE_TEST_RESET", None::<&str>),
            ("RESOLVE_TEST_RESET_DEFAULT", None::<&str>),
        ],
        || {
            assert_eq!(config.get("resolve_test_reset"), None);
            assert_eq!(config.get("resolve_test_reset_default"), None);
        },
    );
    assert!(config.defaults().is_empty());
}

#[test]
fn test_defaults_listing_is_keyed_by_lowercase_form() {
    let mut config = Config::new();
    config.set_default("RESOLVE_TEST_LISTING", 7i64);

    let defaults = config.defaults();
    assert_eq!(
        defaults.get("resolve_test_listing"),
        Some(&ConfigValue::Int(7))
    );
    assert!(!defaults.contains_key("RESOLVE_TEST_LISTING"));
}
