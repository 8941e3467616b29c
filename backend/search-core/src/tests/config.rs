// Unit tests for config validation bounds

use crate::BOOKS_API_BASE_URL;
use crate::config::AppConfig;
use crate::error::config::ConfigError;

/// **VALUE**: Verifies the default config passes its own validation.
///
/// **WHY THIS MATTERS**: Defaults are what a fresh install runs with; an
/// invalid default would brick first startup.
///
/// **BUG THIS CATCHES**: Would catch a default drifting outside the
/// validation bounds.
#[test]
fn given_default_config_when_validated_then_passes() {
    let config = AppConfig::default();

    assert!(config.validate().is_ok());
    assert_eq!(config.api.base_url, BOOKS_API_BASE_URL);
    assert_eq!(config.api.max_results, 10);
    assert_eq!(config.api.lang_restrict, "en");
}

/// **VALUE**: Verifies each bound rejects out-of-range values.
///
/// **WHY THIS MATTERS**: maxResults beyond 40 gets rejected by the API
/// with an opaque 400; a zero timeout would hang forever or fail
/// instantly. Validation turns both into a clear config error at load
/// time.
///
/// **BUG THIS CATCHES**: Would catch a removed or inverted bound check.
#[test]
fn given_out_of_range_values_when_validated_then_rejected() {
    let mut config = AppConfig::default();
    config.api.max_results = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));

    let mut config = AppConfig::default();
    config.api.max_results = 41;
    assert!(config.validate().is_err());

    let mut config = AppConfig::default();
    config.api.base_url = String::from("ftp://example.com");
    assert!(config.validate().is_err());

    let mut config = AppConfig::default();
    config.api.read_timeout_secs = 0;
    assert!(config.validate().is_err());

    let mut config = AppConfig::default();
    config.version = 0;
    assert!(config.validate().is_err());
}

/// **VALUE**: Verifies a partial config file picks up section defaults.
///
/// **WHY THIS MATTERS**: Users write minimal config files ("just bump
/// maxResults"); every omitted field must default instead of erroring.
///
/// **BUG THIS CATCHES**: Would catch a field missing its serde default
/// attribute.
#[test]
fn given_partial_document_when_deserialized_then_defaults_fill_in() {
    let config: AppConfig =
        serde_json::from_str(r#"{"api": {"max_results": 20}}"#).expect("partial config");

    assert_eq!(config.version, 1);
    assert_eq!(config.api.max_results, 20);
    assert_eq!(config.api.lang_restrict, "en");
    assert_eq!(config.api.base_url, BOOKS_API_BASE_URL);
    assert!(config.validate().is_ok());
}
