// Config persistence round-trips through a real temp directory

use search_core::config::AppConfig;
use search_core::error::config::ConfigError;

/// **VALUE**: Verifies save → load returns the same values.
///
/// **WHY THIS MATTERS**: Settings the user changes (max results,
/// language, message overrides) must survive a restart.
///
/// **BUG THIS CATCHES**: Would catch asymmetric serde attributes where a
/// field serializes under one name and deserializes under another.
#[test]
fn given_saved_config_when_loaded_then_round_trips() {
    let dir = tempfile::tempdir().expect("temp dir");

    let mut config = AppConfig::default();
    config.api.max_results = 25;
    config.api.lang_restrict = String::from("de");
    config.messages.no_results = String::from("Keine Buecher gefunden.");

    config.save(dir.path()).expect("save should succeed");
    let loaded = AppConfig::load(dir.path()).expect("load should succeed");

    assert_eq!(loaded.api.max_results, 25);
    assert_eq!(loaded.api.lang_restrict, "de");
    assert_eq!(loaded.messages.no_results, "Keine Buecher gefunden.");
    assert_eq!(loaded.messages.no_title, config.messages.no_title);
}

/// **VALUE**: Verifies a missing file loads defaults, not an error.
///
/// **WHY THIS MATTERS**: First launch has no config file; it must work
/// out of the box.
///
/// **BUG THIS CATCHES**: Would catch the existence check turning into a
/// hard ReadError.
#[test]
fn given_no_config_file_when_loaded_then_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");

    let loaded = AppConfig::load(dir.path()).expect("defaults expected");

    assert_eq!(loaded.api.max_results, AppConfig::default().api.max_results);
}

/// **VALUE**: Verifies a corrupt file is a ParseError, and an
/// out-of-bounds file a ValidationError.
///
/// **WHY THIS MATTERS**: Silently replacing a broken config with defaults
/// would hide the user's mistake; the app should refuse and say why.
///
/// **BUG THIS CATCHES**: Would catch load() swallowing errors into
/// defaults.
#[test]
fn given_bad_config_file_when_loaded_then_typed_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("config.json"), "{ not json").unwrap();
    assert!(matches!(
        AppConfig::load(dir.path()),
        Err(ConfigError::ParseError { .. })
    ));

    std::fs::write(
        dir.path().join("config.json"),
        r#"{"api": {"max_results": 400}}"#,
    )
    .unwrap();
    assert!(matches!(
        AppConfig::load(dir.path()),
        Err(ConfigError::ValidationError { .. })
    ));
}

/// **VALUE**: Verifies save refuses an invalid config instead of writing
/// it.
///
/// **WHY THIS MATTERS**: Persisting an invalid document would brick every
/// subsequent startup; validation belongs before the write.
///
/// **BUG THIS CATCHES**: Would catch validate() being dropped from the
/// save path.
#[test]
fn given_invalid_config_when_saved_then_refused() {
    let dir = tempfile::tempdir().expect("temp dir");

    let mut config = AppConfig::default();
    config.api.max_results = 0;

    assert!(config.save(dir.path()).is_err());
    assert!(!dir.path().join("config.json").exists());
}
