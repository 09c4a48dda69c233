use pokedex_core::{init_logging, logging_status, LogConfig, LogLevel, LoggingError, Pokedex};

#[test]
fn init_logging_is_idempotent_and_rejects_reconfiguration() {
    let log_dir = tempfile::tempdir().unwrap();
    let other_dir = tempfile::tempdir().unwrap();
    let log_dir_str = log_dir.path().to_str().unwrap();
    let other_dir_str = other_dir.path().to_str().unwrap();

    init_logging("info", log_dir_str).unwrap();
    init_logging("INFO", log_dir_str).unwrap();

    let level_err = init_logging("debug", log_dir_str).unwrap_err();
    assert!(matches!(level_err, LoggingError::AlreadyInitialized { .. }));

    let dir_err = init_logging("info", other_dir_str).unwrap_err();
    assert!(dir_err.to_string().contains("refusing to switch"));

    let (level, dir) = logging_status().unwrap();
    assert_eq!(level, LogLevel::Info);
    assert_eq!(dir, log_dir.path());

    let mut pokedex = Pokedex::new();
    pokedex.clear();
    log::logger().flush();

    let has_log_file = std::fs::read_dir(log_dir.path())
        .unwrap()
        .filter_map(Result::ok)
        .any(|entry| entry.file_name().to_string_lossy().starts_with("pokedex"));
    assert!(has_log_file);
}

#[test]
fn init_logging_rejects_bad_input_before_touching_state() {
    assert!(matches!(
        init_logging("loud", "/tmp/pokedex-logs"),
        Err(LoggingError::UnsupportedLevel(_))
    ));
    assert!(matches!(
        init_logging("info", "relative/logs"),
        Err(LoggingError::InvalidDirectory(_))
    ));
}

#[test]
fn config_from_values_resolves_level_and_dir() {
    let config = LogConfig::from_values(Some("trace"), Some("/var/log/pokedex")).unwrap();
    assert_eq!(config.level, LogLevel::Trace);
    assert_eq!(
        config.log_dir.as_deref(),
        Some(std::path::Path::new("/var/log/pokedex"))
    );

    let defaulted = LogConfig::from_values(None, None).unwrap();
    assert!(defaulted.log_dir.is_none());

    assert!(LogConfig::from_values(None, Some("logs")).is_err());
}
