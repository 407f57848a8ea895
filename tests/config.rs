use insight::config::Config;

#[test]
fn missing_file_is_created_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = Config::load_from(&path).unwrap();
    assert!(path.exists());
    assert_eq!(config.reply_delay_ms, 500);
    assert!(config.seed_sample_records);
    assert_eq!(config.log_path(), dir.path().join("nested").join("insight.log"));
}

#[test]
fn partial_file_keeps_defaults_for_missing_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "locale = \"en\"\nseed_sample_records = false\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.locale.as_deref(), Some("en"));
    assert!(!config.seed_sample_records);
    assert_eq!(config.greeting_delay_ms, 500);
}

#[test]
fn invalid_values_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    std::fs::write(&path, "greeting_delay_ms = 600000\n").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{err:#}").contains("greeting_delay_ms"));

    std::fs::write(&path, "log_level = \"loud\"\n").unwrap();
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn saved_config_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut config = Config::load_from(&path).unwrap();
    config.author_label = "People Ops".into();
    config.assistance_on_start = true;
    config.save().unwrap();

    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded.author_label, "People Ops");
    assert!(reloaded.assistance_on_start);
}
