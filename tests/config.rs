use apparat::config::{
    Config, ConfigStore, JsonConfigStore, KEY_HIDE_AFTER_RUN, SECTION_GENERAL, SECTION_PLUGINS,
    SECTION_STATISTICS,
};
use apparat::settings::Settings;
use std::sync::Arc;
use tempfile::tempdir;

#[test]
fn missing_file_reads_as_empty() {
    let dir = tempdir().unwrap();
    let store = JsonConfigStore::new(dir.path().join("config.json"));
    assert_eq!(store.read(SECTION_PLUGINS, "plugin_kill").unwrap(), None);
}

#[test]
fn write_creates_parent_dirs_and_persists() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let store = JsonConfigStore::new(&path);
    store.write(SECTION_PLUGINS, "plugin_kill", "True").unwrap();
    store.write(SECTION_GENERAL, KEY_HIDE_AFTER_RUN, "False").unwrap();

    let reopened = JsonConfigStore::new(&path);
    assert_eq!(
        reopened.read(SECTION_PLUGINS, "plugin_kill").unwrap().as_deref(),
        Some("True")
    );
    assert_eq!(
        reopened.read(SECTION_GENERAL, KEY_HIDE_AFTER_RUN).unwrap().as_deref(),
        Some("False")
    );
}

#[test]
fn external_edits_are_seen_immediately() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    let config = Config::new(Arc::new(JsonConfigStore::new(&path)));
    config.set_bool(SECTION_PLUGINS, "plugin_shell", true).unwrap();
    assert!(config.get_bool(SECTION_PLUGINS, "plugin_shell"));

    std::fs::write(&path, r#"{ "Plugins": { "plugin_shell": "False" } }"#).unwrap();
    assert!(!config.get_bool(SECTION_PLUGINS, "plugin_shell"));

    config.set_string(SECTION_GENERAL, "theme", "dark").unwrap();
    assert_eq!(config.get_string(SECTION_GENERAL, "theme").as_deref(), Some("dark"));
    assert!(!config.get_bool(SECTION_PLUGINS, "plugin_shell"));
}

#[test]
fn corrupt_file_reads_as_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "not json").unwrap();
    let config = Config::new(Arc::new(JsonConfigStore::new(&path)));
    assert!(!config.get_bool(SECTION_PLUGINS, "plugin_kill"));
    assert_eq!(config.get_int(SECTION_STATISTICS, "command_executed"), 0);
}

#[test]
fn unreadable_file_is_not_overwritten() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    let mut original =
        br#"{ "Plugins": { "plugin_kill": "True", "plugin_shell": "False" } }"#.to_vec();
    original.push(0xff);
    std::fs::write(&path, &original).unwrap();

    let store = JsonConfigStore::new(&path);
    assert!(store.read(SECTION_PLUGINS, "plugin_shell").is_err());
    assert!(store.write(SECTION_STATISTICS, "command_executed", "1").is_err());

    let config = Config::new(Arc::new(JsonConfigStore::new(&path)));
    assert!(config.increment(SECTION_STATISTICS, "command_executed").is_err());
    assert!(config.ensure_defaults().is_err());
    assert_eq!(std::fs::read(&path).unwrap(), original);
}

#[test]
fn defaults_do_not_overwrite_user_choices() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    let config = Config::new(Arc::new(JsonConfigStore::new(&path)));
    config.set_bool(SECTION_PLUGINS, "plugin_session", false).unwrap();
    config.set_int(SECTION_STATISTICS, "command_executed", 7).unwrap();

    config.ensure_defaults().unwrap();
    assert!(!config.get_bool(SECTION_PLUGINS, "plugin_session"));
    assert!(config.get_bool(SECTION_PLUGINS, "plugin_screenshot"));
    assert_eq!(config.get_int(SECTION_STATISTICS, "command_executed"), 7);
    assert_eq!(config.get_int(SECTION_STATISTICS, "plugin_executed"), 0);
}

#[test]
fn settings_default_when_file_missing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let settings = Settings::load(path.to_str().unwrap()).unwrap();
    assert_eq!(settings.executable_dirs, vec!["/usr/bin"]);
    assert_eq!(settings.password_length, 16);
    assert!(!settings.debug_logging);
}

#[test]
fn settings_partial_file_fills_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{ "debug_logging": true, "config_file": "/tmp/apparat.json", "local_search_roots": ["/srv"] }"#,
    )
    .unwrap();
    let settings = Settings::load(path.to_str().unwrap()).unwrap();
    assert!(settings.debug_logging);
    assert_eq!(settings.config_path(), std::path::PathBuf::from("/tmp/apparat.json"));
    assert_eq!(settings.local_search_roots(), vec![std::path::PathBuf::from("/srv")]);
    assert_eq!(settings.local_search_depth, 6);
    assert!(settings.check_running);
}

#[test]
fn settings_save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let settings = Settings {
        password_length: 32,
        executable_dirs: vec!["/opt/bin".into()],
        ..Settings::default()
    };
    settings.save(path.to_str().unwrap()).unwrap();
    let loaded = Settings::load(path.to_str().unwrap()).unwrap();
    assert_eq!(loaded.password_length, 32);
    assert_eq!(loaded.executable_dirs, vec!["/opt/bin"]);
}
