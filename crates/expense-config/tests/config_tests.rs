use std::fs;

use expense_config::{Config, ConfigError, ConfigManager, Theme};
use tempfile::tempdir;

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    assert!(!manager.config_path().exists());
    assert_eq!(manager.load().expect("load defaults"), Config::default());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let mut cfg = Config::default();
    cfg.theme = Theme::Plain;
    cfg.show_banner = false;
    cfg.summary.fold_category_case = true;

    manager.save(&cfg).expect("save config");
    assert!(manager.config_path().ends_with("config/config.json"));
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
    assert!(!manager.config_path().with_extension("json.tmp").exists());
}

#[test]
fn corrupt_file_reports_serde_error() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    fs::write(manager.config_path(), "{ not json").expect("write garbage");

    let err = manager.load().expect_err("corrupt config");
    assert!(matches!(err, ConfigError::Serde(_)));
}
