use assert_cmd::Command;
use expense_config::{Config, ConfigManager};
use tempfile::TempDir;

/// Builds a script-mode command whose config lives in an isolated home.
pub fn script_command(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense-tracker").expect("binary exists");
    cmd.env("EXPENSE_TRACKER_SCRIPT", "1")
        .env("EXPENSE_TRACKER_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

/// Writes `config` into the home used by [`script_command`].
pub fn write_config(home: &TempDir, config: &Config) {
    let manager =
        ConfigManager::with_base_dir(home.path().to_path_buf()).expect("config manager");
    manager.save(config).expect("save config");
}

/// Menu answers that record one expense.
pub fn add_script(date: &str, amount: &str, category: &str, description: &str) -> String {
    format!("1\n{date}\n{amount}\n{category}\n{description}\n")
}
