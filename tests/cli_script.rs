mod common;

use common::{add_script, script_command, write_config};
use expense_config::{Config, Theme};
use predicates::{prelude::PredicateBooleanExt, str::contains};

fn seeded_script() -> String {
    [
        add_script("2025-05-01", "15.99", "Food", "Lunch"),
        add_script("2025-05-02", "50.00", "Transport", "Gas"),
        add_script("2025-05-03", "25.50", "Food", "Dinner"),
    ]
    .concat()
}

fn stdout_of(script: String) -> String {
    let home = tempfile::tempdir().unwrap();
    let output = script_command(&home)
        .write_stdin(script)
        .output()
        .expect("run binary");
    assert!(output.status.success());
    String::from_utf8(output.stdout).expect("utf8 stdout")
}

#[test]
fn add_then_view_all_lists_the_expense() {
    let home = tempfile::tempdir().unwrap();
    let script = format!(
        "{}2\n1\n4\n",
        add_script("2025-05-01", "15.99", "Food", "Lunch")
    );

    script_command(&home)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(
            contains("Welcome to your personal expense tracking system!")
                .and(contains("Expense added successfully!"))
                .and(contains("EXPENSE LIST"))
                .and(contains("2025-05-01 |     $15.99 | Food     | Lunch"))
                .and(contains("Total Expenses: 1"))
                .and(contains("Thank you for using Expense Tracker!")),
        );
}

#[test]
fn invalid_date_is_reported_and_nothing_is_stored() {
    let home = tempfile::tempdir().unwrap();
    let script = format!(
        "{}2\n1\n4\n",
        add_script("invalid-date", "10", "Test", "Test")
    );

    script_command(&home)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(
            contains("Invalid date format `invalid-date`")
                .and(contains("No Expenses Found!"))
                .and(contains("Expense added successfully!").not()),
        );
}

#[test]
fn invalid_amount_returns_to_menu_without_more_prompts() {
    let home = tempfile::tempdir().unwrap();

    script_command(&home)
        .write_stdin("1\n2025-05-01\nabc\n3\n4\n")
        .assert()
        .success()
        .stdout(
            contains("Please enter a valid amount (number).")
                .and(contains("No Expenses Found!"))
                .and(contains("Goodbye!")),
        );
}

#[test]
fn summary_ranks_categories_and_totals() {
    let stdout = stdout_of(format!("{}3\n4\n", seeded_script()));

    assert!(stdout.contains("EXPENSE SUMMARY"));
    assert!(stdout.contains("Category Breakdown:"));
    let transport = stdout.find("Transport |     $50.00").expect("transport row");
    let food = stdout.find("Food      |     $41.49").expect("food row");
    assert!(transport < food);
    assert!(stdout.contains("TOTAL     |     $91.49"));
}

#[test]
fn date_range_filter_is_inclusive() {
    let stdout = stdout_of(format!(
        "{}2\n2\n2025-05-02\n2025-05-03\n4\n",
        seeded_script()
    ));

    assert!(stdout.contains("Gas"));
    assert!(stdout.contains("Dinner"));
    assert!(!stdout.contains("Lunch"));
    assert!(stdout.contains("Total Expenses: 2"));
}

#[test]
fn malformed_filter_date_is_reported() {
    let stdout = stdout_of(format!("{}2\n2\nyesterday\n2025-05-03\n4\n", seeded_script()));

    assert!(stdout.contains("Invalid date format `yesterday`"));
    assert!(!stdout.contains("EXPENSE LIST"));
}

#[test]
fn category_filter_ignores_case() {
    let stdout = stdout_of(format!("{}2\n3\nfOoD\n4\n", seeded_script()));

    assert!(stdout.contains("Lunch"));
    assert!(stdout.contains("Dinner"));
    assert!(!stdout.contains("Gas"));
    assert!(stdout.contains("Total Expenses: 2"));
}

#[test]
fn unknown_filter_choice_is_rejected() {
    let stdout = stdout_of("2\n7\n4\n".to_string());

    assert!(stdout.contains("Invalid choice!"));
    assert!(!stdout.contains("Invalid choice! Please try again."));
    assert!(stdout.contains("Thank you for using Expense Tracker!"));
}

#[test]
fn unknown_menu_choice_suggests_a_command() {
    let home = tempfile::tempdir().unwrap();

    script_command(&home)
        .write_stdin("sumary\n9\nexit\n")
        .assert()
        .success()
        .stdout(
            contains("Invalid choice! Please try again.")
                .and(contains("Did you mean `summary`?"))
                .and(contains("Thank you for using Expense Tracker!")),
        );
}

#[test]
fn end_of_input_exits_cleanly() {
    let home = tempfile::tempdir().unwrap();

    script_command(&home)
        .write_stdin("1\n2025-05-01\n")
        .assert()
        .success()
        .stdout(
            contains("Goodbye!")
                .and(contains("Thank you for using Expense Tracker!").not()),
        );
}

#[test]
fn banner_can_be_disabled_and_plain_theme_applies() {
    let home = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.show_banner = false;
    config.theme = Theme::Plain;
    write_config(&home, &config);

    script_command(&home)
        .write_stdin("2\n1\n9\n4\n")
        .assert()
        .success()
        .stdout(
            contains("Welcome to your personal expense tracking system!")
                .not()
                .and(contains("+----"))
                .and(contains("ERROR: Invalid choice! Please try again.")),
        );
}

#[test]
fn folding_category_case_merges_summary_buckets() {
    let home = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.summary.fold_category_case = true;
    write_config(&home, &config);

    let script = format!(
        "{}{}3\n4\n",
        add_script("2025-05-01", "10", "Food", "Lunch"),
        add_script("2025-05-02", "5", "food", "Snack"),
    );

    script_command(&home)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("Food     |     $15.00").and(contains("food     |").not()));
}

#[test]
fn corrupt_config_falls_back_to_defaults() {
    let home = tempfile::tempdir().unwrap();
    let config_dir = home.path().join("config");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.json"), "{ nope").unwrap();

    script_command(&home)
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(
            contains("Could not load config, using defaults")
                .and(contains("Welcome to your personal expense tracking system!")),
        );
}

#[test]
fn undecodable_menu_line_is_reported_and_session_continues() {
    let home = tempfile::tempdir().unwrap();

    script_command(&home)
        .write_stdin(b"\xff\xfe\n3\n4\n".to_vec())
        .assert()
        .success()
        .stdout(
            contains("An unexpected error occurred")
                .and(contains("Please try again."))
                .and(contains("No Expenses Found!"))
                .and(contains("Thank you for using Expense Tracker!")),
        );
}

#[test]
fn undecodable_answer_keeps_recorded_expenses() {
    let home = tempfile::tempdir().unwrap();
    let mut script = add_script("2025-05-01", "15.99", "Food", "Lunch").into_bytes();
    script.extend_from_slice(b"1\n\xff\n2\n1\n4\n");

    script_command(&home)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(
            contains("An unexpected error occurred")
                .and(contains("Total Expenses: 1"))
                .and(contains("Goodbye!")),
        );
}
