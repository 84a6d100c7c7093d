use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// Points XDG_CONFIG_HOME at the given directory so sessions never pick up a
/// real user config.
fn taskboard(config_home: &Path) -> Command {
    let mut command = Command::cargo_bin("taskboard").unwrap();
    command.env("XDG_CONFIG_HOME", config_home);
    command.env_remove("TASKBOARD_DEBUG_LOG");
    command
}

#[test]
fn test_scripted_session_moves_card() {
    let dir = tempdir().unwrap();

    taskboard(dir.path())
        .write_stdin(
            "create-board Project\n\
             add-column board_1 Todo\n\
             add-column board_1 Doing\n\
             add-card board_1 column_1 Write spec\n\
             move-card board_1 card_1 column_1 column_2\n\
             list-cards column_1\n\
             list-cards column_2\n\
             activity board_1\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Board created: 'Project' (ID: board_1)",
        ))
        .stdout(predicate::str::contains("Card added: 'Write spec' (ID: card_1)"))
        .stdout(predicate::str::contains("Card moved: card_1"))
        .stdout(predicate::str::contains("No cards found."))
        .stdout(predicate::str::contains("Write spec (ID: card_1)"))
        .stdout(predicate::str::contains("moved from 'Todo' to 'Doing'"));
}

#[test]
fn test_unknown_command_reports_error_and_continues() {
    let dir = tempdir().unwrap();

    taskboard(dir.path())
        .write_stdin("bogus\nlist-boards\nexit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown command"))
        .stdout(predicate::str::contains("No boards found."));
}

#[test]
fn test_move_card_with_missing_column_reports_error() {
    let dir = tempdir().unwrap();

    taskboard(dir.path())
        .write_stdin(
            "create-board Project\n\
             move-card board_1 card_1 column_1 column_2\n\
             exit\n",
        )
        .assert()
        .success()
        .stderr(predicate::str::contains("column not found: column_1"));
}

#[test]
fn test_sample_data_flag_seeds_demo_board() {
    let dir = tempdir().unwrap();

    taskboard(dir.path())
        .arg("--sample-data")
        .write_stdin("list-boards\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample Kanban Project"))
        .stdout(predicate::str::contains("3 columns"));
}

#[test]
fn test_config_file_seeds_sample_data() {
    let dir = tempdir().unwrap();
    let config_dir = dir.path().join("taskboard");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "seed_sample_data = true\n").unwrap();

    taskboard(dir.path())
        .write_stdin("list-boards\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample Kanban Project"));
}

#[test]
fn test_config_default_columns_applied_on_create_board() {
    let dir = tempdir().unwrap();
    let config_dir = dir.path().join("taskboard");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "default_columns = [\"Backlog\", \"Done\"]\n",
    )
    .unwrap();

    taskboard(dir.path())
        .write_stdin("create-board Project\nlist-columns board_1\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Column added: 'Backlog' (ID: column_1)"))
        .stdout(predicate::str::contains("Backlog (ID: column_1) - 0 cards"))
        .stdout(predicate::str::contains("Done (ID: column_2) - 0 cards"));
}

#[test]
fn test_export_prints_board_as_json() {
    let dir = tempdir().unwrap();

    let output = taskboard(dir.path())
        .write_stdin(
            "create-board Project\n\
             add-column board_1 Todo\n\
             export board_1\n\
             exit\n",
        )
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8_lossy(&output);
    assert!(text.contains("\"id\": \"board_1\""));
    assert!(text.contains("\"name\": \"Project\""));
    assert!(text.contains("\"id\": \"column_1\""));
}

#[test]
fn test_help_lists_commands() {
    let dir = tempdir().unwrap();

    taskboard(dir.path())
        .write_stdin("help\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("create-board <name>"))
        .stdout(predicate::str::contains("move-card <board-id>"));
}

#[test]
fn test_completions_subcommand() {
    let dir = tempdir().unwrap();

    taskboard(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("taskboard"));
}
