use assert_cmd::Command;
use predicates::prelude::*;
use sisu::model::{Review, Session, Task};
use sisu::store::sqlite::SqliteStore;
use sisu::store::DataStore;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway config home plus database path for one test.
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn db(&self) -> PathBuf {
        self.dir.path().join("sisu.db")
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    /// `sisu --db <sandbox db>` with a clean environment.
    fn sisu(&self) -> Command {
        let mut cmd = self.bare();
        cmd.arg("--db").arg(self.db());
        cmd
    }

    /// `sisu` without `--db`, still isolated from the user's config.
    fn bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("sisu").unwrap();
        cmd.current_dir(self.path())
            .env("SISU_HOME", self.path())
            .env_remove("SISU_DB")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }

    fn seed_tasks(&self, names: &[&str]) {
        let mut store = SqliteStore::open(&self.db()).unwrap();
        for name in names {
            store.insert(&mut Task::named(name)).unwrap();
        }
    }

    fn task_ids(&self) -> Vec<i64> {
        let store = SqliteStore::open(&self.db()).unwrap();
        store.list::<Task>().unwrap().iter().map(|t| t.id).collect()
    }
}

#[test]
fn test_migrate_creates_database() {
    let sb = Sandbox::new();

    sb.sisu()
        .arg("migrate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Migrations applied; database at"))
        .stdout(predicate::str::contains("sisu.db"));

    assert!(sb.db().exists());
}

#[test]
fn test_list_empty_database() {
    let sb = Sandbox::new();
    sb.sisu()
        .args(["task", "list"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_list_shows_display_lines() {
    let sb = Sandbox::new();
    sb.seed_tasks(&["Write book", "Run 10k"]);

    sb.sisu()
        .args(["task", "list"])
        .assert()
        .success()
        .stdout("1\tWrite book (archived=false)\n2\tRun 10k (archived=false)\n");
}

#[test]
fn test_review_list_is_a_table() {
    let sb = Sandbox::new();
    sb.seed_tasks(&["Write book"]);
    {
        let mut store = SqliteStore::open(&sb.db()).unwrap();
        store
            .insert(&mut Review {
                task: 1,
                week: Some(12),
                summary: Some("steady".into()),
                ..Default::default()
            })
            .unwrap();
    }

    sb.sisu()
        .args(["review", "list"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("+----"))
        .stdout(predicate::str::contains("summary"))
        .stdout(predicate::str::contains("steady"));
}

#[test]
fn test_rm_removes_in_order() {
    let sb = Sandbox::new();
    sb.seed_tasks(&["a", "b", "c"]);

    sb.sisu()
        .args(["task", "rm", "3", "1"])
        .assert()
        .success()
        .stdout("Removed task 3\nRemoved task 1\n");

    assert_eq!(sb.task_ids(), vec![2]);
}

#[test]
fn test_rm_stops_at_first_missing_id() {
    let sb = Sandbox::new();
    sb.seed_tasks(&["a", "b", "c"]);

    sb.sisu()
        .args(["task", "rm", "1", "99", "2"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Removed task 1"))
        .stderr(predicate::str::contains("Error: task 99 not found"));

    assert_eq!(sb.task_ids(), vec![2, 3]);
}

#[test]
fn test_rm_task_with_sessions() {
    let sb = Sandbox::new();
    sb.seed_tasks(&["Write book", "Run 10k"]);
    {
        let mut store = SqliteStore::open(&sb.db()).unwrap();
        store
            .insert(&mut Session {
                task: 1,
                duration_mins: Some(45),
                ..Default::default()
            })
            .unwrap();
    }

    sb.sisu()
        .args(["task", "rm", "1"])
        .assert()
        .success()
        .stdout("Removed task 1\n");

    assert_eq!(sb.task_ids(), vec![2]);
    sb.sisu()
        .args(["session", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("task=1"));
}

#[test]
fn test_rm_rejects_malformed_id() {
    let sb = Sandbox::new();
    sb.seed_tasks(&["a"]);

    sb.sisu()
        .args(["task", "rm", "one"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid id \"one\""));

    assert_eq!(sb.task_ids(), vec![1]);
}

#[test]
fn test_edit_missing_id_fails() {
    let sb = Sandbox::new();
    sb.sisu()
        .args(["calendar", "edit", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("calendar 5 not found"));
}

#[test]
fn test_add_from_piped_answers() {
    let sb = Sandbox::new();

    sb.sisu()
        .args(["task", "add"])
        .write_stdin("Write book\nwriting\n\n2025-12-31\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1/4] Task name"))
        .stdout(predicate::str::contains("Created task 1"));

    let store = SqliteStore::open(&sb.db()).unwrap();
    let task = store.find::<Task>(1).unwrap();
    assert_eq!(task.name, "Write book");
    assert_eq!(task.tag.as_deref(), Some("writing"));
    assert_eq!(task.date_target.unwrap().to_string(), "2025-12-31");
    assert!(task.date_start.is_some());
}

#[test]
fn test_add_retries_invalid_answer() {
    let sb = Sandbox::new();
    sb.seed_tasks(&["Write book"]);

    sb.sisu()
        .args(["session", "add"])
        .write_stdin("1\n2025-01-05\nhalf an hour\n30\n4\nfocused\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("! "))
        .stdout(predicate::str::contains("Created session 1"));
}

#[test]
fn test_add_cancelled_at_end_of_input() {
    let sb = Sandbox::new();

    sb.sisu()
        .args(["task", "add"])
        .write_stdin("Write book\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled, nothing saved."));

    assert!(sb.task_ids().is_empty());
}

#[test]
fn test_export_without_tables_prints_help() {
    let sb = Sandbox::new();
    sb.sisu()
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--all"));
}

#[test]
fn test_export_writes_csv() {
    let sb = Sandbox::new();
    sb.seed_tasks(&["Write, edit"]);
    let out = sb.path().join("out");

    sb.sisu()
        .args(["export", "tasks", "--dir"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported"));

    let csv = std::fs::read_to_string(out.join("tasks.csv")).unwrap();
    assert!(csv.starts_with("id,name,tag,description,date_target,date_start,archived\n"));
    assert!(csv.contains("1,\"Write, edit\","));
}

#[test]
fn test_export_all_uses_config_dir() {
    let sb = Sandbox::new();
    std::fs::write(
        sb.path().join("config.json"),
        r#"{ "export_dir": "exports" }"#,
    )
    .unwrap();

    sb.sisu().args(["export", "--all"]).assert().success();

    for table in ["tasks", "sessions", "milestones", "reviews", "coach", "calendar"] {
        assert!(sb.path().join("exports").join(format!("{table}.csv")).exists());
    }
}

#[test]
fn test_export_unknown_table_fails() {
    let sb = Sandbox::new();
    sb.sisu()
        .args(["export", "habits", "--dir"])
        .arg(sb.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown table \"habits\""));
}

#[test]
fn test_db_path_from_env() {
    let sb = Sandbox::new();
    sb.seed_tasks(&["from env"]);

    sb.bare()
        .env("SISU_DB", sb.db())
        .args(["task", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("from env"));
}

#[test]
fn test_db_path_from_config() {
    let sb = Sandbox::new();
    sb.seed_tasks(&["from config"]);
    let config = serde_json::json!({ "db_path": sb.db() });
    std::fs::write(sb.path().join("config.json"), config.to_string()).unwrap();

    sb.bare()
        .args(["task", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("from config"));
}

#[test]
fn test_hidden_complete_lists_ids_and_hints() {
    let sb = Sandbox::new();
    sb.seed_tasks(&["alpha", "beta", "gamma"]);

    sb.sisu()
        .args(["__complete", "task", "rm", "2", ""])
        .assert()
        .success()
        .stdout("1\talpha\n3\tgamma\n");
}

#[test]
fn test_hidden_complete_never_fails() {
    let sb = Sandbox::new();
    sb.sisu()
        .args(["__complete", "habit", "rm", ""])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_hidden_complete_survives_broken_config() {
    let sb = Sandbox::new();
    sb.seed_tasks(&["alpha"]);
    std::fs::write(sb.path().join("config.json"), "{ not json").unwrap();

    sb.sisu()
        .args(["__complete", "task", "rm", ""])
        .assert()
        .success()
        .stdout("1\talpha\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_broken_config_is_fatal_for_regular_commands() {
    let sb = Sandbox::new();
    std::fs::write(sb.path().join("config.json"), "{ not json").unwrap();

    sb.sisu()
        .args(["task", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Serialization error"));
}

#[test]
fn test_config_set_and_show() {
    let sb = Sandbox::new();

    sb.bare()
        .args(["config", "export_dir", "csv"])
        .assert()
        .success()
        .stdout("export_dir set to csv\n");
    sb.bare()
        .args(["config", "export_dir"])
        .assert()
        .success()
        .stdout("csv\n");
    sb.bare()
        .arg("config")
        .assert()
        .success()
        .stdout("db_path = sisu.db\nexport_dir = csv\n");
    sb.bare()
        .args(["config", "theme", "dark"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown config key: theme"));
}

#[test]
fn test_completion_scripts() {
    let sb = Sandbox::new();
    sb.bare()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete -F _sisu sisu"));
    sb.bare()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef sisu"));
}

#[test]
fn test_no_arguments_prints_grouped_help() {
    let sb = Sandbox::new();
    sb.sisu()
        .assert()
        .success()
        .stdout(predicate::str::contains("Entity Commands:"))
        .stdout(predicate::str::contains("Data Commands:"));
}

#[test]
fn test_version() {
    let sb = Sandbox::new();
    sb.bare()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("sisu "));
}
