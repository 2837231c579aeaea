use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "committee-ranker-cli-{}-{}",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_committee-ranker"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn default_command_ranks_built_in_roster() {
    let dir = scratch_dir("default");
    let output = run_in(&dir, &[]);

    assert!(output.status.success(), "{}", stderr(&output));
    let text = stdout(&output);
    assert!(text.starts_with("Weights for each measure:\n"));
    assert!(text.contains("(JG, JH, CE) 43\n"));

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn init_refuses_existing_file_then_force_overwrites() {
    let dir = scratch_dir("init");
    let path = dir.join("committee.toml");
    std::fs::write(&path, "placeholder\n").unwrap();

    let refused = run_in(&dir, &["init", "--path", "committee.toml"]);
    assert_eq!(refused.status.code(), Some(1));
    assert!(stderr(&refused).starts_with("Error: "));
    assert!(stderr(&refused).contains("--force"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "placeholder\n");

    let forced = run_in(&dir, &["init", "--path", "committee.toml", "--force"]);
    assert!(forced.status.success(), "{}", stderr(&forced));
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("team_size = 3"));
    assert!(written.contains("[measure_weights]"));

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn zero_team_size_fails_before_enumeration() {
    let dir = scratch_dir("team-size");
    let output = run_in(&dir, &["--log-level", "info", "rank", "--team-size", "0"]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("Error: invalid team size 0"), "{}", err);
    assert!(!err.contains("enumerating teams"), "{}", err);
    assert!(stdout(&output).is_empty());

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn team_size_override_is_used() {
    let dir = scratch_dir("team-size-two");
    let output = run_in(&dir, &["rank", "--team-size", "2", "--format", "json"]);

    assert!(output.status.success(), "{}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["team_size"], 2);
    assert_eq!(value["teams"].as_array().unwrap().len(), 10);

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn unknown_format_is_rejected() {
    let dir = scratch_dir("format");
    let output = run_in(&dir, &["rank", "--format", "yaml"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: invalid report format: yaml"));
    assert!(stdout(&output).is_empty());

    let _ = std::fs::remove_dir_all(dir);
}
