//! Configuration file tests

use crate::common::{run_pcsim, stderr_of, stdout_of, QUICK_RUN};

const QUICK_CONFIG: &str = r#"
producers = 3
consumers = 2
initial_capacity = 2
items_per_producer = 4
max_idle_secs = 1.0
producer_pause_ms = 0
consumer_work_ms = 0
"#;

#[cfg(target_os = "linux")]
fn write_default_config(config_home: &std::path::Path, contents: &str) {
    let dir = config_home.join("Pcsim");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("pcsim.toml"), contents).unwrap();
}

#[test]
fn test_explicit_config_file_is_used() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("quick.toml"), QUICK_CONFIG).unwrap();

    let output = run_pcsim(dir.path(), &["--config", "quick.toml"]);

    assert_eq!(output.status.code(), Some(0), "{}", stderr_of(&output));
    assert!(stdout_of(&output).contains("Produced 12 items with 3 producers"));
}

// The default location follows XDG_CONFIG_HOME only on Linux
#[cfg(target_os = "linux")]
#[test]
fn test_default_config_location_is_used() {
    let dir = tempfile::tempdir().unwrap();
    write_default_config(dir.path(), QUICK_CONFIG);

    let output = run_pcsim(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(0), "{}", stderr_of(&output));
    assert!(stdout_of(&output).contains("with 2 consumers"));
}

#[test]
fn test_command_line_overrides_config_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("quick.toml"), QUICK_CONFIG).unwrap();

    let output = run_pcsim(dir.path(), &["--config", "quick.toml", "-p", "1"]);

    assert_eq!(output.status.code(), Some(0), "{}", stderr_of(&output));
    assert!(stdout_of(&output).contains("Produced 4 items with 1 producers"));
}

#[test]
fn test_missing_explicit_config_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let mut args: Vec<&str> = QUICK_RUN.to_vec();
    args.extend(["--config", "absent.toml"]);

    let output = run_pcsim(dir.path(), &args);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("does not exist"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_unknown_config_key_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    write_default_config(dir.path(), "threads = 4\n");

    let output = run_pcsim(dir.path(), QUICK_RUN);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("cannot parse configuration file"));
}
