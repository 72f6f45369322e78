//! Exit status tests
//!
//! Configuration problems exit 1 before any worker starts; help, version
//! and completed runs exit 0.

use crate::common::{run_pcsim, stderr_of, stdout_of, QUICK_RUN};

#[test]
fn test_completed_run_exits_zero_and_prints_summary() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_pcsim(dir.path(), QUICK_RUN);

    assert_eq!(output.status.code(), Some(0), "{}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Produced 10 items with 2 producers"));
    assert!(stdout.contains("Consumed 10 items with 1 consumers"));
}

#[test]
fn test_unknown_option_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_pcsim(dir.path(), &["-x"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("-x"));
    assert!(stdout_of(&output).is_empty());
    assert!(!dir.path().join("log.txt").exists(), "no run was started");
}

#[test]
fn test_invalid_count_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_pcsim(dir.path(), &["-p", "0"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("greater than 0"));
}

#[test]
fn test_unopenable_resize_log_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("missing").join("log.txt");
    let target = target.to_str().unwrap();

    let mut args: Vec<&str> = QUICK_RUN.to_vec();
    args.extend(["--resize-log", target]);
    let output = run_pcsim(dir.path(), &args);

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_of(&output);
    assert!(stderr.starts_with("Error: cannot open resize log"), "{}", stderr);
    assert!(stdout_of(&output).is_empty());
}

#[test]
fn test_help_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_pcsim(dir.path(), &["--help"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    for flag in ["--producers", "--consumers", "--size", "--max-idle"] {
        assert!(stdout.contains(flag), "help should mention {}", flag);
    }
}

#[test]
fn test_version_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_pcsim(dir.path(), &["--version"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains(env!("CARGO_PKG_VERSION")));
}
