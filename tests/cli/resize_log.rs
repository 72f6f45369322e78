//! Resize log tests

use crate::common::{resize_lines, run_pcsim, stderr_of, QUICK_RUN};

#[test]
fn test_default_resize_log_in_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_pcsim(dir.path(), QUICK_RUN);
    assert_eq!(output.status.code(), Some(0), "{}", stderr_of(&output));

    let lines = resize_lines(&dir.path().join("log.txt"));
    assert!(!lines.is_empty(), "ten items through capacity 4 must resize");
}

#[test]
fn test_custom_resize_log_is_truncated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resizes.txt");
    std::fs::write(&path, "stale line\n").unwrap();

    let mut args = QUICK_RUN.to_vec();
    args.extend(["--resize-log", "resizes.txt"]);
    let output = run_pcsim(dir.path(), &args);
    assert_eq!(output.status.code(), Some(0), "{}", stderr_of(&output));

    let lines = resize_lines(&path);
    assert!(lines.iter().all(|line| line != "stale line"));
    assert!(!dir.path().join("log.txt").exists());
}

#[test]
fn test_single_item_run_grows_past_one_slot() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_pcsim(
        dir.path(),
        &[
            "-p",
            "1",
            "-c",
            "1",
            "-s",
            "1",
            "--items",
            "1",
            "--producer-pause-ms",
            "0",
        ],
    );
    assert_eq!(output.status.code(), Some(0), "{}", stderr_of(&output));

    // The first insert fills a one-slot queue
    let lines = resize_lines(&dir.path().join("log.txt"));
    assert_eq!(lines.first().map(String::as_str), Some("Queue resized to 2"));
}
