//! Common test utilities and helpers
//!
//! Runs the built `pcsim` binary inside a scratch directory so the default
//! resize log and any configuration lookups stay out of the real user
//! environment.

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

/// Options for a run that finishes in well under a second
pub const QUICK_RUN: &[&str] = &[
    "-p",
    "2",
    "-c",
    "1",
    "-s",
    "4",
    "-t",
    "1",
    "--items",
    "5",
    "--producer-pause-ms",
    "0",
    "--consumer-work-ms",
    "0",
];

/// Run the binary with `args`, using `dir` as working and config directory
pub fn run_pcsim(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pcsim"))
        .args(args)
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", dir)
        .env("HOME", dir)
        .output()
        .expect("failed to run pcsim binary")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Lines of a resize log, asserting each one has the expected shape
pub fn resize_lines(path: &Path) -> Vec<String> {
    let contents = std::fs::read_to_string(path).expect("resize log should exist");
    let lines: Vec<String> = contents.lines().map(str::to_string).collect();
    for line in &lines {
        let capacity = line
            .strip_prefix("Queue resized to ")
            .unwrap_or_else(|| panic!("unexpected resize line: {:?}", line));
        let capacity: usize = capacity.parse().expect("capacity should be numeric");
        assert!(capacity >= 1);
    }
    lines
}
