//! Command line arguments
//!
//! Every simulation option is optional here so that a value left off the
//! command line can still come from the configuration file.

use crate::core::logging::LogFormat;
use crate::core::validation::{validate_millis, validate_positive_int, validate_positive_secs};
use crate::core::version::long_version;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "pcsim")]
#[command(about = "Producer/consumer simulation over a self-resizing circular queue")]
#[command(version, long_version = long_version())]
pub struct Args {
    /// Number of producer threads
    #[arg(short = 'p', long = "producers", value_name = "COUNT", value_parser = validate_positive_int)]
    pub producers: Option<usize>,

    /// Number of consumer threads
    #[arg(short = 'c', long = "consumers", value_name = "COUNT", value_parser = validate_positive_int)]
    pub consumers: Option<usize>,

    /// Initial queue capacity
    #[arg(short = 's', long = "size", value_name = "CAPACITY", value_parser = validate_positive_int)]
    pub initial_capacity: Option<usize>,

    /// Seconds a consumer waits without receiving an item before leaving
    #[arg(short = 't', long = "max-idle", value_name = "SECONDS", value_parser = validate_positive_secs)]
    pub max_idle: Option<Duration>,

    /// Items enqueued by each producer
    #[arg(long = "items", value_name = "COUNT", value_parser = validate_positive_int)]
    pub items_per_producer: Option<usize>,

    /// Pause between two enqueues of one producer
    #[arg(long = "producer-pause-ms", value_name = "MS", value_parser = validate_millis)]
    pub producer_pause: Option<Duration>,

    /// Simulated work per dequeued item
    #[arg(long = "consumer-work-ms", value_name = "MS", value_parser = validate_millis)]
    pub consumer_work: Option<Duration>,

    /// File receiving one line per queue resize
    #[arg(long = "resize-log", value_name = "FILE")]
    pub resize_log: Option<PathBuf>,

    /// Configuration file path
    #[arg(long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Log level
    #[arg(long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT", value_enum)]
    pub log_format: Option<LogFormat>,

    /// Write diagnostics to this file instead of stderr
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Force colored diagnostics
    #[arg(long = "color", overrides_with = "no_color")]
    pub color: bool,

    /// Disable colored diagnostics
    #[arg(long = "no-color", overrides_with = "color")]
    pub no_color: bool,
}

impl Args {
    /// Color preference from the flags, `None` when neither was given
    pub fn color_choice(&self) -> Option<bool> {
        match (self.color, self.no_color) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}
