//! Command line and configuration file handling

pub mod args;
pub mod config;

pub use args::Args;
pub use config::{FileConfig, Settings, DEFAULT_RESIZE_LOG};

#[cfg(test)]
mod tests;
