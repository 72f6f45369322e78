//! CLI Integration Test Modules

pub mod exit_codes;
pub mod resize_log;
pub mod toml_config;
