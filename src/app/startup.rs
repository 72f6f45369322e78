//! Application startup
//!
//! Parse the command line, resolve settings, start logging, open the
//! resize log, then hand over to the coordinator. Anything that fails
//! before the first worker starts is a configuration error and exits 1.

use super::cli::{Args, FileConfig, Settings};
use super::error::{AppError, ConfigError};
use crate::core::error_handling::report_fatal;
use crate::core::logging::init_logging;
use crate::core::version::long_version;
use crate::queue::FileSink;
use crate::workers::{Coordinator, RunReport};
use clap::Parser;
use std::ffi::OsString;
use std::process::ExitCode;

/// Run the application with the process arguments
pub fn startup() -> ExitCode {
    startup_from(std::env::args_os())
}

/// Run the application with an explicit argument list
pub fn startup_from<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match Args::try_parse_from(args) {
        Ok(args) => args,
        Err(e) => return parse_failure(e),
    };

    let settings = match load_settings(&args) {
        Ok(settings) => settings,
        Err(e) => {
            report_fatal(&e, "Configuration");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = start_logging(&settings) {
        report_fatal(&e, "Logging");
        return ExitCode::FAILURE;
    }
    log::info!("pcsim {} starting", long_version());
    if let Some(path) = &settings.config_file {
        log::info!("Configuration loaded from {}", path.display());
    }
    log::debug!("Settings: {:#?}", settings);

    match run_simulation(&settings) {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_fatal(&e, "Simulation");
            ExitCode::FAILURE
        }
    }
}

/// Resolve the settings for `args`, reading a configuration file if one applies
pub fn load_settings(args: &Args) -> Result<Settings, AppError> {
    let file = FileConfig::discover(args.config_file.as_deref())?;
    Ok(Settings::resolve(args, file)?)
}

/// Open the resize log and run one simulation
pub fn run_simulation(settings: &Settings) -> Result<RunReport, AppError> {
    let sink = FileSink::create(&settings.resize_log).map_err(|source| {
        ConfigError::ResizeLogOpen {
            path: settings.resize_log.clone(),
            source,
        }
    })?;
    log::debug!("Writing resize events to {}", sink.path().display());

    let report = Coordinator::new(settings.simulation.clone()).run(sink)?;
    Ok(report)
}

fn start_logging(settings: &Settings) -> Result<(), AppError> {
    let log_file = settings
        .log_file
        .as_ref()
        .map(|path| path.to_string_lossy().into_owned());

    init_logging(
        settings.log_level.as_deref(),
        settings.log_format,
        log_file.as_deref(),
        settings.color,
    )
    .map_err(|e| {
        AppError::from(ConfigError::Logging {
            message: e.to_string(),
        })
    })
}

// Help and version are printed to stdout and succeed; every other parse
// error goes to stderr and exits 1 rather than clap's usual 2
fn parse_failure(error: clap::Error) -> ExitCode {
    let _ = error.print();
    if error.use_stderr() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
