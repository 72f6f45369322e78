//! TOML configuration file loading and settings resolution
//!
//! A configuration file is optional. When `--config` names one it must
//! exist; otherwise `<config_dir>/Pcsim/pcsim.toml` is used if present.
//! Values are resolved with the command line first, then the file, then
//! built-in defaults.

use super::args::Args;
use crate::app::error::ConfigError;
use crate::core::logging::LogFormat;
use crate::core::validation::positive_duration_from_secs;
use crate::workers::SimulationConfig;
use serde::Deserialize;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Resize log written in the working directory when none is configured
pub const DEFAULT_RESIZE_LOG: &str = "log.txt";

/// Contents of a configuration file; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub producers: Option<usize>,
    pub consumers: Option<usize>,
    pub initial_capacity: Option<usize>,
    pub max_idle_secs: Option<f64>,
    pub items_per_producer: Option<usize>,
    pub producer_pause_ms: Option<u64>,
    pub consumer_work_ms: Option<u64>,
    pub resize_log: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
    pub log_file: Option<PathBuf>,
    pub color: Option<bool>,
}

impl FileConfig {
    /// Default configuration file location, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("Pcsim").join("pcsim.toml"))
    }

    /// Read and parse one configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse(path, &contents)
    }

    fn parse(path: &Path, contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::ConfigFileParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Locate and load the configuration file to use, if any
    pub fn discover(explicit: Option<&Path>) -> Result<Option<(PathBuf, Self)>, ConfigError> {
        let path = match explicit {
            Some(path) if !path.exists() => {
                return Err(ConfigError::ConfigFileMissing {
                    path: path.to_path_buf(),
                })
            }
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(None),
            },
        };

        log::debug!("Loading configuration from {}", path.display());
        let config = Self::load(&path)?;
        Ok(Some((path, config)))
    }
}

/// Fully resolved settings for one invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub resize_log: PathBuf,
    pub log_level: Option<String>,
    pub log_format: LogFormat,
    pub log_file: Option<PathBuf>,
    pub color: bool,
    /// The configuration file the settings were read from, if any
    pub config_file: Option<PathBuf>,
}

impl Settings {
    /// Merge command line, configuration file and defaults, then validate
    pub fn resolve(args: &Args, file: Option<(PathBuf, FileConfig)>) -> Result<Self, ConfigError> {
        let (config_file, file) = match file {
            Some((path, config)) => (Some(path), config),
            None => (None, FileConfig::default()),
        };
        let defaults = SimulationConfig::default();

        let max_idle = match (args.max_idle, file.max_idle_secs) {
            (Some(max_idle), _) => max_idle,
            (None, Some(secs)) => positive_duration_from_secs(secs).map_err(|message| {
                ConfigError::InvalidValue {
                    field: "max_idle_secs".to_string(),
                    message,
                }
            })?,
            (None, None) => defaults.max_idle,
        };

        let simulation = SimulationConfig {
            producers: args.producers.or(file.producers).unwrap_or(defaults.producers),
            consumers: args.consumers.or(file.consumers).unwrap_or(defaults.consumers),
            initial_capacity: args
                .initial_capacity
                .or(file.initial_capacity)
                .unwrap_or(defaults.initial_capacity),
            items_per_producer: args
                .items_per_producer
                .or(file.items_per_producer)
                .unwrap_or(defaults.items_per_producer),
            max_idle,
            producer_pause: args
                .producer_pause
                .or(file.producer_pause_ms.map(Duration::from_millis))
                .unwrap_or(defaults.producer_pause),
            consumer_work: args
                .consumer_work
                .or(file.consumer_work_ms.map(Duration::from_millis))
                .unwrap_or(defaults.consumer_work),
        };
        simulation
            .validate()
            .map_err(|message| ConfigError::InvalidValue {
                field: "configuration".to_string(),
                message,
            })?;

        let color = args
            .color_choice()
            .or(file.color)
            .unwrap_or_else(|| std::io::stderr().is_terminal());

        Ok(Self {
            simulation,
            resize_log: args
                .resize_log
                .clone()
                .or(file.resize_log)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RESIZE_LOG)),
            log_level: args.log_level.clone().or(file.log_level),
            log_format: args.log_format.or(file.log_format).unwrap_or_default(),
            log_file: args.log_file.clone().or(file.log_file),
            color,
            config_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(contents: &str) -> Result<FileConfig, ConfigError> {
        FileConfig::parse(Path::new("test.toml"), contents)
    }

    #[test]
    fn test_parse_full_file() {
        let config = parse(
            r#"
            producers = 3
            consumers = 2
            initial_capacity = 8
            max_idle_secs = 0.5
            items_per_producer = 40
            producer_pause_ms = 0
            consumer_work_ms = 2
            resize_log = "resizes.txt"
            log_level = "debug"
            log_format = "json"
            color = false
            "#,
        )
        .unwrap();

        assert_eq!(config.producers, Some(3));
        assert_eq!(config.max_idle_secs, Some(0.5));
        assert_eq!(config.resize_log, Some(PathBuf::from("resizes.txt")));
        assert_eq!(config.log_format, Some(LogFormat::Json));
        assert_eq!(config.color, Some(false));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let error = parse("producer_count = 3").unwrap_err();
        assert!(matches!(error, ConfigError::ConfigFileParse { .. }));
        assert!(error.to_string().contains("test.toml"));
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        assert!(parse("producers = \"many\"").is_err());
    }

    #[test]
    fn test_defaults_without_args_or_file() {
        let settings = Settings::resolve(&Args::default(), None).unwrap();

        assert_eq!(settings.simulation, SimulationConfig::default());
        assert_eq!(settings.resize_log, PathBuf::from(DEFAULT_RESIZE_LOG));
        assert_eq!(settings.log_format, LogFormat::Text);
        assert!(settings.log_level.is_none());
        assert!(settings.config_file.is_none());
    }

    #[test]
    fn test_command_line_overrides_file() {
        let args = Args {
            producers: Some(7),
            max_idle: Some(Duration::from_millis(300)),
            no_color: true,
            ..Args::default()
        };
        let file = FileConfig {
            producers: Some(2),
            consumers: Some(4),
            max_idle_secs: Some(9.0),
            color: Some(true),
            ..FileConfig::default()
        };

        let settings =
            Settings::resolve(&args, Some((PathBuf::from("pcsim.toml"), file))).unwrap();

        assert_eq!(settings.simulation.producers, 7);
        assert_eq!(settings.simulation.consumers, 4);
        assert_eq!(settings.simulation.max_idle, Duration::from_millis(300));
        assert!(!settings.color);
        assert_eq!(settings.config_file, Some(PathBuf::from("pcsim.toml")));
    }

    #[test]
    fn test_file_values_fill_missing_args() {
        let file = FileConfig {
            initial_capacity: Some(16),
            producer_pause_ms: Some(0),
            resize_log: Some(PathBuf::from("custom.log")),
            log_format: Some(LogFormat::Ext),
            ..FileConfig::default()
        };

        let settings = Settings::resolve(&Args::default(), Some((PathBuf::new(), file))).unwrap();

        assert_eq!(settings.simulation.initial_capacity, 16);
        assert_eq!(settings.simulation.producer_pause, Duration::ZERO);
        assert_eq!(settings.resize_log, PathBuf::from("custom.log"));
        assert_eq!(settings.log_format, LogFormat::Ext);
    }

    #[test]
    fn test_invalid_file_values_are_rejected() {
        let zero_consumers = FileConfig {
            consumers: Some(0),
            ..FileConfig::default()
        };
        let error =
            Settings::resolve(&Args::default(), Some((PathBuf::new(), zero_consumers))).unwrap_err();
        assert!(error.to_string().contains("consumers"));

        let negative_idle = FileConfig {
            max_idle_secs: Some(-1.0),
            ..FileConfig::default()
        };
        let error =
            Settings::resolve(&Args::default(), Some((PathBuf::new(), negative_idle))).unwrap_err();
        assert!(error.to_string().contains("max_idle_secs"));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let error = FileConfig::discover(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(error, ConfigError::ConfigFileMissing { .. }));
    }

    #[test]
    fn test_explicit_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pcsim.toml");
        std::fs::write(&path, "consumers = 9\n").unwrap();

        let (found, config) = FileConfig::discover(Some(&path)).unwrap().unwrap();
        assert_eq!(found, path);
        assert_eq!(config.consumers, Some(9));
    }
}
