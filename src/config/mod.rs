use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

pub const DEFAULT_TICK_RATE_MS: u64 = 250;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme id the settings view starts with
    pub theme: Option<String>,

    /// Seed for the generated habit grid
    pub habit_seed: Option<u64>,

    pub tick_rate_ms: u64,

    /// Sample data file (.json or .toml)
    pub data_file: Option<PathBuf>,

    pub start_view: Option<String>,

    /// `tracing` filter directive, used when RUST_LOG is unset
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: None,
            habit_seed: None,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            data_file: None,
            start_view: None,
            log_filter: None,
        }
    }
}

/// Loaded configuration plus a note for the status line when the file was
/// present but unusable.
#[derive(Debug, Clone, Default)]
pub struct Loaded {
    pub config: Config,
    pub path: Option<PathBuf>,
    pub problem: Option<String>,
}

/// Loads from `explicit` or the default lookup path. Missing files give
/// defaults silently; unparsable ones give defaults and a `problem`.
pub fn load(explicit: Option<&Path>) -> Loaded {
    let Some(path) = explicit.map(Path::to_path_buf).or_else(config_path) else {
        return Loaded::default();
    };
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) => {
            debug!(path = %path.display(), %err, "no config file");
            return Loaded {
                path: Some(path),
                ..Loaded::default()
            };
        }
    };
    match parse(&content) {
        Ok(config) => Loaded {
            config,
            path: Some(path),
            problem: None,
        },
        Err(err) => {
            warn!(path = %path.display(), %err, "ignoring invalid config");
            Loaded {
                config: Config::default(),
                problem: Some(format!("Config {} ignored: {}", path.display(), err)),
                path: Some(path),
            }
        }
    }
}

pub fn parse(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(content)
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("HABIT_FLOW_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("habit-flow").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("habit-flow").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "habit-flow", "habit-flow")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("habit-flow"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("habit-flow"));
    }
    directories::ProjectDirs::from("io", "habit-flow", "habit-flow")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn log_dir() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("logs"))
}
