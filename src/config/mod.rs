use crate::errors::{AppError, AppResult};
use crate::models::progress::Period;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod check;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_period")]
    pub default_period: Period,
    #[serde(default = "default_top_count")]
    pub top_count: usize,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_color")]
    pub color: bool,
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: String,
}

fn default_period() -> Period {
    Period::Week
}
fn default_top_count() -> usize {
    crate::core::DEFAULT_TOP_COUNT
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_color() -> bool {
    true
}
fn default_thousands_separator() -> String {
    ",".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_period: default_period(),
            top_count: default_top_count(),
            separator_char: default_separator_char(),
            color: default_color(),
            thousands_separator: default_thousands_separator(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("osrsdiff")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".osrsdiff")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("osrsdiff.conf")
    }

    /// Load configuration from `path`, or return defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.top_count == 0 {
            return Err(AppError::Config("top_count must be at least 1".into()));
        }
        if self.separator_char.chars().count() != 1 {
            return Err(AppError::Config(format!(
                "separator_char must be a single character, got {:?}",
                self.separator_char
            )));
        }
        Ok(())
    }

    /// Write a default configuration to `path`, creating its directory.
    /// An existing file is left alone unless `force` is set.
    /// Returns true when a file was written.
    pub fn init_at(path: &Path, force: bool) -> AppResult<bool> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        if path.exists() && !force {
            return Ok(false);
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(true)
    }
}
