//! Configuration: every tunable threshold of the segmentation and
//! cleaning pipeline, loadable from a YAML file under the platform config
//! directory. Missing fields fall back to the built-in defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Split minute above which a rollover (suspected turn) begins.
    #[serde(default = "default_turn_minute")]
    pub turn_minute: u32,

    /// Confirmed-leg strokes required before a rollover counts as a real
    /// turnaround instead of a blip.
    #[serde(default = "default_min_leg_run")]
    pub min_leg_run: usize,

    /// Metres of forward jump between consecutive strokes treated as a
    /// GPS dropout.
    #[serde(default = "default_max_distance_jump")]
    pub max_distance_jump: f64,

    /// Plausible stroke-rate band (strokes per minute); readings outside
    /// it are sensor misreads.
    #[serde(default = "default_min_stroke_rate")]
    pub min_stroke_rate: f64,
    #[serde(default = "default_max_stroke_rate")]
    pub max_stroke_rate: f64,
}

fn default_turn_minute() -> u32 {
    12
}
fn default_min_leg_run() -> usize {
    8
}
fn default_max_distance_jump() -> f64 {
    100.0
}
fn default_min_stroke_rate() -> f64 {
    10.0
}
fn default_max_stroke_rate() -> f64 {
    34.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            turn_minute: default_turn_minute(),
            min_leg_run: default_min_leg_run(),
            max_distance_jump: default_max_distance_jump(),
            min_stroke_rate: default_min_stroke_rate(),
            max_stroke_rate: default_max_stroke_rate(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("oarlog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".oarlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("oarlog.conf")
    }

    /// Load configuration from the default location, or return defaults if
    /// no file exists yet.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Write the default configuration file, creating the directory if
    /// needed. Existing settings are overwritten.
    pub fn init_all() -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        let yaml = serde_yaml::to_string(&Self::default())
            .map_err(|e| AppError::Config(e.to_string()))?;

        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;

        success(format!("Config file: {:?}", path));
        Ok(())
    }
}
