//! FocusFlow configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::input::DEFAULT_MAX_SUBJECTS;
use crate::plan::{DEFAULT_POMODORO_MINUTES, validate_pomodoro};

/// Main FocusFlow configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,

    /// Plan defaults
    pub planner: PlannerConfig,

    /// Countdown display
    pub timer: TimerConfig,

    /// Prompt template overrides
    pub prompts: PromptsConfig,
}

impl Config {
    /// Validate configuration before use
    pub fn validate(&self) -> Result<()> {
        if !(self.planner.default_total_hours.is_finite() && self.planner.default_total_hours > 0.0) {
            return Err(eyre::eyre!(
                "planner.default-total-hours must be greater than zero, got {}",
                self.planner.default_total_hours
            ));
        }
        validate_pomodoro(self.planner.default_pomodoro_minutes).context("planner.default-pomodoro-minutes")?;
        if self.planner.max_subjects == 0 {
            return Err(eyre::eyre!("planner.max-subjects must be at least 1"));
        }
        Ok(())
    }

    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .focusflow.yml
        let local_config = PathBuf::from(".focusflow.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/focusflow/focusflow.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("focusflow").join("focusflow.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Read just the log level, before logging is set up
    ///
    /// Errors are swallowed; the full load reports them later.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        let path = match config_path {
            Some(path) => path.clone(),
            None => {
                let local = PathBuf::from(".focusflow.yml");
                if local.exists() {
                    local
                } else {
                    dirs::config_dir()?.join("focusflow").join("focusflow.yml")
                }
            }
        };
        let content = fs::read_to_string(path).ok()?;
        serde_yaml::from_str::<Self>(&content).ok()?.log_level
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Plan defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Hours to split when none are given
    #[serde(rename = "default-total-hours")]
    pub default_total_hours: f64,

    /// Pomodoro length assigned to new plan entries
    #[serde(rename = "default-pomodoro-minutes")]
    pub default_pomodoro_minutes: u32,

    /// Maximum subjects in one plan
    #[serde(rename = "max-subjects")]
    pub max_subjects: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_total_hours: 8.0,
            default_pomodoro_minutes: DEFAULT_POMODORO_MINUTES,
            max_subjects: DEFAULT_MAX_SUBJECTS,
        }
    }
}

/// Countdown display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Display refresh interval in milliseconds
    #[serde(rename = "tick-ms")]
    pub tick_ms: u64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self { tick_ms: 1000 }
    }
}

/// Prompt template overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptsConfig {
    /// Directory holding `{name}.pmt` overrides
    pub dir: Option<PathBuf>,
}
