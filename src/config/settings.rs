//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// Keyword worker settings
    #[serde(default)]
    pub worker: WorkerSettings,

    /// Summary settings
    #[serde(default)]
    pub summary: SummarySettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Data directory for worker scripts and exports
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerSettings {
    /// Interpreter or executable that runs the keyword worker
    #[serde(default = "default_worker_command")]
    pub command: String,

    /// Path to the worker script (empty = <data_dir>/workers/extract_keywords.py)
    #[serde(default)]
    pub script: PathBuf,

    /// Seconds to wait for the worker before giving up (0 = wait forever)
    #[serde(default = "default_worker_timeout")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarySettings {
    /// Number of sentences in a generated summary
    #[serde(default = "default_sentence_count")]
    pub sentence_count: usize,
}

// Default value functions

fn default_data_dir() -> PathBuf {
    ProjectDirs::from("com", "takeaway", "takeaway")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.local/share/takeaway"))
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_worker_command() -> String {
    "python3".to_string()
}

fn default_worker_timeout() -> u64 {
    30
}

fn default_sentence_count() -> usize {
    3
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

impl Default for WorkerSettings {
    fn default() -> Self {
        Self {
            command: default_worker_command(),
            script: PathBuf::new(),
            timeout_secs: default_worker_timeout(),
        }
    }
}

impl Default for SummarySettings {
    fn default() -> Self {
        Self {
            sentence_count: default_sentence_count(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            worker: WorkerSettings::default(),
            summary: SummarySettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("No config file found, using defaults");
            let mut settings = Self::default();
            settings.apply_env_overrides();
            return Ok(settings);
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if self.worker.script.as_os_str().is_empty() {
            if let Ok(script) = std::env::var("TAKEAWAY_WORKER_SCRIPT") {
                if !script.trim().is_empty() {
                    self.worker.script = PathBuf::from(script);
                }
            }
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "takeaway", "takeaway")
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &PathBuf) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the path to the keyword worker script
    pub fn worker_script_path(&self) -> PathBuf {
        if self.worker.script.as_os_str().is_empty() {
            self.general
                .data_dir
                .join("workers")
                .join("extract_keywords.py")
        } else {
            self.worker.script.clone()
        }
    }

    /// Ensure all required directories exist
    pub fn ensure_dirs(&self) -> Result<()> {
        std::fs::create_dir_all(&self.general.data_dir)?;
        std::fs::create_dir_all(self.general.data_dir.join("workers"))?;
        Ok(())
    }
}
