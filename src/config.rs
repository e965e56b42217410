//! Configuration handling for the form

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration, read from `config.json` in the platform config dir
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// JSON Lines file that successful submissions are appended to
    pub submissions_file: Option<PathBuf>,
    /// Drop a field's error message as soon as the field is edited
    pub clear_errors_on_edit: Option<bool>,
    /// Clear the form after a successful submit
    pub reset_after_submit: Option<bool>,
    /// Write logs here instead of the default log file
    pub log_file: Option<PathBuf>,
}

impl FormConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "contact-form", "contact-form-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Where tracing output goes: `log_file` when set, otherwise
    /// `contact-form-tui.log` in the platform data dir. The terminal is
    /// never a log target while the form is on screen.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            Self::project_dirs().map(|dirs| dirs.data_local_dir().join("contact-form-tui.log"))
        })
    }

    /// Load configuration from the platform config dir
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults when absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: FormConfig = serde_json::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    pub fn clear_errors_on_edit(&self) -> bool {
        self.clear_errors_on_edit.unwrap_or(false)
    }

    pub fn reset_after_submit(&self) -> bool {
        self.reset_after_submit.unwrap_or(false)
    }
}
