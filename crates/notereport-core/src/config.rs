//! Report settings
//!
//! Stored as TOML in `notereport.toml`. Every field has a default, so a
//! missing file or a partial file is fine.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::{NoteReportError, Result};

pub const SETTINGS_FORMAT_VERSION: u32 = 1;

const CONFIG_DIR: &str = "notereport";
const CONFIG_FILE: &str = "notereport.toml";
const CONFIG_DIR_ENV_VAR: &str = "NOTEREPORT_CONFIG_DIR";

/// Top-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSettings {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Filter configuration loaded automatically when a report opens
    #[serde(default = "default_filter_config")]
    pub default_filter_config: String,

    #[serde(default)]
    pub style: StyleConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Fonts, sizes and indents used by the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    #[serde(default = "default_font")]
    pub font: String,
    #[serde(default = "default_title_size")]
    pub title_size: u16,
    #[serde(default = "default_subtitle_size")]
    pub subtitle_size: u16,
    #[serde(default = "default_header_size")]
    pub header_size: u16,
    #[serde(default = "default_body_size")]
    pub body_size: u16,
    #[serde(default = "default_parent_indent")]
    pub parent_indent: u16,
    #[serde(default = "default_body_indent")]
    pub body_indent: u16,
}

/// Plain-text output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Line width used to center headings
    #[serde(default = "default_width")]
    pub width: usize,
}

fn default_version() -> u32 {
    SETTINGS_FORMAT_VERSION
}

fn default_filter_config() -> String {
    "Default".to_string()
}

fn default_font() -> String {
    "Courier New".to_string()
}

fn default_title_size() -> u16 {
    16
}

fn default_subtitle_size() -> u16 {
    10
}

fn default_header_size() -> u16 {
    12
}

fn default_body_size() -> u16 {
    10
}

fn default_parent_indent() -> u16 {
    63
}

fn default_body_indent() -> u16 {
    127
}

fn default_width() -> usize {
    80
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            version: default_version(),
            default_filter_config: default_filter_config(),
            style: StyleConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font: default_font(),
            title_size: default_title_size(),
            subtitle_size: default_subtitle_size(),
            header_size: default_header_size(),
            body_size: default_body_size(),
            parent_indent: default_parent_indent(),
            body_indent: default_body_indent(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
        }
    }
}

impl ReportSettings {
    /// Settings file location: `$NOTEREPORT_CONFIG_DIR` or the platform
    /// config directory
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    NoteReportError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load settings from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let settings: ReportSettings = toml::from_str(&content)?;

        if settings.version > SETTINGS_FORMAT_VERSION {
            bail_invalid!(
                "settings version",
                format!(
                    "{} in {} (supported: {})",
                    settings.version,
                    path.display(),
                    SETTINGS_FORMAT_VERSION
                )
            );
        }

        Ok(settings)
    }

    /// Load from `path` if given, else from the default location; a missing
    /// default file yields the defaults. An explicit path must exist.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    tracing::debug!(path = %path.display(), "load_settings");
                    Self::load(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Save settings to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| NoteReportError::Other(format!("failed to serialize settings: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}
