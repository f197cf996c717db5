//! Typed configuration consumed by the web host at startup.

use lumen_boot::MountTargetId;
use serde::Deserialize;

use crate::defaults::{GLUE_URL, LOG_LEVEL, MODULE_URL};
use crate::error::ConfigResult;
use crate::loader;

/// Output format requested for browser logs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormatSetting {
    /// Pick a format from the build profile.
    #[default]
    Auto,
    /// Human-readable lines.
    Pretty,
    /// Structured JSON objects.
    Json,
}

/// Logging section of the configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Level directive handed to the log filter.
    pub level: String,
    /// Output format.
    pub format: LogFormatSetting,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LOG_LEVEL.to_string(),
            format: LogFormatSetting::Auto,
        }
    }
}

/// Validated bootstrap configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BootConfig {
    /// Element the UI root mounts into.
    pub mount_target: MountTargetId,
    /// Location of the precompiled computation module.
    pub module_url: String,
    /// Location of the ES module glue whose default export initialises the
    /// computation module and supplies its imports.
    pub glue_url: String,
    /// Logging settings.
    pub logging: LoggingSettings,
}

impl BootConfig {
    /// Parse and validate a JSON configuration document.
    ///
    /// An empty or whitespace-only document yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError::Parse`] for malformed JSON or unknown
    /// fields and [`crate::ConfigError::InvalidField`] for rejected values.
    pub fn from_json(document: &str) -> ConfigResult<Self> {
        loader::parse_document(document)
    }
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            mount_target: MountTargetId::default(),
            module_url: MODULE_URL.to_string(),
            glue_url: GLUE_URL.to_string(),
            logging: LoggingSettings::default(),
        }
    }
}
