//! JSON document loading.
//!
//! # Design
//! - Deserialize into permissive raw structs, then validate into [`BootConfig`].
//! - Unknown keys are rejected so typos surface instead of silently defaulting.

use serde::Deserialize;

use crate::defaults::{GLUE_URL, MODULE_URL};
use crate::error::{ConfigError, ConfigResult};
use crate::model::{BootConfig, LogFormatSetting, LoggingSettings};
use crate::validate;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawBootConfig {
    mount_target: Option<String>,
    module_url: Option<String>,
    glue_url: Option<String>,
    logging: RawLogging,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawLogging {
    level: Option<String>,
    format: LogFormatSetting,
}

/// Parse a JSON configuration document into a validated [`BootConfig`].
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] for malformed documents and
/// [`ConfigError::InvalidField`] when a value fails validation.
pub fn parse_document(document: &str) -> ConfigResult<BootConfig> {
    if document.trim().is_empty() {
        return Ok(BootConfig::default());
    }
    let raw: RawBootConfig =
        serde_json::from_str(document).map_err(|source| ConfigError::Parse { source })?;
    into_config(raw)
}

fn into_config(raw: RawBootConfig) -> ConfigResult<BootConfig> {
    let mount_target = raw
        .mount_target
        .as_deref()
        .map(validate::mount_target)
        .transpose()?
        .unwrap_or_default();
    let module_url = match raw.module_url.as_deref() {
        Some(value) => validate::module_url(value)?,
        None => MODULE_URL.to_string(),
    };
    let glue_url = match raw.glue_url.as_deref() {
        Some(value) => validate::glue_url(value)?,
        None => GLUE_URL.to_string(),
    };
    let mut logging = LoggingSettings {
        format: raw.logging.format,
        ..LoggingSettings::default()
    };
    if let Some(level) = raw.logging.level.as_deref() {
        logging.level = validate::log_level(level)?;
    }

    Ok(BootConfig {
        mount_target,
        module_url,
        glue_url,
        logging,
    })
}
