//! Page configuration resolution and its mapping onto logging settings.

use lumen_config::{BootConfig, ConfigResult, LogFormatSetting};
use lumen_telemetry::{LogFormat, LoggingConfig};

/// Build identifier baked in at compile time, `dev` otherwise.
pub const BUILD_SHA: &str = match option_env!("LUMEN_BUILD_SHA") {
    Some(sha) => sha,
    None => "dev",
};

/// Parse the embedded configuration document, or fall back to defaults when
/// the page carries none.
///
/// # Errors
///
/// Propagates [`lumen_config::ConfigError`] for malformed or invalid documents.
pub fn resolve_config(document: Option<&str>) -> ConfigResult<BootConfig> {
    document.map_or_else(|| Ok(BootConfig::default()), BootConfig::from_json)
}

/// Logging settings derived from the bootstrap configuration.
#[must_use]
pub fn logging_config(config: &BootConfig) -> LoggingConfig<'_> {
    let format = match config.logging.format {
        LogFormatSetting::Auto => LogFormat::infer(),
        LogFormatSetting::Pretty => LogFormat::Pretty,
        LogFormatSetting::Json => LogFormat::Json,
    };
    LoggingConfig {
        level: &config.logging.level,
        format,
        build_sha: BUILD_SHA,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_document_yields_defaults() -> ConfigResult<()> {
        let config = resolve_config(None)?;
        assert_eq!(config.mount_target.as_str(), "app");
        Ok(())
    }

    #[test]
    fn embedded_document_is_parsed() -> ConfigResult<()> {
        let config = resolve_config(Some(r#"{ "mount_target": "viewer" }"#))?;
        assert_eq!(config.mount_target.as_str(), "viewer");
        assert!(resolve_config(Some("{ not json")).is_err());
        Ok(())
    }

    #[test]
    fn logging_follows_configured_format() -> ConfigResult<()> {
        let config = resolve_config(Some(
            r#"{ "logging": { "level": "warn", "format": "json" } }"#,
        ))?;
        let logging = logging_config(&config);
        assert_eq!(logging.level, "warn");
        assert_eq!(logging.format, LogFormat::Json);
        assert!(!logging.build_sha.is_empty());

        let defaults = BootConfig::default();
        assert_eq!(logging_config(&defaults).format, LogFormat::infer());
        Ok(())
    }
}
