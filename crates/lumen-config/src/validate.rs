//! Validation helpers for configuration fields.

use lumen_boot::{MountTargetId, TargetIdError};

use crate::defaults::LOG_LEVELS;
use crate::error::{ConfigError, ConfigResult};

/// Validate the mount target element id.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when the id is empty or contains whitespace.
pub fn mount_target(value: &str) -> ConfigResult<MountTargetId> {
    MountTargetId::parse(value.trim()).map_err(|err| ConfigError::InvalidField {
        field: "mount_target",
        reason: match err {
            TargetIdError::Empty => "empty",
            TargetIdError::Whitespace { .. } => "whitespace",
        },
        value: Some(value.to_string()),
    })
}

/// Validate the computation module location.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when the location is blank.
pub fn module_url(value: &str) -> ConfigResult<String> {
    location("module_url", value)
}

/// Validate the glue script location.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when the location is blank.
pub fn glue_url(value: &str) -> ConfigResult<String> {
    location("glue_url", value)
}

fn location(field: &'static str, value: &str) -> ConfigResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidField {
            field,
            reason: "empty",
            value: None,
        });
    }
    Ok(trimmed.to_string())
}

/// Normalise and validate a log level name.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] for names outside `trace..=error`.
pub fn log_level(value: &str) -> ConfigResult<String> {
    let level = value.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        return Err(ConfigError::InvalidField {
            field: "logging.level",
            reason: "unknown_level",
            value: Some(value.to_string()),
        });
    }
    Ok(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_target_trims_then_validates() -> ConfigResult<()> {
        assert_eq!(mount_target("  viewer ")?.as_str(), "viewer");
        assert!(matches!(
            mount_target("   "),
            Err(ConfigError::InvalidField {
                field: "mount_target",
                reason: "empty",
                ..
            })
        ));
        assert!(matches!(
            mount_target("two words"),
            Err(ConfigError::InvalidField {
                reason: "whitespace",
                ..
            })
        ));
        Ok(())
    }

    #[test]
    fn module_url_rejects_blank() {
        assert!(module_url("").is_err());
        assert_eq!(
            module_url(" pkg/lumen_compute_bg.wasm ").ok().as_deref(),
            Some("pkg/lumen_compute_bg.wasm")
        );
        assert!(matches!(
            glue_url(" "),
            Err(ConfigError::InvalidField {
                field: "glue_url",
                reason: "empty",
                ..
            })
        ));
    }

    #[test]
    fn log_level_is_case_insensitive() {
        assert_eq!(log_level("WARN").ok().as_deref(), Some("warn"));
        assert!(matches!(
            log_level("verbose"),
            Err(ConfigError::InvalidField {
                field: "logging.level",
                ..
            })
        ));
    }
}
