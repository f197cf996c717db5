//! Mount target identifier.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::TargetIdError;

/// Element id the UI root attaches to unless configured otherwise.
pub const DEFAULT_MOUNT_TARGET: &str = "app";

/// Validated identifier of the document element hosting the UI root.
///
/// The identifier is resolved at mount time; holding one says nothing about
/// whether the element exists.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MountTargetId(String);

impl MountTargetId {
    /// Validate and wrap an element identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TargetIdError`] when the value is empty or contains whitespace.
    pub fn parse(value: impl Into<String>) -> Result<Self, TargetIdError> {
        let value = value.into();
        if value.is_empty() {
            return Err(TargetIdError::Empty);
        }
        if value.chars().any(|ch| ch.is_ascii_whitespace()) {
            return Err(TargetIdError::Whitespace { value });
        }
        Ok(Self(value))
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MountTargetId {
    fn default() -> Self {
        Self(DEFAULT_MOUNT_TARGET.to_string())
    }
}

impl Display for MountTargetId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl AsRef<str> for MountTargetId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for MountTargetId {
    type Err = TargetIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<String> for MountTargetId {
    type Error = TargetIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_app() {
        assert_eq!(MountTargetId::default().as_str(), "app");
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert_eq!(MountTargetId::parse(""), Err(TargetIdError::Empty));
        assert_eq!(
            "main view".parse::<MountTargetId>(),
            Err(TargetIdError::Whitespace {
                value: "main view".to_string()
            })
        );
        assert!(MountTargetId::try_from("\tapp".to_string()).is_err());
    }

    #[test]
    fn accepts_html_style_ids() -> Result<(), TargetIdError> {
        let id = MountTargetId::parse("viewer-root_2")?;
        assert_eq!(id.to_string(), "viewer-root_2");
        assert_eq!(id.as_ref(), "viewer-root_2");
        Ok(())
    }
}
