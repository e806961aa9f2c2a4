//! Error type shared by the version model and the constraint engine

use thiserror::Error;

/// Error returned by every fallible operation of this crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemverError {
    /// A version string does not follow `MAJOR.MINOR.PATCH[-PRE][+BUILD]`
    #[error("Invalid version string \"{input}\": {reason}")]
    InvalidFormat { input: String, reason: String },

    /// A prerelease or build metadata value passed to a setter is malformed
    #[error("Invalid identifier \"{input}\": {reason}")]
    InvalidIdentifier { input: String, reason: String },

    /// A constraint expression could not be parsed
    #[error("Could not parse version constraint \"{input}\": {reason}")]
    InvalidConstraint { input: String, reason: String },

    /// A component name is not supported by the requested operation
    #[error("unknown component name: '{0}'")]
    UnknownComponent(String),
}

impl SemverError {
    pub(crate) fn format(input: &str, reason: impl Into<String>) -> Self {
        SemverError::InvalidFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn identifier(input: &str, reason: impl Into<String>) -> Self {
        SemverError::InvalidIdentifier {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn constraint(input: &str, reason: impl Into<String>) -> Self {
        SemverError::InvalidConstraint {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, SemverError>;
