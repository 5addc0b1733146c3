//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when mutating a contact record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Input failed field validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The record holds no phone equal to the given number
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),
}

/// Errors that can occur while executing a console command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command was given too few arguments
    #[error("{0}")]
    MissingArguments(&'static str),

    /// No contact exists under the given name
    #[error("Contact not found.")]
    ContactNotFound(String),

    /// The record rejected the change
    #[error(transparent)]
    Record(#[from] RecordError),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Record(RecordError::Validation(err))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RecordError::PhoneNotFound("0501234567".to_string());
        assert_eq!(err.to_string(), "Phone number not found: 0501234567");

        let err = CommandError::ContactNotFound("Anna".to_string());
        assert_eq!(err.to_string(), "Contact not found.");

        let err = ConfigError::InvalidValue {
            var: "ASSISTANT_TODAY".to_string(),
            reason: "bad".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for ASSISTANT_TODAY: bad");
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err: CommandError = ValidationError::InvalidPhone("12".to_string()).into();
        assert_eq!(
            err.to_string(),
            ValidationError::InvalidPhone("12".to_string()).to_string()
        );
        assert!(matches!(
            err,
            CommandError::Record(RecordError::Validation(_))
        ));
    }
}
