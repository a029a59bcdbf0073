//! Error types for the salary roster.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can end a registration session.

use thiserror::Error;

/// The main error type for the salary roster.
///
/// An out-of-range employee selector is deliberately absent: it is reported
/// to the user and the record is skipped, so it never surfaces as an error.
///
/// # Example
///
/// ```
/// use salary_roster::error::RosterError;
///
/// let error = RosterError::InvalidNumber {
///     field: "salário base".to_string(),
///     input: "abc".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid number for 'salário base': \"abc\"");
/// ```
#[derive(Debug, Error)]
pub enum RosterError {
    /// A numeric field (selector or base salary) could not be parsed.
    #[error("Invalid number for '{field}': {input:?}")]
    InvalidNumber {
        /// The field being read.
        field: String,
        /// The raw text that was entered.
        input: String,
    },

    /// A final salary does not fit in the decimal range.
    #[error("Final salary of '{name}' exceeds the supported range")]
    SalaryOverflow {
        /// The employee whose salary overflowed.
        name: String,
    },

    /// Input ended while the session still expected an answer.
    #[error("Input ended while waiting for: {prompt}")]
    UnexpectedEndOfInput {
        /// The prompt that was left unanswered.
        prompt: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The report could not be serialized.
    #[error("Failed to serialize report: {message}")]
    Serialization {
        /// A description of the serialization failure.
        message: String,
    },

    /// Reading from or writing to the console failed.
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A type alias for Results that return RosterError.
pub type RosterResult<T> = Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_number_displays_field_and_input() {
        let error = RosterError::InvalidNumber {
            field: "tipo".to_string(),
            input: "x1".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid number for 'tipo': \"x1\"");
    }

    #[test]
    fn test_unexpected_end_of_input_displays_prompt() {
        let error = RosterError::UnexpectedEndOfInput {
            prompt: "Digite o nome: ".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Input ended while waiting for: Digite o nome: "
        );
    }

    #[test]
    fn test_salary_overflow_displays_name() {
        let error = RosterError::SalaryOverflow {
            name: "Ana".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Final salary of 'Ana' exceeds the supported range"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = RosterError::ConfigNotFound {
            path: "/missing/roster.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/roster.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = RosterError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_io_error_converts_with_question_mark() {
        fn fails() -> RosterResult<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))?;
            Ok(())
        }

        match fails() {
            Err(RosterError::Io(err)) => assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<RosterError>();
    }
}
