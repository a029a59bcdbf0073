//! Configuration types for a registration session.
//!
//! These structures are deserialized from an optional YAML file. Every field
//! has a default, so an empty document is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::format::CurrencyFormat;

/// What happens when a numeric answer cannot be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidNumberPolicy {
    /// End the session with an error.
    #[default]
    Abort,
    /// Print a notice and ask the same question again.
    Retry,
}

/// How the final report is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// Name, kind, and final salary lines per employee.
    #[default]
    Text,
    /// A pretty-printed JSON document.
    Json,
}

/// Settings for one registration session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Clear the terminal before each registration and before the report.
    pub clear_screen: bool,
    /// Handling of malformed selector or salary input.
    pub invalid_number: InvalidNumberPolicy,
    /// Rendering of the final report.
    pub report_format: ReportFormat,
    /// Currency convention used for salaries in the report.
    pub currency: CurrencyFormat,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            clear_screen: true,
            invalid_number: InvalidNumberPolicy::Abort,
            report_format: ReportFormat::Text,
            currency: CurrencyFormat::pt_br(),
        }
    }
}
