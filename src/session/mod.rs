//! Interactive registration session.
//!
//! This module contains the console abstraction, the session controller
//! that drives the collect-then-report flow, and the salary report.

mod console;
mod controller;
mod report;

pub use console::{Console, IoConsole};
pub use controller::{
    BASE_SALARY_PROMPT, CONTINUE_PROMPT, EMPTY_ROSTER_NOTICE, EXIT_PROMPT, INVALID_KIND_NOTICE,
    INVALID_NUMBER_NOTICE, NAME_PROMPT, REGISTERED_NOTICE, REGISTRATION_HEADING, REPORT_HEADING,
    Registration, SELECTOR_PROMPT, Session, SessionState,
};
pub use report::{REPORT_SEPARATOR, Report, ReportEntry};
