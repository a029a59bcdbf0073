//! The registration session controller.
//!
//! A session collects employees until the user declines to continue, then
//! prints the salary report exactly once.

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::config::{InvalidNumberPolicy, ReportFormat, SessionConfig};
use crate::error::{RosterError, RosterResult};
use crate::format::{parse_base_salary, parse_selector};
use crate::models::{Employee, EmployeeKind, Roster};

use super::console::Console;
use super::report::Report;

/// Heading printed before each registration.
pub const REGISTRATION_HEADING: &str = "--- Cadastro de Novo Funcionário ---";
/// Prompt for the employee kind selector.
pub const SELECTOR_PROMPT: &str =
    "Digite o tipo de funcionário (1-Administrativo, 2-Técnico, 3-Estagiário): ";
/// Prompt for the employee name.
pub const NAME_PROMPT: &str = "Digite o nome: ";
/// Prompt for the base salary.
pub const BASE_SALARY_PROMPT: &str = "Digite o salário base: R$ ";
/// Printed after a successful registration.
pub const REGISTERED_NOTICE: &str = "Funcionário cadastrado com sucesso!";
/// Printed when the selector is not 1, 2 or 3.
pub const INVALID_KIND_NOTICE: &str = "Tipo inválido! O funcionário não será cadastrado.";
/// Printed before re-asking a malformed number under the retry policy.
pub const INVALID_NUMBER_NOTICE: &str = "Valor inválido, tente novamente.";
/// Prompt asking whether to register another employee.
pub const CONTINUE_PROMPT: &str = "Deseja cadastrar outro funcionário? (S/N): ";
/// Heading printed before the report.
pub const REPORT_HEADING: &str = "--- Relatório Completo de Salários ---";
/// Printed instead of the report body when nobody was registered.
pub const EMPTY_ROSTER_NOTICE: &str = "Nenhum funcionário cadastrado.";
/// Final prompt before the program exits.
pub const EXIT_PROMPT: &str = "Pressione qualquer tecla para sair...";

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Asking for employees.
    Collecting,
    /// Collection finished; the report is printed next.
    Reporting,
}

/// Result of one pass through the registration prompts.
#[derive(Debug, Clone, PartialEq)]
pub enum Registration {
    /// The employee was appended to the roster.
    Registered(Employee),
    /// The selector was out of range and nothing was appended.
    Rejected {
        /// The selector that was entered.
        selector: i32,
    },
}

/// Interactive registration session over a [`Console`].
///
/// # Example
///
/// ```
/// use salary_roster::config::SessionConfig;
/// use salary_roster::session::{IoConsole, Session};
/// use std::io::Cursor;
///
/// let input = "1\nAna\n1000\nS\n3\nBia\n500\nN\n\n";
/// let mut console = IoConsole::new(Cursor::new(input), Vec::new());
/// let config = SessionConfig { clear_screen: false, ..SessionConfig::default() };
///
/// let roster = Session::new(&mut console, config).run()?;
/// assert_eq!(roster.len(), 2);
///
/// let output = String::from_utf8(console.into_writer()).unwrap();
/// assert!(output.contains("Salário Final: R$ 1.100,00"));
/// assert!(output.contains("Salário Final: R$ 250,00"));
/// # Ok::<(), salary_roster::error::RosterError>(())
/// ```
pub struct Session<C: Console> {
    console: C,
    config: SessionConfig,
    roster: Roster,
    state: SessionState,
}

impl<C: Console> Session<C> {
    /// Creates a session in the collecting state with an empty roster.
    pub fn new(console: C, config: SessionConfig) -> Self {
        Self {
            console,
            config,
            roster: Roster::new(),
            state: SessionState::Collecting,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the employees registered so far.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Runs the whole session: collect, report, wait for the exit key.
    ///
    /// Returns the final roster. Errors end the session early; see
    /// [`SessionConfig::invalid_number`] for how malformed numbers are treated.
    pub fn run(mut self) -> RosterResult<Roster> {
        while self.state == SessionState::Collecting {
            self.register_next()?;
            if !self.ask_continue()? {
                debug!(employees = self.roster.len(), "Collection finished");
                self.state = SessionState::Reporting;
            }
        }

        self.print_report()?;
        self.wait_for_exit()?;
        Ok(self.roster)
    }

    /// Runs one registration: selector, name, base salary.
    ///
    /// An out-of-range selector is reported and skipped; it is not an error.
    pub fn register_next(&mut self) -> RosterResult<Registration> {
        self.clear_screen()?;
        self.console.write_line(REGISTRATION_HEADING)?;

        let selector = self.prompt_number(SELECTOR_PROMPT, parse_selector)?;
        let name = self.prompt(NAME_PROMPT)?;
        let base_salary: Decimal = self.prompt_number(BASE_SALARY_PROMPT, parse_base_salary)?;

        match EmployeeKind::from_selector(selector) {
            Some(kind) => {
                let employee = Employee::new(name, base_salary, kind);
                info!(
                    name = %employee.name,
                    kind = employee.display_name(),
                    base_salary = %employee.base_salary,
                    "Employee registered"
                );
                self.roster.register(employee.clone());
                self.console.write_line(REGISTERED_NOTICE)?;
                Ok(Registration::Registered(employee))
            }
            None => {
                warn!(selector, "Invalid employee type, record skipped");
                self.console.write_line(INVALID_KIND_NOTICE)?;
                Ok(Registration::Rejected { selector })
            }
        }
    }

    /// Asks whether to register another employee.
    ///
    /// Only `S`, compared case-insensitively and without trimming, continues.
    pub fn ask_continue(&mut self) -> RosterResult<bool> {
        self.console.write("\n")?;
        let answer = self.prompt(CONTINUE_PROMPT)?;
        Ok(answer.to_uppercase() == "S")
    }

    /// Prints the salary report for everything registered so far.
    pub fn print_report(&mut self) -> RosterResult<()> {
        self.clear_screen()?;
        self.console.write_line("")?;
        self.console.write_line(REPORT_HEADING)?;

        let report = Report::build(&self.roster, &self.config.currency)?;
        info!(
            employees = report.entries().len(),
            total = ?report.total_final_salary(),
            "Printing salary report"
        );

        if report.is_empty() {
            return self.console.write_line(EMPTY_ROSTER_NOTICE);
        }

        match self.config.report_format {
            ReportFormat::Text => {
                for line in report.text_lines() {
                    self.console.write_line(&line)?;
                }
            }
            ReportFormat::Json => {
                let json = report.to_json()?;
                self.console.write_line(&json)?;
            }
        }
        Ok(())
    }

    fn wait_for_exit(&mut self) -> RosterResult<()> {
        self.console.write_line(EXIT_PROMPT)?;
        // Any line, or the end of input, ends the program.
        self.console.read_line()?;
        Ok(())
    }

    fn clear_screen(&mut self) -> RosterResult<()> {
        if self.config.clear_screen {
            self.console.clear()?;
        }
        Ok(())
    }

    fn prompt(&mut self, prompt: &str) -> RosterResult<String> {
        self.console.write(prompt)?;
        self.console
            .read_line()?
            .ok_or_else(|| RosterError::UnexpectedEndOfInput {
                prompt: prompt.to_string(),
            })
    }

    fn prompt_number<T>(
        &mut self,
        prompt: &str,
        parse: fn(&str) -> RosterResult<T>,
    ) -> RosterResult<T> {
        loop {
            let answer = self.prompt(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(RosterError::InvalidNumber { field, input })
                    if self.config.invalid_number == InvalidNumberPolicy::Retry =>
                {
                    warn!(field = %field, input = %input, "Rejected numeric input, asking again");
                    self.console.write_line(INVALID_NUMBER_NOTICE)?;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
