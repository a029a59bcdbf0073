//! Salary report built from a finished roster.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{RosterError, RosterResult};
use crate::format::CurrencyFormat;
use crate::models::{EmployeeKind, Roster};

/// Line printed under each employee block.
pub const REPORT_SEPARATOR: &str = "-----------------------------------";

/// One employee's row in the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    /// The employee name as entered.
    pub name: String,
    /// The employee kind.
    pub kind: EmployeeKind,
    /// The kind label shown to the user.
    pub label: String,
    /// The salary before the multiplier.
    pub base_salary: Decimal,
    /// The salary after the multiplier, unrounded.
    pub final_salary: Decimal,
    /// The final salary rendered with the report's currency format.
    pub formatted_final_salary: String,
}

/// The salary report for a roster, in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    entries: Vec<ReportEntry>,
    total_final_salary: Option<Decimal>,
}

impl Report {
    /// Builds the report, formatting every final salary with `currency`.
    ///
    /// Fails only if an individual final salary overflows. An overflowing
    /// total is recorded as `None` so the per-employee report still prints.
    pub fn build(roster: &Roster, currency: &CurrencyFormat) -> RosterResult<Self> {
        let entries = roster
            .iter()
            .map(|employee| {
                let final_salary = employee.final_salary()?;
                Ok(ReportEntry {
                    name: employee.name.clone(),
                    kind: employee.kind,
                    label: employee.display_name().to_string(),
                    base_salary: employee.base_salary,
                    final_salary,
                    formatted_final_salary: currency.format(final_salary),
                })
            })
            .collect::<RosterResult<Vec<_>>>()?;

        let total_final_salary = entries
            .iter()
            .try_fold(Decimal::ZERO, |total, e| total.checked_add(e.final_salary));

        Ok(Self {
            entries,
            total_final_salary,
        })
    }

    /// Returns the report rows.
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Returns the sum of all final salaries, or `None` if it overflows.
    pub fn total_final_salary(&self) -> Option<Decimal> {
        self.total_final_salary
    }

    /// Returns true if the roster had no employees.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the per-employee blocks: name, kind, final salary, separator.
    pub fn text_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .flat_map(|entry| {
                [
                    format!("Nome: {}", entry.name),
                    format!("Tipo: {}", entry.label),
                    format!("Salário Final: {}", entry.formatted_final_salary),
                    REPORT_SEPARATOR.to_string(),
                ]
            })
            .collect()
    }

    /// Renders the report as pretty-printed JSON.
    pub fn to_json(&self) -> RosterResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| RosterError::Serialization {
            message: e.to_string(),
        })
    }
}
