//! Employee model and related types.
//!
//! This module defines the Employee struct and the EmployeeKind enum whose
//! variants each carry a fixed salary multiplier.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{RosterError, RosterResult};

/// The category an employee is registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeKind {
    /// Administrative staff (base salary plus 10%).
    Administrative,
    /// Technical staff (base salary plus 20%).
    Technical,
    /// Interns (half of the base salary).
    Intern,
}

impl EmployeeKind {
    /// All kinds in selector order.
    pub const ALL: [EmployeeKind; 3] = [
        EmployeeKind::Administrative,
        EmployeeKind::Technical,
        EmployeeKind::Intern,
    ];

    /// Maps a menu selector (1, 2 or 3) to its kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_roster::models::EmployeeKind;
    ///
    /// assert_eq!(EmployeeKind::from_selector(2), Some(EmployeeKind::Technical));
    /// assert_eq!(EmployeeKind::from_selector(4), None);
    /// ```
    pub fn from_selector(selector: i32) -> Option<Self> {
        match selector {
            1 => Some(EmployeeKind::Administrative),
            2 => Some(EmployeeKind::Technical),
            3 => Some(EmployeeKind::Intern),
            _ => None,
        }
    }

    /// Returns the menu selector for this kind.
    pub fn selector(self) -> i32 {
        match self {
            EmployeeKind::Administrative => 1,
            EmployeeKind::Technical => 2,
            EmployeeKind::Intern => 3,
        }
    }

    /// Returns the multiplier applied to the base salary.
    pub fn multiplier(self) -> Decimal {
        match self {
            EmployeeKind::Administrative => Decimal::new(110, 2),
            EmployeeKind::Technical => Decimal::new(120, 2),
            EmployeeKind::Intern => Decimal::new(50, 2),
        }
    }

    /// Returns the label printed in the report.
    pub fn label(self) -> &'static str {
        match self {
            EmployeeKind::Administrative => "Administrativo",
            EmployeeKind::Technical => "Tecnico",
            EmployeeKind::Intern => "Estagiario",
        }
    }
}

/// A registered employee.
///
/// Records are immutable once built; the final salary is derived on demand
/// from the base salary and the kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// The name exactly as entered.
    pub name: String,
    /// The salary entered before the kind multiplier.
    pub base_salary: Decimal,
    /// The category the employee was registered under.
    pub kind: EmployeeKind,
}

impl Employee {
    /// Creates a new employee record.
    pub fn new(name: impl Into<String>, base_salary: Decimal, kind: EmployeeKind) -> Self {
        Self {
            name: name.into(),
            base_salary,
            kind,
        }
    }

    /// Returns the base salary multiplied by the kind multiplier.
    ///
    /// No rounding is applied here; rounding happens when the value is
    /// formatted for display. Fails with `SalaryOverflow` when the product
    /// leaves the decimal range, which only happens for records built
    /// directly with a huge base salary: parsed salaries are range-checked.
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_roster::models::{Employee, EmployeeKind};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::new("Ana", Decimal::new(1000, 0), EmployeeKind::Administrative);
    /// assert_eq!(employee.final_salary()?, Decimal::new(110000, 2));
    ///
    /// let huge = Employee::new("Bia", Decimal::MAX, EmployeeKind::Technical);
    /// assert!(huge.final_salary().is_err());
    /// # Ok::<(), salary_roster::error::RosterError>(())
    /// ```
    pub fn final_salary(&self) -> RosterResult<Decimal> {
        self.base_salary
            .checked_mul(self.kind.multiplier())
            .ok_or_else(|| RosterError::SalaryOverflow {
                name: self.name.clone(),
            })
    }

    /// Returns the label of this employee's kind.
    pub fn display_name(&self) -> &'static str {
        self.kind.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_administrative_adds_ten_percent() {
        let employee = Employee::new("Ana", dec("1000"), EmployeeKind::Administrative);
        assert_eq!(employee.final_salary().unwrap(), dec("1100.00"));
    }

    #[test]
    fn test_technical_adds_twenty_percent() {
        let employee = Employee::new("Caio", dec("2500.50"), EmployeeKind::Technical);
        assert_eq!(employee.final_salary().unwrap(), dec("3000.60"));
    }

    #[test]
    fn test_intern_gets_half() {
        let employee = Employee::new("Bia", dec("500"), EmployeeKind::Intern);
        assert_eq!(employee.final_salary().unwrap(), dec("250.00"));
    }

    #[test]
    fn test_negative_base_salary_is_not_rejected() {
        let employee = Employee::new("Davi", dec("-100"), EmployeeKind::Technical);
        assert_eq!(employee.final_salary().unwrap(), dec("-120"));
    }

    #[test]
    fn test_intern_salary_never_overflows() {
        let employee = Employee::new("Max", Decimal::MAX, EmployeeKind::Intern);
        assert!(employee.final_salary().is_ok());
    }

    #[test]
    fn test_overflowing_final_salary_is_an_error() {
        let base = dec("70000000000000000000000000000");
        for kind in [EmployeeKind::Administrative, EmployeeKind::Technical] {
            let employee = Employee::new("Ana", base, kind);
            match employee.final_salary() {
                Err(RosterError::SalaryOverflow { name }) => assert_eq!(name, "Ana"),
                other => panic!("Expected SalaryOverflow for {:?}, got {:?}", kind, other),
            }
        }
        let intern = Employee::new("Ana", base, EmployeeKind::Intern);
        assert_eq!(intern.final_salary().unwrap(), dec("35000000000000000000000000000"));
    }

    #[test]
    fn test_zero_base_salary() {
        for kind in EmployeeKind::ALL {
            let employee = Employee::new("Zero", Decimal::ZERO, kind);
            assert_eq!(employee.final_salary().unwrap(), Decimal::ZERO);
        }
    }

    #[test]
    fn test_from_selector_recognises_only_one_to_three() {
        assert_eq!(
            EmployeeKind::from_selector(1),
            Some(EmployeeKind::Administrative)
        );
        assert_eq!(EmployeeKind::from_selector(2), Some(EmployeeKind::Technical));
        assert_eq!(EmployeeKind::from_selector(3), Some(EmployeeKind::Intern));
        assert_eq!(EmployeeKind::from_selector(0), None);
        assert_eq!(EmployeeKind::from_selector(4), None);
        assert_eq!(EmployeeKind::from_selector(-1), None);
        assert_eq!(EmployeeKind::from_selector(i32::MAX), None);
    }

    #[test]
    fn test_selector_matches_from_selector() {
        for kind in EmployeeKind::ALL {
            assert_eq!(EmployeeKind::from_selector(kind.selector()), Some(kind));
        }
    }

    #[test]
    fn test_display_name_uses_kind_label() {
        let employee = Employee::new("Ana", dec("1"), EmployeeKind::Intern);
        assert_eq!(employee.display_name(), "Estagiario");
        assert_eq!(EmployeeKind::Administrative.label(), "Administrativo");
        assert_eq!(EmployeeKind::Technical.label(), "Tecnico");
    }

    #[test]
    fn test_employee_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&EmployeeKind::Administrative).unwrap(),
            "\"administrative\""
        );
        assert_eq!(
            serde_json::to_string(&EmployeeKind::Intern).unwrap(),
            "\"intern\""
        );
    }

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "name": "Ana",
            "base_salary": "1000.50",
            "kind": "technical"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.name, "Ana");
        assert_eq!(employee.base_salary, dec("1000.50"));
        assert_eq!(employee.kind, EmployeeKind::Technical);
    }
}
