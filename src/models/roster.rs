//! The in-memory roster of registered employees.

use serde::Serialize;

use super::Employee;

/// Ordered, append-only collection of employees for one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an employee at the end of the roster.
    pub fn register(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    /// Returns the number of registered employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if nobody has been registered.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Iterates the employees in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.employees.iter()
    }

    /// Returns the employees in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
