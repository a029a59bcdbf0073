//! Core data models for the salary roster.
//!
//! This module contains the employee record, its kinds, and the roster that
//! collects them during a session.

mod employee;
mod roster;

pub use employee::{Employee, EmployeeKind};
pub use roster::Roster;
