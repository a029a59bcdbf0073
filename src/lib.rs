//! Salary roster: interactive employee registration and salary report.
//!
//! Employees are registered under one of three fixed kinds, each applying a
//! fixed multiplier to the base salary, and a currency-formatted report is
//! printed when registration ends.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod session;
