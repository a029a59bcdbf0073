//! Number parsing and currency formatting.
//!
//! Input is parsed with a fixed invariant convention while output follows an
//! explicit [`CurrencyFormat`].

mod currency;
mod parse;

pub use currency::CurrencyFormat;
pub use parse::{BASE_SALARY_FIELD, SELECTOR_FIELD, parse_base_salary, parse_selector};
