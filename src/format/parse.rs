//! Parsing of numeric console input.
//!
//! Numbers are always read with the culture-invariant convention (`.` as the
//! decimal point, `,` as an optional thousands separator), independent of the
//! currency format used for display.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{RosterError, RosterResult};
use crate::models::EmployeeKind;

/// Field name reported when the selector cannot be parsed.
pub const SELECTOR_FIELD: &str = "tipo";

/// Field name reported when the base salary cannot be parsed.
pub const BASE_SALARY_FIELD: &str = "salário base";

fn invalid(field: &str, input: &str) -> RosterError {
    RosterError::InvalidNumber {
        field: field.to_string(),
        input: input.to_string(),
    }
}

/// Parses an employee kind selector.
///
/// Accepts surrounding whitespace and an optional sign. Values outside
/// `i32` are rejected.
///
/// # Examples
///
/// ```
/// use salary_roster::format::parse_selector;
///
/// assert_eq!(parse_selector(" 3 ").unwrap(), 3);
/// assert!(parse_selector("three").is_err());
/// ```
pub fn parse_selector(input: &str) -> RosterResult<i32> {
    input
        .trim()
        .parse::<i32>()
        .map_err(|_| invalid(SELECTOR_FIELD, input))
}

/// Most significant digit positions a base salary may span. Anything wider
/// is above `Decimal::MAX`; anything below `-MAX_DIGIT_POSITION` rounds to zero.
const MAX_DIGIT_POSITION: i64 = 29;

/// Parses a base salary using the invariant decimal convention.
///
/// Accepted: `1000`, `-12.5`, `+3`, `.5`, `1,234.56`, `1.5e3`. Digits past
/// the 28th decimal place are rounded, whichever way the number is spelled.
/// Salaries whose final value would not fit a `Decimal` for every employee
/// kind are rejected, so a parsed salary never overflows later.
pub fn parse_base_salary(input: &str) -> RosterResult<Decimal> {
    let err = || invalid(BASE_SALARY_FIELD, input);
    let trimmed = input.trim();

    let (mantissa, exponent) = match trimmed.find(['e', 'E']) {
        Some(pos) => (&trimmed[..pos], Some(&trimmed[pos + 1..])),
        None => (trimmed, None),
    };

    let (negative, unsigned) = match mantissa.as_bytes().first() {
        Some(b'-') => (true, &mantissa[1..]),
        Some(b'+') => (false, &mantissa[1..]),
        _ => (false, mantissa),
    };

    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (unsigned, ""),
    };

    if integer.starts_with(',')
        || !integer.chars().all(|c| c.is_ascii_digit() || c == ',')
        || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return Err(err());
    }

    let integer: String = integer.chars().filter(|c| *c != ',').collect();
    if integer.is_empty() && fraction.is_empty() {
        return Err(err());
    }

    let exponent: i64 = match exponent {
        Some(exp) => exp.parse::<i32>().map_err(|_| err())?.into(),
        None => 0,
    };

    // Value is 0.<digits> * 10^position once leading zeros are dropped.
    let digits = format!("{integer}{fraction}");
    let significant = digits.trim_start_matches('0');
    let position = integer.len() as i64 + exponent - (digits.len() - significant.len()) as i64;

    if significant.is_empty() || position < -MAX_DIGIT_POSITION {
        return Ok(Decimal::ZERO);
    }
    if position > MAX_DIGIT_POSITION {
        return Err(err());
    }

    let value = Decimal::from_str(&positional(significant, position)).map_err(|_| err())?;
    let value = if negative { -value } else { value };

    let fits_every_kind = EmployeeKind::ALL
        .iter()
        .all(|kind| value.checked_mul(kind.multiplier()).is_some());
    if !fits_every_kind {
        return Err(err());
    }
    Ok(value)
}

/// Writes `0.<digits> * 10^position` as a plain decimal string.
fn positional(digits: &str, position: i64) -> String {
    if position <= 0 {
        format!("0.{}{digits}", "0".repeat(position.unsigned_abs() as usize))
    } else if position as usize >= digits.len() {
        format!("{digits}{}", "0".repeat(position as usize - digits.len()))
    } else {
        let (whole, frac) = digits.split_at(position as usize);
        format!("{whole}.{frac}")
    }
}
