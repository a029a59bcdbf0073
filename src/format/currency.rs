//! Locale-aware currency formatting.
//!
//! The format is an explicit value handed to whoever renders money, so the
//! output never depends on process-wide locale state.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Describes how a monetary amount is rendered.
///
/// # Examples
///
/// ```
/// use salary_roster::format::CurrencyFormat;
/// use rust_decimal::Decimal;
///
/// let format = CurrencyFormat::pt_br();
/// assert_eq!(format.format(Decimal::new(110000, 2)), "R$ 1.100,00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    /// The currency symbol placed before the amount.
    pub symbol: String,
    /// Separator between groups of three integer digits.
    pub group_separator: String,
    /// Separator between the integer and fractional digits.
    pub decimal_separator: String,
    /// Number of fractional digits shown.
    pub decimal_places: u32,
    /// Whether a space separates the symbol from the digits.
    pub symbol_spacing: bool,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::pt_br()
    }
}

impl CurrencyFormat {
    /// Brazilian Portuguese real: `R$ 1.234,56`.
    pub fn pt_br() -> Self {
        Self {
            symbol: "R$".to_string(),
            group_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
            decimal_places: 2,
            symbol_spacing: true,
        }
    }

    /// Culture-invariant currency: `¤1,234.56`.
    pub fn invariant() -> Self {
        Self {
            symbol: "¤".to_string(),
            group_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            decimal_places: 2,
            symbol_spacing: false,
        }
    }

    /// Formats an amount, rounding half away from zero to `decimal_places`.
    ///
    /// Negative amounts carry a leading minus before the symbol. A value that
    /// rounds to zero is shown without a sign.
    pub fn format(&self, amount: Decimal) -> String {
        let rounded =
            amount.round_dp_with_strategy(self.decimal_places, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();

        let mut magnitude = rounded.abs();
        // Near the top of the range rescale cannot add digits; pad below.
        magnitude.rescale(self.decimal_places);
        let digits = magnitude.to_string();

        let (integer, fraction) = match digits.split_once('.') {
            Some((integer, fraction)) => (integer, fraction),
            None => (digits.as_str(), ""),
        };

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push_str(&self.symbol);
        if self.symbol_spacing {
            out.push(' ');
        }
        out.push_str(&group_digits(integer, &self.group_separator));
        if self.decimal_places > 0 {
            out.push_str(&self.decimal_separator);
            out.push_str(fraction);
            for _ in fraction.len()..self.decimal_places as usize {
                out.push('0');
            }
        }
        out
    }
}

/// Inserts `separator` between groups of three digits, counting from the right.
fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
