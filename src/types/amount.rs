use crate::types::errors::FormatError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// An amount as it arrives from a caller, before it is made exact.
#[derive(Debug, Clone, PartialEq)]
pub enum RawAmount {
    Exact(Decimal),
    Float(f64),
    Text(String)
}

impl From<Decimal> for RawAmount {
    fn from(value: Decimal) -> Self {
        RawAmount::Exact(value)
    }
}

macro_rules! raw_amount_from_integer {
    ($($integer:ty),*) => {
        $(
            impl From<$integer> for RawAmount {
                fn from(value: $integer) -> Self {
                    RawAmount::Exact(Decimal::from(value))
                }
            }
        )*
    };
}

raw_amount_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        RawAmount::Float(value)
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        RawAmount::Text(value.to_string())
    }
}

impl From<String> for RawAmount {
    fn from(value: String) -> Self {
        RawAmount::Text(value)
    }
}

/// Converts a raw amount into an exact decimal.
///
/// Floats go through their shortest decimal representation, so `0.1` becomes
/// `0.1` rather than the full binary expansion. Text is trimmed and accepted in
/// plain (`-12.50`) or scientific (`1.25e1`) notation.
///
/// Input that a `Decimal` can only hold rounded (more than 28 significant or
/// fractional digits, or a magnitude below `1e-28`) is rejected rather than
/// silently changed.
pub fn to_decimal(raw: &RawAmount) -> Result<Decimal, FormatError> {
    match raw {
        RawAmount::Exact(value) => Ok(*value),
        RawAmount::Float(value) => {
            if !value.is_finite() {
                return Err(FormatError::invalid_amount(value.to_string()));
            }

            parse_decimal(&format!("{value:e}"))
        }
        RawAmount::Text(text) => parse_decimal(text)
    }
}

fn parse_decimal(text: &str) -> Result<Decimal, FormatError> {
    let value = text.trim();

    if value.is_empty() {
        return Err(FormatError::invalid_amount(text));
    }

    let decimal = Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .map_err(|_| FormatError::invalid_amount(text))?;

    if significant_digits(value) != significant_digits(&decimal.normalize().mantissa().unsigned_abs().to_string()) {
        return Err(FormatError::invalid_amount(text));
    }

    Ok(decimal)
}

/// The digits of a number's coefficient with leading and trailing zeros dropped, ignoring any exponent.
fn significant_digits(value: &str) -> String {
    let coefficient = value.split(['e', 'E']).next().unwrap_or_default();
    let digits: String = coefficient.chars().filter(char::is_ascii_digit).collect();

    digits.trim_start_matches('0').trim_end_matches('0').to_string()
}
