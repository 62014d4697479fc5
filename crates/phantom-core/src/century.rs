//! # Century and Year Parsing
//!
//! Accepts the forms people type: `1900`, `1900s`, ` 2000 `, `-100`.
//! A trailing `s` is only meaningful for centuries ("the 1900s").

use crate::calendar::Year;
use crate::error::PhantomError;

/// Parse a century start such as `1900` or `1900s`.
///
/// Any integer is accepted; the start need not be a multiple of 100.
pub fn parse_century(input: &str) -> Result<Year, PhantomError> {
    let trimmed = input.trim();
    let digits = trimmed.strip_suffix('s').unwrap_or(trimmed);
    parse_integer("century", trimmed, digits)
}

/// Parse a plain integer year.
pub fn parse_year(input: &str) -> Result<Year, PhantomError> {
    let trimmed = input.trim();
    parse_integer("year", trimmed, trimmed)
}

fn parse_integer(kind: &'static str, input: &str, digits: &str) -> Result<Year, PhantomError> {
    if digits.is_empty() {
        return Err(PhantomError::Empty { kind });
    }
    digits
        .parse::<Year>()
        .map_err(|e| PhantomError::InvalidNumber {
            kind,
            input: input.to_string(),
            reason: e.to_string(),
        })
}
