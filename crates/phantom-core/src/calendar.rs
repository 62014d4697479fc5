//! # Calendar Primitives — Ordinal Days on the Proleptic Gregorian Calendar
//!
//! The day-to-date converter that the finder and the inspector share, plus
//! the leap-year rule.
//!
//! ## Failure Policy
//!
//! Every way a date computation can go wrong collapses into `None`:
//!
//! - the ordinal day runs past December 31 (day 366 in a common year),
//! - the ordinal day is 0 and resolves to December 31 of the previous year,
//! - January 1 of the year lies outside chrono's representable range,
//! - the offset arithmetic overflows the representable range.
//!
//! Nothing here panics and nothing escapes as an error.

use chrono::{Datelike, Days, NaiveDate};

/// A calendar year. Bounded in practice by [`NaiveDate::MIN`] and [`NaiveDate::MAX`].
pub type Year = i32;

/// A valid proleptic Gregorian date.
pub type CalendarDate = NaiveDate;

/// The date that falls `day - 1` days after January 1 of `year`.
///
/// Returns `None` when the result does not belong to `year` or cannot be
/// represented. There is no special case for `day == 0`: it resolves to the
/// last day of the previous year and is rejected by the year check like any
/// other overflow.
pub fn date_for_ordinal(year: Year, day: u32) -> Option<CalendarDate> {
    let jan_first = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let date = match day.checked_sub(1) {
        Some(offset) => jan_first.checked_add_days(Days::new(u64::from(offset)))?,
        None => jan_first.pred_opt()?,
    };
    (date.year() == year).then_some(date)
}

/// Gregorian leap rule: divisible by 4, and either not divisible by 100 or
/// divisible by 400.
pub fn is_leap_year(year: Year) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// The 1-based ordinal of `date` within its own year (January 1 = 1).
pub fn ordinal_day(date: CalendarDate) -> u32 {
    date.ordinal()
}

/// The ordinal day a year must land on to be a phantom year: its last two
/// digits.
///
/// Uses floor modulo so that negative years still map into `0..=99`
/// (year -1 targets day 99).
pub fn target_day(year: Year) -> u32 {
    // rem_euclid(100) is always in 0..=99.
    year.rem_euclid(100).unsigned_abs()
}
