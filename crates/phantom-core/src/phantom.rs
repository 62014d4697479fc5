//! # Phantom Year Records
//!
//! The values the engine hands back. Both records carry the same core
//! invariant: `day == year mod 100`, `day >= 1`, and `date` is the
//! `day`-th day of `year`.

use serde::{Deserialize, Serialize};

use crate::calendar::{is_leap_year, CalendarDate, Year};

/// Long-form rendering used for [`PhantomYearInfo::formatted`], e.g. `March 06, 1965`.
pub const LONG_DATE_FORMAT: &str = "%B %d, %Y";

/// A phantom year as found by a century scan: the year, its matching
/// ordinal day, and the date that ordinal resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PhantomYear {
    pub year: Year,
    pub day: u32,
    pub date: CalendarDate,
}

impl PhantomYear {
    /// The date in long form (`%B %d, %Y`).
    pub fn formatted_date(&self) -> String {
        self.date.format(LONG_DATE_FORMAT).to_string()
    }
}

impl std::fmt::Display for PhantomYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (day {}: {})", self.year, self.day, self.formatted_date())
    }
}

/// Descriptive attributes of a single year evaluated as a phantom year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhantomYearInfo {
    pub year: Year,
    pub day: u32,
    pub date: CalendarDate,
    /// The date rendered with [`LONG_DATE_FORMAT`].
    pub formatted: String,
    pub is_leap_year: bool,
}

impl From<PhantomYear> for PhantomYearInfo {
    fn from(found: PhantomYear) -> Self {
        Self {
            year: found.year,
            day: found.day,
            date: found.date,
            formatted: found.formatted_date(),
            is_leap_year: is_leap_year(found.year),
        }
    }
}

impl From<&PhantomYearInfo> for PhantomYear {
    fn from(info: &PhantomYearInfo) -> Self {
        Self {
            year: info.year,
            day: info.day,
            date: info.date,
        }
    }
}
