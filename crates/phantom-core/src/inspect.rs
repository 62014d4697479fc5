//! # Single-Year Inspection
//!
//! Evaluates one year on its own, without reference to any century scan.

use tracing::debug;

use crate::calendar::{date_for_ordinal, target_day, Year};
use crate::phantom::{PhantomYear, PhantomYearInfo};

/// Describe `year` as a phantom year.
///
/// Returns `None` for century boundaries (target day 0) and for years the
/// calendar cannot represent. The year check inside [`date_for_ordinal`] is
/// kept even though a target day in `1..=99` always lands in the same year.
pub fn phantom_year_info(year: Year) -> Option<PhantomYearInfo> {
    let day = target_day(year);
    if day == 0 {
        debug!(year, "century boundary is not a phantom year");
        return None;
    }

    let date = date_for_ordinal(year, day)?;
    Some(PhantomYearInfo::from(PhantomYear { year, day, date }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};

    #[test]
    fn test_info_1965() {
        let info = phantom_year_info(1965).unwrap();
        assert_eq!(info.year, 1965);
        assert_eq!(info.day, 65);
        assert_eq!(info.date, NaiveDate::from_ymd_opt(1965, 3, 6).unwrap());
        assert_eq!(info.formatted, "March 06, 1965");
        assert!(!info.is_leap_year);
    }

    #[test]
    fn test_info_century_boundaries_absent() {
        assert_eq!(phantom_year_info(1900), None);
        assert_eq!(phantom_year_info(2000), None);
        assert_eq!(phantom_year_info(0), None);
        assert_eq!(phantom_year_info(-300), None);
    }

    #[test]
    fn test_info_leap_year_flag() {
        let info = phantom_year_info(1996).unwrap();
        assert!(info.is_leap_year);
        // Day 96 of a leap year is April 5; of a common year, April 6.
        assert_eq!(info.formatted, "April 05, 1996");
        assert_eq!(phantom_year_info(1997).unwrap().formatted, "April 07, 1997");
    }

    #[test]
    fn test_info_day_99() {
        let info = phantom_year_info(2099).unwrap();
        assert_eq!(info.day, 99);
        assert_eq!(info.date.ordinal(), 99);
        assert_eq!(info.formatted, "April 09, 2099");
    }

    #[test]
    fn test_info_unrepresentable_year_absent() {
        assert_eq!(phantom_year_info(i32::MAX), None);
        assert_eq!(phantom_year_info(i32::MIN + 1), None);
    }

    #[test]
    fn test_info_agrees_with_finder() {
        let found = crate::finder::find_phantom_year(2000).unwrap();
        let info = phantom_year_info(found.year).unwrap();
        assert_eq!(PhantomYear::from(&info), found);
    }
}
