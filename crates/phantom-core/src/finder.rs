//! # Century Scan — Finder and Lister
//!
//! [`find_phantom_year`] walks one century span `[start, start + 100)` in
//! ascending order and returns the first year whose target day resolves to a
//! date inside that same year. [`list_phantom_years`] repeats the scan over
//! consecutive centuries.
//!
//! The scan never assumes a century holds a single phantom year; ascending
//! order plus first-match-wins is what keeps the result deterministic.

use tracing::{debug, trace};

use crate::calendar::{date_for_ordinal, target_day, Year};
use crate::phantom::PhantomYear;

/// Number of years in one century span.
pub const CENTURY_SPAN: Year = 100;

/// Find the phantom year in the century beginning at `century_start`.
///
/// `century_start` is normally a multiple of 100 but need not be. Years whose
/// target day is 0 (century boundaries) are skipped. Returns `None` when no
/// year in the span matches, including when part of the span lies outside the
/// representable calendar range and the rest does not match.
pub fn find_phantom_year(century_start: Year) -> Option<PhantomYear> {
    // Clamp the end so that spans near i32::MAX stay in range.
    let end = century_start.saturating_add(CENTURY_SPAN);

    for year in century_start..end {
        let day = target_day(year);
        if day == 0 {
            trace!(year, "skipping century boundary");
            continue;
        }

        match date_for_ordinal(year, day) {
            Some(date) => {
                debug!(century_start, year, day, %date, "phantom year found");
                return Some(PhantomYear { year, day, date });
            }
            None => trace!(year, day, "no date for ordinal"),
        }
    }

    debug!(century_start, "no phantom year in century");
    None
}

/// Century starts from `start_century` in steps of 100, strictly below
/// `end_century`. Empty when `start_century >= end_century`.
pub fn centuries(start_century: Year, end_century: Year) -> impl Iterator<Item = Year> {
    (start_century..end_century).step_by(CENTURY_SPAN as usize)
}

/// Phantom years for every century in [`centuries`]`(start_century, end_century)`,
/// in ascending century order. Centuries without a match contribute nothing.
pub fn list_phantom_years(start_century: Year, end_century: Year) -> Vec<PhantomYear> {
    let found: Vec<PhantomYear> = centuries(start_century, end_century)
        .filter_map(find_phantom_year)
        .collect();
    debug!(start_century, end_century, count = found.len(), "listed phantom years");
    found
}


#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::Datelike;
    use proptest::prelude::*;

    proptest! {
        /// A found year always lies inside the scanned span and lands on its own ordinal.
        #[test]
        fn found_year_within_span(start in -250_000i32..250_000) {
            if let Some(found) = find_phantom_year(start) {
                prop_assert!((start..start + CENTURY_SPAN).contains(&found.year));
                prop_assert_eq!(found.day, target_day(found.year));
                prop_assert_eq!(found.date.year(), found.year);
                prop_assert_eq!(found.date.ordinal(), found.day);
            }
        }

        /// Listing never yields more entries than centuries scanned.
        #[test]
        fn list_bounded_by_century_count(start in -1_000i32..1_000, span in 0i32..20) {
            let start = start * CENTURY_SPAN;
            let listed = list_phantom_years(start, start + span * CENTURY_SPAN);
            prop_assert!(listed.len() <= span as usize);
        }
    }
}
