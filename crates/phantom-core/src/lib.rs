//! # phantom-core — The Phantom Year Engine
//!
//! In every century there is a year whose ordinal day-of-year, counted from
//! January 1, numerically equals the last two digits of the year itself.
//! This crate finds that year, describes a single candidate year, and
//! enumerates phantom years across a span of centuries.
//!
//! ## Structure
//!
//! - [`calendar`] — the day-to-date converter and the Gregorian leap rule.
//!   Every other module bottoms out here.
//! - [`finder`] — single-century scan and the multi-century lister.
//! - [`inspect`] — evaluation of one specific year.
//! - [`century`] — parsing of user-supplied century and year strings.
//!
//! ## Crate Policy
//!
//! - Pure functions only. No I/O, no shared state, no caching.
//! - Absence is `Option::None`. The three engine operations never return
//!   errors and never panic, whatever the input year.
//! - No `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement `Serialize`/`Deserialize`.

pub mod calendar;
pub mod century;
pub mod error;
pub mod finder;
pub mod inspect;
pub mod phantom;

// Re-export primary types for ergonomic imports.
pub use calendar::{date_for_ordinal, is_leap_year, ordinal_day, target_day, CalendarDate, Year};
pub use century::{parse_century, parse_year};
pub use error::PhantomError;
pub use finder::{centuries, find_phantom_year, list_phantom_years, CENTURY_SPAN};
pub use inspect::phantom_year_info;
pub use phantom::{PhantomYear, PhantomYearInfo, LONG_DATE_FORMAT};
