//! Rendering of engine results to stdout, as text blocks or JSON.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use phantom_core::{PhantomYear, PhantomYearInfo, Year};

/// Width of the `=` rule under the demo banner.
pub const RULE_WIDTH: usize = 50;

/// Result of scanning one century, as emitted in JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CenturyReport {
    pub century: Year,
    pub phantom_year: Option<PhantomYear>,
}

impl CenturyReport {
    pub fn new(century: Year, phantom_year: Option<PhantomYear>) -> Self {
        Self {
            century,
            phantom_year,
        }
    }
}

/// The demo banner: title, rule, and the two-line explanation.
pub fn write_banner(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Phantom Year Calculator")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "\nThe Phantom Year is when the day of the year")?;
    writeln!(out, "equals the last two digits of the year itself.\n")?;
    Ok(())
}

/// One `Century {c}s:` block followed by a blank line.
pub fn write_century_block(out: &mut dyn Write, century: Year, found: &PhantomYear) -> Result<()> {
    writeln!(out, "Century {century}s:")?;
    writeln!(out, "  Phantom Year: {}", found.year)?;
    writeln!(out, "  Day of Year: {}", found.day)?;
    writeln!(out, "  Date: {}", found.formatted_date())?;
    writeln!(out)?;
    Ok(())
}

/// Text line for a century without a phantom year.
pub fn write_century_missing(out: &mut dyn Write, century: Year) -> Result<()> {
    writeln!(out, "Century {century}s: no phantom year found")?;
    writeln!(out)?;
    Ok(())
}

/// Detail block for one inspected year.
pub fn write_info(out: &mut dyn Write, info: &PhantomYearInfo) -> Result<()> {
    writeln!(out, "Year {}:", info.year)?;
    writeln!(out, "  Day of Year: {}", info.day)?;
    writeln!(out, "  Date: {}", info.formatted)?;
    writeln!(out, "  Leap Year: {}", if info.is_leap_year { "yes" } else { "no" })?;
    Ok(())
}

/// Pretty-printed JSON followed by a newline.
pub fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize JSON output")?;
    writeln!(out, "{json}")?;
    Ok(())
}
