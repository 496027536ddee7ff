//! Human readable ETAs from a fractional number of days.

const HOURS_PER_DAY: f64 = 24.0;
const MINUTES_PER_DAY: f64 = 1440.0;

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// Major unit plus an optional remainder, the remainder omitted when zero.
fn with_remainder(major: u64, major_unit: &str, minor: u64, minor_unit: &str) -> String {
    if minor > 0 {
        format!("{}, {}", plural(major, major_unit), plural(minor, minor_unit))
    } else {
        plural(major, major_unit)
    }
}

/// Formats `days` in the coarsest unit that fits.
///
/// All truncation uses floor. Negative, NaN and infinite inputs render as
/// `"N/A"`.
///
/// ```
/// use osrsdiff::core::format_duration;
///
/// assert_eq!(format_duration(0.5), "12 hours");
/// assert_eq!(format_duration(10.0), "1 week, 3 days");
/// assert_eq!(format_duration(-1.0), "N/A");
/// ```
pub fn format_duration(days: f64) -> String {
    if !days.is_finite() || days < 0.0 {
        return "N/A".to_string();
    }

    if days < 1.0 {
        let hours = (days * HOURS_PER_DAY).floor() as u64;
        if hours >= 1 {
            return plural(hours, "hour");
        }
        let minutes = (days * MINUTES_PER_DAY).floor() as u64;
        return plural(minutes, "minute");
    }

    let whole = days.floor() as u64;

    if days < 7.0 {
        plural(whole, "day")
    } else if days < 30.0 {
        with_remainder(whole / 7, "week", whole % 7, "day")
    } else if days < 365.0 {
        with_remainder(whole / 30, "month", whole % 30, "day")
    } else {
        with_remainder(whole / 365, "year", (whole % 365) / 30, "month")
    }
}
