/// Timestamp formatting for exported and previewed dates.
///
/// Records keep UTC instants; conversion to the viewer's local time only
/// happens here, at the display boundary.
use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::Display;
use std::time::SystemTime;

/// Day-month-year with a 24-hour clock, e.g. `07/03/2024, 18:05`.
pub const DATE_FORMAT: &str = "%d/%m/%Y, %H:%M";

/// Format an instant in an explicit time zone.
pub fn format_date_in<Tz>(instant: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    instant.format(DATE_FORMAT).to_string()
}

/// Format a UTC instant in the local time zone.
pub fn format_date(instant: &DateTime<Utc>) -> String {
    format_date_in(&instant.with_timezone(&Local))
}

/// Convert a filesystem timestamp into a UTC instant.
///
/// Timestamps before the Unix epoch are handled by chrono's conversion.
pub fn from_system_time(time: SystemTime) -> DateTime<Utc> {
    DateTime::<Utc>::from(time)
}
