//! Timestamp display in the system timezone.
//!
//! Migration history stores `applied_at` in UTC; this module renders those
//! timestamps for people reading `schema status` output.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A borrowed `Timestamp` that displays in the system timezone.
///
/// Wrapping the reference keeps formatting out of the models: a
/// `SchemaVersionRecord` holds a plain `Timestamp`, and display code wraps it
/// only when writing markdown.
///
/// # Format
///
/// The output follows the pattern `YYYY-MM-DD HH:MM:SS TZ`:
/// - Year, month, and day are zero-padded
/// - Time uses the 24-hour clock with zero-padded components
/// - The zone abbreviation comes last (e.g. UTC, CET, JST)
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}
