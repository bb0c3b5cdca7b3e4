//! Helpers for resolving the configured timezone.

use time::{Date, OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

use crate::Error;

/// Resolves a canonical timezone name, e.g. "Pacific/Auckland", to its
/// current UTC offset.
pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

/// Today's calendar date in the given timezone, used for generated-on
/// stamps and date-less artifact filenames.
///
/// # Errors
/// Returns [Error::InvalidTimezone] if the name is not a canonical
/// timezone.
pub fn local_date(canonical_timezone: &str) -> Result<Date, Error> {
    get_local_offset(canonical_timezone)
        .map(|offset| OffsetDateTime::now_utc().to_offset(offset).date())
        .ok_or_else(|| Error::InvalidTimezone(canonical_timezone.to_owned()))
}
