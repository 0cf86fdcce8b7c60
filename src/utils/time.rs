use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

use crate::error::{ProcessingError, Result};
use crate::utils::constants::{AXIS_TIME_FORMAT, DISPLAY_OFFSET_SECONDS};

/// An instant expressed in the display timezone.
pub type DisplayTime = DateTime<FixedOffset>;

/// Timestamp layouts carrying an explicit offset, tried after RFC 3339.
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Naive layouts, read as UTC.
const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DISPLAY_OFFSET: FixedOffset = match FixedOffset::east_opt(DISPLAY_OFFSET_SECONDS) {
    Some(offset) => offset,
    None => panic!("display offset must be less than one day"),
};

pub fn display_offset() -> FixedOffset {
    DISPLAY_OFFSET
}

/// Convert a UTC instant to display time. Order-preserving and lossless.
pub fn to_display_time(instant: DateTime<Utc>) -> DisplayTime {
    instant.with_timezone(&display_offset())
}

/// The current instant in display time.
pub fn now_display() -> DisplayTime {
    to_display_time(Utc::now())
}

/// Parse a `datetime_utc` store value.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS[.f]` with an optional `+HH:MM`
/// suffix, and the `T`-separated naive form. Naive values are UTC.
pub fn parse_utc_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    let trimmed = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(ts.with_timezone(&Utc));
    }

    for format in OFFSET_FORMATS {
        if let Ok(ts) = DateTime::parse_from_str(trimmed, format) {
            return Ok(ts.with_timezone(&Utc));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }

    Err(ProcessingError::InvalidFormat(format!(
        "Unparseable timestamp: '{}'",
        raw
    )))
}

/// Chart axis label, e.g. `05 Nov 15:30`.
pub fn format_axis(ts: &DisplayTime) -> String {
    ts.format(AXIS_TIME_FORMAT).to_string()
}

#[cfg(test)]
pub(crate) fn display_time(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DisplayTime {
    use chrono::TimeZone;

    display_offset()
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .unwrap()
}
