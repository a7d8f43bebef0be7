//! Date and time strings for the slip preview
//!
//! The preview always renders US-English conventions regardless of the host
//! locale, so the same form state produces the same receipt everywhere.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Format the preview date slot: `M/D/YYYY` without zero padding
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use slip_format::format_slip_date;
///
/// let ts = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap().and_hms_opt(9, 30, 0).unwrap();
/// assert_eq!(format_slip_date(ts), "8/5/2026");
/// ```
pub fn format_slip_date(ts: NaiveDateTime) -> String {
    format!("{}/{}/{}", ts.month(), ts.day(), ts.year())
}

/// Format the preview time slot: 12-hour `hh:mm AM|PM` with a two-digit hour
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use slip_format::format_slip_time;
///
/// let ts = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap().and_hms_opt(20, 5, 0).unwrap();
/// assert_eq!(format_slip_time(ts), "08:05 PM");
/// ```
pub fn format_slip_time(ts: NaiveDateTime) -> String {
    let (pm, hour) = ts.hour12();
    format!(
        "{:02}:{:02} {}",
        hour,
        ts.minute(),
        if pm { "PM" } else { "AM" }
    )
}

/// Format a date as ISO `YYYY-MM-DD`, as used in export filenames
pub fn format_iso_date(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}
