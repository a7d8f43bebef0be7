//! Export filename assembly

use crate::timestamp::format_iso_date;
use chrono::NaiveDate;

/// Placeholder substituted for a missing or empty document number
///
/// Substitution happens before sanitization, so the token that actually
/// reaches the filename is `N_A`.
pub const MISSING_DOC_NUMBER: &str = "N/A";

/// Replace every character outside `[A-Za-z0-9]` with `_`
pub fn sanitize_token(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Build the download filename for an exported slip
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use slip_format::slip_filename;
///
/// let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// assert_eq!(
///     slip_filename(Some("DC/2024#7"), date),
///     "WeighmentSlip_DC_2024_7_2024-05-01.pdf"
/// );
/// assert_eq!(slip_filename(None, date), "WeighmentSlip_N_A_2024-05-01.pdf");
/// ```
pub fn slip_filename(doc_number: Option<&str>, date: NaiveDate) -> String {
    let doc_number = match doc_number {
        Some(n) if !n.is_empty() => n,
        _ => MISSING_DOC_NUMBER,
    };
    format!(
        "WeighmentSlip_{}_{}.pdf",
        sanitize_token(doc_number),
        format_iso_date(date)
    )
}
