//! Slip Format - display formatting and value coercion
//!
//! This crate provides:
//! - Lenient numeric coercion (longest valid prefix, like a form input)
//! - Fixed-decimal number rendering (half away from zero)
//! - Date/time strings under a fixed US-English policy
//! - Export filename assembly and sanitization
//!
//! # Example
//!
//! ```
//! use slip_format::{coerce_float, format_fixed, slip_filename};
//! use chrono::NaiveDate;
//!
//! let load = coerce_float("1500 kg").unwrap_or(0.0);
//! assert_eq!(format_fixed(load / 1000.0, 2), "1.50");
//!
//! let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
//! assert_eq!(
//!     slip_filename(Some("DC/2024#7"), date),
//!     "WeighmentSlip_DC_2024_7_2024-05-01.pdf"
//! );
//! ```

mod filename;
mod number;
mod timestamp;

pub use filename::{sanitize_token, slip_filename, MISSING_DOC_NUMBER};
pub use number::{coerce_float, format_fixed};
pub use timestamp::{format_iso_date, format_slip_date, format_slip_time};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_then_format() {
        let net = coerce_float("1500").unwrap_or(0.0) - coerce_float("500").unwrap_or(0.0);
        assert_eq!(format_fixed(net.max(0.0), 0), "1000");
        assert_eq!(format_fixed(net.max(0.0) / 1000.0, 2), "1.00");
    }

    #[test]
    fn test_unparseable_input_degrades_to_zero() {
        let load = coerce_float("abc").unwrap_or(0.0);
        let empty = coerce_float("").unwrap_or(0.0);
        assert_eq!(format_fixed((load - empty).max(0.0), 0), "0");
    }
}
