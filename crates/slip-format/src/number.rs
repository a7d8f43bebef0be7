//! Numeric coercion and fixed-decimal rendering

/// Coerce a raw form value to a float, reading the longest valid prefix
///
/// Leading ASCII whitespace is skipped. The prefix may carry a sign, a
/// decimal point, and an exponent. Trailing junk is ignored, so values like
/// `"1500 kg"` still read as numbers. Returns `None` when no digits can be
/// read or the result is not finite.
///
/// # Examples
/// ```
/// use slip_format::coerce_float;
/// assert_eq!(coerce_float("12.5kg"), Some(12.5));
/// assert_eq!(coerce_float("  -3."), Some(-3.0));
/// assert_eq!(coerce_float("abc"), None);
/// assert_eq!(coerce_float(""), None);
/// ```
pub fn coerce_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let int_digits = end - int_start;

    let mut frac_digits = 0;
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        let frac_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_digits = end - frac_start;
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Exponent is only consumed when complete ("1e" stays 1.0)
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digit_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digit_start {
            end = exp_end;
        }
    }

    let value: f64 = s[..end].parse().ok()?;
    value.is_finite().then_some(value)
}

/// Render a value with a fixed number of decimal places
///
/// Rounds half away from zero. Zero decimal places renders without a
/// decimal point. Non-finite input renders as zero.
///
/// # Examples
/// ```
/// use slip_format::format_fixed;
/// assert_eq!(format_fixed(1000.0, 0), "1000");
/// assert_eq!(format_fixed(2.5, 0), "3");
/// assert_eq!(format_fixed(0.0, 2), "0.00");
/// ```
pub fn format_fixed(value: f64, decimals: u32) -> String {
    let scale = 10f64.powi(decimals as i32);
    let scaled = (value * scale).round();

    if !scaled.is_finite() {
        return format_fixed(0.0, decimals);
    }

    let negative = scaled < 0.0;
    let units = scaled.abs() as u128;
    let divisor = scale as u128;

    let sign = if negative && units > 0 { "-" } else { "" };
    if decimals == 0 {
        format!("{sign}{units}")
    } else {
        format!(
            "{sign}{}.{:0width$}",
            units / divisor,
            units % divisor,
            width = decimals as usize
        )
    }
}
