//! Lenient numeric coercion for text cells.
//!
//! Spreadsheet exports mix decimal points and decimal commas, leave cells
//! blank, and sometimes append units. [`coerce_number`] turns any of these into
//! a finite `f64` and never fails: anything it cannot read becomes `0.0`.

/// Coerces an optional cell to a finite number.
///
/// - `None` yields `0.0`.
/// - The first `,` is read as a decimal point (`"3,5"` is `3.5`).
/// - The longest leading numeric literal is parsed, so `"12 pcs"` is `12.0`.
/// - Unparseable or non-finite results yield `0.0`.
///
/// Only the first comma is rewritten, so `"1,234.5"` reads as `1.234`.
///
/// # Examples
///
/// ```
/// use lookthrough_portfolio::numeric::coerce_number;
///
/// assert_eq!(coerce_number(Some("210")), 210.0);
/// assert_eq!(coerce_number(Some("3,5")), 3.5);
/// assert_eq!(coerce_number(Some("n/a")), 0.0);
/// assert_eq!(coerce_number(None), 0.0);
/// ```
#[must_use]
pub fn coerce_number(value: Option<&str>) -> f64 {
    value.map_or(0.0, coerce_str)
}

/// Coerces a present cell to a finite number. See [`coerce_number`].
#[must_use]
pub fn coerce_str(value: &str) -> f64 {
    let normalized = value.replacen(',', ".", 1);
    match parse_leading_float(&normalized) {
        Some(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// Parses the longest prefix of `text` that forms a decimal float literal.
///
/// Accepts leading whitespace (including U+FEFF), an optional sign, digits with an optional
/// fraction, and an optional exponent. Returns `None` if no digits lead.
fn parse_leading_float(text: &str) -> Option<f64> {
    let s = text.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let int_digits = digits_from(end);
    end += int_digits;

    let mut mantissa_digits = int_digits;
    if bytes.get(end) == Some(&b'.') {
        let frac_digits = digits_from(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
            mantissa_digits += frac_digits;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digits_from(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}
