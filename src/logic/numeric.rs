//! Numeric extraction from free-form text
//!
//! Fees and experience arrive as display strings ("₹ 1,200", "13 Years of
//! experience"). Both sort keys go through `extract_leading_integer` so the
//! parsing policy lives in exactly one place.

/// Extract the first run of decimal digits from `text`
///
/// A `,` between two digits is treated as a thousands separator and does not
/// end the run. Any other non-digit character ends it. Absent text or text
/// without digits yields 0, and values too large for `u64` saturate.
///
/// # Examples
/// ```
/// use docfinder::logic::numeric::extract_leading_integer;
///
/// assert_eq!(extract_leading_integer(Some("₹ 1,200")), 1200);
/// assert_eq!(extract_leading_integer(Some("13 Years of experience")), 13);
/// assert_eq!(extract_leading_integer(Some("free")), 0);
/// assert_eq!(extract_leading_integer(None), 0);
/// ```
pub fn extract_leading_integer(text: Option<&str>) -> u64 {
    let Some(text) = text else {
        return 0;
    };

    let bytes = text.as_bytes();
    let Some(start) = bytes.iter().position(u8::is_ascii_digit) else {
        return 0;
    };

    let mut value: u64 = 0;
    let mut idx = start;
    while idx < bytes.len() {
        let b = bytes[idx];
        if b.is_ascii_digit() {
            value = value
                .saturating_mul(10)
                .saturating_add(u64::from(b - b'0'));
        } else if b == b','
            && bytes.get(idx + 1).is_some_and(u8::is_ascii_digit)
        {
            // Thousands separator: digit on both sides
        } else {
            break;
        }
        idx += 1;
    }

    value
}
