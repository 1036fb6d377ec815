use serde_json::Value;

/// Base-10 leading-integer parse.
///
/// Leading whitespace and one sign are accepted, digits are consumed up to the first
/// non-digit. `None` when no digit was read or the value does not fit an `i64`.
pub fn parse_leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let digits = &rest[..digits_len];
    let signed = if negative {
        format!("-{digits}")
    } else {
        digits.to_string()
    };
    signed.parse::<i64>().ok()
}

/// Integer view of a submitted attendee value, if it has one.
pub fn coerce_attendees(value: &Value) -> Option<i64> {
    match value {
        Value::String(s) => parse_leading_integer(s),
        // Floats go through i128 so the i64 range check is exact; `as i128` saturates
        // and non-finite values are filtered first.
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite())
                .and_then(|f| i64::try_from(f.trunc() as i128).ok())
        }),
        _ => None,
    }
}
