//! Lenient parsing of raw text typed into the view.
//!
//! Blank or non-numeric rep fields count as 0. A field the user left empty
//! cannot be told apart from one where they typed 0.

pub const MIN_SET_COUNT: i64 = 1;
pub const MAX_SET_COUNT: i64 = 10;
pub const MAX_REPS: u32 = 999;

/// Parses the leading integer of `raw`.
///
/// Leading whitespace is skipped, a single `+` or `-` is accepted, and the
/// run of ASCII digits that follows is taken. Trailing text is ignored, so
/// `"12 reps"` is 12. Returns `None` when no digit follows. Saturates
/// instead of overflowing.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }

    if !seen {
        return None;
    }
    Some(if negative { -value } else { value })
}

pub fn clamp_reps(value: i64) -> u32 {
    value.clamp(0, i64::from(MAX_REPS)) as u32
}

/// Reps for one set field. Anything unparseable is 0.
pub fn parse_reps(raw: &str) -> u32 {
    parse_int_prefix(raw).map(clamp_reps).unwrap_or(0)
}
