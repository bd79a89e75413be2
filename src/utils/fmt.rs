//! Formatting primitives shared by the CLI output and the compliance
//! encoders.
//!
//! The AFD layout mixes two padding conventions: numeric fields are
//! left-padded with `0`, text fields are right-padded with spaces. Both are
//! kept as named helpers so every encoder field can be audited against the
//! regulatory layout in one place.

/// Zero-left-pad a numeric field to `width` characters.
///
/// An over-long value is truncated to the leading `width` characters rather
/// than rejected. The regulatory readers accept such files, so the
/// permissiveness is deliberate and covered by tests.
pub fn pad_numeric(value: &str, width: usize) -> String {
    let padded = format!("{:0>width$}", value, width = width);
    padded.chars().take(width).collect()
}

/// Space-right-pad a text field to `width` characters, truncating (never
/// wrapping) on overflow.
pub fn pad_text(value: &str, width: usize) -> String {
    let padded = format!("{:<width$}", value, width = width);
    padded.chars().take(width).collect()
}

/// Keep only ASCII digits. Tax ids arrive formatted ("12.345.678/0001-99")
/// as often as not.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Truncate to at most `max` characters without padding. Used by the
/// pipe-delimited AEJ fields, which are variable width.
pub fn truncate(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

/// Table-output padding (no truncation, unlike the encoder primitives).
pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Render a minute balance as `+hh:mm` / `-hh:mm` (zero gets no sign).
pub fn format_minutes(mins: i64, want_sign: bool) -> String {
    let abs_m = mins.abs();
    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 {
        "-"
    } else {
        ""
    };
    format!("{}{:02}:{:02}", sign, abs_m / 60, abs_m % 60)
}
