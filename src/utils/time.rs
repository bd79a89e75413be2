//! Date and timestamp utilities: period expansion, the DDMMYYYY / HHmm
//! renderings the compliance layouts use, and lenient timestamp parsing.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn parse_required_date(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// All calendar days from `start` to `end` inclusive.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = start;
    while d <= end {
        out.push(d);
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }
    out
}

/// DDMMYYYY, the date rendering both AFD and AEJ use.
pub fn ddmmyyyy(date: NaiveDate) -> String {
    date.format("%d%m%Y").to_string()
}

/// HHmm, the time rendering of AEJ markings and the AFD generation stamp.
pub fn hhmm(dt: &DateTime<FixedOffset>) -> String {
    dt.format("%H%M").to_string()
}

/// Parse an event timestamp leniently.
///
/// Upstream recorders emit RFC 3339 with offset; older exports carry naive
/// local timestamps in two spellings. A naive timestamp is interpreted in
/// the machine's local offset. Returns None for anything else, so a corrupt
/// event can be skipped without aborting a report.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            if let Some(local) = Local.from_local_datetime(&naive).earliest() {
                return Some(local.fixed_offset());
            }
        }
    }
    None
}

pub fn now_fixed() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}
