use super::event_kind::EventKind;
use crate::utils::time::parse_timestamp;
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// One recorded punch. Created by the point-recording flow upstream and
/// never mutated here; the core only reads these rows.
///
/// The timestamp is kept as the raw text the recorder sent and parsed on
/// access: one corrupt event must be skippable without failing the whole
/// dataset load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEvent {
    pub id: String,
    pub employee_id: String,
    pub kind: EventKind,
    /// RFC 3339 with offset, or a naive local timestamp from older exports.
    pub timestamp: String,
    /// Raw "lat,lon" text as captured by the device, when present.
    pub location: Option<String>,
    /// Anomaly flag precomputed at recording time, if any.
    pub flagged: Option<bool>,
    pub flag_reason: Option<String>,
}

impl TimeEvent {
    /// None when the raw timestamp is unparseable; callers skip such events.
    pub fn parsed_timestamp(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.timestamp)
    }

    /// Calendar date in the event's own recorded offset, not the wall clock
    /// of whoever generates the report.
    pub fn local_date(&self) -> Option<NaiveDate> {
        self.parsed_timestamp().map(|dt| dt.date_naive())
    }
}
