use super::event::TimeEvent;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceStatus {
    /// Every interval on the day closed normally.
    Ok,
    /// An interval was still open when the report ran (mid-shift report, or
    /// a missing stop punch on a past day).
    Pending,
    /// No punches at all on a day with expected work.
    MissingPunch,
}

impl BalanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BalanceStatus::Ok => "ok",
            BalanceStatus::Pending => "pending",
            BalanceStatus::MissingPunch => "missing_punch",
        }
    }
}

/// One day of the bank of hours for one employee. Derived fresh on every
/// invocation — managers edit historical events, so nothing here is cached.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyBalance {
    pub date: NaiveDate,
    /// Events that contributed to this day, in processing order.
    pub events: Vec<TimeEvent>,
    pub total_worked_minutes: i64,
    pub expected_minutes: i64,
    /// Always `total_worked_minutes - expected_minutes`.
    pub balance_minutes: i64,
    pub status: BalanceStatus,
}
