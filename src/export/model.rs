use crate::models::daily_balance::DailyBalance;
use serde::Serialize;

/// Flat per-day row for the CSV / JSON balance exports.
#[derive(Serialize, Clone, Debug)]
pub struct BalanceExport {
    pub employee: String,
    pub date: String,
    pub status: String,
    pub worked_minutes: i64,
    pub expected_minutes: i64,
    pub balance_minutes: i64,
}

impl BalanceExport {
    pub fn from_balance(employee: &str, b: &DailyBalance) -> Self {
        Self {
            employee: employee.to_string(),
            date: b.date.format("%Y-%m-%d").to_string(),
            status: b.status.as_str().to_string(),
            worked_minutes: b.total_worked_minutes,
            expected_minutes: b.expected_minutes,
            balance_minutes: b.balance_minutes,
        }
    }
}

pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "employee",
        "date",
        "status",
        "worked_minutes",
        "expected_minutes",
        "balance_minutes",
    ]
}
