use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Expected worked minutes per weekday.
///
/// The default is the fallback shift rule only; deployments inject a
/// per-employee schedule through the roster without touching the
/// reconciliation algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    pub monday: i64,
    pub tuesday: i64,
    pub wednesday: i64,
    pub thursday: i64,
    pub friday: i64,
    pub saturday: i64,
    pub sunday: i64,
}

impl Default for WeeklySchedule {
    fn default() -> Self {
        Self {
            monday: 480,
            tuesday: 480,
            wednesday: 480,
            thursday: 480,
            friday: 480,
            saturday: 240,
            sunday: 0,
        }
    }
}

impl WeeklySchedule {
    pub fn expected_minutes(&self, date: NaiveDate) -> i64 {
        match date.weekday() {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }
}
