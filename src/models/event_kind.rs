use serde::{Deserialize, Serialize};

/// Punch kind as recorded by the clock-in flow.
///
/// For reconciliation every kind is either a "start" (opens a worked
/// interval) or a "stop" (closes one); `break_end`/`work_resume` are starts,
/// `break_start`/`work_pause` are stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    ClockIn,
    ClockOut,
    BreakStart,
    BreakEnd,
    WorkPause,
    WorkResume,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::ClockIn => "clock_in",
            EventKind::ClockOut => "clock_out",
            EventKind::BreakStart => "break_start",
            EventKind::BreakEnd => "break_end",
            EventKind::WorkPause => "work_pause",
            EventKind::WorkResume => "work_resume",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "clock_in" => Some(EventKind::ClockIn),
            "clock_out" => Some(EventKind::ClockOut),
            "break_start" => Some(EventKind::BreakStart),
            "break_end" => Some(EventKind::BreakEnd),
            "work_pause" => Some(EventKind::WorkPause),
            "work_resume" => Some(EventKind::WorkResume),
            _ => None,
        }
    }

    pub fn is_start(&self) -> bool {
        matches!(
            self,
            EventKind::ClockIn | EventKind::BreakEnd | EventKind::WorkResume
        )
    }

    pub fn is_stop(&self) -> bool {
        !self.is_start()
    }

    /// Entry/exit classifier character used by AEJ marking rows.
    pub fn marking_char(&self) -> char {
        if self.is_start() { 'E' } else { 'S' }
    }
}
