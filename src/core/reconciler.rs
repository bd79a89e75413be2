//! Interval reconciliation: turns an unordered stream of typed punches into
//! worked minutes per calendar day.
//!
//! The pairing walks each day's punches chronologically holding at most one
//! open "start" marker. Start kinds open it, stop kinds close it and add the
//! elapsed minutes. The stream is irregular in practice (duplicate starts,
//! orphan stops, punches missing entirely), so the lenient handling of those
//! cases is an explicit policy here, not incidental fall-through.

use crate::models::daily_balance::{BalanceStatus, DailyBalance};
use crate::models::event::TimeEvent;
use crate::core::schedule::WeeklySchedule;
use chrono::{DateTime, FixedOffset, NaiveDate};
use std::collections::HashMap;

/// What to do when a start punch arrives while an interval is already open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateStartPolicy {
    /// Absorb the duplicate: the running interval keeps its original start.
    /// Matches how managers expect a double-tapped clock-in to behave.
    #[default]
    Absorb,
    /// Re-open at the new timestamp, discarding the earlier partial
    /// interval. Stricter; useful when review treats a duplicate start as a
    /// correction.
    Restart,
}

/// Reconcile one employee's events over the given calendar days.
///
/// `days` is the report period (one `DailyBalance` per entry, in order);
/// `now` decides whether a still-open interval is a mid-shift report (its
/// running time counts) or a missing stop punch on a past day (it does not).
/// Events whose timestamps do not parse are skipped individually.
pub fn reconcile(
    events: &[TimeEvent],
    days: &[NaiveDate],
    schedule: &WeeklySchedule,
    policy: DuplicateStartPolicy,
    now: DateTime<FixedOffset>,
) -> Vec<DailyBalance> {
    // Partition by the event's own local calendar date. Events with
    // unparseable timestamps are dropped here; everything else of the day
    // still reconciles.
    let mut by_day: HashMap<NaiveDate, Vec<(DateTime<FixedOffset>, TimeEvent)>> = HashMap::new();
    for ev in events {
        if let Some(ts) = ev.parsed_timestamp() {
            by_day.entry(ts.date_naive()).or_default().push((ts, ev.clone()));
        }
    }

    let today = now.date_naive();
    let mut out = Vec::with_capacity(days.len());

    for &day in days {
        let mut day_events = by_day.remove(&day).unwrap_or_default();
        // Stable sort: punches sharing a timestamp keep their original
        // relative order, the stream has no secondary key.
        day_events.sort_by_key(|(ts, _)| *ts);

        let expected = schedule.expected_minutes(day);

        if day_events.is_empty() {
            let status = if expected > 0 {
                BalanceStatus::MissingPunch
            } else {
                BalanceStatus::Ok
            };
            out.push(DailyBalance {
                date: day,
                events: Vec::new(),
                total_worked_minutes: 0,
                expected_minutes: expected,
                balance_minutes: -expected,
                status,
            });
            continue;
        }

        let mut total: i64 = 0;
        let mut open_start: Option<DateTime<FixedOffset>> = None;

        for (ts, ev) in &day_events {
            if ev.kind.is_start() {
                match (open_start, policy) {
                    (None, _) => open_start = Some(*ts),
                    (Some(_), DuplicateStartPolicy::Absorb) => {}
                    (Some(_), DuplicateStartPolicy::Restart) => open_start = Some(*ts),
                }
            } else if let Some(start) = open_start.take() {
                total += (*ts - start).num_minutes();
            }
            // Orphan stop: no open interval to close, contributes nothing.
        }

        let mut status = BalanceStatus::Ok;
        if let Some(start) = open_start {
            status = BalanceStatus::Pending;
            if day == today {
                // Report ran mid-shift: count the interval up to now.
                total += (now - start).num_minutes();
            }
        }

        out.push(DailyBalance {
            date: day,
            events: day_events.into_iter().map(|(_, ev)| ev).collect(),
            total_worked_minutes: total,
            expected_minutes: expected,
            balance_minutes: total - expected,
            status,
        });
    }

    out
}
