use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reconciler::reconcile;
use crate::errors::{AppError, AppResult};
use crate::export::afd::{AfdRecord, render_afd};
use crate::export::aej::{AejMarking, render_aej};
use crate::export::{
    BalanceExport, ExportFormat, afd_filename, aej_filename, csv, json, notify_export_success,
    write_output,
};
use crate::models::dataset::Dataset;
use crate::models::event::TimeEvent;
use crate::ui::messages::warning;
use crate::utils::time::{days_between, now_fixed, parse_required_date};
use chrono::{DateTime, FixedOffset, NaiveDate};
use std::path::PathBuf;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Export {
        dataset,
        format,
        from,
        to,
        out,
        rep_id,
    } = cmd
    else {
        return Err(AppError::Other("wrong command routed to export".into()));
    };

    let ds = Dataset::load(dataset)?;
    let start = parse_required_date(from)?;
    let end = parse_required_date(to)?;
    if end < start {
        return Err(AppError::InvalidPeriod(format!("{} > {}", from, to)));
    }

    let out_dir = out
        .clone()
        .unwrap_or_else(|| PathBuf::from(&cfg.output_dir));
    let rep = rep_id.as_deref().unwrap_or(&cfg.rep_id);
    let generated_at = now_fixed();

    match format {
        ExportFormat::Afd => {
            let events = period_events(&ds, start, end);
            let mut records = Vec::with_capacity(events.len());
            let mut nsr = 0u64;
            for (ts, ev) in &events {
                // Same policy as the AEJ roster join: an event pointing at
                // nobody in the roster is dropped, not fatal.
                let Ok(emp) = ds.employee(&ev.employee_id) else {
                    warning(format!(
                        "Skipping event {} for unknown employee {}",
                        ev.id, ev.employee_id
                    ));
                    continue;
                };
                nsr += 1;
                records.push(AfdRecord {
                    nsr,
                    timestamp: *ts,
                    employee_tax_id: emp.tax_id_digits(),
                });
            }

            let content = render_afd(&ds.company, rep, &records, start, end, &generated_at);
            let path = out_dir.join(afd_filename(start, end));
            write_output(&path, &content)?;
            notify_export_success("AFD", &path);
        }
        ExportFormat::Aej => {
            let events = period_events(&ds, start, end);
            // Entry/exit determination happens here, from the punch kind;
            // the encoder takes the classifier character as given.
            let markings: Vec<AejMarking> = events
                .iter()
                .map(|(ts, ev)| AejMarking {
                    employee_id: ev.employee_id.clone(),
                    timestamp: *ts,
                    kind_char: ev.kind.marking_char(),
                })
                .collect();

            let content = render_aej(
                &ds.company,
                &ds.employees,
                &markings,
                start,
                end,
                &generated_at,
            );
            let path = out_dir.join(aej_filename(start, end));
            write_output(&path, &content)?;
            notify_export_success("AEJ", &path);
        }
        ExportFormat::Csv | ExportFormat::Json => {
            let days = days_between(start, end);
            let now = now_fixed();
            let mut rows = Vec::new();
            for emp in &ds.employees {
                let events = ds.events_for(&emp.id);
                let schedule = emp.schedule.unwrap_or(cfg.schedule);
                let balances = reconcile(
                    &events,
                    &days,
                    &schedule,
                    cfg.duplicate_start_policy(),
                    now,
                );
                rows.extend(
                    balances
                        .iter()
                        .map(|b| BalanceExport::from_balance(&emp.id, b)),
                );
            }

            let stem = format!(
                "balances_{}_{}",
                start.format("%Y%m%d"),
                end.format("%Y%m%d")
            );
            let path = out_dir.join(format!("{}.{}", stem, format.as_str()));
            match format {
                ExportFormat::Csv => csv::write_csv(&path, &rows)?,
                _ => json::write_json(&path, &rows)?,
            }
            notify_export_success(&format.as_str().to_uppercase(), &path);
        }
    }

    Ok(())
}

/// Events inside the period with a parseable timestamp, chronologically
/// ordered (stable for equal timestamps). Corrupt timestamps are skipped
/// with a warning, never fatal.
fn period_events(
    ds: &Dataset,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<(DateTime<FixedOffset>, TimeEvent)> {
    let mut out: Vec<(DateTime<FixedOffset>, TimeEvent)> = Vec::new();
    for ev in &ds.events {
        match ev.parsed_timestamp() {
            Some(ts) => {
                let date = ts.date_naive();
                if date >= start && date <= end {
                    out.push((ts, ev.clone()));
                }
            }
            None => warning(format!(
                "Skipping event {} with unparseable timestamp '{}'",
                ev.id, ev.timestamp
            )),
        }
    }
    out.sort_by_key(|(ts, _)| *ts);
    out
}
