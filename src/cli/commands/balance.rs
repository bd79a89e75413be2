use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reconciler::reconcile;
use crate::errors::{AppError, AppResult};
use crate::models::dataset::Dataset;
use crate::models::employee::Employee;
use crate::ui::messages::{header, warning};
use crate::utils::fmt::{format_minutes, pad_left, pad_right};
use crate::utils::time::{days_between, now_fixed, parse_required_date};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Balance {
        dataset,
        from,
        to,
        employee,
    } = cmd
    else {
        return Err(AppError::Other("wrong command routed to balance".into()));
    };

    let ds = Dataset::load(dataset)?;
    let start = parse_required_date(from)?;
    let end = parse_required_date(to)?;
    if end < start {
        return Err(AppError::InvalidPeriod(format!("{} > {}", from, to)));
    }
    let days = days_between(start, end);
    let now = now_fixed();

    let selected: Vec<&Employee> = match employee {
        Some(id) => vec![ds.employee(id)?],
        None => ds.employees.iter().collect(),
    };

    for emp in selected {
        let events = ds.events_for(&emp.id);
        for ev in &events {
            if ev.parsed_timestamp().is_none() {
                warning(format!(
                    "Skipping event {} with unparseable timestamp '{}'",
                    ev.id, ev.timestamp
                ));
            }
        }

        let schedule = emp.schedule.unwrap_or(cfg.schedule);
        let balances = reconcile(
            &events,
            &days,
            &schedule,
            cfg.duplicate_start_policy(),
            now,
        );

        header(format!("Balance for {} ({})", emp.name, emp.id));
        println!(
            "{}  {}  {}  {}  {}",
            pad_right("date", 10),
            pad_right("status", 13),
            pad_left("worked", 7),
            pad_left("expected", 8),
            pad_left("balance", 7),
        );

        let mut period_balance = 0i64;
        for b in &balances {
            period_balance += b.balance_minutes;
            println!(
                "{}  {}  {}  {}  {}",
                b.date.format("%Y-%m-%d"),
                pad_right(b.status.as_str(), 13),
                pad_left(&format_minutes(b.total_worked_minutes, false), 7),
                pad_left(&format_minutes(b.expected_minutes, false), 8),
                pad_left(&format_minutes(b.balance_minutes, true), 7),
            );
        }
        println!(
            "Period balance: {}",
            format_minutes(period_balance, true)
        );
        println!();
    }

    Ok(())
}
