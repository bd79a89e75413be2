use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::anomaly::classify;
use crate::errors::{AppError, AppResult};
use crate::models::dataset::Dataset;
use crate::ui::messages::{info, warning};
use crate::utils::fmt::pad_right;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    let Commands::Check {
        dataset,
        flagged_only,
    } = cmd
    else {
        return Err(AppError::Other("wrong command routed to check".into()));
    };

    let ds = Dataset::load(dataset)?;
    // One geofence read for the whole batch.
    let geofence = ds.company.geofence.as_ref();

    let mut flagged = 0usize;
    let mut total = 0usize;

    for ev in &ds.events {
        let Some(ts) = ev.parsed_timestamp() else {
            warning(format!(
                "Skipping event {} with unparseable timestamp '{}'",
                ev.id, ev.timestamp
            ));
            continue;
        };
        total += 1;

        let result = classify(&ts, ev.location.as_deref(), geofence);
        if result.is_flagged {
            flagged += 1;
            println!(
                "{}  {}  {}  FLAGGED: {}",
                pad_right(&ev.id, 12),
                pad_right(&ev.employee_id, 12),
                ts.to_rfc3339(),
                result.message(),
            );
        } else if !flagged_only {
            println!(
                "{}  {}  {}  ok",
                pad_right(&ev.id, 12),
                pad_right(&ev.employee_id, 12),
                ts.to_rfc3339(),
            );
        }
    }

    info(format!("{} of {} punches flagged", flagged, total));
    Ok(())
}
