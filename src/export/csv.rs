use super::model::{BalanceExport, get_headers};
use csv::Writer;
use std::path::Path;

/// Write daily balance rows as CSV.
pub fn write_csv(path: &Path, rows: &[BalanceExport]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;

    for row in rows {
        wtr.write_record(&[
            row.employee.clone(),
            row.date.clone(),
            row.status.clone(),
            row.worked_minutes.to_string(),
            row.expected_minutes.to_string(),
            row.balance_minutes.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
