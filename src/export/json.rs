use super::model::BalanceExport;
use crate::errors::AppResult;
use std::fs;
use std::path::Path;

/// Write daily balance rows as pretty-printed JSON.
pub fn write_json(path: &Path, rows: &[BalanceExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    fs::write(path, json)?;
    Ok(())
}
