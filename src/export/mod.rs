pub mod aej;
pub mod afd;
pub mod csv;
pub mod json;
pub mod model;

pub use model::BalanceExport;

use crate::ui::messages::success;
use chrono::NaiveDate;
use clap::ValueEnum;
use std::fs;
use std::io;
use std::path::Path;

/// Completion message shared by every export path.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Afd,
    Aej,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Afd => "afd",
            ExportFormat::Aej => "aej",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Conventional AFD filename for a reporting period.
pub fn afd_filename(start: NaiveDate, end: NaiveDate) -> String {
    format!("afd-{}-{}.txt", start.format("%Y%m%d"), end.format("%Y%m%d"))
}

/// Conventional AEJ filename for a reporting period.
pub fn aej_filename(start: NaiveDate, end: NaiveDate) -> String {
    format!("aej_{}_{}.txt", start.format("%Y%m%d"), end.format("%Y%m%d"))
}

/// Write rendered file content as-is. The encoders already emit CRLF line
/// endings, so this must not do any newline translation.
pub fn write_output(path: &Path, content: &str) -> io::Result<()> {
    fs::write(path, content.as_bytes())
}
