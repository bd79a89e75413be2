//! AFD ("Arquivo Fonte de Dados") encoder — the fixed-width punch-clock
//! export mandated by Portaria 671/2021.
//!
//! The file is a header (type 1), one type-7 row per punch carrying a
//! SHA-256 tamper-evidence digest, and a trailer (type 9) with the total
//! line count. Lines are pure fixed width (no separators), joined with CRLF
//! and without a trailing CRLF.
//!
//! Field conventions: numeric fields zero-pad on the left, text fields
//! space-pad on the right; both truncate on overflow instead of erroring.
//! Regulatory readers accept truncated ids, so that permissiveness is kept.

use crate::core::signature::sign;
use crate::models::company::Company;
use crate::utils::fmt::{pad_numeric, pad_text};
use crate::utils::time::ddmmyyyy;
use chrono::{DateTime, FixedOffset, NaiveDate};

/// One punch row, already in chronological order. The encoder never
/// re-sorts: sequencing is the caller's responsibility.
#[derive(Debug, Clone)]
pub struct AfdRecord {
    /// NSR — sequential record number assigned by the caller.
    pub nsr: u64,
    pub timestamp: DateTime<FixedOffset>,
    /// Employee CPF, digits only.
    pub employee_tax_id: String,
}

/// Render the complete AFD body for one company and period.
pub fn render_afd(
    company: &Company,
    rep_id: &str,
    records: &[AfdRecord],
    period_start: NaiveDate,
    period_end: NaiveDate,
    generated_at: &DateTime<FixedOffset>,
) -> String {
    let mut lines = Vec::with_capacity(records.len() + 2);
    lines.push(header_line(company, rep_id, period_start, period_end, generated_at));

    for rec in records {
        lines.push(marking_line(rec));
    }

    // Total counts every line of the file, the trailer itself included.
    let total_lines = lines.len() + 1;
    lines.push(trailer_line(total_lines));

    lines.join("\r\n")
}

/// Type 1: company identification and reporting period.
fn header_line(
    company: &Company,
    rep_id: &str,
    period_start: NaiveDate,
    period_end: NaiveDate,
    generated_at: &DateTime<FixedOffset>,
) -> String {
    let mut line = String::new();
    line.push_str(&pad_numeric("1", 9)); // NSR of the header is always 1
    line.push('1'); // record type
    line.push_str(company.id_type_digit());
    line.push_str(&pad_numeric(&company.tax_id_digits(), 14));
    line.push_str(&pad_text("", 12)); // CEI, unused
    line.push_str(&pad_text(&company.legal_name, 150));
    line.push_str(&pad_numeric(rep_id, 17));
    line.push_str(&ddmmyyyy(period_start));
    line.push_str(&ddmmyyyy(period_end));
    line.push_str(&generated_at.format("%d%m%Y%H%M").to_string());
    line.push_str("0000"); // CRC placeholder, not computed
    line
}

/// Type 7: one punch with its per-record digest. The digest covers the
/// rendered line prefix (NSR, type, date-time, CPF) exactly as emitted.
fn marking_line(rec: &AfdRecord) -> String {
    let mut line = String::new();
    line.push_str(&pad_numeric(&rec.nsr.to_string(), 9));
    line.push('7');
    line.push_str(&rec.timestamp.format("%Y-%m-%dT%H:%M:%S%:z").to_string());
    line.push_str(&pad_numeric(&rec.employee_tax_id, 11));
    let digest = sign(line.as_bytes());
    line.push_str(&digest);
    line
}

/// Type 9: total line count plus four reserved zero-filled counters.
fn trailer_line(total_lines: usize) -> String {
    let mut line = String::new();
    line.push_str(&pad_numeric(&total_lines.to_string(), 9));
    line.push('9');
    for _ in 0..4 {
        line.push_str(&pad_numeric("0", 9));
    }
    line
}
