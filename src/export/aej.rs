//! AEJ ("Arquivo Eletrônico de Jornada") encoder — the pipe-delimited
//! work-journal export mandated by Portaria 671/2021.
//!
//! Record types emitted: 01 header, 02 recording-device roster, 03 employee
//! roster, 05 markings, 99 trailer with per-type counts. Types 04 and 06-09
//! are not produced and always count zero. Lines join with CRLF, no trailing
//! CRLF. Fields are variable width (truncated where the layout caps them,
//! never padded).

use crate::models::company::Company;
use crate::models::employee::Employee;
use crate::utils::fmt::truncate;
use crate::utils::time::{ddmmyyyy, hhmm};
use chrono::{DateTime, FixedOffset, NaiveDate};
use std::collections::HashMap;

/// Single synthetic recording device: this deployment records punches
/// through one virtual REP. Multi-device rosters would emit one type-02 row
/// per device.
const VIRTUAL_REP_LINE: &str = "02|1|1|1|virtual";

/// Device id every marking row references (the one virtual REP).
const DEVICE_ID: &str = "1";

/// One punch to render as a type-05 row. The entry/exit classifier is
/// caller-supplied; the encoder does not infer it.
#[derive(Debug, Clone)]
pub struct AejMarking {
    pub employee_id: String,
    pub timestamp: DateTime<FixedOffset>,
    /// 'E' entry or 'S' exit.
    pub kind_char: char,
}

/// Render the complete AEJ file for one company, roster and period.
///
/// Markings referencing an employee absent from the roster are dropped and
/// excluded from the trailer counts. Referential drift between the event
/// stream and the roster must not poison the file.
pub fn render_aej(
    company: &Company,
    employees: &[Employee],
    markings: &[AejMarking],
    period_start: NaiveDate,
    period_end: NaiveDate,
    generated_at: &DateTime<FixedOffset>,
) -> String {
    let mut lines = Vec::new();

    lines.push(header_line(company, period_start, period_end, generated_at));
    lines.push(VIRTUAL_REP_LINE.to_string());

    // Roster reference ids are sequential and 1-based in roster order; they
    // are the join key for marking rows, not the employees' own ids.
    let mut roster_ids: HashMap<&str, usize> = HashMap::new();
    for (idx, emp) in employees.iter().enumerate() {
        let seq = idx + 1;
        roster_ids.insert(emp.id.as_str(), seq);
        lines.push(format!(
            "03|{}|{}|{}|{}",
            seq,
            emp.tax_id_digits(),
            truncate(&emp.name, 150),
            emp.pis_digits(),
        ));
    }

    let mut marking_count = 0usize;
    for m in markings {
        let Some(seq) = roster_ids.get(m.employee_id.as_str()) else {
            continue;
        };
        // Trailing field is the optional per-record signature, empty here:
        // AEJ does not mandate one the way AFD does.
        lines.push(format!(
            "05|{}|{}|{}|{}|{}|O|",
            seq,
            ddmmyyyy(m.timestamp.date_naive()),
            hhmm(&m.timestamp),
            DEVICE_ID,
            m.kind_char,
        ));
        marking_count += 1;
    }

    // Counts must reflect rows actually written, after drops.
    lines.push(format!(
        "99|1|1|{}|0|{}|0|0|0|0",
        employees.len(),
        marking_count,
    ));

    lines.join("\r\n")
}

/// Type 01: layout marker, source type, employer identification and period.
fn header_line(
    company: &Company,
    period_start: NaiveDate,
    period_end: NaiveDate,
    generated_at: &DateTime<FixedOffset>,
) -> String {
    format!(
        "01|1|{}|{}|{}|{}|{}|{}|{}|001",
        company.id_type_digit(),
        company.tax_id_digits(),
        truncate(&company.legal_name, 150),
        ddmmyyyy(period_start),
        ddmmyyyy(period_end),
        ddmmyyyy(generated_at.date_naive()),
        hhmm(generated_at),
    )
}
