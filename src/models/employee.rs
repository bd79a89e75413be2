use crate::core::schedule::WeeklySchedule;
use crate::utils::fmt::digits_only;
use serde::{Deserialize, Serialize};

/// Roster row. An employee belongs to exactly one company for the lifetime
/// of a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    /// CPF, 11 digits, possibly formatted.
    pub tax_id: String,
    pub name: String,
    /// PIS labor-registry number, when the company tracks it.
    pub pis: Option<String>,
    /// Per-employee shift rule; falls back to the configured default.
    pub schedule: Option<WeeklySchedule>,
}

impl Employee {
    pub fn tax_id_digits(&self) -> String {
        digits_only(&self.tax_id)
    }

    pub fn pis_digits(&self) -> String {
        self.pis.as_deref().map(digits_only).unwrap_or_default()
    }
}
