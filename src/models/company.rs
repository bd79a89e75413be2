use crate::utils::fmt::digits_only;
use serde::{Deserialize, Serialize};

/// Circular allowed-location perimeter around the company's registered
/// coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Geofence {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: Option<f64>,
}

/// Company metadata, immutable during a report run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    /// CNPJ (14 digits) or CPF (11 digits), possibly formatted.
    pub tax_id: String,
    pub legal_name: String,
    pub geofence: Option<Geofence>,
}

impl Company {
    pub fn tax_id_digits(&self) -> String {
        digits_only(&self.tax_id)
    }

    /// A tax id longer than a CPF (11 digits) is a CNPJ.
    pub fn is_cnpj(&self) -> bool {
        self.tax_id_digits().len() > 11
    }

    /// Identifier-type digit used by the AFD/AEJ headers: "1" for CNPJ,
    /// "2" for CPF.
    pub fn id_type_digit(&self) -> &'static str {
        if self.is_cnpj() { "1" } else { "2" }
    }
}
