use super::{company::Company, employee::Employee, event::TimeEvent};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The collaborator boundary: a company-scoped, period-bounded snapshot of
/// company metadata, roster and events, assembled upstream. Tenant scoping
/// already happened there; the core trusts it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub company: Company,
    pub employees: Vec<Employee>,
    pub events: Vec<TimeEvent>,
}

impl Dataset {
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        let ds: Dataset = serde_json::from_str(&content)?;
        Ok(ds)
    }

    pub fn employee(&self, id: &str) -> AppResult<&Employee> {
        self.employees
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::UnknownEmployee(id.to_string()))
    }

    /// Events for one employee, in dataset order.
    pub fn events_for(&self, employee_id: &str) -> Vec<TimeEvent> {
        self.events
            .iter()
            .filter(|ev| ev.employee_id == employee_id)
            .cloned()
            .collect()
    }
}
