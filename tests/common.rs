#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use jornada::models::event::TimeEvent;
use jornada::models::event_kind::EventKind;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Bare event for library-level tests.
pub fn ev(id: &str, kind: EventKind, timestamp: &str) -> TimeEvent {
    TimeEvent {
        id: id.to_string(),
        employee_id: "u1".to_string(),
        kind,
        timestamp: timestamp.to_string(),
        location: None,
        flagged: None,
        flag_reason: None,
    }
}

pub fn jor() -> Command {
    cargo_bin_cmd!("jornada")
}

/// Write a dataset file into the system temp dir and return its path.
pub fn write_dataset(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_jornada.json", name));
    fs::write(&path, content).expect("write dataset");
    path.to_string_lossy().to_string()
}

/// Fresh output directory inside the system temp dir.
pub fn temp_out_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_jornada_out", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create out dir");
    path.to_string_lossy().to_string()
}

/// One company, one employee, one full worked Monday (2023-01-02):
/// 08:00-12:00 and 13:00-17:00. The afternoon punches carry a (0,0) GPS
/// failure and a missing location so the anomaly rules have something to
/// flag.
pub fn sample_dataset() -> &'static str {
    r#"{
  "company": {
    "id": "c1",
    "taxId": "12345678000199",
    "legalName": "Empresa Teste Ltda",
    "geofence": { "latitude": -23.55052, "longitude": -46.633308, "radiusMeters": 100 }
  },
  "employees": [
    { "id": "u1", "taxId": "12345678901", "name": "João Silva", "pis": "12345678901" }
  ],
  "events": [
    { "id": "e1", "employeeId": "u1", "kind": "clock_in",
      "timestamp": "2023-01-02T08:00:00-03:00", "location": "-23.55052,-46.633308" },
    { "id": "e2", "employeeId": "u1", "kind": "clock_out",
      "timestamp": "2023-01-02T12:00:00-03:00", "location": "-23.55052,-46.633308" },
    { "id": "e3", "employeeId": "u1", "kind": "clock_in",
      "timestamp": "2023-01-02T13:00:00-03:00", "location": "0,0" },
    { "id": "e4", "employeeId": "u1", "kind": "clock_out",
      "timestamp": "2023-01-02T17:00:00-03:00" }
  ]
}"#
}
