//! Per-punch anomaly rules: suspicious time-of-day window, geofence
//! distance, missing or invalid location. Every applicable rule contributes
//! a reason; one punch can accumulate several.

use super::geo::{haversine_km, parse_latlon};
use crate::models::company::Geofence;
use chrono::{DateTime, FixedOffset, Timelike};

/// Geofence radius applied when the company never configured one.
pub const DEFAULT_RADIUS_METERS: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub is_flagged: bool,
    pub reasons: Vec<String>,
}

impl Classification {
    /// All reasons joined into one human-readable message.
    pub fn message(&self) -> String {
        self.reasons.join("; ")
    }
}

/// Evaluate one punch.
///
/// `geofence` is the company's pre-fetched perimeter settings: a batch
/// caller classifying many punches for one company reads them once and
/// passes the same reference to every call.
pub fn classify(
    timestamp: &DateTime<FixedOffset>,
    raw_location: Option<&str>,
    geofence: Option<&Geofence>,
) -> Classification {
    let mut reasons = Vec::new();

    // Suspicious window: 23:00 through 04:59 in the punch's own offset.
    let hour = timestamp.hour();
    if hour >= 23 || hour < 5 {
        reasons.push("recorded in the suspicious 23:00-04:59 window".to_string());
    }

    let parsed = raw_location.and_then(parse_latlon);
    match parsed {
        // (0,0) is a GPS failure, not a real position off the coast of
        // Africa. Distinct from "outside perimeter".
        Some((lat, lon)) if lat == 0.0 && lon == 0.0 => {
            reasons.push("invalid location (0,0)".to_string());
        }
        Some((lat, lon)) => {
            if let Some(fence) = geofence {
                let threshold_km =
                    fence.radius_meters.unwrap_or(DEFAULT_RADIUS_METERS) / 1000.0;
                let distance_km = haversine_km(lat, lon, fence.latitude, fence.longitude);
                if distance_km > threshold_km {
                    reasons.push(format!(
                        "outside the allowed perimeter: {:.3} km from the registered location (limit {:.3} km)",
                        distance_km, threshold_km
                    ));
                }
            }
        }
        None => {
            reasons.push("no precise location recorded".to_string());
        }
    }

    Classification {
        is_flagged: !reasons.is_empty(),
        reasons,
    }
}
