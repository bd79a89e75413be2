use chrono::DateTime;
use jornada::core::anomaly::classify;
use jornada::core::geo::{haversine_km, parse_latlon};
use jornada::models::company::Geofence;

fn at(s: &str) -> DateTime<chrono::FixedOffset> {
    DateTime::parse_from_rfc3339(s).unwrap()
}

fn fence() -> Geofence {
    Geofence {
        latitude: -23.55052,
        longitude: -46.633308,
        radius_meters: Some(100.0),
    }
}

#[test]
fn punch_at_the_registered_center_is_clean() {
    let r = classify(
        &at("2023-01-02T08:00:00-03:00"),
        Some("-23.55052,-46.633308"),
        Some(&fence()),
    );
    assert!(!r.is_flagged);
    assert!(r.reasons.is_empty());
}

#[test]
fn night_window_is_flagged() {
    for ts in [
        "2023-01-02T23:00:00-03:00",
        "2023-01-02T23:59:00-03:00",
        "2023-01-02T00:00:00-03:00",
        "2023-01-02T04:59:00-03:00",
    ] {
        let r = classify(&at(ts), Some("-23.55052,-46.633308"), Some(&fence()));
        assert!(r.is_flagged, "{} should be flagged", ts);
        assert!(r.message().contains("23:00-04:59"));
    }
}

#[test]
fn window_edges_are_clean() {
    for ts in ["2023-01-02T05:00:00-03:00", "2023-01-02T22:59:00-03:00"] {
        let r = classify(&at(ts), Some("-23.55052,-46.633308"), Some(&fence()));
        assert!(!r.is_flagged, "{} should not be flagged", ts);
    }
}

#[test]
fn hour_is_taken_from_the_punch_own_offset() {
    // 02:00 UTC is 23:00 the previous evening in -03:00; the recorded
    // offset says 02:00 local, which is inside the window.
    let r = classify(&at("2023-01-02T02:00:00+00:00"), None, None);
    assert!(r.message().contains("23:00-04:59"));
}

#[test]
fn zero_zero_is_invalid_location_not_outside_perimeter() {
    let r = classify(&at("2023-01-02T08:00:00-03:00"), Some("0,0"), Some(&fence()));
    assert!(r.is_flagged);
    assert!(r.message().contains("invalid location (0,0)"));
    assert!(!r.message().contains("outside"));
}

#[test]
fn far_punch_is_outside_the_perimeter() {
    // Roughly 1 km north of the center, against a 100 m radius.
    let r = classify(
        &at("2023-01-02T08:00:00-03:00"),
        Some("-23.5415,-46.633308"),
        Some(&fence()),
    );
    assert!(r.is_flagged);
    let msg = r.message();
    assert!(msg.contains("outside the allowed perimeter"), "{}", msg);
    assert!(msg.contains("limit 0.100 km"), "{}", msg);
}

#[test]
fn default_radius_applies_when_unset() {
    let fence = Geofence {
        latitude: -23.55052,
        longitude: -46.633308,
        radius_meters: None,
    };
    let r = classify(
        &at("2023-01-02T08:00:00-03:00"),
        Some("-23.5415,-46.633308"),
        Some(&fence),
    );
    assert!(r.message().contains("limit 0.100 km"));
}

#[test]
fn missing_location_is_flagged() {
    let r = classify(&at("2023-01-02T08:00:00-03:00"), None, Some(&fence()));
    assert!(r.is_flagged);
    assert!(r.message().contains("no precise location"));
}

#[test]
fn unparseable_location_counts_as_missing() {
    let r = classify(
        &at("2023-01-02T08:00:00-03:00"),
        Some("somewhere downtown"),
        Some(&fence()),
    );
    assert!(r.message().contains("no precise location"));
}

#[test]
fn reasons_accumulate_and_join_with_semicolons() {
    let r = classify(&at("2023-01-02T23:30:00-03:00"), None, Some(&fence()));
    assert_eq!(r.reasons.len(), 2);
    assert!(r.message().contains("; "));
}

#[test]
fn no_geofence_configured_skips_the_distance_rule() {
    let r = classify(
        &at("2023-01-02T08:00:00-03:00"),
        Some("-23.5415,-46.633308"),
        None,
    );
    assert!(!r.is_flagged);
}

#[test]
fn latlon_parsing_accepts_spaces_and_rejects_junk() {
    assert_eq!(parse_latlon("-23.5, -46.6"), Some((-23.5, -46.6)));
    assert_eq!(parse_latlon("abc,def"), None);
    assert_eq!(parse_latlon("12.0"), None);
    assert_eq!(parse_latlon("NaN,1.0"), None);
}

#[test]
fn haversine_sanity() {
    // One degree of latitude is about 111 km.
    let d = haversine_km(0.0, 0.0, 1.0, 0.0);
    assert!((d - 111.19).abs() < 0.5, "got {}", d);
    assert_eq!(haversine_km(10.0, 20.0, 10.0, 20.0), 0.0);
}
