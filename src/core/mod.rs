pub mod anomaly;
pub mod geo;
pub mod reconciler;
pub mod schedule;
pub mod signature;
