//! Air-Quality Dashboard Core
//!
//! This crate provides the data layer behind an air-quality dashboard:
//! - EPA breakpoint scoring of PM2.5 concentrations onto the 0..500 AQI scale
//! - Conversion of coarse 1..5 provider levels and reconciliation with scored values
//! - Deterministic, per-location and per-day synthesis of sixteen pollutant and weather metrics
//! - An offline reverse-geocoding stub and region drill-down catalogues
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use air_quality_core::{AqiCategory, Dashboard, LocationQuery, Metric, compute_aqi};
//!
//! let aqi = compute_aqi(35.5);
//! assert_eq!(aqi.value, 101);
//! assert_eq!(aqi.category, AqiCategory::Unhealthy);
//!
//! let dashboard = Dashboard::default();
//! let at = Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap();
//! let snapshot = dashboard.snapshot_at(&LocationQuery::City("Hyderabad".into()), &at);
//!
//! let pm25 = &snapshot.metrics[Metric::Pm25];
//! let aqi = &snapshot.aqi;
//! println!("{}: AQI {} ({})", snapshot.location.name, aqi.value, aqi.description);
//! println!("PM2.5: {} {}", pm25.value, pm25.unit);
//! ```

pub mod aqi;
pub mod coarse_scale;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod geocode;
pub mod history;
pub mod metrics;
pub mod model_report;
pub mod provider;
pub mod region;
pub mod seed;
pub mod snapshot;
pub mod synth;

pub use aqi::{AqiCategory, AqiResult, compute_aqi};
pub use coarse_scale::{convert_coarse_scale, reconcile};
pub use config::{DashboardConfig, DataSource};
pub use dashboard::{Dashboard, LocationQuery};
pub use error::{DashboardError, LocationError, Result};
pub use metrics::{Metric, MetricsSet, PollutantReading};
pub use model_report::{ModelComparison, parse_model_comparison};
pub use snapshot::{Coordinates, Location, LocationSnapshot, Provenance};
pub use synth::{synthesize, synthesize_at, synthesize_random};

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn test_end_to_end_snapshot_json() {
        let at = Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap();
        let snapshot = Dashboard::default().snapshot_at(
            &LocationQuery::Coordinates(Coordinates::new(17.385, 78.4867)),
            &at,
        );

        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["location"]["name"], "Hyderabad");
        assert_eq!(value["aqi"]["value"], 50);
        assert_eq!(value["aqi"]["category"], "good");
        assert_eq!(value["aqi"]["description"], "Good air quality");
        assert_eq!(value["metrics"].as_object().unwrap().len(), 16);
        assert_eq!(value["metrics"]["pm25"]["category"], "good");
        assert_eq!(value["source"], "Local Data (Geo)");
    }

    #[test]
    fn test_category_independent_of_derivation() {
        // 38 reached by averaging and by scoring lands in the same bucket
        let averaged = AqiResult::from_value(reconcile(Some(25), Some(51)).unwrap());
        let scored = compute_aqi(9.1);
        assert_eq!(averaged.value, scored.value);
        assert_eq!(averaged, scored);
    }
}
