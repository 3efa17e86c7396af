//! Provider air-pollution payloads
//!
//! The provider answers with a list of readings, each carrying a coarse 1..5
//! index under `main.aqi` and raw pollutant concentrations under `components`.
//! Only the first reading is used. Its coarse index and its PM2.5 score are
//! averaged into the snapshot AQI; metrics the provider does not report are
//! filled from the deterministic generator for the same place.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aqi::{AqiResult, aqi_from_pm25};
use crate::coarse_scale::{convert_coarse_scale, reconcile};
use crate::error::{DashboardError, Result};
use crate::metrics::{Metric, MetricsSet};
use crate::snapshot::{Coordinates, Location, LocationSnapshot, Provenance};
use crate::synth::deterministic_metrics;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirPollutionResponse {
    pub list: Vec<AirPollutionEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirPollutionEntry {
    pub main: ProviderIndex,
    #[serde(default)]
    pub components: Components,
    /// Measurement time, seconds since epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dt: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderIndex {
    /// Coarse level; anything outside 1..=5 converts to the fallback AQI
    pub aqi: i64,
}

/// Pollutant concentrations as reported; absent entries read as 0
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Components {
    pub co: Option<f64>,
    pub no: Option<f64>,
    pub no2: Option<f64>,
    pub o3: Option<f64>,
    pub so2: Option<f64>,
    pub pm2_5: Option<f64>,
    pub pm10: Option<f64>,
    pub nh3: Option<f64>,
}

impl Components {
    fn reported(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Pm25 => Some(self.pm2_5.unwrap_or(0.0)),
            Metric::Pm10 => Some(self.pm10.unwrap_or(0.0)),
            Metric::No => Some(self.no.unwrap_or(0.0)),
            Metric::No2 => Some(self.no2.unwrap_or(0.0)),
            Metric::Nox => Some(self.no.unwrap_or(0.0) + self.no2.unwrap_or(0.0)),
            Metric::Nh3 => Some(self.nh3.unwrap_or(0.0)),
            Metric::So2 => Some(self.so2.unwrap_or(0.0)),
            Metric::Co => Some(self.co.unwrap_or(0.0)),
            Metric::O3 => Some(self.o3.unwrap_or(0.0)),
            _ => None,
        }
    }
}

/// Parse a provider response body
///
/// # Errors
///
/// * `DashboardError::Json` - Body does not match the payload shape
pub fn parse_provider_json(body: &str) -> Result<AirPollutionResponse> {
    Ok(serde_json::from_str(body)?)
}

/// Build a snapshot from a provider response
///
/// Metrics the provider lacks come from the generator for the calendar day of
/// `at` in its own time zone, as [`crate::synth::synthesize_at`] buckets them.
///
/// # Errors
///
/// * `DashboardError::InvalidPayload` - The response holds no readings
pub fn snapshot_from_provider<Tz: TimeZone>(
    response: &AirPollutionResponse,
    name: &str,
    coordinates: Coordinates,
    at: &DateTime<Tz>,
) -> Result<LocationSnapshot> {
    let entry = response
        .list
        .first()
        .ok_or_else(|| DashboardError::InvalidPayload("response list is empty".into()))?;

    // Out-of-range levels take the fallback path inside the converter
    let level = u8::try_from(entry.main.aqi).unwrap_or(0);
    let converted = convert_coarse_scale(level);
    let scored = entry.components.pm2_5.map(aqi_from_pm25);
    let merged = reconcile(Some(converted), scored).unwrap_or(converted);

    debug!(name, level, converted, ?scored, merged, "reconciled provider AQI");

    let filler = deterministic_metrics(name, at.day());
    let metrics = MetricsSet::from_fn(|metric| {
        entry
            .components
            .reported(metric)
            .unwrap_or_else(|| filler.value(metric))
    });

    Ok(LocationSnapshot {
        location: Location {
            name: name.to_string(),
            coordinates,
        },
        timestamp: at.with_timezone(&Utc),
        metrics,
        aqi: AqiResult::from_value(merged),
        source: Some(Provenance::OpenWeather),
    })
}
