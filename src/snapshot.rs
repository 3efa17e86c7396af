//! Composite air-quality record handed to the rendering layer

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aqi::AqiResult;
use crate::metrics::MetricsSet;

/// Latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Both axes rounded to one decimal place
    #[must_use]
    pub fn rounded(self) -> Self {
        Self {
            latitude: (self.latitude * 10.0).round() / 10.0,
            longitude: (self.longitude * 10.0).round() / 10.0,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub coordinates: Coordinates,
}

/// Which generation or provider path produced a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provenance {
    #[serde(rename = "Local Data (Geo)")]
    LocalGeo,
    #[serde(rename = "Google Air Quality API")]
    GoogleAirQuality,
    #[serde(rename = "Region Selection")]
    RegionSelection,
    #[serde(rename = "Open Weather API")]
    OpenWeather,
    #[serde(rename = "Open Weather API (Fallback)")]
    OpenWeatherFallback,
    /// Non-reproducible values drawn from a random generator
    #[serde(rename = "Random Fallback")]
    RandomFallback,
}

impl Provenance {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::LocalGeo => "Local Data (Geo)",
            Self::GoogleAirQuality => "Google Air Quality API",
            Self::RegionSelection => "Region Selection",
            Self::OpenWeather => "Open Weather API",
            Self::OpenWeatherFallback => "Open Weather API (Fallback)",
            Self::RandomFallback => "Random Fallback",
        }
    }

    /// Whether the same inputs on the same day reproduce the snapshot
    #[must_use]
    pub fn is_deterministic(self) -> bool {
        !matches!(self, Self::RandomFallback | Self::OpenWeatherFallback)
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the dashboard renders for one location query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSnapshot {
    pub location: Location,
    /// ISO-8601 creation time
    pub timestamp: DateTime<Utc>,
    pub metrics: MetricsSet,
    pub aqi: AqiResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Provenance>,
}

impl LocationSnapshot {
    #[must_use]
    pub fn with_source(mut self, source: Provenance) -> Self {
        self.source = Some(source);
        self
    }

    #[must_use]
    pub fn with_location(mut self, name: impl Into<String>, coordinates: Coordinates) -> Self {
        self.location = Location {
            name: name.into(),
            coordinates,
        };
        self
    }

    /// Badge text for the summary view; unlabelled snapshots read "Standard"
    #[must_use]
    pub fn source_label(&self) -> &'static str {
        self.source.map_or("Standard", Provenance::label)
    }
}
