//! Location query orchestration
//!
//! A [`Dashboard`] owns the configuration and the currently selected data
//! source, and turns a [`LocationQuery`] into a [`LocationSnapshot`]. All
//! state lives on the value; nothing is kept in statics.

use chrono::{DateTime, Local, TimeZone, Utc};
use rand::RngExt;
use tracing::{debug, warn};

use crate::config::{DashboardConfig, DataSource};
use crate::geocode::place_name;
use crate::provider::{parse_provider_json, snapshot_from_provider};
use crate::region::{anchored_coordinates, region_location_name};
use crate::snapshot::{Coordinates, LocationSnapshot, Provenance};
use crate::synth::{synthesize_at, synthesize_random};

/// How the user picked a location
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    /// Device position
    Coordinates(Coordinates),
    /// Free-text city search
    City(String),
    /// Country / state / district drill-down; blank levels are skipped
    Region {
        country: String,
        state: String,
        district: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    config: DashboardConfig,
    source: DataSource,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}

impl Dashboard {
    #[must_use]
    pub fn new(config: DashboardConfig) -> Self {
        let source = config.default_source;
        Self { config, source }
    }

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    #[must_use]
    pub fn source(&self) -> DataSource {
        self.source
    }

    pub fn set_source(&mut self, source: DataSource) {
        debug!(?source, "data source changed");
        self.source = source;
    }

    /// Answer `query` from the deterministic generator as of `at`
    ///
    /// Provider responses for [`DataSource::OpenWeather`] go through
    /// [`Dashboard::provider_snapshot`]; here that source is answered like
    /// [`DataSource::Local`].
    #[must_use]
    pub fn snapshot_at<Tz: TimeZone>(
        &self,
        query: &LocationQuery,
        at: &DateTime<Tz>,
    ) -> LocationSnapshot {
        match query {
            LocationQuery::Coordinates(coordinates) => {
                let name = place_name(*coordinates);
                let source = match self.source {
                    DataSource::Google => Provenance::GoogleAirQuality,
                    DataSource::OpenWeather => {
                        warn!("no provider response supplied, answering from local data");
                        Provenance::LocalGeo
                    }
                    DataSource::Local | DataSource::Region => Provenance::LocalGeo,
                };
                synthesize_at(name, at)
                    .with_location(name, *coordinates)
                    .with_source(source)
            }
            LocationQuery::City(city) => {
                let city = city.trim();
                let coordinates =
                    anchored_coordinates(city, self.config.city_anchor, self.config.city_spread);
                synthesize_at(city, at).with_location(city, coordinates)
            }
            LocationQuery::Region {
                country,
                state,
                district,
            } => {
                let name = region_location_name(country, state, district).unwrap_or_default();
                let coordinates =
                    anchored_coordinates(name, self.config.city_anchor, self.config.region_spread);
                synthesize_at(name, at)
                    .with_location(name, coordinates)
                    .with_source(Provenance::RegionSelection)
            }
        }
    }

    /// Answer `query` using the local clock
    #[must_use]
    pub fn snapshot(&self, query: &LocationQuery) -> LocationSnapshot {
        self.snapshot_at(query, &Local::now())
    }

    /// Build a snapshot from a provider response body for `coordinates`
    ///
    /// Gaps in the body are filled for the calendar day of `at`, matching
    /// [`Dashboard::snapshot_at`]. An unusable body never fails the query: it
    /// is logged and answered with random values labelled
    /// [`Provenance::OpenWeatherFallback`].
    pub fn provider_snapshot<Tz: TimeZone, R: RngExt + ?Sized>(
        &self,
        coordinates: Coordinates,
        body: &str,
        at: &DateTime<Tz>,
        rng: &mut R,
    ) -> LocationSnapshot {
        let name = place_name(coordinates);
        let parsed = parse_provider_json(body)
            .and_then(|response| snapshot_from_provider(&response, name, coordinates, at));

        match parsed {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(
                    error = %err,
                    %coordinates,
                    "provider response unusable, using random fallback"
                );
                synthesize_random(coordinates, at.with_timezone(&Utc), rng)
                    .with_source(Provenance::OpenWeatherFallback)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::aqi::AqiCategory;
    use crate::synth::UNLABELLED_LOCATION;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap()
    }

    fn region(country: &str, state: &str, district: &str) -> LocationQuery {
        LocationQuery::Region {
            country: country.into(),
            state: state.into(),
            district: district.into(),
        }
    }

    #[test]
    fn coordinates_resolve_to_named_synthesis() {
        let dashboard = Dashboard::default();
        let position = Coordinates::new(17.385, 78.4867);
        let snapshot = dashboard.snapshot_at(&LocationQuery::Coordinates(position), &at());

        assert_eq!(snapshot.location.name, "Hyderabad");
        assert_eq!(snapshot.location.coordinates, position);
        assert_eq!(snapshot.source, Some(Provenance::LocalGeo));
        assert_eq!(snapshot.metrics, synthesize_at("Hyderabad", &at()).metrics);
    }

    #[test]
    fn google_source_only_changes_the_label() {
        let mut dashboard = Dashboard::default();
        let query = LocationQuery::Coordinates(Coordinates::new(19.076, 72.8777));
        let local = dashboard.snapshot_at(&query, &at());

        dashboard.set_source(DataSource::Google);
        let google = dashboard.snapshot_at(&query, &at());

        assert_eq!(google.source, Some(Provenance::GoogleAirQuality));
        assert_eq!(google.metrics, local.metrics);
        assert_eq!(google.location.name, "Mumbai");
    }

    #[test]
    fn city_search_is_unlabelled_and_anchored() {
        let dashboard = Dashboard::default();
        let snapshot = dashboard.snapshot_at(&LocationQuery::City(" Hyderabad ".into()), &at());

        assert_eq!(snapshot.location.name, "Hyderabad");
        assert_eq!(snapshot.source, None);
        assert!((snapshot.location.coordinates.latitude - 17.58).abs() < 1e-9);
        assert_eq!(snapshot.aqi.category, AqiCategory::Good);
    }

    #[test]
    fn region_uses_most_specific_level() {
        let dashboard = Dashboard::default();
        let snapshot = dashboard.snapshot_at(&region("India", "Telangana", ""), &at());

        assert_eq!(snapshot.location.name, "Telangana");
        assert_eq!(snapshot.source, Some(Provenance::RegionSelection));
        assert_eq!(snapshot.metrics, synthesize_at("Telangana", &at()).metrics);

        let anchor = dashboard.config().city_anchor;
        assert!((snapshot.location.coordinates.latitude - anchor.latitude).abs() <= 1.0);
    }

    #[test]
    fn blank_region_degenerates_to_empty_key() {
        let dashboard = Dashboard::default();
        let snapshot = dashboard.snapshot_at(&region("", " ", ""), &at());
        assert_eq!(snapshot.location.name, "");
        assert_eq!(snapshot.metrics, synthesize_at("", &at()).metrics);
    }

    #[test]
    fn repeated_queries_are_idempotent() {
        let dashboard = Dashboard::default();
        let query = region("India", "Karnataka", "Mysore");
        assert_eq!(dashboard.snapshot_at(&query, &at()), dashboard.snapshot_at(&query, &at()));
    }

    #[test]
    fn config_default_source_is_applied() {
        let config = DashboardConfig {
            default_source: DataSource::Google,
            ..DashboardConfig::default()
        };
        assert_eq!(Dashboard::new(config).source(), DataSource::Google);
    }

    #[test]
    fn provider_body_is_reconciled() {
        let dashboard = Dashboard::default();
        let body = r#"{ "list": [{ "main": { "aqi": 1 }, "components": { "pm2_5": 12.1 } }] }"#;
        let mut rng = StdRng::seed_from_u64(5);
        let snapshot =
            dashboard.provider_snapshot(Coordinates::new(12.9716, 77.5946), body, &at(), &mut rng);

        // (25 + 51) / 2 = 38
        assert_eq!(snapshot.aqi.value, 38);
        assert_eq!(snapshot.location.name, "Bangalore");
        assert_eq!(snapshot.source, Some(Provenance::OpenWeather));
    }

    #[test]
    fn bad_provider_body_falls_back_to_random() {
        let dashboard = Dashboard::default();
        let mut rng = StdRng::seed_from_u64(5);
        let position = Coordinates::new(12.9716, 77.5946);
        let snapshot = dashboard.provider_snapshot(position, "<html>502</html>", &at(), &mut rng);

        assert_eq!(snapshot.source, Some(Provenance::OpenWeatherFallback));
        assert_eq!(snapshot.location.name, UNLABELLED_LOCATION);
        assert_eq!(snapshot.location.coordinates, position);
    }
}
