//! Metric catalogue and the sixteen-reading metrics set

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::aqi::{AqiCategory, aqi_from_pm25};
use crate::error::DashboardError;

/// Number of metrics in every [`MetricsSet`]
pub const METRIC_COUNT: usize = 16;

/// Pollutant and weather quantities shown on the dashboard, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Pm25,
    Pm10,
    No,
    No2,
    Nox,
    Nh3,
    So2,
    Co,
    O3,
    Benzene,
    Humidity,
    WindSpeed,
    WindDirection,
    SolarRadiation,
    Rainfall,
    Temperature,
}

impl Metric {
    /// All metrics in canonical order
    pub const ALL: [Metric; METRIC_COUNT] = [
        Metric::Pm25,
        Metric::Pm10,
        Metric::No,
        Metric::No2,
        Metric::Nox,
        Metric::Nh3,
        Metric::So2,
        Metric::Co,
        Metric::O3,
        Metric::Benzene,
        Metric::Humidity,
        Metric::WindSpeed,
        Metric::WindDirection,
        Metric::SolarRadiation,
        Metric::Rainfall,
        Metric::Temperature,
    ];

    /// Key used in serialized metric maps
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Pm25 => "pm25",
            Self::Pm10 => "pm10",
            Self::No => "no",
            Self::No2 => "no2",
            Self::Nox => "nox",
            Self::Nh3 => "nh3",
            Self::So2 => "so2",
            Self::Co => "co",
            Self::O3 => "o3",
            Self::Benzene => "benzene",
            Self::Humidity => "humidity",
            Self::WindSpeed => "wind_speed",
            Self::WindDirection => "wind_direction",
            Self::SolarRadiation => "solar_radiation",
            Self::Rainfall => "rainfall",
            Self::Temperature => "temperature",
        }
    }

    /// Look a metric up by its serialized key
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|metric| metric.key() == key)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pm25 => "PM2.5",
            Self::Pm10 => "PM10",
            Self::No => "NO",
            Self::No2 => "NO₂",
            Self::Nox => "NOx",
            Self::Nh3 => "NH₃",
            Self::So2 => "SO₂",
            Self::Co => "CO",
            Self::O3 => "O₃",
            Self::Benzene => "Benzene",
            Self::Humidity => "Humidity",
            Self::WindSpeed => "Wind Speed",
            Self::WindDirection => "Wind Direction",
            Self::SolarRadiation => "Solar Radiation",
            Self::Rainfall => "Rainfall",
            Self::Temperature => "Temperature",
        }
    }

    /// Display unit
    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            Self::Pm25 | Self::Pm10 => "µg/m³",
            Self::No | Self::No2 | Self::Nox | Self::Nh3 | Self::So2 | Self::O3 | Self::Benzene => {
                "ppb"
            }
            Self::Co => "ppm",
            Self::Humidity => "%",
            Self::WindSpeed => "m/s",
            Self::WindDirection => "°",
            Self::SolarRadiation => "W/m²",
            Self::Rainfall => "mm",
            Self::Temperature => "°C",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Pm25 => "Fine particulate matter (diameter less than 2.5µm)",
            Self::Pm10 => "Coarse particulate matter (diameter less than 10µm)",
            Self::No => "Nitric Oxide",
            Self::No2 => "Nitrogen Dioxide",
            Self::Nox => "Nitrogen Oxides",
            Self::Nh3 => "Ammonia",
            Self::So2 => "Sulfur Dioxide",
            Self::Co => "Carbon Monoxide",
            Self::O3 => "Ozone",
            Self::Benzene => "Volatile organic compound",
            Self::Humidity => "Relative humidity in the air",
            Self::WindSpeed => "Speed of wind",
            Self::WindDirection => "Direction of wind in degrees",
            Self::SolarRadiation => "Solar radiation intensity",
            Self::Rainfall => "Precipitation amount",
            Self::Temperature => "Air temperature",
        }
    }

    /// Whether this metric drives the overall AQI and carries a category
    #[must_use]
    pub fn drives_aqi(self) -> bool {
        self == Self::Pm25
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One measured or synthesized quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollutantReading {
    /// Magnitude in `unit`, never negative
    pub value: f64,
    pub unit: String,
    /// Present only on the AQI-driving metric, derived from `value`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<AqiCategory>,
}

impl PollutantReading {
    /// Build a reading for `metric`, deriving unit and category
    ///
    /// Negative and NaN values are stored as 0.
    #[must_use]
    pub fn new(metric: Metric, value: f64) -> Self {
        let value = if value.is_nan() { 0.0 } else { value.max(0.0) };
        let category = metric
            .drives_aqi()
            .then(|| AqiCategory::for_value(aqi_from_pm25(value)));

        Self {
            value,
            unit: metric.unit().to_string(),
            category,
        }
    }
}

/// Exactly one reading per [`Metric`]
///
/// Serialized as a map keyed by [`Metric::key`]. Deserialization rejects maps
/// with missing or unknown keys.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "BTreeMap<String, PollutantReading>")]
pub struct MetricsSet {
    readings: [PollutantReading; METRIC_COUNT],
}

impl MetricsSet {
    /// Build a set by asking `value_of` for every metric in canonical order
    pub fn from_fn(mut value_of: impl FnMut(Metric) -> f64) -> Self {
        Self {
            readings: std::array::from_fn(|index| {
                let metric = Metric::ALL[index];
                PollutantReading::new(metric, value_of(metric))
            }),
        }
    }

    #[must_use]
    pub fn get(&self, metric: Metric) -> &PollutantReading {
        &self.readings[metric as usize]
    }

    /// Shortcut for `get(metric).value`
    #[must_use]
    pub fn value(&self, metric: Metric) -> f64 {
        self.get(metric).value
    }

    /// Readings in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Metric, &PollutantReading)> {
        Metric::ALL.into_iter().zip(self.readings.iter())
    }
}

impl Index<Metric> for MetricsSet {
    type Output = PollutantReading;

    fn index(&self, metric: Metric) -> &Self::Output {
        self.get(metric)
    }
}

impl Serialize for MetricsSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(METRIC_COUNT))?;
        for (metric, reading) in self.iter() {
            map.serialize_entry(metric.key(), reading)?;
        }
        map.end()
    }
}

impl TryFrom<BTreeMap<String, PollutantReading>> for MetricsSet {
    type Error = DashboardError;

    fn try_from(mut wire: BTreeMap<String, PollutantReading>) -> Result<Self, Self::Error> {
        let mut values = [0.0; METRIC_COUNT];
        for metric in Metric::ALL {
            let reading = wire
                .remove(metric.key())
                .ok_or_else(|| DashboardError::missing_metric(metric.key()))?;
            values[metric as usize] = reading.value;
        }

        if let Some(extra) = wire.into_keys().next() {
            return Err(DashboardError::UnknownMetric(extra));
        }

        Ok(Self::from_fn(|metric| values[metric as usize]))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn sample_set() -> MetricsSet {
        MetricsSet::from_fn(|metric| f64::from(metric as u8) + 0.5)
    }

    #[test]
    fn catalogue_is_complete_and_ordered() {
        assert_eq!(Metric::ALL.len(), METRIC_COUNT);
        for (index, metric) in Metric::ALL.iter().enumerate() {
            assert_eq!(*metric as usize, index);
            assert_eq!(Metric::from_key(metric.key()), Some(*metric));
        }
        assert_eq!(Metric::from_key("pm1"), None);
    }

    #[test]
    fn serde_names_match_keys() {
        for metric in Metric::ALL {
            let json = serde_json::to_string(&metric).unwrap();
            assert_eq!(json, format!("\"{}\"", metric.key()));
        }
    }

    #[rstest]
    #[case(Metric::Pm25, "µg/m³", "PM2.5")]
    #[case(Metric::No2, "ppb", "NO₂")]
    #[case(Metric::Co, "ppm", "CO")]
    #[case(Metric::WindDirection, "°", "Wind Direction")]
    #[case(Metric::SolarRadiation, "W/m²", "Solar Radiation")]
    #[case(Metric::Temperature, "°C", "Temperature")]
    fn units_and_labels(#[case] metric: Metric, #[case] unit: &str, #[case] label: &str) {
        assert_eq!(metric.unit(), unit);
        assert_eq!(metric.label(), label);
    }

    #[test]
    fn only_pm25_carries_category() {
        let set = sample_set();
        for (metric, reading) in set.iter() {
            assert_eq!(reading.category.is_some(), metric == Metric::Pm25);
            assert_eq!(reading.unit, metric.unit());
        }
        assert_eq!(set[Metric::Pm25].category, Some(AqiCategory::Good));
    }

    #[rstest]
    #[case(-4.0, 0.0)]
    #[case(f64::NAN, 0.0)]
    #[case(3.5, 3.5)]
    fn reading_values_are_non_negative(#[case] raw: f64, #[case] stored: f64) {
        assert_eq!(PollutantReading::new(Metric::Rainfall, raw).value, stored);
    }

    #[test]
    fn pm25_category_follows_value() {
        let reading = PollutantReading::new(Metric::Pm25, 40.0);
        assert_eq!(reading.category, Some(AqiCategory::Unhealthy));
        let reading = PollutantReading::new(Metric::Pm25, 300.0);
        assert_eq!(reading.category, Some(AqiCategory::Hazardous));
    }

    #[test]
    fn serializes_as_sixteen_key_map() {
        let value = serde_json::to_value(sample_set()).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), METRIC_COUNT);
        assert_eq!(map["pm25"]["category"], "good");
        assert!(map["pm10"].get("category").is_none());
        assert_eq!(map["wind_speed"]["unit"], "m/s");
    }

    #[test]
    fn deserialize_round_trips_and_rederives_category() {
        let mut value = serde_json::to_value(sample_set()).unwrap();
        value["pm25"]["category"] = "hazardous".into();
        let set: MetricsSet = serde_json::from_value(value).unwrap();
        assert_eq!(set, sample_set());
    }

    #[test]
    fn deserialize_rejects_missing_key() {
        let mut value = serde_json::to_value(sample_set()).unwrap();
        value.as_object_mut().unwrap().remove("rainfall");
        let err = serde_json::from_value::<MetricsSet>(value).unwrap_err();
        assert!(err.to_string().contains("Missing metric: rainfall"));
    }

    #[test]
    fn deserialize_rejects_unknown_key() {
        let mut value = serde_json::to_value(sample_set()).unwrap();
        value["pm1"] = serde_json::json!({ "value": 1.0, "unit": "µg/m³" });
        let err = serde_json::from_value::<MetricsSet>(value).unwrap_err();
        assert!(err.to_string().contains("Unknown metric: pm1"));
    }
}
