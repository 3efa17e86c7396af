//! PM2.5 to AQI scoring
//!
//! Concentrations are mapped onto the 0..500 index with the EPA piecewise-linear
//! breakpoint formula:
//!
//! ```text
//! AQI = (aqi_high - aqi_low) / (high - low) * (pm25 - low) + aqi_low
//! ```
//!
//! Categories are a pure function of the index value and are looked up in an
//! ordered band table, so every AQI value in the crate (scored, converted or
//! averaged) is categorized the same way.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// Highest index value on the scale
pub const AQI_MAX: u16 = 500;

/// Top of the PM2.5 breakpoint table in µg/m³
pub const PM25_TABLE_MAX: f64 = 500.4;

struct Breakpoint {
    low: f64,
    high: f64,
    aqi_low: u16,
    aqi_high: u16,
}

impl Breakpoint {
    const fn new(low: f64, high: f64, aqi_low: u16, aqi_high: u16) -> Self {
        Self {
            low,
            high,
            aqi_low,
            aqi_high,
        }
    }
}

const PM25_BREAKPOINTS: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 12.0, 0, 50),
    Breakpoint::new(12.1, 35.4, 51, 100),
    Breakpoint::new(35.5, 55.4, 101, 150),
    Breakpoint::new(55.5, 150.4, 151, 200),
    Breakpoint::new(150.5, 250.4, 201, 300),
    Breakpoint::new(250.5, PM25_TABLE_MAX, 301, 500),
];

/// Health-risk bucket derived from an AQI value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AqiCategory {
    Good,
    Moderate,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

struct CategoryBand {
    upper: u16,
    category: AqiCategory,
    description: &'static str,
}

// Scanned in order; the first band whose upper bound holds the value wins.
// Rows follow the `AqiCategory` discriminant order.
const CATEGORY_BANDS: [CategoryBand; 5] = [
    CategoryBand {
        upper: 50,
        category: AqiCategory::Good,
        description: "Good air quality",
    },
    CategoryBand {
        upper: 100,
        category: AqiCategory::Moderate,
        description: "Moderate air quality",
    },
    CategoryBand {
        upper: 150,
        category: AqiCategory::Unhealthy,
        description: "Unhealthy for sensitive groups",
    },
    CategoryBand {
        upper: 300,
        category: AqiCategory::VeryUnhealthy,
        description: "Very unhealthy air quality",
    },
    CategoryBand {
        upper: u16::MAX,
        category: AqiCategory::Hazardous,
        description: "Hazardous air quality",
    },
];

fn band_for(aqi: u16) -> &'static CategoryBand {
    CATEGORY_BANDS
        .iter()
        .find(|band| aqi <= band.upper)
        .unwrap_or(&CATEGORY_BANDS[CATEGORY_BANDS.len() - 1])
}

impl AqiCategory {
    /// Categorize an AQI value
    #[must_use]
    pub fn for_value(aqi: u16) -> Self {
        band_for(aqi).category
    }

    /// Wire name, e.g. `very-unhealthy`
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Moderate => "moderate",
            Self::Unhealthy => "unhealthy",
            Self::VeryUnhealthy => "very-unhealthy",
            Self::Hazardous => "hazardous",
        }
    }

    /// Short description shown next to the index value
    #[must_use]
    pub fn description(self) -> &'static str {
        CATEGORY_BANDS[self as usize].description
    }

    /// Title-case label for badges and scales
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }

    /// Health advice for the summary view
    #[must_use]
    pub fn recommendation(self) -> &'static str {
        match self {
            Self::Good => {
                "Air quality is satisfactory, and air pollution poses little or no risk."
            }
            Self::Moderate => {
                "Air quality is acceptable. However, there may be a risk for some people, \
                 particularly those who are unusually sensitive to air pollution."
            }
            Self::Unhealthy => {
                "Members of sensitive groups may experience health effects. \
                 The general public is less likely to be affected."
            }
            Self::VeryUnhealthy => {
                "Health alert: The risk of health effects is increased for everyone. \
                 Reduce outdoor activities, especially if you experience symptoms."
            }
            Self::Hazardous => {
                "Health warning of emergency conditions: everyone is more likely to be \
                 affected. Avoid all outdoor activities."
            }
        }
    }

    /// Fill level (0..100) of the quality bar on a metric card
    #[must_use]
    pub fn quality_percentage(self) -> u8 {
        match self {
            Self::Good => 90,
            Self::Moderate => 70,
            Self::Unhealthy => 40,
            Self::VeryUnhealthy => 20,
            Self::Hazardous => 10,
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scored air-quality index with its derived category and description
///
/// Only `value` is read back when deserializing; the other two fields are
/// recomputed so they can never disagree with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AqiResult {
    /// Index value, 0..=500
    pub value: u16,
    pub category: AqiCategory,
    pub description: &'static str,
}

#[derive(Deserialize)]
struct AqiValue {
    value: u16,
}

impl<'de> Deserialize<'de> for AqiResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        AqiValue::deserialize(deserializer).map(|wire| Self::from_value(wire.value))
    }
}

impl AqiResult {
    /// Build a result from an index value, clamping it to the scale
    #[must_use]
    pub fn from_value(value: u16) -> Self {
        let value = value.min(AQI_MAX);
        let band = band_for(value);
        Self {
            value,
            category: band.category,
            description: band.description,
        }
    }
}

/// Score a PM2.5 concentration (µg/m³) on the 0..500 index
///
/// Never fails. Concentrations above the table clamp to 500, negatives and
/// NaN score 0, and values falling in the 0.1 gaps between breakpoint rows
/// take the floor of the next row.
///
/// # Example
///
/// ```rust
/// use air_quality_core::aqi::aqi_from_pm25;
///
/// assert_eq!(aqi_from_pm25(12.0), 50);
/// assert_eq!(aqi_from_pm25(12.1), 51);
/// assert_eq!(aqi_from_pm25(600.0), 500);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn aqi_from_pm25(pm25: f64) -> u16 {
    if pm25.is_nan() {
        warn!("PM2.5 concentration is NaN, scoring as 0");
        return 0;
    }
    if pm25 < 0.0 {
        warn!(pm25, "negative PM2.5 concentration, scoring as 0");
        return 0;
    }

    let Some(bp) = PM25_BREAKPOINTS.iter().find(|bp| pm25 <= bp.high) else {
        warn!(pm25, "PM2.5 above breakpoint table, clamping AQI to {AQI_MAX}");
        return AQI_MAX;
    };

    let concentration = pm25.max(bp.low);
    let slope = f64::from(bp.aqi_high - bp.aqi_low) / (bp.high - bp.low);
    let aqi = (slope * (concentration - bp.low) + f64::from(bp.aqi_low)).round();

    // Interpolation stays inside the row's AQI range
    aqi.clamp(f64::from(bp.aqi_low), f64::from(bp.aqi_high)) as u16
}

/// Score a PM2.5 concentration into a full [`AqiResult`]
#[must_use]
pub fn compute_aqi(pm25: f64) -> AqiResult {
    AqiResult::from_value(aqi_from_pm25(pm25))
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::zero(0.0, 0)]
    #[case::good_top(12.0, 50)]
    #[case::moderate_floor(12.1, 51)]
    #[case::gap_snaps_up(12.05, 51)]
    #[case::moderate_top(35.4, 100)]
    #[case::sensitive_floor(35.5, 101)]
    #[case::sensitive_mid(45.0, 124)]
    #[case::sensitive_top(55.4, 150)]
    #[case::unhealthy_floor(55.5, 151)]
    #[case::unhealthy_top(150.4, 200)]
    #[case::very_unhealthy_top(250.4, 300)]
    #[case::hazardous_floor(250.5, 301)]
    #[case::table_top(500.4, 500)]
    #[case::clamped(600.0, 500)]
    #[case::just_above_table(500.5, 500)]
    #[case::negative(-3.0, 0)]
    #[case::infinite(f64::INFINITY, 500)]
    #[case::nan(f64::NAN, 0)]
    fn pm25_scoring(#[case] pm25: f64, #[case] expected: u16) {
        assert_eq!(aqi_from_pm25(pm25), expected, "aqi_from_pm25({pm25})");
    }

    #[test]
    fn scoring_is_monotonic_and_bounded() {
        let mut previous = 0;
        for tenths in 0..=5004 {
            let pm25 = f64::from(tenths) / 10.0;
            let aqi = aqi_from_pm25(pm25);
            assert!(aqi <= AQI_MAX);
            assert!(aqi >= previous, "AQI dropped at {pm25}: {aqi} < {previous}");
            previous = aqi;
        }
    }

    #[test]
    fn clamp_reports_hazardous() {
        let result = compute_aqi(600.0);
        assert_eq!(result.value, 500);
        assert_eq!(result.category, AqiCategory::Hazardous);
        assert_eq!(result.description, "Hazardous air quality");

        let result = compute_aqi(0.0);
        assert_eq!(result.value, 0);
        assert_eq!(result.category, AqiCategory::Good);
    }

    #[rstest]
    #[case(0, AqiCategory::Good)]
    #[case(50, AqiCategory::Good)]
    #[case(51, AqiCategory::Moderate)]
    #[case(100, AqiCategory::Moderate)]
    #[case(101, AqiCategory::Unhealthy)]
    #[case(150, AqiCategory::Unhealthy)]
    #[case(151, AqiCategory::VeryUnhealthy)]
    #[case(300, AqiCategory::VeryUnhealthy)]
    #[case(301, AqiCategory::Hazardous)]
    #[case(500, AqiCategory::Hazardous)]
    #[case(u16::MAX, AqiCategory::Hazardous)]
    fn category_thresholds(#[case] aqi: u16, #[case] expected: AqiCategory) {
        assert_eq!(AqiCategory::for_value(aqi), expected);
    }

    #[test]
    fn categorization_is_pure() {
        for value in 0..=AQI_MAX {
            let first = AqiResult::from_value(value);
            let second = AqiResult::from_value(first.value);
            assert_eq!(first, second);
            assert_eq!(first.description, first.category.description());
        }
    }

    #[test]
    fn band_rows_follow_enum_order() {
        for (index, band) in CATEGORY_BANDS.iter().enumerate() {
            assert_eq!(band.category as usize, index);
        }
    }

    #[test]
    fn from_value_clamps_to_scale() {
        assert_eq!(AqiResult::from_value(900).value, AQI_MAX);
    }

    #[test]
    fn wire_shape() {
        let json = serde_json::to_string(&compute_aqi(12.0)).unwrap();
        assert_snapshot!(
            json,
            @r#"{"value":50,"category":"good","description":"Good air quality"}"#
        );

        let json = serde_json::to_string(&AqiResult::from_value(200)).unwrap();
        assert_snapshot!(
            json,
            @r#"{"value":200,"category":"very-unhealthy","description":"Very unhealthy air quality"}"#
        );
    }

    #[test]
    fn deserialize_recomputes_category() {
        let result: AqiResult =
            serde_json::from_str(r#"{"value":120,"category":"good","description":"stale"}"#)
                .unwrap();
        assert_eq!(result, AqiResult::from_value(120));
        assert_eq!(result.category, AqiCategory::Unhealthy);
    }

    #[test]
    fn presentation_helpers() {
        assert_eq!(AqiCategory::VeryUnhealthy.label(), "Very Unhealthy");
        assert_eq!(AqiCategory::VeryUnhealthy.to_string(), "very-unhealthy");
        assert_eq!(AqiCategory::Good.quality_percentage(), 90);
        assert_eq!(AqiCategory::Hazardous.quality_percentage(), 10);
        assert!(
            AqiCategory::Hazardous
                .recommendation()
                .starts_with("Health warning")
        );
    }
}
