//! Deterministic air-quality snapshot synthesis
//!
//! Stands in for a telemetry feed. Every metric value is
//!
//! ```text
//! min + ((seed + day_of_month + offset) mod 100) / 100 * (max - min)
//! ```
//!
//! followed by the metric's rounding policy, so one location key yields the
//! same snapshot all day and drifts to new values the next day. A random
//! variant over the same ranges serves callers that have no stable key.

use chrono::{DateTime, Datelike, Local, TimeZone, Utc};
use rand::RngExt;
use tracing::debug;

use crate::aqi::compute_aqi;
use crate::metrics::{Metric, MetricsSet};
use crate::seed::LocationSeed;
use crate::snapshot::{Coordinates, Location, LocationSnapshot, Provenance};

/// Display name used for snapshots built without a location key
pub const UNLABELLED_LOCATION: &str = "Current Location";

/// How a synthesized value is rounded before it is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Whole units, rounded down
    Floor,
    /// One decimal place
    Tenths,
    /// Stored as computed
    Exact,
}

impl Rounding {
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Floor => value.floor(),
            Self::Tenths => round_tenths(value),
            Self::Exact => value,
        }
    }
}

/// Round to one decimal, halves away from zero, judged on the exact value
///
/// `value * 10.0` can land on a `.5` that the true product does not reach
/// (7.1499999999999995 scales to 71.5), so the fused residual decides ties.
fn round_tenths(value: f64) -> f64 {
    let scaled = value * 10.0;
    let residual = value.mul_add(10.0, -scaled);
    let tenths = if (scaled - scaled.trunc()).abs() == 0.5 && residual * scaled < 0.0 {
        scaled.trunc()
    } else {
        scaled.round()
    };
    tenths / 10.0
}

/// Plausible bounds for one synthesized quantity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
    /// Distinct per quantity so values from one seed do not line up
    pub offset: u32,
    pub rounding: Rounding,
}

impl ValueRange {
    const fn new(min: f64, max: f64, offset: u32, rounding: Rounding) -> Self {
        Self {
            min,
            max,
            offset,
            rounding,
        }
    }

    /// Deterministic value for `seed` on `day`
    #[must_use]
    pub fn deterministic(&self, seed: LocationSeed, day: u32) -> f64 {
        let fraction = f64::from(seed.percentile(day, self.offset)) / 100.0;
        self.rounding.apply(self.min + fraction * (self.max - self.min))
    }

    /// Uniform random value within the bounds
    pub fn random<R: RngExt + ?Sized>(&self, rng: &mut R) -> f64 {
        self.rounding.apply(rng.random_range(self.min..=self.max))
    }
}

pub const LATITUDE_RANGE: ValueRange = ValueRange::new(8.0, 35.0, 2, Rounding::Exact);
pub const LONGITUDE_RANGE: ValueRange = ValueRange::new(70.0, 90.0, 3, Rounding::Exact);

/// Bounds, offset and rounding for a metric
#[must_use]
pub fn metric_range(metric: Metric) -> ValueRange {
    use Rounding::{Floor, Tenths};

    match metric {
        Metric::Pm25 => ValueRange::new(5.0, 50.0, 1, Floor),
        Metric::Pm10 => ValueRange::new(10.0, 70.0, 4, Floor),
        Metric::No => ValueRange::new(5.0, 30.0, 5, Floor),
        Metric::No2 => ValueRange::new(10.0, 50.0, 6, Floor),
        Metric::Nox => ValueRange::new(15.0, 60.0, 7, Floor),
        Metric::Nh3 => ValueRange::new(2.0, 20.0, 8, Floor),
        Metric::So2 => ValueRange::new(1.0, 15.0, 9, Floor),
        Metric::Co => ValueRange::new(0.1, 1.0, 10, Tenths),
        Metric::O3 => ValueRange::new(20.0, 80.0, 11, Floor),
        Metric::Benzene => ValueRange::new(0.1, 1.0, 12, Tenths),
        Metric::Humidity => ValueRange::new(30.0, 90.0, 13, Floor),
        Metric::WindSpeed => ValueRange::new(0.5, 10.0, 14, Tenths),
        Metric::WindDirection => ValueRange::new(0.0, 359.0, 15, Floor),
        Metric::SolarRadiation => ValueRange::new(50.0, 800.0, 16, Floor),
        Metric::Rainfall => ValueRange::new(0.0, 2.0, 17, Tenths),
        Metric::Temperature => ValueRange::new(15.0, 35.0, 18, Floor),
    }
}

/// Deterministic metrics for `key` on day-of-month `day`
#[must_use]
pub fn deterministic_metrics(key: &str, day: u32) -> MetricsSet {
    let seed = LocationSeed::from_key(key);
    MetricsSet::from_fn(|metric| metric_range(metric).deterministic(seed, day))
}

/// Deterministic coordinates for `key` on day-of-month `day`
#[must_use]
pub fn deterministic_coordinates(key: &str, day: u32) -> Coordinates {
    let seed = LocationSeed::from_key(key);
    Coordinates::new(
        LATITUDE_RANGE.deterministic(seed, day),
        LONGITUDE_RANGE.deterministic(seed, day),
    )
}

/// Synthesize a snapshot for `key` as of `at`
///
/// The day bucket is the calendar day of `at` in its own time zone. Two calls
/// with the same key and the same day give equal metrics, AQI and location;
/// only the timestamp follows `at`.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use air_quality_core::synth::synthesize_at;
///
/// let morning = Utc.with_ymd_and_hms(2026, 10, 16, 8, 0, 0).unwrap();
/// let evening = Utc.with_ymd_and_hms(2026, 10, 16, 20, 0, 0).unwrap();
///
/// let first = synthesize_at("Hyderabad", &morning);
/// let second = synthesize_at("Hyderabad", &evening);
/// assert_eq!(first.metrics, second.metrics);
/// assert_eq!(first.aqi, second.aqi);
/// ```
#[must_use]
pub fn synthesize_at<Tz: TimeZone>(key: &str, at: &DateTime<Tz>) -> LocationSnapshot {
    let day = at.day();
    let metrics = deterministic_metrics(key, day);
    let aqi = compute_aqi(metrics.value(Metric::Pm25));

    debug!(key, day, aqi = aqi.value, category = %aqi.category, "synthesized snapshot");

    LocationSnapshot {
        location: Location {
            name: key.to_string(),
            coordinates: deterministic_coordinates(key, day),
        },
        timestamp: at.with_timezone(&Utc),
        metrics,
        aqi,
        source: None,
    }
}

/// Synthesize a snapshot for `key` using the local clock
#[must_use]
pub fn synthesize(key: &str) -> LocationSnapshot {
    synthesize_at(key, &Local::now())
}

/// Snapshot with random values, for callers without a stable location key
///
/// Not reproducible; labelled [`Provenance::RandomFallback`].
pub fn synthesize_random<R: RngExt + ?Sized>(
    coordinates: Coordinates,
    at: DateTime<Utc>,
    rng: &mut R,
) -> LocationSnapshot {
    let metrics = MetricsSet::from_fn(|metric| metric_range(metric).random(&mut *rng));
    let aqi = compute_aqi(metrics.value(Metric::Pm25));

    debug!(%coordinates, aqi = aqi.value, "synthesized random snapshot");

    LocationSnapshot {
        location: Location {
            name: UNLABELLED_LOCATION.to_string(),
            coordinates,
        },
        timestamp: at,
        metrics,
        aqi,
        source: Some(Provenance::RandomFallback),
    }
}
