//! Provider 1..5 scale conversion and AQI reconciliation
//!
//! Some providers report air quality as a coarse ordinal level
//! (1 = Good, 2 = Fair, 3 = Moderate, 4 = Poor, 5 = Very Poor). Each level is
//! placed at the midpoint of its AQI bucket so it can be averaged with an index
//! scored from a PM2.5 reading.

use tracing::warn;

/// AQI returned for levels outside 1..=5 (midpoint of the moderate bucket)
pub const FALLBACK_AQI: u16 = 150;

// (level, aqi_low, aqi_high)
const LEVEL_BUCKETS: [(u8, u16, u16); 5] = [
    (1, 0, 50),
    (2, 51, 100),
    (3, 101, 150),
    (4, 151, 300),
    (5, 301, 500),
];

/// Convert a coarse provider level to an AQI estimate
///
/// Unknown levels fall back to [`FALLBACK_AQI`] instead of failing, since they
/// come from third-party payloads.
///
/// # Example
///
/// ```rust
/// use air_quality_core::coarse_scale::convert_coarse_scale;
///
/// assert_eq!(convert_coarse_scale(1), 25);
/// assert_eq!(convert_coarse_scale(5), 400);
/// assert_eq!(convert_coarse_scale(9), 150);
/// ```
#[must_use]
pub fn convert_coarse_scale(level: u8) -> u16 {
    match LEVEL_BUCKETS.iter().find(|(l, _, _)| *l == level) {
        // floor(low + (high - low) * 0.5)
        Some(&(_, low, high)) => low + (high - low) / 2,
        None => {
            warn!(level, "coarse air-quality level out of range, using {FALLBACK_AQI}");
            FALLBACK_AQI
        }
    }
}

/// Merge two independent AQI estimates
///
/// Both present: their mean, with halves rounding up. One present: that one.
/// Neither: `None`.
#[must_use]
pub fn reconcile(coarse: Option<u16>, pm25_derived: Option<u16>) -> Option<u16> {
    match (coarse, pm25_derived) {
        (Some(a), Some(b)) => {
            let sum = u32::from(a) + u32::from(b);
            // Both inputs are u16, so the rounded mean fits
            u16::try_from(sum.div_ceil(2)).ok()
        }
        (Some(a), None) | (None, Some(a)) => Some(a),
        (None, None) => None,
    }
}
