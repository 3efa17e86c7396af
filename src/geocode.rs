//! Offline reverse-geocoding stub
//!
//! Resolves coordinates to a place name without any network call: a handful
//! of known bounding boxes, then a stable pick from a fixed city list. The
//! name feeds the synthesis seed, so the same coordinates (after rounding to
//! one decimal) always resolve to the same name.

use crate::snapshot::Coordinates;

struct KnownArea {
    name: &'static str,
    lat: (f64, f64),
    lng: (f64, f64),
}

impl KnownArea {
    const fn new(name: &'static str, lat: (f64, f64), lng: (f64, f64)) -> Self {
        Self { name, lat, lng }
    }
}

// First match wins; Bachupally overlaps the northern edge of Hyderabad.
const KNOWN_AREAS: [KnownArea; 5] = [
    KnownArea::new("Bachupally", (17.5, 17.6), (78.3, 78.5)),
    KnownArea::new("Hyderabad", (17.3, 17.5), (78.3, 78.5)),
    KnownArea::new("Bangalore", (12.9, 13.1), (77.5, 77.7)),
    KnownArea::new("New Delhi", (28.5, 28.7), (77.1, 77.3)),
    KnownArea::new("Mumbai", (18.9, 19.1), (72.8, 73.0)),
];

/// Names picked from when no known area matches
pub const FALLBACK_CITIES: [&str; 16] = [
    "Hyderabad",
    "Bangalore",
    "Mumbai",
    "Delhi",
    "Chennai",
    "Kolkata",
    "Pune",
    "Surat",
    "Ahmedabad",
    "Jaipur",
    "Lucknow",
    "Kanpur",
    "Bachupally",
    "Kompally",
    "Gachibowli",
    "HITEC City",
];

impl KnownArea {
    fn contains(&self, at: Coordinates) -> bool {
        (self.lat.0..=self.lat.1).contains(&at.latitude)
            && (self.lng.0..=self.lng.1).contains(&at.longitude)
    }
}

/// Place name for a coordinate pair
///
/// # Example
///
/// ```rust
/// use air_quality_core::geocode::place_name;
/// use air_quality_core::Coordinates;
///
/// assert_eq!(place_name(Coordinates::new(17.385, 78.4867)), "Hyderabad");
/// assert_eq!(place_name(Coordinates::new(19.076, 72.8777)), "Mumbai");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn place_name(coordinates: Coordinates) -> &'static str {
    let rounded = coordinates.rounded();

    if let Some(area) = KNOWN_AREAS.iter().find(|area| area.contains(rounded)) {
        return area.name;
    }

    let spread = (rounded.latitude * rounded.longitude * 100.0).abs();
    let len = FALLBACK_CITIES.len();
    // NaN casts to 0
    let index = ((spread % len as f64).floor() as usize).min(len - 1);
    FALLBACK_CITIES[index]
}
