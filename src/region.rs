//! Region drill-down catalogues and name-anchored coordinates

use crate::seed::LocationSeed;
use crate::snapshot::Coordinates;

const COUNTRIES: [&str; 9] = [
    "India",
    "United States",
    "Canada",
    "Australia",
    "United Kingdom",
    "Germany",
    "France",
    "Japan",
    "China",
];

const INDIA_STATES: [&str; 8] = [
    "Telangana",
    "Andhra Pradesh",
    "Karnataka",
    "Tamil Nadu",
    "Maharashtra",
    "Delhi",
    "Gujarat",
    "West Bengal",
];

const US_STATES: [&str; 5] = ["California", "New York", "Texas", "Florida", "Washington"];

const PLACEHOLDER_STATES: [&str; 3] = ["State 1", "State 2", "State 3"];

const TELANGANA_DISTRICTS: [&str; 7] = [
    "Hyderabad",
    "Bachupally",
    "Kompally",
    "Gachibowli",
    "HITEC City",
    "Warangal",
    "Karimnagar",
];

const KARNATAKA_DISTRICTS: [&str; 3] = ["Bangalore", "Mysore", "Mangalore"];

const PLACEHOLDER_INDIA_DISTRICTS: [&str; 3] = ["District 1", "District 2", "District 3"];

const PLACEHOLDER_DISTRICTS: [&str; 3] = ["District A", "District B", "District C"];

/// Countries offered in the first drop-down
#[must_use]
pub fn countries() -> &'static [&'static str] {
    &COUNTRIES
}

/// States offered for `country`
#[must_use]
pub fn states(country: &str) -> &'static [&'static str] {
    match country {
        "India" => &INDIA_STATES,
        "United States" => &US_STATES,
        _ => &PLACEHOLDER_STATES,
    }
}

/// Districts offered for `state` within `country`
#[must_use]
pub fn districts(country: &str, state: &str) -> &'static [&'static str] {
    match (country, state) {
        ("India", "Telangana") => &TELANGANA_DISTRICTS,
        ("India", "Karnataka") => &KARNATAKA_DISTRICTS,
        ("India", _) => &PLACEHOLDER_INDIA_DISTRICTS,
        _ => &PLACEHOLDER_DISTRICTS,
    }
}

/// Most specific non-empty level of a region selection
///
/// Returns `None` when every level is blank.
#[must_use]
pub fn region_location_name<'a>(
    country: &'a str,
    state: &'a str,
    district: &'a str,
) -> Option<&'a str> {
    [district, state, country]
        .into_iter()
        .map(str::trim)
        .find(|level| !level.is_empty())
}

/// Stable coordinates for a named place near `anchor`
///
/// Both axes move by `(permille(seed) - 0.5) * spread`, so a name lands
/// somewhere inside a `spread`-wide box centred on `anchor`.
#[must_use]
pub fn anchored_coordinates(name: &str, anchor: Coordinates, spread: f64) -> Coordinates {
    let shift = (LocationSeed::from_key(name).permille() - 0.5) * spread;
    Coordinates::new(anchor.latitude + shift, anchor.longitude + shift)
}
