//! Dashboard Query Example
//!
//! Walks through every way the dashboard can be asked for a snapshot:
//! device coordinates, city search, region drill-down and a provider
//! response, including the fallback for an unusable response.
//!
//! Run with: RUST_LOG=debug cargo run --example dashboard_queries

use air_quality_core::history::{DEFAULT_DAYS, historical_series};
use air_quality_core::region::{countries, districts, states};
use air_quality_core::{
    Coordinates, Dashboard, DashboardConfig, DataSource, LocationError, LocationQuery,
    LocationSnapshot,
};
use chrono::{Local, Utc};
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"
default_source = "local"
region_spread = 2.0

[city_anchor]
latitude = 17.5
longitude = 78.3
"#;

const PROVIDER_BODY: &str = r#"{
    "list": [{
        "main": { "aqi": 2 },
        "components": { "co": 230.3, "no": 0.1, "no2": 4.2, "o3": 61.1, "so2": 2.4,
                        "pm2_5": 18.6, "pm10": 27.9, "nh3": 1.3 }
    }]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut dashboard = Dashboard::new(DashboardConfig::from_toml_str(CONFIG)?);
    let mut rng = rand::rng();

    println!("📍 Device position");
    let position = Coordinates::new(17.385, 78.4867);
    show(&dashboard.snapshot(&LocationQuery::Coordinates(position)));

    dashboard.set_source(DataSource::Google);
    show(&dashboard.snapshot(&LocationQuery::Coordinates(position)));

    println!("\n🔎 City search");
    show(&dashboard.snapshot(&LocationQuery::City("Pune".into())));

    println!("\n🗺️  Region drill-down");
    let country = countries()[0];
    let state = states(country)[0];
    let district = districts(country, state)[1];
    show(&dashboard.snapshot(&LocationQuery::Region {
        country: country.into(),
        state: state.into(),
        district: district.into(),
    }));

    println!("\n🛰️  Provider response");
    let now = Local::now();
    show(&dashboard.provider_snapshot(position, PROVIDER_BODY, &now, &mut rng));
    show(&dashboard.provider_snapshot(position, "Service Unavailable", &now, &mut rng));

    println!("\n📈 PM2.5 trend");
    for point in historical_series(DEFAULT_DAYS, Utc::now().date_naive(), &mut rng) {
        println!("     {} {:>5.1}", point.date, point.value);
    }

    println!("\n⚠️  Geolocation failures");
    for code in 1..=4 {
        println!("     code {code}: {}", LocationError::from_code(code));
    }

    Ok(())
}

fn show(snapshot: &LocationSnapshot) {
    println!(
        "  [{}] {} ({}) -> AQI {} {} - {}",
        snapshot.source_label(),
        snapshot.location.name,
        snapshot.location.coordinates,
        snapshot.aqi.value,
        snapshot.aqi.category.label(),
        snapshot.aqi.description
    );
}
