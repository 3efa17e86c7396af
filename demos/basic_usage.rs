//! Basic Usage Example for the Air-Quality Core
//!
//! This example demonstrates the core functionality of the library: PM2.5
//! scoring, coarse-scale conversion and reconciliation, and deterministic
//! snapshot synthesis.
//!
//! Run with: cargo run --example basic_usage

use air_quality_core::{AqiResult, Metric, compute_aqi, convert_coarse_scale, reconcile, synthesize};

fn main() {
    println!("🦀 Air-Quality Core - Basic Usage Example\n");

    // Example 1: PM2.5 scoring across the breakpoint table
    println!("📊 Example 1: PM2.5 Scoring");
    println!("===========================");

    for pm25 in [0.0, 12.0, 12.1, 35.5, 55.5, 150.5, 250.5, 600.0] {
        let aqi = compute_aqi(pm25);
        println!(
            "  {pm25:>6.1} µg/m³ -> AQI {:>3} {:<15} {}",
            aqi.value,
            aqi.category.label(),
            aqi.description
        );
    }

    println!();

    // Example 2: Coarse provider levels and reconciliation
    println!("🔧 Example 2: Coarse Levels");
    println!("===========================");

    for level in 0..=6 {
        println!("  level {level} -> AQI {}", convert_coarse_scale(level));
    }

    let converted = convert_coarse_scale(3);
    let scored = compute_aqi(12.0).value;
    if let Some(merged) = reconcile(Some(converted), Some(scored)) {
        let merged = AqiResult::from_value(merged);
        println!(
            "  merged {converted} and {scored} -> {} ({})",
            merged.value, merged.category
        );
    }

    println!();

    // Example 3: Deterministic synthesis
    println!("🌍 Example 3: Synthesized Snapshot");
    println!("==================================");

    let snapshot = synthesize("Hyderabad");
    println!(
        "  {} at {} -> AQI {} ({})",
        snapshot.location.name,
        snapshot.location.coordinates,
        snapshot.aqi.value,
        snapshot.aqi.category
    );
    for (metric, reading) in snapshot.metrics.iter() {
        println!("     {:<16} {:>7.1} {}", metric.label(), reading.value, reading.unit);
    }
    println!("  💡 {}", snapshot.aqi.category.recommendation());

    let again = synthesize("Hyderabad");
    println!(
        "\n  Same key again gives the same PM2.5: {}",
        again.metrics.value(Metric::Pm25) == snapshot.metrics.value(Metric::Pm25)
    );
}
